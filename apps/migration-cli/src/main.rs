use bowling_backend::config::db::{db_kind, DbKind, DbOwner, DbProfile};
use bowling_backend::infra::db::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Bowling scorer database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Which database profile to migrate; the engine comes from DATABASE_URL or DB_KIND
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,bowling_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    match db_kind(&profile) {
        Ok(DbKind::SqliteMemory) => {
            // Each CLI run would get its own throwaway database
            eprintln!("In-memory SQLite cannot be migrated from the CLI; use postgres or sqlite-file.");
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("Invalid database configuration: {e}");
            std::process::exit(2);
        }
    }

    let conn = match connect_db(profile, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
