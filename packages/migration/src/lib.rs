pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};
pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};

mod m20261018_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261018_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run one migration command against an already-open connection.
///
/// Shared by the CLI and by backend bootstrap (in-memory SQLite needs the
/// schema applied on the very connection it will serve from).
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let target = database_name(db).await?;
    let applied_before = count_applied_migrations(db).await?;

    tracing::info!(
        ?command,
        ?backend,
        database = %target,
        defined = Migrator::migrations().len(),
        applied = applied_before,
        "running migration command"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if command != MigrationCommand::Status {
                let applied_after = count_applied_migrations(db).await?;
                tracing::info!(?command, applied = applied_after, "migration command finished");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(?command, database = %target, error = %e, "migration command failed");
            Err(e)
        }
    }
}

async fn database_name(db: &DatabaseConnection) -> Result<String, DbErr> {
    let backend = db.get_database_backend();
    let sql = match backend {
        DatabaseBackend::Postgres => "SELECT current_database() AS name",
        DatabaseBackend::Sqlite => "SELECT file AS name FROM pragma_database_list WHERE name = 'main'",
        _ => return Ok("<unsupported>".to_string()),
    };

    let row = db
        .query_one(Statement::from_string(backend, sql.to_string()))
        .await?;
    let name = row
        .and_then(|r| r.try_get::<String>("", "name").ok())
        .unwrap_or_default();

    Ok(match (backend, name.is_empty()) {
        (DatabaseBackend::Sqlite, true) => ":memory:".to_string(),
        (_, true) => "<unknown>".to_string(),
        (_, false) => name,
    })
}

/// Number of applied migrations; 0 when the migration table does not exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
