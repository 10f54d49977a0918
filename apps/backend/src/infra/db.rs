use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{info, warn};

use crate::config::db::{db_kind, db_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Strip credentials from a connection URL before it reaches the logs.
pub fn sanitize_db_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Retry a connection attempt with fixed interval delays.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, max_attempts, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: &str, kind: DbKind) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));

    match kind {
        // Every pooled connection to `sqlite::memory:` is its own database
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(4);
        }
        DbKind::Postgres => {
            opts.max_connections(16);
        }
    }
    opts
}

/// Connect for the given profile and owner. Does NOT run migrations.
pub async fn connect_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let kind = db_kind(&profile)?;
    let url = db_url(profile, owner)?;
    let safe_url = sanitize_db_url(&url);
    let url_ref = url.as_str();

    let conn = retry_connection(
        move || async move {
            Database::connect(connect_options(url_ref, kind))
                .await
                .map_err(AppError::from)
        },
        if kind == DbKind::SqliteMemory { 1 } else { CONNECT_ATTEMPTS },
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await?;

    info!(db_kind = ?kind, url = %safe_url, "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

/// Round-trip a trivial query to prove the connection is usable.
pub async fn ping(conn: &DatabaseConnection) -> Result<(), AppError> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(backend, "SELECT 1".to_string()))
        .await?;
    Ok(())
}
