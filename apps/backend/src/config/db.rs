use std::env;

use crate::error::AppError;

/// Which database engine a profile resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Read `DB_KIND`; unset means Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("DB_KIND") {
            Err(_) => Ok(DbKind::Postgres),
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "postgres" | "postgresql" => Ok(DbKind::Postgres),
                "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
                "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
                other => Err(AppError::config(format!(
                    "DB_KIND must be one of postgres, sqlite-file, sqlite-memory; got '{other}'"
                ))),
            },
        }
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, DbKind::SqliteFile | DbKind::SqliteMemory)
    }
}

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
    /// Private in-memory SQLite, ignores the environment entirely
    InMemory,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, PartialEq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Engine the profile will connect to, without building the URL.
pub fn db_kind(profile: &DbProfile) -> Result<DbKind, AppError> {
    match profile {
        DbProfile::InMemory => Ok(DbKind::SqliteMemory),
        _ => match env::var("DATABASE_URL") {
            Ok(url) if url.starts_with("sqlite::memory:") || url.contains("mode=memory") => {
                Ok(DbKind::SqliteMemory)
            }
            Ok(url) if url.starts_with("sqlite:") => Ok(DbKind::SqliteFile),
            Ok(_) => Ok(DbKind::Postgres),
            Err(_) => DbKind::from_env(),
        },
    }
}

/// Builds a database URL from environment variables based on profile and owner.
///
/// `DATABASE_URL` wins when set; otherwise `DB_KIND` picks the engine.
pub fn db_url(profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    if profile == DbProfile::InMemory {
        return Ok(SQLITE_MEMORY_URL.to_string());
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    match DbKind::from_env()? {
        DbKind::SqliteMemory => Ok(SQLITE_MEMORY_URL.to_string()),
        DbKind::SqliteFile => {
            let path = env::var("SQLITE_PATH").unwrap_or_else(|_| "bowling.sqlite".to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(&profile)?;
            let (username, password) = credentials(owner)?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Get database name based on profile
fn db_name(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        DbProfile::InMemory => Ok(":memory:".to_string()),
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((must_var("DB_OWNER_USER")?, must_var("DB_OWNER_PASSWORD")?)),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
