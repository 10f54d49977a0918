//! Server configuration loaded from environment variables.

use std::env;

use crate::config::db::{db_kind, DbKind, DbProfile};
use crate::error::AppError;

const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub db_profile: DbProfile,
    pub db_kind: DbKind,
    pub cors_origins: Vec<String>,
    /// Upper bound on JSON request bodies, in bytes
    pub max_json_payload_size: usize,
}

impl AppConfig {
    /// Load and validate all server configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_str = env::var("BACKEND_PORT").unwrap_or_else(|_| "3001".to_string());
        let port = port_str.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_str}'"
            ))
        })?;

        let db_profile = DbProfile::Prod;
        let db_kind = db_kind(&db_profile)?;

        let cors_origins = cors_origins_from(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref());

        let max_json_payload_size = match env::var("MAX_JSON_PAYLOAD_SIZE") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                AppError::config(format!(
                    "MAX_JSON_PAYLOAD_SIZE must be a byte count, got '{raw}'"
                ))
            })?,
            Err(_) => 4 * 1024,
        };

        Ok(Self {
            host,
            port,
            db_profile,
            db_kind,
            cors_origins,
            max_json_payload_size,
        })
    }
}

/// Split a comma-separated origin list, keeping only http(s) origins and
/// falling back to local dev origins when nothing usable remains.
pub fn cors_origins_from(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}
