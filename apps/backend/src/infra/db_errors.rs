//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert through here so services
//! only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Prefix adapters use to report a missing game as `DbErr::Custom`.
pub const GAME_NOT_FOUND_PREFIX: &str = "GAME_NOT_FOUND:";
/// Prefix adapters use to report a stale `lock_version` as `DbErr::Custom`.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_duplicate_frame(msg: &str) -> bool {
    msg.contains("frames.game_id") || msg.contains("ux_frames_game_id_frame_number")
}

/// Translate a `DbErr` into a `DomainError` with a client-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(GAME_NOT_FOUND_PREFIX) => {
            let game_id = msg
                .strip_prefix(GAME_NOT_FOUND_PREFIX)
                .and_then(|id| id.parse::<i64>().ok());
            return match game_id {
                Some(game_id) => {
                    warn!(trace_id = %trace_id, game_id, "Game not found");
                    DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
                }
                None => DomainError::not_found(NotFoundKind::Game, "Game not found"),
            };
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            let detail = msg.strip_prefix(OPTIMISTIC_LOCK_PREFIX).unwrap_or_default();
            warn!(trace_id = %trace_id, versions = %detail, "Optimistic lock conflict detected");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Game was modified by another request; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        if is_duplicate_frame(&error_msg) {
            return DomainError::conflict(
                ConflictKind::DuplicateFrame,
                "Frames for this game already exist",
            );
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::not_found(NotFoundKind::Game, "Game not found");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
