//! Error codes for the bowling backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the bowling backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Pin count outside 0..=10
    InvalidPins,
    /// Frame number outside 1..=10
    InvalidFrameNumber,
    /// Roll exceeds the pins left standing in the frame
    PinTotalExceeded,
    /// Invalid game ID provided
    InvalidGameId,
    /// Generic validation failure
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Request body larger than the configured limit
    PayloadTooLarge,

    // Game State
    /// Game already completed; no more rolls accepted
    GameCompleted,
    /// A previous frame still owes a roll
    PreviousFrameIncomplete,
    /// Tenth-frame bonus roll without strike or spare
    BonusRollNotAllowed,
    /// Frame cannot take another roll
    FrameComplete,
    /// Generic state conflict
    InvalidState,
    /// Game changed underneath this request
    OptimisticLock,
    /// Generic write conflict
    Conflict,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPins => "INVALID_PINS",
            Self::InvalidFrameNumber => "INVALID_FRAME_NUMBER",
            Self::PinTotalExceeded => "PIN_TOTAL_EXCEEDED",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::GameCompleted => "GAME_COMPLETED",
            Self::PreviousFrameIncomplete => "PREVIOUS_FRAME_INCOMPLETE",
            Self::BonusRollNotAllowed => "BONUS_ROLL_NOT_ALLOWED",
            Self::FrameComplete => "FRAME_COMPLETE",
            Self::InvalidState => "INVALID_STATE",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
