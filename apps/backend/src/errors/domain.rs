//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejected inputs: the caller asked for something the rules never allow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Pin count outside 0..=10
    InvalidPins,
    /// Frame number outside 1..=10
    InvalidFrameNumber,
    /// Roll would knock down more pins than are standing
    PinTotalExceeded,
    Other(String),
}

/// Rolls that are well-formed but arrive at the wrong point in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateKind {
    GameCompleted,
    PreviousFrameIncomplete,
    /// Third roll in the tenth frame without a strike or spare
    BonusRollNotAllowed,
    FrameComplete,
    Other(String),
}

/// Concurrent writers or duplicate rows
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Game row changed since it was read
    OptimisticLock,
    /// Frame rows for the game already exist
    DuplicateFrame,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid argument: pins, frame number, or pin total out of range
    Validation(ValidationKind, String),
    /// The game or frame cannot accept this roll right now
    InvalidState(StateKind, String),
    /// Lost a race with another writer
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::InvalidState(kind, d) => write!(f, "invalid state {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn invalid_state(kind: StateKind, detail: impl Into<String>) -> Self {
        Self::InvalidState(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, DomainError::InvalidState(..))
    }
}
