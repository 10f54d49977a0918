//! Services orchestrate domain logic over a database transaction.

pub mod bowling;

pub use bowling::{BowlingService, GameWithFrames};
