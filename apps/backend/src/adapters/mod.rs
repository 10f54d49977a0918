//! Adapters for external dependencies.

pub mod frames_sea;
pub mod games_sea;
