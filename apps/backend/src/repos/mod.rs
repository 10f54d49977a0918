//! Repository functions for domain layer.

pub mod frames;
pub mod games;
