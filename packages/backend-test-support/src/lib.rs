//! Shared helpers for the backend's integration tests: one-time logging
//! setup and assertions on problem-details error bodies.

pub mod logging;
pub mod problem_details;
