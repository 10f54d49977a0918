//! Domain layer: pure scoring logic, no HTTP or database types.

pub mod frame;
pub mod rules;
pub mod score_card;
pub mod scoring;

#[cfg(test)]
mod tests_frame;
#[cfg(test)]
mod tests_score_card;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use frame::{Frame, FrameState};
pub use rules::{validate_frame_number, validate_pins, FRAME_COUNT, PIN_COUNT, TENTH_FRAME};
pub use score_card::ScoreCard;
pub use scoring::calculate_scores;
