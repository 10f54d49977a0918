//! DTOs for frames_sea adapter.

/// Column values for one frame row, keyed by (game_id, frame_number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameWrite {
    pub game_id: i64,
    pub frame_number: i16,
    pub first_roll: Option<i16>,
    pub second_roll: Option<i16>,
    pub third_roll: Option<i16>,
    pub frame_score: i32,
}
