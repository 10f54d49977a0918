//! The ten frames of one game, held as a fixed arena indexed by frame number - 1.

use serde::Serialize;

use crate::domain::frame::Frame;
use crate::domain::rules::{validate_frame_number, FRAME_COUNT};
use crate::domain::scoring;
use crate::errors::domain::{DomainError, InfraErrorKind, StateKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreCard {
    frames: [Frame; FRAME_COUNT],
}

impl ScoreCard {
    /// Ten empty frames numbered 1..=10.
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
        }
    }

    /// Rebuild a card from persisted frames.
    ///
    /// The input must hold exactly ten frames numbered 1..=10 in order; anything
    /// else means the stored rows are corrupt.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, DomainError> {
        let count = frames.len();
        let frames: [Frame; FRAME_COUNT] = frames.try_into().map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Expected {FRAME_COUNT} frames, found {count}"),
            )
        })?;

        for (index, frame) in frames.iter().enumerate() {
            if usize::from(frame.frame_number) != index + 1 {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "Frame at position {} has frame number {}",
                        index + 1,
                        frame.frame_number
                    ),
                ));
            }
        }

        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> [Frame; FRAME_COUNT] {
        self.frames
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Look up by 1-based frame number.
    pub fn frame(&self, frame_number: u8) -> Option<&Frame> {
        usize::from(frame_number)
            .checked_sub(1)
            .and_then(|index| self.get(index))
    }

    pub fn previous(&self, index: usize) -> Option<&Frame> {
        index.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn next(&self, index: usize) -> Option<&Frame> {
        self.get(index + 1)
    }

    pub fn next_next(&self, index: usize) -> Option<&Frame> {
        self.get(index + 2)
    }

    pub fn tenth(&self) -> &Frame {
        &self.frames[FRAME_COUNT - 1]
    }

    /// A game is over once its tenth frame is complete.
    pub fn is_complete(&self) -> bool {
        self.tenth().is_complete()
    }

    pub fn total_score(&self) -> u16 {
        self.tenth().frame_score
    }

    /// Work out which frame a roll addressed to `frame_number` really belongs to.
    ///
    /// Clients address rolls by the frame the bowler is on, so a roll for
    /// frame N lands in frame N-1 while that frame still owes its second roll.
    /// Returns the 0-based index of the target frame.
    pub fn resolve_target(&self, frame_number: u8) -> Result<usize, DomainError> {
        let frame_number = validate_frame_number(i32::from(frame_number))?;
        let index = usize::from(frame_number) - 1;

        if let Some(previous) = self.previous(index) {
            if !previous.is_complete() && !previous.is_strike() && previous.second_roll.is_none()
            {
                return Ok(index - 1);
            }
            if !previous.is_complete() {
                return Err(DomainError::invalid_state(
                    StateKind::PreviousFrameIncomplete,
                    format!("Please complete frame {} first", previous.frame_number),
                ));
            }
        }

        Ok(index)
    }

    /// Apply one roll and rescore every frame.
    ///
    /// Returns the frame number that took the roll. On error the card is
    /// left untouched.
    pub fn record_roll(&mut self, frame_number: u8, pins: u8) -> Result<u8, DomainError> {
        if self.is_complete() {
            return Err(DomainError::invalid_state(
                StateKind::GameCompleted,
                "Game is already completed",
            ));
        }

        let index = self.resolve_target(frame_number)?;
        let mut target = self.frames[index];
        target.record_roll(pins)?;
        self.frames[index] = target;

        self.recalculate();
        Ok(target.frame_number)
    }

    pub fn recalculate(&mut self) {
        let scores = scoring::frame_scores(self);
        for (frame, score) in self.frames.iter_mut().zip(scores) {
            frame.frame_score = score;
        }
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}
