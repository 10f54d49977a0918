//! Single-frame state machine.
//!
//! A frame only knows which rolls it has seen. Whether it is a strike, a
//! spare, or complete is always recomputed from those rolls; the one cached
//! value is `frame_score`, which the score calculator owns.

use serde::Serialize;

use crate::domain::rules::{PIN_COUNT, TENTH_FRAME};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

/// Display state of a frame, derived from its rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameState {
    Empty,
    FirstRollRecorded,
    Open,
    Strike,
    Spare,
    /// Tenth frame only: strike or spare waiting for its bonus roll(s).
    AwaitingBonusRoll,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub frame_number: u8,
    pub first_roll: Option<u8>,
    pub second_roll: Option<u8>,
    pub third_roll: Option<u8>,
    /// Cumulative score through this frame; provisional until resolvable.
    pub frame_score: u16,
}

impl Frame {
    pub fn new(frame_number: u8) -> Self {
        Self {
            frame_number,
            first_roll: None,
            second_roll: None,
            third_roll: None,
            frame_score: 0,
        }
    }

    pub fn is_tenth(&self) -> bool {
        self.frame_number == TENTH_FRAME
    }

    pub fn is_started(&self) -> bool {
        self.first_roll.is_some()
    }

    pub fn is_strike(&self) -> bool {
        self.first_roll == Some(PIN_COUNT)
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike()
            && matches!(
                (self.first_roll, self.second_roll),
                (Some(first), Some(second)) if first + second == PIN_COUNT
            )
    }

    pub fn is_complete(&self) -> bool {
        let two_rolls = self.first_roll.is_some() && self.second_roll.is_some();
        if self.is_tenth() {
            if self.is_strike() || self.is_spare() {
                return two_rolls && self.third_roll.is_some();
            }
            return two_rolls;
        }
        self.is_strike() || two_rolls
    }

    /// Sum of the rolls recorded so far, bonus roll included.
    pub fn pins_recorded(&self) -> u16 {
        [self.first_roll, self.second_roll, self.third_roll]
            .into_iter()
            .flatten()
            .map(u16::from)
            .sum()
    }

    pub fn state(&self) -> FrameState {
        if !self.is_started() {
            return FrameState::Empty;
        }
        if self.is_tenth() {
            if self.is_complete() {
                return FrameState::Complete;
            }
            if self.is_strike() || self.is_spare() {
                return FrameState::AwaitingBonusRoll;
            }
            return FrameState::FirstRollRecorded;
        }
        if self.is_strike() {
            FrameState::Strike
        } else if self.is_spare() {
            FrameState::Spare
        } else if self.second_roll.is_some() {
            FrameState::Open
        } else {
            FrameState::FirstRollRecorded
        }
    }

    /// Record a roll using the rule that applies to this frame's position.
    pub fn record_roll(&mut self, pins: u8) -> Result<(), DomainError> {
        if self.is_tenth() {
            self.record_tenth_frame_roll(pins)
        } else {
            self.record_regular_roll(pins)
        }
    }

    /// Frames 1-9: up to two rolls, none after a strike.
    pub fn record_regular_roll(&mut self, pins: u8) -> Result<(), DomainError> {
        let Some(first) = self.first_roll else {
            validate_single_roll(pins)?;
            self.first_roll = Some(pins);
            return Ok(());
        };

        if self.is_strike() {
            return Err(DomainError::invalid_state(
                StateKind::FrameComplete,
                format!(
                    "Frame {} is already complete with a strike",
                    self.frame_number
                ),
            ));
        }
        if self.second_roll.is_some() {
            return Err(DomainError::invalid_state(
                StateKind::FrameComplete,
                format!("Frame {} is already complete", self.frame_number),
            ));
        }
        validate_single_roll(pins)?;
        validate_pair(first, pins, "Total pins cannot exceed 10 in a regular frame")?;
        self.second_roll = Some(pins);
        Ok(())
    }

    /// Frame 10: two rolls, plus a bonus roll after a strike or spare.
    pub fn record_tenth_frame_roll(&mut self, pins: u8) -> Result<(), DomainError> {
        let Some(first) = self.first_roll else {
            validate_single_roll(pins)?;
            self.first_roll = Some(pins);
            return Ok(());
        };

        let Some(second) = self.second_roll else {
            validate_single_roll(pins)?;
            if !self.is_strike() {
                validate_pair(first, pins, "Total pins cannot exceed 10 in a regular frame")?;
            }
            self.second_roll = Some(pins);
            return Ok(());
        };

        if self.third_roll.is_some() {
            return Err(DomainError::invalid_state(
                StateKind::FrameComplete,
                "No more rolls allowed in this frame",
            ));
        }

        validate_single_roll(pins)?;
        if !self.is_strike() && !self.is_spare() {
            return Err(DomainError::invalid_state(
                StateKind::BonusRollNotAllowed,
                "Third roll is only allowed after strike or spare",
            ));
        }
        if second != PIN_COUNT {
            validate_pair(second, pins, "Last two rolls cannot exceed 10 pins total")?;
        }
        self.third_roll = Some(pins);
        Ok(())
    }
}

fn validate_single_roll(pins: u8) -> Result<(), DomainError> {
    if pins > PIN_COUNT {
        return Err(DomainError::validation(
            ValidationKind::InvalidPins,
            format!("Pin count must be between 0 and {PIN_COUNT}, got {pins}"),
        ));
    }
    Ok(())
}

fn validate_pair(standing_after: u8, pins: u8, detail: &str) -> Result<(), DomainError> {
    if u16::from(standing_after) + u16::from(pins) > u16::from(PIN_COUNT) {
        return Err(DomainError::validation(
            ValidationKind::PinTotalExceeded,
            format!("{detail} ({standing_after} + {pins})"),
        ));
    }
    Ok(())
}
