use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

pub const FRAME_COUNT: usize = 10;
pub const PIN_COUNT: u8 = 10;
pub const TENTH_FRAME: u8 = FRAME_COUNT as u8;

pub fn valid_pin_range() -> RangeInclusive<u8> {
    0..=PIN_COUNT
}

pub fn valid_frame_range() -> RangeInclusive<u8> {
    1..=TENTH_FRAME
}

/// Check a raw pin count from the outside world and narrow it to `u8`.
pub fn validate_pins(pins: i32) -> Result<u8, DomainError> {
    u8::try_from(pins)
        .ok()
        .filter(|p| valid_pin_range().contains(p))
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPins,
                format!("Pin count must be between 0 and {PIN_COUNT}, got {pins}"),
            )
        })
}

/// Check a raw frame number from the outside world and narrow it to `u8`.
pub fn validate_frame_number(frame_number: i32) -> Result<u8, DomainError> {
    u8::try_from(frame_number)
        .ok()
        .filter(|n| valid_frame_range().contains(n))
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidFrameNumber,
                format!("Frame number must be between 1 and {TENTH_FRAME}, got {frame_number}"),
            )
        })
}
