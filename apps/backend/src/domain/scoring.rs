//! Score recalculation over a full card.
//!
//! Frames are scored left to right carrying a running total. A frame whose
//! bonus rolls are all known is resolved and advances the running total; any
//! other started frame gets a provisional display value that never feeds into
//! later frames. Re-running over the same card always yields the same scores.

use crate::domain::frame::Frame;
use crate::domain::rules::{FRAME_COUNT, PIN_COUNT};
use crate::domain::score_card::ScoreCard;

const MARK: u16 = PIN_COUNT as u16;

/// Rescore every frame of `card` in place.
pub fn calculate_scores(card: &mut ScoreCard) {
    card.recalculate();
}

/// Cumulative score per frame, resolved or provisional.
pub fn frame_scores(card: &ScoreCard) -> [u16; FRAME_COUNT] {
    let mut running: u16 = 0;
    let mut scores = [0; FRAME_COUNT];

    for (index, frame) in card.iter().enumerate() {
        scores[index] = match frame.first_roll {
            None => running,
            Some(first) => match resolved_points(card, index) {
                Some(points) => {
                    running += points;
                    running
                }
                None => provisional_score(frame, first, running),
            },
        };
    }

    scores
}

/// Points a frame contributes once every roll it depends on is known.
fn resolved_points(card: &ScoreCard, index: usize) -> Option<u16> {
    let frame = card.get(index)?;

    if frame.is_tenth() {
        return frame.is_complete().then(|| frame.pins_recorded());
    }

    let first = u16::from(frame.first_roll?);
    if frame.is_strike() {
        return strike_bonus(card, index).map(|bonus| MARK + bonus);
    }

    let second = u16::from(frame.second_roll?);
    if frame.is_spare() {
        let bonus = card.next(index)?.first_roll?;
        return Some(MARK + u16::from(bonus));
    }

    Some(first + second)
}

/// The next two rolls after a strike in frames 1-9.
fn strike_bonus(card: &ScoreCard, index: usize) -> Option<u16> {
    let next = card.next(index)?;
    let next_first = u16::from(next.first_roll?);

    // The tenth frame keeps rolling after a strike, so both bonus rolls live there.
    if !next.is_strike() || next.is_tenth() {
        return next.second_roll.map(|second| next_first + u16::from(second));
    }

    let after = card.next_next(index)?.first_roll?;
    Some(next_first + u16::from(after))
}

fn provisional_score(frame: &Frame, first: u8, running: u16) -> u16 {
    if frame.is_tenth() {
        return running + frame.pins_recorded();
    }
    if frame.is_strike() || frame.is_spare() {
        return running;
    }
    running + u16::from(first)
}
