//! Frame repository functions: rows in, `ScoreCard` out, and back.

use sea_orm::ConnectionTrait;

use crate::adapters::frames_sea as frames_adapter;
use crate::domain::frame::Frame;
use crate::domain::rules::PIN_COUNT;
use crate::domain::score_card::ScoreCard;
use crate::entities::frames;
use crate::errors::domain::{DomainError, InfraErrorKind};

fn corrupt(detail: String) -> DomainError {
    DomainError::infra(InfraErrorKind::DataCorruption, detail)
}

fn roll_from_db(frame_number: i16, roll: Option<i16>) -> Result<Option<u8>, DomainError> {
    roll.map(|pins| {
        u8::try_from(pins)
            .ok()
            .filter(|p| *p <= PIN_COUNT)
            .ok_or_else(|| corrupt(format!("Frame {frame_number} has roll {pins}")))
    })
    .transpose()
}

impl TryFrom<frames::Model> for Frame {
    type Error = DomainError;

    fn try_from(row: frames::Model) -> Result<Self, Self::Error> {
        let frame_number = u8::try_from(row.frame_number)
            .map_err(|_| corrupt(format!("Frame number {} out of range", row.frame_number)))?;
        let frame_score = u16::try_from(row.frame_score).map_err(|_| {
            corrupt(format!(
                "Frame {} has score {}",
                row.frame_number, row.frame_score
            ))
        })?;

        Ok(Frame {
            frame_number,
            first_roll: roll_from_db(row.frame_number, row.first_roll)?,
            second_roll: roll_from_db(row.frame_number, row.second_roll)?,
            third_roll: roll_from_db(row.frame_number, row.third_roll)?,
            frame_score,
        })
    }
}

fn frame_write(game_id: i64, frame: &Frame) -> frames_adapter::FrameWrite {
    frames_adapter::FrameWrite {
        game_id,
        frame_number: i16::from(frame.frame_number),
        first_roll: frame.first_roll.map(i16::from),
        second_roll: frame.second_roll.map(i16::from),
        third_roll: frame.third_roll.map(i16::from),
        frame_score: i32::from(frame.frame_score),
    }
}

/// Load a game's ten frames.
///
/// Returns `None` when the game has no frame rows yet. Any other row count is
/// reported as data corruption.
pub async fn load_score_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<ScoreCard>, DomainError> {
    let rows = frames_adapter::find_by_game(conn, game_id).await?;
    if rows.is_empty() {
        return Ok(None);
    }

    let frames = rows
        .into_iter()
        .map(Frame::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    ScoreCard::from_frames(frames).map(Some)
}

/// Insert the ten frame rows for a game that has none yet.
pub async fn insert_score_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    card: &ScoreCard,
) -> Result<(), DomainError> {
    let rows: Vec<_> = card.iter().map(|f| frame_write(game_id, f)).collect();
    frames_adapter::insert_all(conn, &rows).await?;
    Ok(())
}

/// Overwrite all ten frame rows with the card's current rolls and scores.
pub async fn save_score_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    card: &ScoreCard,
) -> Result<(), DomainError> {
    for frame in card.iter() {
        frames_adapter::update_frame(conn, frame_write(game_id, frame)).await?;
    }
    Ok(())
}
