//! Bowling game service: bridges the pure score card with DB persistence.
//!
//! Every method takes the caller's transaction; handlers open it with
//! `with_txn` so a failed roll leaves no partial writes behind.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use crate::domain::frame::Frame;
use crate::domain::rules::{validate_frame_number, validate_pins};
use crate::domain::score_card::ScoreCard;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, StateKind};
use crate::repos::games::Game;
use crate::repos::{frames, games};

/// A game summary together with its scored frames.
#[derive(Debug, Clone)]
pub struct GameWithFrames {
    pub game: Game,
    pub card: ScoreCard,
}

#[derive(Debug, Default)]
pub struct BowlingService;

impl BowlingService {
    pub fn new() -> Self {
        Self
    }

    /// Create a game with ten empty frames.
    pub async fn create_game(&self, txn: &DatabaseTransaction) -> Result<GameWithFrames, AppError> {
        let game = games::create_game(txn).await?;
        let card = ScoreCard::new();
        frames::insert_score_card(txn, game.id, &card).await?;

        info!(game_id = game.id, "Game created");
        Ok(GameWithFrames { game, card })
    }

    pub async fn get_game(&self, txn: &DatabaseTransaction, game_id: i64) -> Result<Game, AppError> {
        Ok(games::require_game(txn, game_id).await?)
    }

    /// Frames ordered by frame number; empty when the game never had frames written.
    pub async fn get_frames(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
    ) -> Result<Vec<Frame>, AppError> {
        games::require_game(txn, game_id).await?;

        let frames = frames::load_score_card(txn, game_id)
            .await?
            .map(|card| card.into_frames().to_vec())
            .unwrap_or_default();
        Ok(frames)
    }

    /// Record one roll and rescore the whole game.
    ///
    /// `frame_number` and `pins` arrive unvalidated from the caller. A
    /// completed game rejects the roll before any version check. When
    /// `expected_lock_version` is given it must match the stored game, and the
    /// summary update always re-checks the version read here, so two writers
    /// racing on one game cannot both commit.
    pub async fn record_roll(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        frame_number: i32,
        pins: i32,
        expected_lock_version: Option<i32>,
    ) -> Result<GameWithFrames, AppError> {
        let pins = validate_pins(pins)?;
        let frame_number = validate_frame_number(frame_number)?;

        debug!(game_id, frame_number, pins, "Recording roll");

        let game = games::require_game(txn, game_id).await?;

        if game.completed {
            return Err(DomainError::invalid_state(
                StateKind::GameCompleted,
                "Game is already completed",
            )
            .into());
        }

        if let Some(expected_version) = expected_lock_version {
            if game.lock_version != expected_version {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game was modified concurrently (expected version {expected_version}, actual version {}). Please refresh and retry.",
                        game.lock_version
                    ),
                )
                .into());
            }
        }

        let mut card = match frames::load_score_card(txn, game_id).await? {
            Some(card) => card,
            None => {
                debug!(game_id, "No frames stored; initializing score card");
                let card = ScoreCard::new();
                frames::insert_score_card(txn, game_id, &card).await?;
                card
            }
        };

        let recorded_in = card.record_roll(frame_number, pins)?;
        if recorded_in != frame_number {
            debug!(
                game_id,
                requested = frame_number,
                recorded_in,
                "Roll belongs to the unfinished previous frame"
            );
        }

        frames::save_score_card(txn, game_id, &card).await?;
        let game = games::update_summary(txn, &game, &card).await?;

        if game.completed {
            info!(game_id, total_score = game.total_score, "Game completed");
        }

        Ok(GameWithFrames { game, card })
    }
}
