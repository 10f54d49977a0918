//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::domain::score_card::ScoreCard;
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Game summary as the rest of the backend sees it.
///
/// `total_score` and `completed` always mirror the tenth frame of the game's
/// score card as of the last successful roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub total_score: u16,
    pub completed: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub lock_version: i32,
}

impl TryFrom<games::Model> for Game {
    type Error = DomainError;

    fn try_from(model: games::Model) -> Result<Self, Self::Error> {
        let total_score = u16::try_from(model.total_score).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Game {} has total score {}", model.id, model.total_score),
            )
        })?;

        Ok(Self {
            id: model.id,
            total_score,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
            lock_version: model.lock_version,
        })
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    games_adapter::find_by_id(conn, game_id)
        .await?
        .map(Game::try_from)
        .transpose()
}

/// Find game by ID or return `NotFound`.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    let game = games_adapter::require_game(conn, game_id).await?;
    Game::try_from(game)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Game, DomainError> {
    let game = games_adapter::create_game(conn, games_adapter::GameCreate::new()).await?;
    Game::try_from(game)
}

/// Copy the card's total and completion onto the game row.
///
/// Fails with an optimistic-lock conflict if `game` is stale.
pub async fn update_summary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
    card: &ScoreCard,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameUpdateSummary::new(game.id, game.lock_version)
        .with_total_score(i32::from(card.total_score()))
        .with_completed(card.is_complete());
    let updated = games_adapter::update_summary(conn, dto).await?;
    Game::try_from(updated)
}
