//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::games;
use crate::infra::db_errors::{GAME_NOT_FOUND_PREFIX, OPTIMISTIC_LOCK_PREFIX};

pub mod dto;

pub use dto::{GameCreate, GameUpdateSummary};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

fn game_not_found(game_id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND_PREFIX}{game_id}"))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or fail with a structured not-found error.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| game_not_found(game_id))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let game_active = games::ActiveModel {
        id: NotSet,
        total_score: Set(dto.total_score),
        completed: Set(dto.completed),
        created_at: Set(now),
        updated_at: Set(now),
        lock_version: Set(1),
    };

    game_active.insert(conn).await
}

/// Write the score summary if nobody else has touched the game since it was read.
///
/// Bumps `lock_version` and `updated_at`, then refetches.
pub async fn update_summary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdateSummary,
) -> Result<games::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = games::Entity::update_many()
        .col_expr(games::Column::TotalScore, Expr::value(dto.total_score))
        .col_expr(games::Column::Completed, Expr::value(dto.completed))
        .col_expr(games::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            games::Column::LockVersion,
            Expr::col(games::Column::LockVersion).add(1),
        )
        .filter(games::Column::Id.eq(dto.id))
        .filter(games::Column::LockVersion.eq(dto.expected_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        // Distinguish a missing game from a stale version
        let game = find_by_id(conn, dto.id).await?;
        return Err(match game {
            Some(game) => sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}expected={},actual={}",
                dto.expected_version, game.lock_version
            )),
            None => game_not_found(dto.id),
        });
    }

    require_game(conn, dto.id).await
}
