//! SeaORM adapter for the frames table - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::frames;

pub mod dto;

pub use dto::FrameWrite;

/// All frame rows of a game, ordered by frame number.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<frames::Model>, sea_orm::DbErr> {
    frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .order_by_asc(frames::Column::FrameNumber)
        .all(conn)
        .await
}

pub async fn count_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    frames::Entity::find()
        .filter(frames::Column::GameId.eq(game_id))
        .count(conn)
        .await
}

/// Insert a full set of frame rows in one statement.
pub async fn insert_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: &[FrameWrite],
) -> Result<(), sea_orm::DbErr> {
    if rows.is_empty() {
        return Ok(());
    }

    let models = rows.iter().map(|row| frames::ActiveModel {
        id: NotSet,
        game_id: Set(row.game_id),
        frame_number: Set(row.frame_number),
        first_roll: Set(row.first_roll),
        second_roll: Set(row.second_roll),
        third_roll: Set(row.third_roll),
        frame_score: Set(row.frame_score),
    });

    frames::Entity::insert_many(models).exec(conn).await?;
    Ok(())
}

/// Overwrite the rolls and score of one existing frame row.
pub async fn update_frame<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    row: FrameWrite,
) -> Result<(), sea_orm::DbErr> {
    let result = frames::Entity::update_many()
        .col_expr(frames::Column::FirstRoll, Expr::value(row.first_roll))
        .col_expr(frames::Column::SecondRoll, Expr::value(row.second_roll))
        .col_expr(frames::Column::ThirdRoll, Expr::value(row.third_roll))
        .col_expr(frames::Column::FrameScore, Expr::value(row.frame_score))
        .filter(frames::Column::GameId.eq(row.game_id))
        .filter(frames::Column::FrameNumber.eq(row.frame_number))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound(format!(
            "Frame {} of game {} not found",
            row.frame_number, row.game_id
        )));
    }
    Ok(())
}
