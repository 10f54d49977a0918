use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game ID taken from the `{game_id}` path segment.
///
/// Only the shape is checked here; whether the game exists is decided by the
/// service inside the request's transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

pub fn parse_game_id(raw: Option<&str>) -> Result<GameId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;

    let game_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidGameId, format!("Invalid game id: {raw}"))
    })?;

    if game_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Game id must be positive, got: {game_id}"),
        ));
    }

    Ok(GameId(game_id))
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_game_id(req.match_info().get("game_id")))
    }
}
