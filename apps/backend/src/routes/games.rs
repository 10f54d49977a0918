//! Game and roll HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::domain::frame::{Frame, FrameState};
use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::games::Game;
use crate::services::bowling::{BowlingService, GameWithFrames};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: i64,
    pub total_score: u16,
    pub completed: bool,
    pub lock_version: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResponse {
    pub frame_number: u8,
    pub first_roll: Option<u8>,
    pub second_roll: Option<u8>,
    pub third_roll: Option<u8>,
    pub frame_score: u16,
    pub is_strike: bool,
    pub is_spare: bool,
    pub is_complete: bool,
    pub state: FrameState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWithFramesResponse {
    #[serde(flatten)]
    pub game: GameResponse,
    pub frames: Vec<FrameResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRollRequest {
    pub frame_number: i32,
    pub pins: i32,
    /// Optional optimistic-lock guard; must match the game's current version.
    #[serde(default)]
    pub lock_version: Option<i32>,
}

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string())
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            total_score: game.total_score,
            completed: game.completed,
            lock_version: game.lock_version,
            created_at: rfc3339(game.created_at),
            updated_at: rfc3339(game.updated_at),
        }
    }
}

impl From<&Frame> for FrameResponse {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_number: frame.frame_number,
            first_roll: frame.first_roll,
            second_roll: frame.second_roll,
            third_roll: frame.third_roll,
            frame_score: frame.frame_score,
            is_strike: frame.is_strike(),
            is_spare: frame.is_spare(),
            is_complete: frame.is_complete(),
            state: frame.state(),
        }
    }
}

impl From<&GameWithFrames> for GameWithFramesResponse {
    fn from(value: &GameWithFrames) -> Self {
        Self {
            game: GameResponse::from(&value.game),
            frames: value.card.iter().map(FrameResponse::from).collect(),
        }
    }
}

/// POST /api/games
async fn create_game(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { BowlingService::new().create_game(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameWithFramesResponse::from(&created)))
}

/// GET /api/games/{game_id}
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let id = game_id.0;
    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { BowlingService::new().get_game(txn, id).await })
    })
    .await?;

    Ok(web::Json(GameResponse::from(&game)))
}

/// GET /api/games/{game_id}/frames
async fn get_frames(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<FrameResponse>>, AppError> {
    let id = game_id.0;
    let frames = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { BowlingService::new().get_frames(txn, id).await })
    })
    .await?;

    Ok(web::Json(frames.iter().map(FrameResponse::from).collect()))
}

/// POST /api/games/{game_id}/rolls
///
/// Body: `{ "frameNumber": n, "pins": p }`, optionally with `lockVersion`.
async fn record_roll(
    http_req: HttpRequest,
    game_id: GameId,
    body: ValidatedJson<RecordRollRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = game_id.0;
    let RecordRollRequest {
        frame_number,
        pins,
        lock_version,
    } = body.into_inner();

    let updated = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            BowlingService::new()
                .record_roll(txn, id, frame_number, pins, lock_version)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameWithFramesResponse::from(&updated)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/frames").route(web::get().to(get_frames)));
    cfg.service(web::resource("/{game_id}/rolls").route(web::post().to(record_roll)));
}
