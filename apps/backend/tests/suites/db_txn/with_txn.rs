use bowling_backend::db::txn::with_txn;
use bowling_backend::db::txn_policy::{current, TxnPolicy};
use bowling_backend::repos::games;
use bowling_backend::services::bowling::BowlingService;
use bowling_backend::state::app_state::AppState;
use bowling_backend::{AppError, ErrorCode};

use crate::support::test_state::{db, in_memory_state};

#[tokio::test]
async fn default_policy_commits() -> Result<(), AppError> {
    assert_eq!(current(), TxnPolicy::CommitOnOk);

    let state = in_memory_state().await;
    let game_id = with_txn(None, &state, |txn| {
        Box::pin(async move { Ok(BowlingService::new().create_game(txn).await?.game.id) })
    })
    .await?;

    assert!(games::find_by_id(db(&state), game_id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn error_rolls_back_every_write() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let created = with_txn(None, &state, |txn| {
        Box::pin(async move { BowlingService::new().create_game(txn).await })
    })
    .await?;
    let game_id = created.game.id;

    // First roll succeeds inside the closure, the second one fails: neither may stick
    let err = with_txn(None, &state, |txn| {
        Box::pin(async move {
            let service = BowlingService::new();
            service.record_roll(txn, game_id, 1, 8, None).await?;
            service.record_roll(txn, game_id, 1, 8, None).await
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PinTotalExceeded);

    let game = games::require_game(db(&state), game_id).await?;
    assert_eq!(game.lock_version, 1);
    let frames = bowling_backend::repos::frames::load_score_card(db(&state), game_id)
        .await?
        .unwrap_or_default();
    assert!(frames.iter().all(|f| f.first_roll.is_none()));
    Ok(())
}

#[tokio::test]
async fn without_database_is_unavailable() {
    let state = AppState::without_db();
    let err = with_txn(None, &state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DbUnavailable));
}
