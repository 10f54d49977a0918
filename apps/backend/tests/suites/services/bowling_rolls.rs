use bowling_backend::services::bowling::BowlingService;
use bowling_backend::{AppError, ErrorCode};
use sea_orm::TransactionTrait;

use crate::support::bowling::{frame_scores, roll_all};
use crate::support::test_state::{db, in_memory_state};

#[tokio::test]
async fn perfect_game_scores_300_and_completes() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    let done = roll_all(&txn, game_id, &[10; 12]).await;

    assert_eq!(done.game.total_score, 300);
    assert!(done.game.completed);
    assert_eq!(
        frame_scores(&done),
        vec![30, 60, 90, 120, 150, 180, 210, 240, 270, 300]
    );

    // The stored summary matches what the roll returned
    let stored = service.get_game(&txn, game_id).await?;
    assert_eq!(stored.total_score, 300);
    assert!(stored.completed);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn gutter_game_completes_at_zero() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let game_id = BowlingService::new().create_game(&txn).await?.game.id;

    let done = roll_all(&txn, game_id, &[0; 20]).await;

    assert_eq!(done.game.total_score, 0);
    assert!(done.game.completed);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn all_fives_score_150() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let game_id = BowlingService::new().create_game(&txn).await?.game.id;

    let done = roll_all(&txn, game_id, &[5; 21]).await;

    assert_eq!(done.game.total_score, 150);
    assert!(done.game.completed);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn strike_stays_provisional_until_next_frame_finishes() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let game_id = BowlingService::new().create_game(&txn).await?.game.id;

    let after_strike = roll_all(&txn, game_id, &[10]).await;
    assert_eq!(after_strike.card.frames()[0].frame_score, 0);

    let service = BowlingService::new();
    service.record_roll(&txn, game_id, 2, 3, None).await?;
    let resolved = service.record_roll(&txn, game_id, 2, 4, None).await?;

    assert_eq!(resolved.card.frames()[0].frame_score, 17);
    assert_eq!(resolved.card.frames()[1].frame_score, 24);
    // Not complete yet, so the summary total is still the tenth frame's provisional value
    assert!(!resolved.game.completed);
    assert_eq!(resolved.game.total_score, 24);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn roll_for_next_frame_lands_in_unfinished_frame() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    service.record_roll(&txn, game_id, 1, 3, None).await?;
    let updated = service.record_roll(&txn, game_id, 2, 4, None).await?;

    let frames = updated.card.frames();
    assert_eq!(frames[0].first_roll, Some(3));
    assert_eq!(frames[0].second_roll, Some(4));
    assert_eq!(frames[1].first_roll, None);
    assert_eq!(frames[0].frame_score, 7);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn invalid_inputs_are_rejected_without_writes() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    let cases = [
        (1, 11, ErrorCode::InvalidPins),
        (1, -1, ErrorCode::InvalidPins),
        (0, 5, ErrorCode::InvalidFrameNumber),
        (11, 5, ErrorCode::InvalidFrameNumber),
    ];
    for (frame_number, pins, code) in cases {
        let err = service
            .record_roll(&txn, game_id, frame_number, pins, None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), code, "frame {frame_number}, pins {pins}");
    }

    service.record_roll(&txn, game_id, 1, 6, None).await?;
    let err = service
        .record_roll(&txn, game_id, 1, 6, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PinTotalExceeded);

    let frames = service.get_frames(&txn, game_id).await?;
    assert_eq!(frames[0].first_roll, Some(6));
    assert_eq!(frames[0].second_roll, None);
    assert_eq!(service.get_game(&txn, game_id).await?.lock_version, 2);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn completed_game_refuses_rolls() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    roll_all(&txn, game_id, &[0; 20]).await;

    let err = service
        .record_roll(&txn, game_id, 10, 5, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameCompleted);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn open_tenth_frame_refuses_a_third_roll() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    let mut rolls = vec![0; 18];
    rolls.extend([3, 4]);
    let done = roll_all(&txn, game_id, &rolls).await;
    assert!(done.game.completed);
    assert_eq!(done.game.total_score, 7);

    // The game is over, so the game-level check answers first
    let err = service
        .record_roll(&txn, game_id, 10, 2, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameCompleted);

    txn.rollback().await?;
    Ok(())
}

#[tokio::test]
async fn tenth_frame_bonus_roll_after_spare() -> Result<(), AppError> {
    let state = in_memory_state().await;
    let txn = db(&state).begin().await?;
    let service = BowlingService::new();
    let game_id = service.create_game(&txn).await?.game.id;

    let mut rolls = vec![0; 18];
    rolls.extend([7, 3]);
    let awaiting = roll_all(&txn, game_id, &rolls).await;
    assert!(!awaiting.game.completed);

    // Literal rule: the bonus roll is checked against the second roll
    let err = service
        .record_roll(&txn, game_id, 10, 8, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::PinTotalExceeded);

    let done = service.record_roll(&txn, game_id, 10, 7, None).await?;
    assert!(done.game.completed);
    assert_eq!(done.game.total_score, 17);

    txn.rollback().await?;
    Ok(())
}
