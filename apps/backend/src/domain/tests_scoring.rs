use crate::domain::frame::Frame;
use crate::domain::score_card::ScoreCard;
use crate::domain::scoring::{calculate_scores, frame_scores};
use crate::domain::test_prelude::{bowl, scores};

#[test]
fn perfect_game_scores_300() {
    let card = bowl(&[10; 12]);
    assert_eq!(
        scores(&card),
        vec![30, 60, 90, 120, 150, 180, 210, 240, 270, 300]
    );
    assert_eq!(card.total_score(), 300);
    assert!(card.is_complete());
}

#[test]
fn gutter_game_scores_zero() {
    let card = bowl(&[0; 20]);
    assert_eq!(scores(&card), vec![0; 10]);
    assert!(card.is_complete());
}

#[test]
fn all_fives_scores_150() {
    let card = bowl(&[5; 21]);
    assert_eq!(
        scores(&card),
        vec![15, 30, 45, 60, 75, 90, 105, 120, 135, 150]
    );
}

#[test]
fn strike_then_open_frame() {
    let card = bowl(&[10, 3, 4]);
    assert_eq!(card.frame(1).unwrap().frame_score, 17);
    assert_eq!(card.frame(2).unwrap().frame_score, 24);
    // Unstarted frames carry the running total
    assert_eq!(card.frame(3).unwrap().frame_score, 24);
}

#[test]
fn mixed_game_scores_167() {
    let card = bowl(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);
    assert_eq!(
        scores(&card),
        vec![20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
    );
    assert!(card.is_complete());
}

#[test]
fn lone_strike_is_provisional_at_running_total() {
    let card = bowl(&[10]);
    assert_eq!(card.frame(1).unwrap().frame_score, 0);
}

#[test]
fn first_roll_only_shows_running_plus_pins() {
    let card = bowl(&[3, 4, 5]);
    assert_eq!(card.frame(1).unwrap().frame_score, 7);
    assert_eq!(card.frame(2).unwrap().frame_score, 12);
}

#[test]
fn spare_resolves_once_next_first_roll_lands() {
    let card = bowl(&[6, 4]);
    assert_eq!(card.frame(1).unwrap().frame_score, 0);

    let card = bowl(&[6, 4, 5]);
    assert_eq!(card.frame(1).unwrap().frame_score, 15);
    assert_eq!(card.frame(2).unwrap().frame_score, 20);
}

#[test]
fn double_strike_resolves_first_on_third_ball() {
    let card = bowl(&[10, 10]);
    assert_eq!(card.frame(1).unwrap().frame_score, 0);
    assert_eq!(card.frame(2).unwrap().frame_score, 0);

    let card = bowl(&[10, 10, 3]);
    assert_eq!(card.frame(1).unwrap().frame_score, 23);
    // Second strike still needs another ball
    assert_eq!(card.frame(2).unwrap().frame_score, 23);
    assert_eq!(card.frame(3).unwrap().frame_score, 26);
}

#[test]
fn ninth_frame_strike_uses_tenth_frame_rolls() {
    let mut rolls = vec![0; 16];
    rolls.extend([10, 3, 4]);
    let card = bowl(&rolls);
    assert_eq!(card.frame(9).unwrap().frame_score, 17);
    assert_eq!(card.total_score(), 24);

    let mut rolls = vec![0; 16];
    rolls.extend([10, 10, 7]);
    let card = bowl(&rolls);
    assert_eq!(card.frame(9).unwrap().frame_score, 27);
    // Tenth frame awaiting its bonus roll shows what is recorded
    assert_eq!(card.frame(10).unwrap().frame_score, 44);
    assert!(!card.is_complete());
}

#[test]
fn ninth_frame_strike_waits_for_tenth_second_roll() {
    let mut rolls = vec![0; 16];
    rolls.extend([10, 10]);
    let card = bowl(&rolls);
    assert_eq!(card.frame(9).unwrap().frame_score, 0);
    assert_eq!(card.frame(10).unwrap().frame_score, 10);
}

#[test]
fn tenth_frame_provisional_shows_recorded_pins() {
    let mut rolls = vec![1; 18];
    rolls.push(10);
    let card = bowl(&rolls);
    assert_eq!(card.frame(9).unwrap().frame_score, 18);
    assert_eq!(card.frame(10).unwrap().frame_score, 28);

    let mut rolls = vec![1; 18];
    rolls.push(4);
    let card = bowl(&rolls);
    assert_eq!(card.frame(10).unwrap().frame_score, 22);
}

#[test]
fn recalculation_is_idempotent() {
    let mut card = bowl(&[10, 7, 3, 9, 0, 10, 2]);
    let before = scores(&card);
    calculate_scores(&mut card);
    calculate_scores(&mut card);
    assert_eq!(scores(&card), before);
    assert_eq!(frame_scores(&card).to_vec(), before);
}

#[test]
fn stale_scores_are_overwritten() {
    let mut frames: Vec<Frame> = ScoreCard::new().into_frames().to_vec();
    frames[0].first_roll = Some(3);
    frames[0].second_roll = Some(4);
    frames[0].frame_score = 99;
    frames[5].frame_score = 42;

    let mut card = ScoreCard::from_frames(frames).unwrap();
    calculate_scores(&mut card);
    assert_eq!(card.frame(1).unwrap().frame_score, 7);
    assert_eq!(card.frame(6).unwrap().frame_score, 7);
}
