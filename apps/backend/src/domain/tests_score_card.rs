use crate::domain::frame::Frame;
use crate::domain::score_card::ScoreCard;
use crate::domain::test_prelude::bowl;
use crate::errors::domain::{DomainError, InfraErrorKind, StateKind, ValidationKind};

#[test]
fn new_card_has_ten_numbered_frames() {
    let card = ScoreCard::new();
    let numbers: Vec<u8> = card.iter().map(|f| f.frame_number).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
    assert!(card.iter().all(|f| !f.is_started()));
    assert_eq!(card.total_score(), 0);
    assert!(!card.is_complete());
}

#[test]
fn neighbours_are_bounded() {
    let card = ScoreCard::new();
    assert!(card.previous(0).is_none());
    assert_eq!(card.previous(1).map(|f| f.frame_number), Some(1));
    assert_eq!(card.next(8).map(|f| f.frame_number), Some(10));
    assert!(card.next(9).is_none());
    assert_eq!(card.next_next(7).map(|f| f.frame_number), Some(10));
    assert!(card.next_next(8).is_none());
    assert!(card.frame(0).is_none());
    assert!(card.frame(11).is_none());
    assert_eq!(card.tenth().frame_number, 10);
}

#[test]
fn roll_addressed_to_next_frame_completes_previous() {
    let mut card = ScoreCard::new();
    assert_eq!(card.record_roll(1, 3).unwrap(), 1);
    // Bowler is "on" frame 2 but frame 1 still owes its second roll
    assert_eq!(card.record_roll(2, 4).unwrap(), 1);

    let first = card.frame(1).unwrap();
    assert_eq!(first.second_roll, Some(4));
    assert!(!card.frame(2).unwrap().is_started());
    assert_eq!(first.frame_score, 7);
}

#[test]
fn roll_for_frame_after_empty_frame_lands_in_the_empty_frame() {
    let mut card = ScoreCard::new();
    assert_eq!(card.record_roll(2, 5).unwrap(), 1);
    assert_eq!(card.frame(1).unwrap().first_roll, Some(5));
    assert!(!card.frame(2).unwrap().is_started());
}

#[test]
fn roll_addressed_to_tenth_completes_ninth_frame_first() {
    let mut card = bowl(&[10, 10, 10, 10, 10, 10, 10, 10, 4]);
    assert_eq!(card.record_roll(10, 5).unwrap(), 9);

    let ninth = card.frame(9).unwrap();
    assert_eq!(ninth.second_roll, Some(5));
    assert!(ninth.is_complete());
    assert!(!card.tenth().is_started());
    assert_eq!(ninth.frame_score, 232);

    // Ninth frame still follows the regular pin limit
    let mut card = bowl(&[10, 10, 10, 10, 10, 10, 10, 10, 4]);
    let err = card.record_roll(10, 7).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
    assert_eq!(card.frame(9).unwrap().second_roll, None);
}

#[test]
fn roll_after_complete_previous_frame_goes_to_addressed_frame() {
    let mut card = bowl(&[10]);
    assert_eq!(card.record_roll(2, 6).unwrap(), 2);
    assert_eq!(card.frame(2).unwrap().first_roll, Some(6));
}

#[test]
fn redirected_roll_still_checks_pin_total() {
    let mut card = bowl(&[6]);
    let before = card.clone();
    let err = card.record_roll(2, 6).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
    assert_eq!(card, before);
    assert_eq!(card.frame(1).unwrap().second_roll, None);
}

#[test]
fn completed_card_rejects_every_roll() {
    let mut card = bowl(&[0; 20]);
    for pins in [0, 5, 10] {
        let err = card.record_roll(10, pins).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidState(StateKind::GameCompleted, _)
        ));
    }
}

#[test]
fn finished_open_tenth_reports_game_completed() {
    // 3,4 in the tenth completes the game, so the card itself refuses
    let mut rolls = vec![0; 18];
    rolls.extend([3, 4]);
    let mut card = bowl(&rolls);
    assert!(card.is_complete());
    assert!(matches!(
        card.record_roll(10, 1).unwrap_err(),
        DomainError::InvalidState(StateKind::GameCompleted, _)
    ));
}

#[test]
fn out_of_range_frame_number_is_rejected() {
    let mut card = ScoreCard::new();
    for n in [0, 11, 255] {
        let err = card.record_roll(n, 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationKind::InvalidFrameNumber, _)
        ));
    }
    assert_eq!(card, ScoreCard::new());
}

#[test]
fn from_frames_rejects_wrong_count_and_order() {
    let frames: Vec<Frame> = (1..=9).map(Frame::new).collect();
    assert!(matches!(
        ScoreCard::from_frames(frames).unwrap_err(),
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));

    let mut frames: Vec<Frame> = (1..=10).map(Frame::new).collect();
    frames.swap(2, 3);
    assert!(matches!(
        ScoreCard::from_frames(frames).unwrap_err(),
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));

    let frames: Vec<Frame> = (1..=10).map(Frame::new).collect();
    assert_eq!(ScoreCard::from_frames(frames).unwrap(), ScoreCard::new());
}

#[test]
fn card_serializes_as_frame_list() {
    let card = bowl(&[10, 3, 4]);
    let json = serde_json::to_value(&card).unwrap();
    let frames = json.as_array().expect("array of frames");
    assert_eq!(frames.len(), 10);
    assert_eq!(frames[0]["frameScore"], 17);
    assert_eq!(frames[1]["secondRoll"], 4);
}
