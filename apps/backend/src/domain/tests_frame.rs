use crate::domain::frame::{Frame, FrameState};
use crate::errors::domain::{DomainError, StateKind, ValidationKind};

fn frame_with(frame_number: u8, rolls: &[u8]) -> Frame {
    let mut frame = Frame::new(frame_number);
    for &pins in rolls {
        frame.record_roll(pins).expect("setup roll accepted");
    }
    frame
}

#[test]
fn new_frame_is_empty() {
    let frame = Frame::new(3);
    assert_eq!(frame.state(), FrameState::Empty);
    assert!(!frame.is_started());
    assert!(!frame.is_complete());
    assert_eq!(frame.pins_recorded(), 0);
    assert_eq!(frame.frame_score, 0);
}

#[test]
fn strike_completes_a_regular_frame() {
    let frame = frame_with(1, &[10]);
    assert!(frame.is_strike());
    assert!(!frame.is_spare());
    assert!(frame.is_complete());
    assert_eq!(frame.state(), FrameState::Strike);
}

#[test]
fn spare_and_open_frames() {
    let spare = frame_with(2, &[6, 4]);
    assert!(spare.is_spare());
    assert!(spare.is_complete());
    assert_eq!(spare.state(), FrameState::Spare);

    let open = frame_with(2, &[3, 4]);
    assert!(!open.is_spare());
    assert!(!open.is_strike());
    assert!(open.is_complete());
    assert_eq!(open.state(), FrameState::Open);

    let half = frame_with(2, &[3]);
    assert!(!half.is_complete());
    assert_eq!(half.state(), FrameState::FirstRollRecorded);
}

#[test]
fn zero_then_ten_is_a_spare_not_a_strike() {
    let frame = frame_with(4, &[0, 10]);
    assert!(!frame.is_strike());
    assert!(frame.is_spare());
}

#[test]
fn regular_frame_rejects_pin_total_over_ten() {
    let mut frame = frame_with(1, &[6]);
    let err = frame.record_roll(6).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
    // Failed roll leaves the frame untouched
    assert_eq!(frame.second_roll, None);
    assert_eq!(frame.first_roll, Some(6));
}

#[test]
fn regular_frame_rejects_roll_after_strike() {
    let mut frame = frame_with(1, &[10]);
    let err = frame.record_roll(0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::FrameComplete, _)
    ));
}

#[test]
fn regular_frame_rejects_third_roll() {
    let mut frame = frame_with(5, &[2, 3]);
    let err = frame.record_regular_roll(1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::FrameComplete, _)
    ));
    assert_eq!(frame.third_roll, None);
}

#[test]
fn pins_over_ten_are_rejected_on_any_roll() {
    let mut empty = Frame::new(1);
    assert!(matches!(
        empty.record_roll(11).unwrap_err(),
        DomainError::Validation(ValidationKind::InvalidPins, _)
    ));
    assert_eq!(empty.first_roll, None);

    let mut tenth = frame_with(10, &[10, 10]);
    assert!(matches!(
        tenth.record_roll(11).unwrap_err(),
        DomainError::Validation(ValidationKind::InvalidPins, _)
    ));
}

#[test]
fn tenth_frame_open_is_complete_after_two_rolls() {
    let mut frame = frame_with(10, &[3, 4]);
    assert!(frame.is_complete());
    assert_eq!(frame.state(), FrameState::Complete);

    let err = frame.record_roll(5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::BonusRollNotAllowed, _)
    ));
    assert_eq!(frame.third_roll, None);
}

#[test]
fn tenth_frame_strike_waits_for_two_more_rolls() {
    let mut frame = frame_with(10, &[10]);
    assert_eq!(frame.state(), FrameState::AwaitingBonusRoll);
    assert!(!frame.is_complete());

    frame.record_roll(10).unwrap();
    assert!(!frame.is_complete());
    frame.record_roll(10).unwrap();
    assert!(frame.is_complete());
    assert_eq!(frame.pins_recorded(), 30);
}

#[test]
fn tenth_frame_second_roll_after_strike_ignores_pair_rule() {
    let frame = frame_with(10, &[10, 7]);
    assert_eq!(frame.second_roll, Some(7));
}

#[test]
fn tenth_frame_spare_gets_one_bonus_roll() {
    let mut frame = frame_with(10, &[7, 3]);
    assert_eq!(frame.state(), FrameState::AwaitingBonusRoll);
    frame.record_roll(7).unwrap();
    assert!(frame.is_complete());
    assert_eq!(frame.pins_recorded(), 17);

    let err = frame.record_roll(1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::FrameComplete, _)
    ));
}

#[test]
fn tenth_frame_open_pair_is_capped() {
    let mut frame = frame_with(10, &[8]);
    assert!(matches!(
        frame.record_roll(3).unwrap_err(),
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
}

#[test]
fn tenth_frame_third_roll_after_non_strike_second_is_capped() {
    // Strike then 6 leaves 4 standing
    let mut frame = frame_with(10, &[10, 6]);
    let err = frame.record_roll(5).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
    frame.record_roll(4).unwrap();
    assert!(frame.is_complete());
}

#[test]
fn tenth_frame_third_roll_after_spare_pairs_with_second_roll() {
    // 2 + 8 spare: the bonus roll is checked against the second roll
    let mut frame = frame_with(10, &[2, 8]);
    assert!(matches!(
        frame.record_roll(3).unwrap_err(),
        DomainError::Validation(ValidationKind::PinTotalExceeded, _)
    ));
    frame.record_roll(2).unwrap();
    assert_eq!(frame.pins_recorded(), 12);

    // 0 + 10 spare: second roll was ten, so any bonus is allowed
    let mut frame = frame_with(10, &[0, 10]);
    frame.record_roll(10).unwrap();
    assert!(frame.is_complete());
}

#[test]
fn frame_serializes_camel_case() {
    let frame = frame_with(10, &[10, 3]);
    let json = serde_json::to_value(frame).unwrap();
    assert_eq!(json["frameNumber"], 10);
    assert_eq!(json["firstRoll"], 10);
    assert_eq!(json["secondRoll"], 3);
    assert!(json["thirdRoll"].is_null());
    assert_eq!(json["frameScore"], 0);

    let state = serde_json::to_value(frame.state()).unwrap();
    assert_eq!(state, "AWAITING_BONUS_ROLL");
}
