// Answer validator contract: never panics, exact-integer by default.

use math_cat::error::GameError;
use math_cat::validate::{parse_answer, validate};

#[test]
fn exact_match_with_zero_tolerance() {
    for x in [-3_i64, 0, 1, 7, 144, 9_999] {
        assert!(validate(x as f64, x, 0.0));
        assert!(!validate(x as f64, x + 1, 0.0));
    }
}

#[test]
fn non_finite_input_is_always_wrong() {
    assert!(!validate(f64::NAN, 0, 0.0));
    assert!(!validate(f64::INFINITY, 0, 100.0));
    assert!(!validate(f64::NEG_INFINITY, 0, 100.0));
}

#[test]
fn tolerance_widens_acceptance() {
    assert!(validate(9.5, 10, 0.5));
    assert!(!validate(9.4, 10, 0.5));
}

#[test]
fn parse_answer_handles_child_keyboard_input() {
    assert_eq!(parse_answer(" 42 ").ok(), Some(42.0));
    assert_eq!(parse_answer("-7").ok(), Some(-7.0));
    assert_eq!(parse_answer("3.5").ok(), Some(3.5));
    match parse_answer("banana") {
        Err(GameError::InvalidAnswerInput(raw)) => assert_eq!(raw, "banana"),
        other => panic!("expected InvalidAnswerInput, got {:?}", other),
    }
    assert!(parse_answer("").is_err());
    // NaN parses as a float but is never a valid answer.
    assert!(parse_answer("NaN").is_err());
}
