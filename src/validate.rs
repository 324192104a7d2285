//! Answer validation. Never panics: malformed keyboard input from a child is
//! routine, so callers downgrade parse errors to "incorrect".

use crate::error::GameError;

/// True iff `user` is finite and within `tolerance` of `correct`. The main
/// game and the minigame input mode always use a tolerance of 0.
pub fn validate(user: f64, correct: i64, tolerance: f64) -> bool {
    if !user.is_finite() {
        return false;
    }
    (user - correct as f64).abs() <= tolerance
}

/// Parses a submitted answer string. Anything that is not a finite number is
/// an `InvalidAnswerInput`.
pub fn parse_answer(input: &str) -> Result<f64, GameError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GameError::InvalidAnswerInput(input.trim().to_string()))
}
