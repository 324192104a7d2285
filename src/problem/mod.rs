//! Arithmetic problem synthesis: operations, difficulty tiers and the
//! generator that turns a tier profile into concrete fact problems.
//!
//! Generation is pure and total given a tier: there are no failure modes
//! beyond rejecting unknown tier names at the string boundary.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;
use crate::rng::GameRng;

mod tier_advanced;
mod tier_beginner;
mod tier_intermediate;

pub use tier_advanced::ADVANCED;
pub use tier_beginner::BEGINNER;
pub use tier_intermediate::INTERMEDIATE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }

    /// Recomputes the answer from the operands. Division operands are always
    /// constructed with a non-zero divisor and an exact quotient.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operation::Addition => a + b,
            Operation::Subtraction => a - b,
            Operation::Multiplication => a * b,
            Operation::Division => {
                if b == 0 {
                    0
                } else {
                    a / b
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn name(self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }
}

impl FromStr for Tier {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Tier::Beginner),
            "intermediate" => Ok(Tier::Intermediate),
            "advanced" => Ok(Tier::Advanced),
            other => Err(GameError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Static per-tier configuration. Ranges are inclusive operand bounds; the
/// operation pool encodes sampling weight by repetition (beginner lists no
/// division at all, advanced lists it twice). Never mutated at runtime.
pub struct DifficultyProfile {
    pub tier: Tier,
    pub add_range: (i64, i64),
    pub sub_range: (i64, i64),
    pub mul_range: (i64, i64),
    pub divisors: &'static [i64],
    pub operation_pool: &'static [Operation],
    pub base_points: u32,
    /// Minigame round pacing budget. Presentation parameter carried as data.
    pub round_time_ms: f64,
    pub battle_attempts: u32,
}

impl DifficultyProfile {
    pub fn for_tier(tier: Tier) -> &'static DifficultyProfile {
        match tier {
            Tier::Beginner => &BEGINNER,
            Tier::Intermediate => &INTERMEDIATE,
            Tier::Advanced => &ADVANCED,
        }
    }
}

/// One arithmetic fact problem. Immutable once created; `answer` is always a
/// non-negative integer reproducible by applying `operation` to `operands`.
#[derive(Clone, Debug, Serialize)]
pub struct Problem {
    pub operation: Operation,
    pub question_text: String,
    pub answer: i64,
    pub operands: (i64, i64),
    pub tier: Tier,
}

/// Division quotients are drawn from `1..=12` (times-table territory).
pub const MAX_QUOTIENT: i64 = 12;

/// Generates one problem for the tier. When `operation` is `None` the
/// operation is sampled from the tier's weighted pool.
pub fn generate(tier: Tier, operation: Option<Operation>, rng: &mut GameRng) -> Problem {
    let profile = DifficultyProfile::for_tier(tier);
    let op = operation.unwrap_or_else(|| *rng.pick(profile.operation_pool));
    match op {
        Operation::Addition => {
            let (min, max) = profile.add_range;
            let a = rng.range_i64(min, max);
            let b = rng.range_i64(min, max);
            build(op, a, b, tier)
        }
        Operation::Subtraction => {
            let (min, max) = profile.sub_range;
            let a = rng.range_i64(min, max);
            let b = rng.range_i64(min, a.min(max));
            // b is drawn at or below a, the swap only covers degenerate ranges
            let (a, b) = if a < b { (b, a) } else { (a, b) };
            build(op, a, b, tier)
        }
        Operation::Multiplication => {
            let (min, max) = profile.mul_range;
            let a = rng.range_i64(min, max);
            let b = rng.range_i64(min, max);
            build(op, a, b, tier)
        }
        Operation::Division => {
            let divisor = *rng.pick(profile.divisors);
            let quotient = rng.range_i64(1, MAX_QUOTIENT);
            let dividend = divisor * quotient;
            build(op, dividend, divisor, tier)
        }
    }
}

fn build(op: Operation, a: i64, b: i64, tier: Tier) -> Problem {
    Problem {
        operation: op,
        question_text: format!("{a} {} {b}", op.symbol()),
        answer: op.apply(a, b),
        operands: (a, b),
        tier,
    }
}
