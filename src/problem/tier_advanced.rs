// Advanced tier profile.
// Division is listed twice in the pool to double its sampling weight, and the
// divisor set skews small so quotients and dividends grow large.
use super::{DifficultyProfile, Operation, Tier};

pub static ADVANCED: DifficultyProfile = DifficultyProfile {
    tier: Tier::Advanced,
    add_range: (25, 100),
    sub_range: (25, 100),
    mul_range: (6, 15),
    divisors: &[1, 2, 3, 4, 5],
    operation_pool: &[
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Division,
    ],
    base_points: 20,
    round_time_ms: 7_000.0,
    battle_attempts: 3,
};
