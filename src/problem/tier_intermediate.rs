// Intermediate tier profile.
// Two-digit addition and subtraction, full times-table multiplication, and
// division enters the random pool with a single slot.
use super::{DifficultyProfile, Operation, Tier};

pub static INTERMEDIATE: DifficultyProfile = DifficultyProfile {
    tier: Tier::Intermediate,
    add_range: (10, 50),
    sub_range: (10, 50),
    mul_range: (2, 12),
    divisors: &[2, 3, 4, 5, 10],
    operation_pool: &[
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ],
    base_points: 15,
    round_time_ms: 9_000.0,
    battle_attempts: 3,
};
