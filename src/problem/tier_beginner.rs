// Beginner tier profile.
// Small operands, friendly divisors and no division in the random pool.
// The multiplication range starts at 0 on purpose: zero-products are part of
// learning the times tables.
use super::{DifficultyProfile, Operation, Tier};

pub static BEGINNER: DifficultyProfile = DifficultyProfile {
    tier: Tier::Beginner,
    add_range: (1, 10),
    sub_range: (1, 10),
    mul_range: (0, 5),
    divisors: &[2, 5, 10],
    operation_pool: &[
        Operation::Addition,
        Operation::Addition,
        Operation::Subtraction,
        Operation::Subtraction,
        Operation::Multiplication,
    ],
    base_points: 10,
    round_time_ms: 12_000.0,
    battle_attempts: 3,
};
