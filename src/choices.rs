//! Distractor generation for the minigame's multiple-choice mode.
//!
//! Two wrong answers are built from two distinct strategies drawn without
//! replacement from a fixed pool; a random-perturbation fallback guarantees
//! the set is always complete. The three values land on the high / middle /
//! low catch positions with the correct one placed uniformly at random.

use serde::Serialize;

use crate::problem::{Operation, Problem};
use crate::rng::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    High,
    Middle,
    Low,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::High, Position::Middle, Position::Low];

    pub fn parse(s: &str) -> Option<Position> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Position::High),
            "middle" => Some(Position::Middle),
            "low" => Some(Position::Low),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Position::High => 0,
            Position::Middle => 1,
            Position::Low => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ChoiceOption {
    pub position: Position,
    pub value: i64,
    pub is_correct: bool,
}

/// One multiple-choice round. Exactly one option is correct and the three
/// values are mutually distinct; wrong values are always positive.
#[derive(Clone, Debug, Serialize)]
pub struct ChoiceSet {
    pub correct_value: i64,
    pub correct_position: Position,
    pub options: [ChoiceOption; 3],
}

impl ChoiceSet {
    /// Options are stored in `Position::ALL` order.
    pub fn option_at(&self, position: Position) -> &ChoiceOption {
        &self.options[position.index()]
    }
}

#[derive(Clone, Copy)]
enum Strategy {
    PlusTwo,
    MinusTwo,
    PlusOne,
    MinusOne,
    WrongOperation,
    PerturbOperand,
}

const STRATEGY_POOL: [Strategy; 6] = [
    Strategy::PlusTwo,
    Strategy::MinusTwo,
    Strategy::PlusOne,
    Strategy::MinusOne,
    Strategy::WrongOperation,
    Strategy::PerturbOperand,
];

pub fn generate_choices(problem: &Problem, rng: &mut GameRng) -> ChoiceSet {
    let correct = problem.answer;
    let mut wrong: Vec<i64> = Vec::with_capacity(2);

    let mut pool = STRATEGY_POOL;
    rng.shuffle(&mut pool);
    for strategy in pool {
        if wrong.len() == 2 {
            break;
        }
        if let Some(candidate) = apply_strategy(strategy, problem, rng) {
            if candidate > 0 && candidate != correct && !wrong.contains(&candidate) {
                wrong.push(candidate);
            }
        }
    }

    // Fallback: random perturbations of the correct answer until two unique
    // positive wrong values exist. Always terminates because at least
    // correct+1..correct+5 are valid candidates.
    while wrong.len() < 2 {
        let delta = rng.range_i64(-5, 5);
        if delta == 0 {
            continue;
        }
        let candidate = correct + delta;
        if candidate > 0 && candidate != correct && !wrong.contains(&candidate) {
            wrong.push(candidate);
        }
    }

    let correct_position = *rng.pick(&Position::ALL);
    let mut next_wrong = 0usize;
    let options = Position::ALL.map(|position| {
        if position == correct_position {
            ChoiceOption {
                position,
                value: correct,
                is_correct: true,
            }
        } else {
            let value = wrong[next_wrong];
            next_wrong += 1;
            ChoiceOption {
                position,
                value,
                is_correct: false,
            }
        }
    });

    ChoiceSet {
        correct_value: correct,
        correct_position,
        options,
    }
}

fn apply_strategy(strategy: Strategy, problem: &Problem, rng: &mut GameRng) -> Option<i64> {
    let correct = problem.answer;
    match strategy {
        Strategy::PlusTwo => Some(correct + 2),
        Strategy::MinusTwo => Some(correct - 2),
        Strategy::PlusOne => Some(correct + 1),
        Strategy::MinusOne => Some(correct - 1),
        Strategy::WrongOperation => Some(wrong_operation_value(problem)),
        Strategy::PerturbOperand => perturbed_operand_value(problem, rng),
    }
}

/// Recomputes the problem with a different operator on the same operands.
fn wrong_operation_value(problem: &Problem) -> i64 {
    let (a, b) = problem.operands;
    match problem.operation {
        Operation::Addition => {
            if a - b > 0 {
                a - b
            } else {
                a + b + 1
            }
        }
        Operation::Subtraction => a + b,
        Operation::Multiplication => a + b,
        // dividend × divisor
        Operation::Division => a * b,
    }
}

/// Modifies exactly one operand by ±1 (clamped to ≥1) and recomputes with the
/// original operator. Division candidates survive only when still integral.
fn perturbed_operand_value(problem: &Problem, rng: &mut GameRng) -> Option<i64> {
    let (mut a, mut b) = problem.operands;
    let delta = if rng.chance(0.5) { 1 } else { -1 };
    if rng.chance(0.5) {
        a = (a + delta).max(1);
    } else {
        b = (b + delta).max(1);
    }
    match problem.operation {
        Operation::Division => {
            if b != 0 && a % b == 0 {
                Some(a / b)
            } else {
                None
            }
        }
        op => Some(op.apply(a, b)),
    }
}
