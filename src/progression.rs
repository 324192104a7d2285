//! Score / streak / level progression state machine.
//!
//! Mutated only in response to validated answers. Every submission — right
//! or wrong — counts toward the level, so level pacing does not depend on
//! accuracy; only the score does.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::problem::{DifficultyProfile, Operation, Tier};

/// Level-up happens after this many submissions per level.
pub const PROBLEMS_PER_LEVEL: u32 = 10;

/// Every third consecutive correct answer adds this much per full streak.
const STREAK_BONUS_STEP: u32 = 2;

/// Per-operation correct/total counters.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct OpStats {
    pub correct: u32,
    pub total: u32,
}

/// Immutable end-of-session summary handed to the storage collaborator.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub tier: Tier,
    pub score: u32,
    pub best_streak: u32,
    pub problems_submitted: u32,
    pub correct_answers: u32,
    /// Rounded percentage, 0 when nothing was submitted.
    pub accuracy: u32,
    pub operation_stats: HashMap<Operation, OpStats>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Continue,
    /// Fired exactly once per level; the machine deactivates until the
    /// minigame resolves.
    LevelComplete,
}

pub struct Progression {
    tier: Tier,
    score: u32,
    streak: u32,
    best_streak: u32,
    level: u32,
    problems_this_level: u32,
    problems_per_level: u32,
    problems_submitted: u32,
    correct_answers: u32,
    op_stats: HashMap<Operation, OpStats>,
    is_active: bool,
}

impl Progression {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            score: 0,
            streak: 0,
            best_streak: 0,
            level: 1,
            problems_this_level: 0,
            problems_per_level: PROBLEMS_PER_LEVEL,
            problems_submitted: 0,
            correct_answers: 0,
            op_stats: HashMap::new(),
            is_active: true,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Records one validated answer. No-op while inactive (between the
    /// level-complete signal and the minigame resolution).
    pub fn record_answer(&mut self, operation: Operation, correct: bool) -> AnswerOutcome {
        if !self.is_active {
            return AnswerOutcome::Continue;
        }

        let entry = self.op_stats.entry(operation).or_default();
        entry.total += 1;
        self.problems_submitted += 1;

        if correct {
            entry.correct += 1;
            self.correct_answers += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            let base = DifficultyProfile::for_tier(self.tier).base_points;
            self.score += base + (self.streak / 3) * STREAK_BONUS_STEP;
        } else {
            self.streak = 0;
        }

        self.problems_this_level += 1;
        if self.problems_this_level >= self.problems_per_level {
            self.is_active = false;
            return AnswerOutcome::LevelComplete;
        }
        AnswerOutcome::Continue
    }

    /// Minigame victory bonus. Level advancement never depends on this.
    pub fn apply_bonus(&mut self, points: u32) {
        self.score += points;
    }

    /// Advances to the next level after the minigame resolves, win or lose.
    pub fn resume_after_minigame(&mut self) {
        self.level += 1;
        self.problems_this_level = 0;
        self.is_active = true;
    }

    /// Finalizes the session and produces the persisted snapshot.
    pub fn finish(&mut self) -> SessionSnapshot {
        self.is_active = false;
        let accuracy = if self.problems_submitted == 0 {
            0
        } else {
            ((self.correct_answers as f64 / self.problems_submitted as f64) * 100.0).round() as u32
        };
        SessionSnapshot {
            tier: self.tier,
            score: self.score,
            best_streak: self.best_streak,
            problems_submitted: self.problems_submitted,
            correct_answers: self.correct_answers,
            accuracy,
            operation_stats: self.op_stats.clone(),
        }
    }
}
