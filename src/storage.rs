//! Persistence collaborator contract. The actual localStorage bridge lives
//! on the JS side; the core only defines the snapshot format and treats
//! saves as best-effort — a failed save never aborts game progression.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::GameError;
use crate::problem::Tier;
use crate::problem::Operation;
use crate::progression::{OpStats, SessionSnapshot};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_problems: u32,
    pub correct_answers: u32,
    pub streak_record: u32,
    pub operation_stats: HashMap<Operation, OpStats>,
}

/// Flat snapshot written at session end. Not the live mutable game state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedData {
    pub high_scores: HashMap<Tier, u32>,
    pub statistics: Statistics,
}

impl PersistedData {
    /// Folds a finished session into the stored totals. Returns true when
    /// the session set a new high score for its tier.
    pub fn absorb(&mut self, snapshot: &SessionSnapshot) -> bool {
        self.statistics.total_problems += snapshot.problems_submitted;
        self.statistics.correct_answers += snapshot.correct_answers;
        self.statistics.streak_record = self.statistics.streak_record.max(snapshot.best_streak);
        for (op, stats) in &snapshot.operation_stats {
            let entry = self.statistics.operation_stats.entry(*op).or_default();
            entry.correct += stats.correct;
            entry.total += stats.total;
        }
        let best = self.high_scores.entry(snapshot.tier).or_insert(0);
        if snapshot.score > *best {
            *best = snapshot.score;
            true
        } else {
            false
        }
    }
}

pub trait Storage {
    fn load(&mut self) -> Result<PersistedData, GameError>;
    fn save(&mut self, data: &PersistedData) -> Result<(), GameError>;
}

/// In-memory storage used by tests and as the wasm wrapper's default until
/// the JS host wires up a real backend.
#[derive(Default)]
pub struct MemoryStorage {
    data: PersistedData,
}

impl MemoryStorage {
    pub fn data(&self) -> &PersistedData {
        &self.data
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self) -> Result<PersistedData, GameError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &PersistedData) -> Result<(), GameError> {
        self.data = data.clone();
        Ok(())
    }
}
