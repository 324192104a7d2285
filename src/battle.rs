//! Bonus "battle" minigame resolver: health and attempt bookkeeping,
//! decoupled from the visual timing the presentation layer owns.
//!
//! Each round presents a problem in input mode (type the answer) or choice
//! mode (catch one of three falling values). Resolution is guarded against
//! duplicate delivery: rounds carry tokens, commands with a stale token are
//! silent no-ops, and a single-flight flag blocks overlapping resolutions so
//! terminal transitions fire exactly once.

use serde::Serialize;

use crate::choices::{self, ChoiceSet, Position};
use crate::problem::{self, DifficultyProfile, Problem, Tier};
use crate::rng::GameRng;
use crate::validate;

pub const STARTING_HEALTH: u32 = 100;
pub const VICTORY_BASE_BONUS: u32 = 50;

const CHOICE_MODE_CHANCE: f64 = 0.30;
const WRONG_CHOICE_DAMAGE: u32 = 25;
const WRONG_INPUT_DAMAGE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    Input,
    Choice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundToken(pub u64);

#[derive(Clone, Debug)]
pub struct Round {
    pub token: RoundToken,
    pub mode: RoundMode,
    pub problem: Problem,
    /// Present iff `mode == Choice`.
    pub choices: Option<ChoiceSet>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    RoundActive,
    Victory,
    Defeat,
}

/// What a resolution attempt did, for the caller to turn into events and
/// timer bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Stale token, wrong mode, terminal phase or single-flight guard.
    Ignored,
    /// Attempt cleared; a fresh round is active.
    Correct { attempts_remaining: u32 },
    /// Damage taken; a fresh round is active.
    Damaged { health: u32 },
    /// Wrong input-mode keystroke; same round continues, retry allowed.
    Retry { health: u32 },
    Victory { bonus_points: u32 },
    Defeat,
}

pub struct Battle {
    tier: Tier,
    health: u32,
    attempts_remaining: u32,
    phase: BattlePhase,
    round: Option<Round>,
    round_seq: u64,
    resolving: bool,
}

impl Battle {
    pub fn start(tier: Tier, rng: &mut GameRng) -> Self {
        let profile = DifficultyProfile::for_tier(tier);
        let mut battle = Self {
            tier,
            health: STARTING_HEALTH,
            attempts_remaining: profile.battle_attempts,
            phase: BattlePhase::RoundActive,
            round: None,
            round_seq: 0,
            resolving: false,
        };
        battle.next_round(rng);
        battle
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Typed-answer resolution for an input-mode round.
    pub fn submit_input(&mut self, token: RoundToken, value: f64, rng: &mut GameRng) -> Resolution {
        let Some(round) = self.guarded_round(token, RoundMode::Input) else {
            return Resolution::Ignored;
        };
        self.resolving = true;
        if validate::validate(value, round.problem.answer, 0.0) {
            self.register_correct(rng)
        } else {
            self.register_wrong_input()
        }
    }

    /// Position-catch resolution for a choice-mode round. Correct iff the
    /// selected position matches the correct one exactly.
    pub fn select_choice(
        &mut self,
        token: RoundToken,
        position: Position,
        rng: &mut GameRng,
    ) -> Resolution {
        let Some(round) = self.guarded_round(token, RoundMode::Choice) else {
            return Resolution::Ignored;
        };
        let Some(correct_position) = round.choices.as_ref().map(|c| c.correct_position) else {
            return Resolution::Ignored;
        };
        self.resolving = true;
        if position == correct_position {
            self.register_correct(rng)
        } else {
            self.register_damage(WRONG_CHOICE_DAMAGE, rng)
        }
    }

    /// Round timeout with no selection made. Full damage in either mode.
    pub fn timeout(&mut self, token: RoundToken, rng: &mut GameRng) -> Resolution {
        let stale = match &self.round {
            Some(round) => round.token != token,
            None => true,
        };
        if self.phase != BattlePhase::RoundActive || self.resolving || stale {
            return Resolution::Ignored;
        }
        self.resolving = true;
        self.register_damage(WRONG_CHOICE_DAMAGE, rng)
    }

    fn guarded_round(&self, token: RoundToken, mode: RoundMode) -> Option<Round> {
        if self.phase != BattlePhase::RoundActive || self.resolving {
            return None;
        }
        let round = self.round.as_ref()?;
        if round.token != token || round.mode != mode {
            return None;
        }
        Some(round.clone())
    }

    fn next_round(&mut self, rng: &mut GameRng) {
        self.round_seq += 1;
        let problem = problem::generate(self.tier, None, rng);
        let (mode, choices) = if rng.chance(CHOICE_MODE_CHANCE) {
            let set = choices::generate_choices(&problem, rng);
            (RoundMode::Choice, Some(set))
        } else {
            (RoundMode::Input, None)
        };
        self.round = Some(Round {
            token: RoundToken(self.round_seq),
            mode,
            problem,
            choices,
        });
    }

    fn register_correct(&mut self, rng: &mut GameRng) -> Resolution {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            // terminal: the guard stays set so late signals stay dead
            self.phase = BattlePhase::Victory;
            self.round = None;
            return Resolution::Victory {
                bonus_points: victory_bonus(self.tier),
            };
        }
        self.next_round(rng);
        self.resolving = false;
        Resolution::Correct {
            attempts_remaining: self.attempts_remaining,
        }
    }

    fn register_damage(&mut self, damage: u32, rng: &mut GameRng) -> Resolution {
        self.health = self.health.saturating_sub(damage);
        if self.health == 0 {
            self.phase = BattlePhase::Defeat;
            self.round = None;
            return Resolution::Defeat;
        }
        // health damage does not consume an attempt
        self.next_round(rng);
        self.resolving = false;
        Resolution::Damaged {
            health: self.health,
        }
    }

    fn register_wrong_input(&mut self) -> Resolution {
        self.health = self.health.saturating_sub(WRONG_INPUT_DAMAGE);
        if self.health == 0 {
            self.phase = BattlePhase::Defeat;
            self.round = None;
            return Resolution::Defeat;
        }
        self.resolving = false;
        Resolution::Retry {
            health: self.health,
        }
    }
}

/// Victory bonus awarded to the external score accumulator.
pub fn victory_bonus(tier: Tier) -> u32 {
    VICTORY_BASE_BONUS
        + match tier {
            Tier::Beginner => 0,
            Tier::Intermediate => 15,
            Tier::Advanced => 30,
        }
}
