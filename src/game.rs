//! The game context object: one explicit value owning the RNG, progression,
//! the optional battle, the timer queue, storage and the event buffer. All
//! state transitions are driven by discrete commands (an answer, a catch, a
//! timer draining through `tick`) and run to completion.

use crate::battle::{Battle, Resolution, RoundToken};
use crate::choices::Position;
use crate::event::GameEvent;
use crate::log::log_line;
use crate::problem::{self, DifficultyProfile, Problem, Tier};
use crate::progression::{AnswerOutcome, Progression, SessionSnapshot};
use crate::rng::GameRng;
use crate::schedule::{Command, TimerQueue, TimerToken};
use crate::storage::{PersistedData, Storage};
use crate::validate;

pub struct Game {
    tier: Tier,
    rng: GameRng,
    progression: Progression,
    battle: Option<Battle>,
    timers: TimerQueue,
    round_timer: Option<TimerToken>,
    storage: Box<dyn Storage>,
    events: Vec<GameEvent>,
    current_problem: Option<Problem>,
    ended: bool,
}

impl Game {
    pub fn new(tier: Tier, rng: GameRng, storage: Box<dyn Storage>) -> Self {
        Self {
            tier,
            rng,
            progression: Progression::new(tier),
            battle: None,
            timers: TimerQueue::new(),
            round_timer: None,
            storage,
            events: Vec::new(),
            current_problem: None,
            ended: false,
        }
    }

    /// Resets all counters and puts the first problem on the table.
    pub fn start(&mut self) {
        self.progression = Progression::new(self.tier);
        self.battle = None;
        self.timers.clear();
        self.round_timer = None;
        self.ended = false;
        self.next_problem();
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn streak(&self) -> u32 {
        self.progression.streak()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        self.current_problem.as_ref()
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }

    /// Earliest pending timer deadline, for the embedder's `tick` scheduling.
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Submits a numeric answer. Routed to the battle's input round while the
    /// minigame is running, otherwise to the main progression loop.
    pub fn submit_answer(&mut self, value: f64, now_ms: f64) {
        if self.ended {
            return;
        }
        if self.battle.is_some() {
            self.submit_battle_input(value, now_ms);
            return;
        }
        let Some(problem) = self.current_problem.clone() else {
            return;
        };
        if !self.progression.is_active() {
            return;
        }

        let correct = validate::validate(value, problem.answer, 0.0);
        self.emit(GameEvent::AnswerResolved {
            correct,
            correct_answer: problem.answer,
        });
        let outcome = self.progression.record_answer(problem.operation, correct);
        self.emit(GameEvent::ScoreChanged {
            score: self.progression.score(),
        });
        match outcome {
            AnswerOutcome::Continue => self.next_problem(),
            AnswerOutcome::LevelComplete => {
                self.current_problem = None;
                self.emit(GameEvent::LevelComplete {
                    level: self.progression.level(),
                });
                self.begin_battle(now_ms);
            }
        }
    }

    /// Text entry point for raw keyboard input; anything non-numeric is an
    /// ordinary incorrect answer, never an error.
    pub fn submit_answer_text(&mut self, input: &str, now_ms: f64) {
        let value = match validate::parse_answer(input) {
            Ok(v) => v,
            Err(err) => {
                log_line(&format!("{err}, counting as incorrect"));
                f64::NAN
            }
        };
        self.submit_answer(value, now_ms);
    }

    /// Catches one of the three presented values in a choice-mode round.
    pub fn select_choice(&mut self, position: Position, now_ms: f64) {
        if self.ended {
            return;
        }
        let Some(mut battle) = self.battle.take() else {
            return;
        };
        let resolution = match battle.current_round().map(|r| r.token) {
            Some(token) => battle.select_choice(token, position, &mut self.rng),
            None => Resolution::Ignored,
        };
        self.after_resolution(battle, resolution, now_ms);
    }

    /// Drains due timers. The round-timeout command carries the round token,
    /// so a timer that outlived its round resolves to a no-op.
    pub fn tick(&mut self, now_ms: f64) {
        if self.ended {
            return;
        }
        for (token, command) in self.timers.due(now_ms) {
            match command {
                Command::RoundTimeout => {
                    if let Some(mut battle) = self.battle.take() {
                        let resolution = battle.timeout(RoundToken(token.0), &mut self.rng);
                        self.after_resolution(battle, resolution, now_ms);
                    }
                }
            }
        }
    }

    /// Ends the session: finalizes the snapshot, folds it into persisted
    /// data and saves best-effort.
    pub fn end_game(&mut self) -> SessionSnapshot {
        self.ended = true;
        self.battle = None;
        self.current_problem = None;
        self.timers.clear();
        self.round_timer = None;

        let snapshot = self.progression.finish();
        let mut data = match self.storage.load() {
            Ok(data) => data,
            Err(err) => {
                log_line(&format!("stats load failed, starting fresh: {err}"));
                PersistedData::default()
            }
        };
        if data.absorb(&snapshot) {
            self.emit(GameEvent::NewHighScore {
                tier: snapshot.tier,
                score: snapshot.score,
            });
        }
        if let Err(err) = self.storage.save(&data) {
            log_line(&format!("stats save failed, session stays in memory: {err}"));
        }
        self.emit(GameEvent::SessionEnded {
            snapshot: snapshot.clone(),
        });
        snapshot
    }

    fn submit_battle_input(&mut self, value: f64, now_ms: f64) {
        let Some(mut battle) = self.battle.take() else {
            return;
        };
        let resolution = match battle.current_round().map(|r| r.token) {
            Some(token) => battle.submit_input(token, value, &mut self.rng),
            None => Resolution::Ignored,
        };
        self.after_resolution(battle, resolution, now_ms);
    }

    fn next_problem(&mut self) {
        let problem = problem::generate(self.tier, None, &mut self.rng);
        self.emit(GameEvent::ProblemReady {
            problem: problem.clone(),
        });
        self.current_problem = Some(problem);
    }

    fn begin_battle(&mut self, now_ms: f64) {
        let battle = Battle::start(self.tier, &mut self.rng);
        self.announce_round(&battle, now_ms);
        self.battle = Some(battle);
    }

    fn announce_round(&mut self, battle: &Battle, now_ms: f64) {
        if let Some(token) = self.round_timer.take() {
            self.timers.cancel(token);
        }
        if let Some(round) = battle.current_round() {
            self.emit(GameEvent::MinigameRoundReady {
                mode: round.mode,
                problem: round.problem.clone(),
                choices: round.choices.clone(),
            });
            let budget = DifficultyProfile::for_tier(self.tier).round_time_ms;
            let token = TimerToken(round.token.0);
            self.timers.schedule(now_ms + budget, token, Command::RoundTimeout);
            self.round_timer = Some(token);
        }
    }

    fn after_resolution(&mut self, battle: Battle, resolution: Resolution, now_ms: f64) {
        match resolution {
            Resolution::Ignored => {
                self.battle = Some(battle);
            }
            Resolution::Retry { health } => {
                self.emit(GameEvent::HealthChanged { health });
                self.battle = Some(battle);
            }
            Resolution::Correct { .. } => {
                self.announce_round(&battle, now_ms);
                self.battle = Some(battle);
            }
            Resolution::Damaged { health } => {
                self.emit(GameEvent::HealthChanged { health });
                self.announce_round(&battle, now_ms);
                self.battle = Some(battle);
            }
            Resolution::Victory { bonus_points } => {
                self.cancel_round_timer();
                self.progression.apply_bonus(bonus_points);
                self.emit(GameEvent::Victory { bonus_points });
                self.emit(GameEvent::ScoreChanged {
                    score: self.progression.score(),
                });
                self.finish_battle();
            }
            Resolution::Defeat => {
                self.cancel_round_timer();
                self.emit(GameEvent::Defeat);
                self.finish_battle();
            }
        }
    }

    /// Level advances regardless of the minigame outcome.
    fn finish_battle(&mut self) {
        self.battle = None;
        self.progression.resume_after_minigame();
        self.next_problem();
    }

    fn cancel_round_timer(&mut self) {
        if let Some(token) = self.round_timer.take() {
            self.timers.cancel(token);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
