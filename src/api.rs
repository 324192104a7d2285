//! JS-facing wrapper. The browser shell constructs one `MathCat` per
//! session, forwards player commands with `performance.now()` timestamps and
//! drains the buffered events as JSON after every call.

use wasm_bindgen::prelude::*;

use crate::choices::Position;
use crate::game::Game;
use crate::log::log_line;
use crate::problem::Tier;
use crate::rng::GameRng;
use crate::storage::MemoryStorage;

#[wasm_bindgen]
pub struct MathCat {
    game: Game,
}

#[wasm_bindgen]
impl MathCat {
    /// Builds a session for the named tier. An optional seed makes problem
    /// generation reproducible (used by the demo pages and tests).
    #[wasm_bindgen(constructor)]
    pub fn new(tier: &str, seed: Option<u32>) -> Result<MathCat, JsValue> {
        let tier: Tier = tier
            .parse()
            .map_err(|err| JsValue::from_str(&format!("{err}")))?;
        let rng = match seed {
            Some(seed) => GameRng::seeded(seed as u64),
            None => GameRng::from_entropy(),
        };
        let mut game = Game::new(tier, rng, Box::new(MemoryStorage::default()));
        game.start();
        Ok(MathCat { game })
    }

    /// Submits raw answer text. Non-numeric input counts as incorrect.
    pub fn submit_answer(&mut self, input: &str, now_ms: f64) {
        self.game.submit_answer_text(input, now_ms);
    }

    /// Catches a falling value in choice mode: "high", "middle" or "low".
    pub fn select_choice(&mut self, position: &str, now_ms: f64) {
        match Position::parse(position) {
            Some(position) => self.game.select_choice(position, now_ms),
            None => log_line(&format!("ignoring unknown catch position '{position}'")),
        }
    }

    /// Drains due pacing timers (round timeouts).
    pub fn tick(&mut self, now_ms: f64) {
        self.game.tick(now_ms);
    }

    /// Deadline of the earliest pending timer, if any, so the shell knows
    /// when to call `tick` next.
    pub fn next_deadline(&self) -> Option<f64> {
        self.game.next_deadline()
    }

    pub fn end_game(&mut self) {
        let _ = self.game.end_game();
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn level(&self) -> u32 {
        self.game.level()
    }

    pub fn streak(&self) -> u32 {
        self.game.streak()
    }

    pub fn in_battle(&self) -> bool {
        self.game.in_battle()
    }

    /// Buffered presentation events as a JSON array string.
    pub fn drain_events(&mut self) -> String {
        serde_json::to_string(&self.game.drain_events()).unwrap_or_else(|_| String::from("[]"))
    }
}
