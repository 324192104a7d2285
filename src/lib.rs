//! Math Cat core crate.
//!
//! Procedural arithmetic practice for children: tiered problem generation,
//! answer validation, multiple-choice distractor generation, the
//! score/streak/level progression machine and the bonus battle minigame.
//! Rendering, audio and storage backends live in the JS shell; this crate
//! only emits events and data.

use wasm_bindgen::prelude::*;

mod api;
pub mod battle;
pub mod choices;
pub mod error;
pub mod event;
pub mod game;
mod log;
pub mod problem;
pub mod progression;
pub mod rng;
pub mod schedule;
pub mod storage;
pub mod validate;

pub use api::MathCat;
pub use battle::{Battle, BattlePhase, Resolution, RoundMode};
pub use choices::{ChoiceSet, Position};
pub use error::GameError;
pub use event::GameEvent;
pub use game::Game;
pub use problem::{DifficultyProfile, Operation, Problem, Tier};
pub use progression::{PROBLEMS_PER_LEVEL, Progression, SessionSnapshot};
pub use storage::{MemoryStorage, PersistedData, Storage};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
