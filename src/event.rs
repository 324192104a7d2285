//! One-way notifications from the core to the presentation layer. The JS UI
//! drains these as JSON; the core never queries presentation state.

use serde::Serialize;

use crate::battle::RoundMode;
use crate::choices::ChoiceSet;
use crate::problem::{Problem, Tier};
use crate::progression::SessionSnapshot;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind")]
pub enum GameEvent {
    ProblemReady {
        problem: Problem,
    },
    AnswerResolved {
        correct: bool,
        correct_answer: i64,
    },
    ScoreChanged {
        score: u32,
    },
    LevelComplete {
        level: u32,
    },
    MinigameRoundReady {
        mode: RoundMode,
        problem: Problem,
        choices: Option<ChoiceSet>,
    },
    HealthChanged {
        health: u32,
    },
    Victory {
        bonus_points: u32,
    },
    Defeat,
    NewHighScore {
        tier: Tier,
        score: u32,
    },
    SessionEnded {
        snapshot: SessionSnapshot,
    },
}

impl GameEvent {
    /// JSON line form for logging on the JS side.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from(r#"{"kind":"Unserializable"}"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_a_kind_tag() {
        let line = GameEvent::ScoreChanged { score: 40 }.to_json_line();
        assert_eq!(line, r#"{"kind":"ScoreChanged","score":40}"#);
        let line = GameEvent::Defeat.to_json_line();
        assert_eq!(line, r#"{"kind":"Defeat"}"#);
    }
}
