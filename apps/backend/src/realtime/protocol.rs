use serde::{Deserialize, Serialize};

use crate::domain::engine::EndOfGameStatus;
use crate::domain::player_view::PlayerObservation;
use crate::domain::Move;

/// Messages a session publishes.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Redacted view for one seat. Published for every seat after each
    /// accepted move.
    GameState {
        player_id: usize,
        observation: PlayerObservation,
    },
    GameEnded {
        reason: EndOfGameStatus,
        score: u32,
        max_score: u32,
    },
}

/// Messages a client sends to the headless runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    Move {
        #[serde(rename = "move")]
        mv: Move,
    },
    Shutdown,
}
