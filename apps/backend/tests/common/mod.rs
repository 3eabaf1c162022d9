#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use backend_test_support::scratch::ScratchRecord;
use hanabi_backend::ai::{AiError, AiPlayer};
use hanabi_backend::config::{GameConfig, ResearchConfig, TimingConfig};
use hanabi_backend::domain::player_view::AgentObservation;
use hanabi_backend::domain::{Card, Move};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Research settings for tests: no pacing, records under `scratch`.
pub fn immediate_research<S: Into<String>>(
    scratch: &ScratchRecord,
    players: impl IntoIterator<Item = S>,
) -> ResearchConfig {
    ResearchConfig::default()
        .with_players(players)
        .with_record_file(scratch.path())
        .with_timing(TimingConfig::IMMEDIATE)
}

/// Parse a whitespace-separated list such as `"R1 Y2 G3"`.
pub fn cards(list: &str) -> Vec<Card> {
    list.split_whitespace()
        .map(|s| s.parse().expect("valid card literal"))
        .collect()
}

/// Two seats, five cards each, standard tokens.
pub fn two_player_game() -> GameConfig {
    GameConfig::default().with_players(2)
}

/// Seat policy that replays a fixed list of moves, then repeats the last one.
pub struct ScriptedPlayer {
    moves: Mutex<VecDeque<Move>>,
    last: Mutex<Option<Move>>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: Mutex::new(moves.into_iter().collect()),
            last: Mutex::new(None),
        }
    }

    /// Always proposes `mv`.
    pub fn repeating(mv: Move) -> Self {
        Self::new([mv])
    }
}

impl AiPlayer for ScriptedPlayer {
    fn name(&self) -> &'static str {
        "ScriptedPlayer"
    }

    fn choose_move(&self, _observation: &AgentObservation) -> Result<Move, AiError> {
        let next = self.moves.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(mv) = next {
            *last = Some(mv);
        }
        last.ok_or_else(|| AiError::InvalidMove("script is empty".into()))
    }
}

/// Claims to be automated but behaves like a human seat when asked.
pub struct ConfusedSeat;

impl AiPlayer for ConfusedSeat {
    fn name(&self) -> &'static str {
        "ConfusedSeat"
    }

    fn choose_move(&self, _observation: &AgentObservation) -> Result<Move, AiError> {
        Err(AiError::HumanSeat)
    }
}
