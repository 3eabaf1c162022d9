//! The seam between the session and the game rules.
//!
//! Session code only talks to [`RulesEngine`]. Turn order, legality and
//! scoring all live behind it, so the session reads the current player from
//! the engine instead of tracking it.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::moves::Move;
use crate::domain::player_view::RawObservation;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndOfGameStatus {
    NotFinished,
    OutOfLifeTokens,
    OutOfCards,
    CompletedFireworks,
}

/// Result of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Change in score caused by the move.
    pub reward: f64,
    pub status: EndOfGameStatus,
}

pub trait RulesEngine: Send + Sync {
    fn config(&self) -> &GameConfig;

    fn num_players(&self) -> usize {
        self.config().players
    }

    fn current_player(&self) -> usize;

    /// Legal moves for the current player, empty once the game is over.
    fn legal_moves(&self) -> Vec<Move>;

    /// Dense integer code of a move, `None` if it is out of range for the
    /// config.
    fn move_uid(&self, mv: &Move) -> Option<usize>;

    /// Apply a move for the current player. On error nothing changes.
    fn apply_move(&mut self, mv: &Move) -> Result<StepOutcome, DomainError>;

    fn end_of_game_status(&self) -> EndOfGameStatus;

    fn is_terminal(&self) -> bool {
        self.end_of_game_status() != EndOfGameStatus::NotFinished
    }

    fn score(&self) -> u32;

    fn observation(&self, player: usize) -> RawObservation;

    /// Feature vector of an observation. Length depends only on the config.
    fn encode(&self, observation: &RawObservation) -> Vec<u8>;
}
