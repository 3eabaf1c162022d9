use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;
pub const MAX_COLORS: usize = 5;
pub const MAX_RANKS: usize = 5;

/// Rules parameters for one game. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: usize,
    pub colors: usize,
    pub ranks: usize,
    pub hand_size: usize,
    pub max_information_tokens: u8,
    pub max_life_tokens: u8,
    /// `None` draws the deck seed from the OS.
    pub seed: Option<u64>,
    pub random_start_player: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 2,
            colors: 5,
            ranks: 5,
            hand_size: 5,
            max_information_tokens: 8,
            max_life_tokens: 3,
            seed: None,
            random_start_player: false,
        }
    }
}

impl GameConfig {
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Highest reachable score: every firework completed.
    pub fn max_score(&self) -> u32 {
        (self.colors * self.ranks) as u32
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.players) {
            return Err(AppError::config(format!(
                "players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
                self.players
            )));
        }
        if !(1..=MAX_COLORS).contains(&self.colors) {
            return Err(AppError::config(format!(
                "colors must be between 1 and {MAX_COLORS}, got {}",
                self.colors
            )));
        }
        if !(1..=MAX_RANKS).contains(&self.ranks) {
            return Err(AppError::config(format!(
                "ranks must be between 1 and {MAX_RANKS}, got {}",
                self.ranks
            )));
        }
        if self.hand_size < 1 {
            return Err(AppError::config("hand_size must be at least 1"));
        }
        if self.max_information_tokens < 1 {
            return Err(AppError::config("max_information_tokens must be at least 1"));
        }
        if self.max_life_tokens < 1 {
            return Err(AppError::config("max_life_tokens must be at least 1"));
        }
        Ok(())
    }
}
