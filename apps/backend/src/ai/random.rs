//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline automated seat: it picks uniformly from
//! the legal moves in its observation. Seeded instances are reproducible.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::AgentObservation;
use crate::domain::Move;

pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_move(&self, observation: &AgentObservation) -> Result<Move, AiError> {
        let legal = observation.legal_moves();
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal moves available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random move".into()))
    }
}
