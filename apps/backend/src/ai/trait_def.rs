//! Automated-seat trait definition.

use std::fmt;

use crate::domain::player_view::AgentObservation;
use crate::domain::Move;

/// Errors a seat policy can report instead of a move.
#[derive(Debug)]
pub enum AiError {
    /// Policy failed internally (poisoned lock, bad state, ...)
    Internal(String),
    /// Policy found nothing it could play
    InvalidMove(String),
    /// The seat belongs to a person; moves come from the transport
    HumanSeat,
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
            AiError::HumanSeat => write!(f, "human seat cannot be asked for a move"),
        }
    }
}

impl std::error::Error for AiError {}

/// A seat policy: observation in, move out.
///
/// Implementations take `&self` so one instance can sit behind a shared
/// session; keep mutable state (RNGs, statistics) behind a lock.
///
/// The returned move is a proposal. The session validates it against the
/// rules engine and discards it when illegal.
pub trait AiPlayer: Send + Sync {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Human seats are never asked for moves by the scheduler.
    fn is_human(&self) -> bool {
        false
    }

    fn choose_move(&self, observation: &AgentObservation) -> Result<Move, AiError>;
}
