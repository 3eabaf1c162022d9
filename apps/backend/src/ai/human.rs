//! Placeholder policy for seats played by people.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::AgentObservation;
use crate::domain::Move;

/// Occupies a human seat. Moves for it arrive from outside the session, so
/// asking it for one is a bug and always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanSeat;

impl HumanSeat {
    pub const NAME: &'static str = "HumanPlayer";
}

impl AiPlayer for HumanSeat {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_human(&self) -> bool {
        true
    }

    fn choose_move(&self, _observation: &AgentObservation) -> Result<Move, AiError> {
        Err(AiError::HumanSeat)
    }
}
