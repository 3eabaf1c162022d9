use tracing::{info, warn};

use super::mutation::{Actor, MoveOutcome};
use super::GameSession;
use crate::domain::Move;
use crate::error::AppError;

impl GameSession {
    /// Publish the initial views and let automated seats play until a human
    /// is up or the game ends.
    pub async fn start(&self) -> Result<(), AppError> {
        info!(session_id = %self.id, players = self.num_players(), "session starting");
        self.publish_views();
        self.process_automated_turns().await?;
        Ok(())
    }

    /// Apply a move from the human seat that is currently on turn, then run
    /// automated seats on the same call path.
    ///
    /// Illegal or out-of-turn moves are logged and come back as
    /// [`MoveOutcome::Rejected`]; only fatal errors are returned as `Err`.
    /// The transport must keep at most one call in flight.
    pub async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, AppError> {
        match self.apply_and_publish(Actor::Human, mv) {
            Ok(accepted) => {
                self.process_automated_turns().await?;
                Ok(MoveOutcome::Accepted(accepted))
            }
            Err(e) if !e.is_fatal() => {
                warn!(session_id = %self.id, mv = %mv, error = %e, "rejected human move");
                Ok(MoveOutcome::Rejected {
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Flush records if the game ended without doing so (e.g. the transport
    /// closed early). Returns whether this call wrote the file.
    pub fn shutdown(&self) -> Result<bool, AppError> {
        info!(session_id = %self.id, terminal = self.is_terminal(), "session shutting down");
        self.finish()
    }
}
