use tracing::{debug, info};

use super::{AcceptedMove, GameSession};
use crate::domain::player_view::EventLogEntry;
use crate::domain::Move;
use crate::error::AppError;
use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::realtime::SessionEvent;

/// What happened to a submitted move.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Accepted(AcceptedMove),
    /// Rejected and discarded; state is unchanged.
    Rejected { reason: String },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Who is submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Actor {
    /// Whichever human seat is current.
    Human,
    Automated(usize),
}

impl GameSession {
    /// Apply one move, update hint buffers, publish views and flush the
    /// records if the game just ended.
    pub(super) fn apply_and_publish(&self, actor: Actor, mv: Move) -> Result<AcceptedMove, AppError> {
        let (accepted, terminal) = {
            let mut state = self.state.write();
            let current = state.orchestrator.current_player();
            let on_turn = match actor {
                Actor::Human => self.scheduler.is_human(current),
                Actor::Automated(seat) => seat == current,
            };
            if !on_turn {
                return Err(DomainError::illegal(
                    IllegalMoveKind::OutOfTurn,
                    format!("seat {current} is not expecting a move from {actor:?}"),
                )
                .into());
            }

            let accepted = state.orchestrator.make_move(mv)?;
            state.redactor.record_move(EventLogEntry {
                mv: accepted.mv,
                player_index: accepted.player,
            });
            (accepted, state.orchestrator.is_terminal())
        };

        self.publish_views();
        if terminal {
            self.finish()?;
        }
        Ok(accepted)
    }

    /// Broadcast every seat's redacted view, then the end payload if the
    /// game is over.
    pub(super) fn publish_views(&self) {
        let events: Vec<SessionEvent> = {
            let state = self.state.read();
            let players = state.orchestrator.num_players();
            let mut events: Vec<SessionEvent> = (0..players)
                .map(|player_id| SessionEvent::GameState {
                    player_id,
                    observation: state.redacted_view(player_id),
                })
                .collect();
            if let Some(score) = state.orchestrator.score() {
                events.push(SessionEvent::GameEnded {
                    reason: state.orchestrator.game_end_status(),
                    score,
                    max_score: state.orchestrator.max_score(),
                });
            }
            events
        };
        debug!(session_id = %self.id, events = events.len(), "publishing views");
        for event in events {
            self.broadcaster.publish(event);
        }
    }

    /// Write the record log once. Returns whether this call wrote it.
    ///
    /// The flag is only set after a successful write, so a failed flush can
    /// be retried by a later call.
    pub(super) fn finish(&self) -> Result<bool, AppError> {
        let mut written_flag = self.records_written.lock();
        if *written_flag {
            return Ok(false);
        }
        let state = self.state.read();
        let written = state
            .orchestrator
            .recorder()
            .write_log(&self.record_file)?;
        *written_flag = true;
        info!(
            session_id = %self.id,
            records = written,
            score = ?state.orchestrator.score(),
            "session records flushed"
        );
        Ok(true)
    }
}
