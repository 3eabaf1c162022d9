use std::time::Duration;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

use super::mutation::Actor;
use super::GameSession;
use crate::ai::{AiError, AiPlayer, Pacing};
use crate::error::AppError;

/// The policy and pacing assigned to one seat at construction.
pub struct SeatPolicy {
    pub player: Box<dyn AiPlayer>,
    pub pacing: Pacing,
}

/// Decides who acts next and keeps automated turns single-file.
///
/// `running` is held for the whole act-then-apply loop. A trigger that finds
/// it held returns at once; it never waits.
pub struct TurnScheduler {
    seats: Vec<SeatPolicy>,
    running: tokio::sync::Mutex<()>,
    rng: Mutex<ChaCha8Rng>,
    max_illegal_moves: u32,
}

impl TurnScheduler {
    pub fn new(seats: Vec<SeatPolicy>, pacing_seed: Option<u64>, max_illegal_moves: u32) -> Self {
        let rng = match pacing_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            seats,
            running: tokio::sync::Mutex::new(()),
            rng: Mutex::new(rng),
            max_illegal_moves: max_illegal_moves.max(1),
        }
    }

    pub fn num_seats(&self) -> usize {
        self.seats.len()
    }

    /// Unknown seats count as human so nothing is ever asked of them.
    pub fn is_human(&self, seat: usize) -> bool {
        self.seats.get(seat).map_or(true, |s| s.player.is_human())
    }

    pub fn delay_for(&self, seat: usize) -> Duration {
        match self.seats.get(seat) {
            Some(s) => s.pacing.sample(&mut *self.rng.lock()),
            None => Duration::ZERO,
        }
    }

    /// Whether an automated-turn loop currently holds the guard.
    pub fn is_running(&self) -> bool {
        self.running.try_lock().is_err()
    }
}

impl GameSession {
    /// Let automated seats move until a human is next or the game ends.
    ///
    /// Returns the number of moves applied by this call; `0` when another
    /// call was already running the loop.
    ///
    /// An illegal proposal is logged and discarded and the same seat is asked
    /// again. After `max_illegal_agent_moves` unusable proposals in a row the
    /// session gives up with [`AppError::AgentStalled`].
    pub async fn process_automated_turns(&self) -> Result<usize, AppError> {
        let Ok(_running) = self.scheduler.running.try_lock() else {
            debug!(session_id = %self.id, "automated turns already running; trigger dropped");
            return Ok(0);
        };

        let mut applied = 0usize;
        let mut failures = 0u32;
        loop {
            let (seat, observation) = {
                let state = self.state.read();
                if state.orchestrator.is_terminal() {
                    break;
                }
                let seat = state.orchestrator.current_player();
                if self.scheduler.is_human(seat) {
                    debug!(session_id = %self.id, seat, "human seat is up; automated turns paused");
                    break;
                }
                (seat, state.orchestrator.agent_observation(seat))
            };

            let Some(policy) = self.scheduler.seats.get(seat) else {
                return Err(AppError::internal(format!("no policy for seat {seat}")));
            };
            let proposal = match policy.player.choose_move(&observation) {
                Ok(mv) => Some(mv),
                Err(AiError::HumanSeat) => {
                    error!(session_id = %self.id, seat, "scheduler asked a human seat to act");
                    return Err(AppError::HumanActorInvoked { seat });
                }
                Err(e) => {
                    warn!(session_id = %self.id, seat, error = %e, "automated seat produced no move");
                    None
                }
            };

            if let Some(mv) = proposal {
                let delay = self.scheduler.delay_for(seat);
                debug!(
                    session_id = %self.id,
                    seat,
                    mv = %mv,
                    delay_ms = delay.as_millis() as u64,
                    "automated move chosen"
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                match self.apply_and_publish(Actor::Automated(seat), mv) {
                    Ok(accepted) => {
                        info!(
                            session_id = %self.id,
                            seat,
                            player = policy.player.name(),
                            mv = %accepted.mv,
                            "automated move applied"
                        );
                        applied += 1;
                        failures = 0;
                        continue;
                    }
                    Err(e) if !e.is_fatal() => {
                        warn!(session_id = %self.id, seat, mv = %mv, error = %e, "discarding illegal automated move");
                    }
                    Err(e) => return Err(e),
                }
            }

            failures += 1;
            if failures >= self.scheduler.max_illegal_moves {
                error!(
                    session_id = %self.id,
                    seat,
                    attempts = failures,
                    "automated seat stalled; aborting session"
                );
                return Err(AppError::AgentStalled {
                    seat,
                    attempts: failures,
                });
            }
        }

        Ok(applied)
    }
}
