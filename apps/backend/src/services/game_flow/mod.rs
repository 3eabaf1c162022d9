//! Game session service: one table, its seats and its history.
//!
//! [`GameSession`] ties together the orchestrator (canonical state), the
//! knowledge redactor (per-seat views), the turn scheduler (automated seats)
//! and the outbound broadcaster. The service is split by concern:
//!
//! - `orchestrator`: state ownership and move application
//! - `mutation`: apply + publish + end-of-game flush
//! - `player_actions`: entry points for human seats
//! - `ai_coordinator`: the automated-turn loop and its guard
//! - `builder`: construction and validation

mod ai_coordinator;
mod builder;
mod mutation;
pub mod orchestrator;
mod player_actions;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

pub use ai_coordinator::{SeatPolicy, TurnScheduler};
pub use builder::{build_session, SessionBuilder};
pub use mutation::MoveOutcome;
pub use orchestrator::{AcceptedMove, Orchestrator};

use crate::domain::engine::EndOfGameStatus;
use crate::domain::player_view::{EventLogEntry, FullObservation, PlayerObservation};
use crate::domain::redaction::KnowledgeRedactor;
use crate::realtime::Broadcaster;
use crate::services::recording::Record;

/// Everything a move touches, behind one lock.
pub(crate) struct SessionState {
    pub(crate) orchestrator: Orchestrator,
    pub(crate) redactor: KnowledgeRedactor,
}

impl SessionState {
    fn redacted_view(&self, viewer: usize) -> PlayerObservation {
        self.redactor
            .redact(viewer, self.orchestrator.observation(viewer))
    }
}

pub struct GameSession {
    id: Uuid,
    state: RwLock<SessionState>,
    scheduler: TurnScheduler,
    broadcaster: Arc<dyn Broadcaster>,
    record_file: PathBuf,
    /// Held across the write so concurrent flushes cannot both run.
    records_written: Mutex<bool>,
}

impl GameSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn num_players(&self) -> usize {
        self.state.read().orchestrator.num_players()
    }

    pub fn current_player(&self) -> usize {
        self.state.read().orchestrator.current_player()
    }

    pub fn seat_is_human(&self, seat: usize) -> bool {
        self.scheduler.is_human(seat)
    }

    /// Redacted view for `viewer`, exactly as it is broadcast.
    pub fn observation_for(&self, viewer: usize) -> Option<PlayerObservation> {
        let state = self.state.read();
        (viewer < state.orchestrator.num_players()).then(|| state.redacted_view(viewer))
    }

    pub fn full_observation(&self) -> FullObservation {
        self.state.read().orchestrator.full_observation()
    }

    pub fn legal_moves(&self) -> Vec<crate::domain::Move> {
        self.state.read().orchestrator.legal_moves()
    }

    pub fn event_log(&self) -> Vec<EventLogEntry> {
        self.state.read().orchestrator.event_log().to_vec()
    }

    /// Moves by other seats since `seat` last moved.
    pub fn hint_buffer(&self, seat: usize) -> Vec<EventLogEntry> {
        self.state.read().redactor.hint_buffer(seat).to_vec()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.read().orchestrator.is_terminal()
    }

    /// Final score, `None` while the game is running.
    pub fn score(&self) -> Option<u32> {
        self.state.read().orchestrator.score()
    }

    pub fn game_end_status(&self) -> EndOfGameStatus {
        self.state.read().orchestrator.game_end_status()
    }

    pub fn max_score(&self) -> u32 {
        self.state.read().orchestrator.max_score()
    }

    pub fn records(&self) -> Vec<Record> {
        self.state.read().orchestrator.recorder().records().to_vec()
    }

    pub fn record_count(&self) -> usize {
        self.state.read().orchestrator.recorder().len()
    }

    pub fn record_file(&self) -> &Path {
        &self.record_file
    }
}
