#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod realtime;
pub mod services;

// Re-exports for public API
pub use config::{GameConfig, KnowledgeMode, ResearchConfig, TimingConfig};
pub use domain::{Card, Color, Move};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::game_flow::{build_session, GameSession, MoveOutcome, SessionBuilder};

// Prelude for test convenience
pub mod prelude {
    pub use super::ai::{AiError, AiPlayer, HumanSeat, RandomPlayer};
    pub use super::config::{GameConfig, KnowledgeMode, ResearchConfig, TimingConfig};
    pub use super::domain::engine::{EndOfGameStatus, RulesEngine};
    pub use super::domain::player_view::{
        AgentObservation, EventLogEntry, FullObservation, PlayerObservation,
    };
    pub use super::domain::rules::HanabiEngine;
    pub use super::domain::{Card, Color, Move, SlotKnowledge};
    pub use super::error::AppError;
    pub use super::errors::ErrorCode;
    pub use super::realtime::{ChannelHub, SessionEvent};
    pub use super::services::game_flow::{build_session, GameSession, MoveOutcome};
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
