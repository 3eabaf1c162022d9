//! Seat policies - who decides moves for each seat.
//!
//! This module provides:
//! - `AiPlayer` trait for seat policies
//! - `RandomPlayer`: random legal moves (seedable for tests)
//! - `HumanSeat`: marker policy for seats played by people
//! - a static factory registry keyed by player-list name
//! - per-seat response-time pacing

mod human;
pub mod pacing;
mod random;
pub mod registry;
mod trait_def;

pub use human::HumanSeat;
pub use pacing::Pacing;
pub use random::RandomPlayer;
pub use registry::{by_name, create_ai, registered_ais, AiFactory};
pub use trait_def::{AiError, AiPlayer};
