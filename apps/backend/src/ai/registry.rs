//! How to register a seat policy
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry below with a stable `key` (the name used in
//!    player lists) plus the type's `NAME` and `VERSION`.
//! 3) Keep constructors free of side effects; same seed, same behavior.

use crate::ai::{AiPlayer, HumanSeat, RandomPlayer};
use crate::error::AppError;

/// Factory definition for constructing seat policies.
pub struct AiFactory {
    /// Name used in player lists, e.g. `"random"`.
    pub key: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        key: "human",
        name: HumanSeat::NAME,
        version: "1.0.0",
        make: make_human_seat,
    },
    AiFactory {
        key: "random",
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a factory by player-list key or by type name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.key.eq_ignore_ascii_case(name) || factory.name == name)
}

/// Build the policy registered under `name`.
pub fn create_ai(name: &str, seed: Option<u64>) -> Result<Box<dyn AiPlayer>, AppError> {
    by_name(name)
        .map(|factory| (factory.make)(seed))
        .ok_or_else(|| AppError::unknown_actor(name))
}

fn make_human_seat(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HumanSeat)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}
