//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod encoder;
pub mod engine;
pub mod moves;
pub mod player_view;
pub mod redaction;
pub mod rules;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod tests_props_rules;

// Re-exports for ergonomics
pub use cards_types::{Card, Color, SlotKnowledge};
pub use moves::Move;
