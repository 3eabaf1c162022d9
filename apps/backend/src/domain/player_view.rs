//! Player view of game state: what a seat is allowed to see.
//!
//! Three layers live here:
//!
//! - [`RawObservation`]: the engine's per-seat view before any session
//!   policy is applied. Own cards are hidden, other hands are visible.
//! - [`PlayerObservation`]: the payload broadcast to a seat, built from a raw
//!   observation plus the event log and then shaped by the knowledge
//!   redactor ([`crate::domain::redaction`]).
//! - [`AgentObservation`] / [`FullObservation`]: what automated policies and
//!   the recorder consume.
//!
//! Hands and knowledge are listed relative to the observer: index 0 is the
//! observer, index 1 the next seat, and so on around the table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Color, SlotKnowledge};
use super::moves::Move;

/// Cards successfully played per color, `0..=ranks`.
pub type Fireworks = BTreeMap<Color, u8>;

/// Engine view for one seat.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub observer: usize,
    pub current_player: usize,
    pub current_player_offset: usize,
    pub deck_size: usize,
    pub discard_pile: Vec<Card>,
    pub fireworks: Fireworks,
    pub information_tokens: u8,
    pub life_tokens: u8,
    /// Empty unless the observer is the current player.
    pub legal_moves: Vec<Move>,
    pub legal_moves_as_int: Vec<usize>,
    /// `None` marks a card the observer cannot see (their own).
    pub observed_hands: Vec<Vec<Option<Card>>>,
    pub card_knowledge: Vec<Vec<SlotKnowledge>>,
    pub num_players: usize,
}

/// One accepted move and the seat that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    #[serde(rename = "move")]
    pub mv: Move,
    pub player_index: usize,
}

/// Per-seat payload handed to the broadcast channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerObservation {
    pub current_player: usize,
    pub current_player_offset: usize,
    pub deck_size: usize,
    /// `None` when the discard pile is hidden from players. An empty list
    /// means visible but empty (or truncated to zero entries).
    pub discard_pile: Option<Vec<Card>>,
    pub fireworks: Fireworks,
    pub information_tokens: u8,
    pub life_tokens: u8,
    pub legal_moves: Vec<Move>,
    pub legal_moves_as_int: Vec<usize>,
    pub observed_hands: Vec<Vec<Option<Card>>>,
    pub card_knowledge: Vec<Vec<SlotKnowledge>>,
    pub num_players: usize,
    pub event_log: Vec<EventLogEntry>,
}

impl PlayerObservation {
    /// Unredacted payload: whole discard pile, whole log, full knowledge.
    pub fn from_raw(raw: &RawObservation, event_log: Vec<EventLogEntry>) -> Self {
        Self {
            current_player: raw.current_player,
            current_player_offset: raw.current_player_offset,
            deck_size: raw.deck_size,
            discard_pile: Some(raw.discard_pile.clone()),
            fireworks: raw.fireworks.clone(),
            information_tokens: raw.information_tokens,
            life_tokens: raw.life_tokens,
            legal_moves: raw.legal_moves.clone(),
            legal_moves_as_int: raw.legal_moves_as_int.clone(),
            observed_hands: raw.observed_hands.clone(),
            card_knowledge: raw.card_knowledge.clone(),
            num_players: raw.num_players,
            event_log,
        }
    }

    pub fn is_my_turn(&self) -> bool {
        self.current_player_offset == 0
    }

    /// Knowledge about the observer's own slots.
    pub fn own_knowledge(&self) -> &[SlotKnowledge] {
        self.card_knowledge.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// What an automated policy receives.
///
/// `raw` is the engine handle. It is never serialized, so records and
/// broadcasts cannot leak it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentObservation {
    #[serde(flatten)]
    pub observation: PlayerObservation,
    pub vectorized: Vec<u8>,
    #[serde(skip)]
    pub raw: RawObservation,
}

impl AgentObservation {
    pub fn legal_moves(&self) -> &[Move] {
        &self.observation.legal_moves
    }
}

/// Every seat's view at one instant, as stored in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullObservation {
    pub current_player: usize,
    pub player_observations: Vec<AgentObservation>,
}

/// [`FullObservation`] with engine handles and feature vectors removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyweightObservation {
    pub current_player: usize,
    pub player_observations: Vec<PlayerObservation>,
}

impl FullObservation {
    pub fn lighten(&self) -> FlyweightObservation {
        FlyweightObservation {
            current_player: self.current_player,
            player_observations: self
                .player_observations
                .iter()
                .map(|agent| agent.observation.clone())
                .collect(),
        }
    }

    /// Feature vector of each seat, in seat order.
    pub fn vectorized(&self) -> Vec<Vec<u8>> {
        self.player_observations
            .iter()
            .map(|agent| agent.vectorized.clone())
            .collect()
    }
}
