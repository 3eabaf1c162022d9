//! Moves a player can make on their turn.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Color};

/// A move as proposed by a player and, once accepted, as recorded.
///
/// Play and Discard name a slot in the actor's own hand. The actor cannot see
/// that card, so `played_card` is empty on proposal and filled in by the
/// orchestrator just before the move is applied. Hints name a target by its
/// offset from the actor (1 is the next player).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    Play {
        card_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        played_card: Option<Card>,
    },
    Discard {
        card_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        played_card: Option<Card>,
    },
    RevealColor {
        color: Color,
        target_offset: usize,
    },
    RevealRank {
        rank: u8,
        target_offset: usize,
    },
}

impl Move {
    pub const fn play(card_index: usize) -> Self {
        Move::Play {
            card_index,
            played_card: None,
        }
    }

    pub const fn discard(card_index: usize) -> Self {
        Move::Discard {
            card_index,
            played_card: None,
        }
    }

    pub const fn reveal_color(color: Color, target_offset: usize) -> Self {
        Move::RevealColor {
            color,
            target_offset,
        }
    }

    pub const fn reveal_rank(rank: u8, target_offset: usize) -> Self {
        Move::RevealRank {
            rank,
            target_offset,
        }
    }

    /// Hand slot for Play/Discard.
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Move::Play { card_index, .. } | Move::Discard { card_index, .. } => Some(*card_index),
            _ => None,
        }
    }

    pub fn played_card(&self) -> Option<Card> {
        match self {
            Move::Play { played_card, .. } | Move::Discard { played_card, .. } => *played_card,
            _ => None,
        }
    }

    /// Same move with the targeted card captured. Hints are returned as-is.
    pub fn with_played_card(self, card: Card) -> Self {
        match self {
            Move::Play { card_index, .. } => Move::Play {
                card_index,
                played_card: Some(card),
            },
            Move::Discard { card_index, .. } => Move::Discard {
                card_index,
                played_card: Some(card),
            },
            hint => hint,
        }
    }

    /// The move as a player could have proposed it (no card identity).
    pub fn sanitized(self) -> Self {
        match self {
            Move::Play { card_index, .. } => Move::play(card_index),
            Move::Discard { card_index, .. } => Move::discard(card_index),
            hint => hint,
        }
    }

    pub fn is_hint(&self) -> bool {
        matches!(self, Move::RevealColor { .. } | Move::RevealRank { .. })
    }

    /// Absolute seat a hint is aimed at, given the acting seat.
    pub fn target_player(&self, actor: usize, num_players: usize) -> Option<usize> {
        match self {
            Move::RevealColor { target_offset, .. } | Move::RevealRank { target_offset, .. }
                if num_players > 0 =>
            {
                Some((actor + target_offset) % num_players)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play {
                card_index,
                played_card: Some(card),
            } => write!(f, "play {card_index} ({card})"),
            Move::Play { card_index, .. } => write!(f, "play {card_index}"),
            Move::Discard {
                card_index,
                played_card: Some(card),
            } => write!(f, "discard {card_index} ({card})"),
            Move::Discard { card_index, .. } => write!(f, "discard {card_index}"),
            Move::RevealColor {
                color,
                target_offset,
            } => write!(f, "reveal color {color} to +{target_offset}"),
            Move::RevealRank {
                rank,
                target_offset,
            } => write!(f, "reveal rank {} to +{target_offset}", u16::from(*rank) + 1),
        }
    }
}
