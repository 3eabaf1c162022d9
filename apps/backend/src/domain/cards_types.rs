//! Core card types: Color, Card, SlotKnowledge

use serde::{Deserialize, Serialize};

/// Firework colors. At most five are in play; a game with `colors = k`
/// uses the first `k` variants in declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Blue,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::White,
        Color::Blue,
    ];

    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::White => 3,
            Color::Blue => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Color> {
        Self::ALL.get(index).copied()
    }

    pub const fn as_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Blue => 'B',
        }
    }
}

/// A card. `rank` is zero-based: 0 is the first card played on a firework.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub rank: u8,
}

impl Card {
    pub const fn new(color: Color, rank: u8) -> Self {
        Self { color, rank }
    }
}

/// What a player has been told about one of their own card slots.
///
/// `None` is the "unknown" marker; it serializes as `null` and is never a
/// valid color or rank.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SlotKnowledge {
    pub color: Option<Color>,
    pub rank: Option<u8>,
}

impl SlotKnowledge {
    pub const UNKNOWN: SlotKnowledge = SlotKnowledge {
        color: None,
        rank: None,
    };

    pub fn is_unknown(&self) -> bool {
        self.color.is_none() && self.rank.is_none()
    }
}
