use serde::Serialize;

use crate::domain::{Card, Color, SlotKnowledge};

/// One card in a hand together with what its holder has been told about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandSlot {
    pub card: Card,
    pub knowledge: SlotKnowledge,
}

impl HandSlot {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            knowledge: SlotKnowledge::UNKNOWN,
        }
    }
}

/// Canonical game state. Owned by the engine; changed one move at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullState {
    pub current_player: usize,
    pub hands: Vec<Vec<HandSlot>>,
    /// Undrawn cards; the next card to draw is at the end.
    pub deck: Vec<Card>,
    pub discard_pile: Vec<Card>,
    /// Indexed by [`Color::index`].
    pub fireworks: Vec<u8>,
    pub information_tokens: u8,
    pub life_tokens: u8,
    /// Moves left once the deck is empty.
    pub turns_to_play: usize,
}

impl FullState {
    pub fn hand(&self, player: usize) -> &[HandSlot] {
        self.hands.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn firework(&self, color: Color) -> u8 {
        self.fireworks.get(color.index()).copied().unwrap_or(0)
    }

    pub fn fireworks_total(&self) -> u32 {
        self.fireworks.iter().map(|&f| u32::from(f)).sum()
    }

    /// Draw the next card into `player`'s hand, if any remain.
    pub fn draw(&mut self, player: usize) -> Option<Card> {
        let card = self.deck.pop()?;
        if let Some(hand) = self.hands.get_mut(player) {
            hand.push(HandSlot::new(card));
        }
        Some(card)
    }
}
