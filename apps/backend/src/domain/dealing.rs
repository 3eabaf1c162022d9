//! Deck construction and shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Color};

/// Copies of each rank in one color: three of the lowest, one of the top,
/// two of everything between. A single-rank game keeps three copies.
pub fn copies_of_rank(rank: u8, ranks: usize) -> usize {
    if rank == 0 {
        3
    } else if usize::from(rank) + 1 == ranks {
        1
    } else {
        2
    }
}

/// Unshuffled deck, grouped by color then rank.
pub fn full_deck(colors: usize, ranks: usize) -> Vec<Card> {
    let mut deck = Vec::with_capacity(deck_size(colors, ranks));
    for color in Color::ALL.into_iter().take(colors) {
        for rank in 0..ranks as u8 {
            for _ in 0..copies_of_rank(rank, ranks) {
                deck.push(Card::new(color, rank));
            }
        }
    }
    deck
}

pub fn deck_size(colors: usize, ranks: usize) -> usize {
    colors * (0..ranks as u8).map(|r| copies_of_rank(r, ranks)).sum::<usize>()
}

/// Full deck in random order. The caller owns the RNG so seeding stays in
/// one place.
pub fn shuffled_deck<R: Rng + ?Sized>(colors: usize, ranks: usize, rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck(colors, ranks);
    deck.shuffle(rng);
    deck
}
