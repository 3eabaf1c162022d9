//! Fixed-length 0/1 feature vectors for automated policies.
//!
//! Layout, in order:
//! 1. other players' hands: per seat offset 1.., per slot, one-hot card
//!    (`colors * ranks` bits, all zero for an empty slot)
//! 2. one bit per seat offset set when that hand is short of `hand_size`
//! 3. deck size thermometer (`deck_size(colors, ranks)` bits)
//! 4. fireworks: per color, one-hot of the current height (zero when empty)
//! 5. information then life token thermometers
//! 6. discard pile: per color and rank, a thermometer of copies discarded
//! 7. hinted knowledge: per seat offset 0.., per slot, one-hot color then
//!    one-hot rank (zero where unknown)

use crate::config::GameConfig;
use crate::domain::dealing::{copies_of_rank, deck_size};
use crate::domain::player_view::RawObservation;
use crate::domain::Color;

pub fn encoding_length(config: &GameConfig) -> usize {
    let card_bits = config.colors * config.ranks;
    let deck_bits = deck_size(config.colors, config.ranks);
    (config.players - 1) * config.hand_size * card_bits
        + config.players
        + deck_bits
        + card_bits
        + usize::from(config.max_information_tokens)
        + usize::from(config.max_life_tokens)
        + deck_bits
        + config.players * config.hand_size * (config.colors + config.ranks)
}

pub fn encode(config: &GameConfig, obs: &RawObservation) -> Vec<u8> {
    let colors = config.colors;
    let ranks = config.ranks;
    let card_bits = colors * ranks;
    let mut out = Vec::with_capacity(encoding_length(config));

    for offset in 1..config.players {
        let hand = obs.observed_hands.get(offset);
        for slot in 0..config.hand_size {
            let mut bits = vec![0u8; card_bits];
            if let Some(Some(card)) = hand.and_then(|h| h.get(slot)) {
                bits[card.color.index() * ranks + usize::from(card.rank)] = 1;
            }
            out.extend(bits);
        }
    }

    for offset in 0..config.players {
        let held = obs.observed_hands.get(offset).map_or(0, Vec::len);
        out.push(u8::from(held < config.hand_size));
    }

    thermometer(&mut out, obs.deck_size, deck_size(colors, ranks));

    for color in Color::ALL.into_iter().take(colors) {
        let height = obs.fireworks.get(&color).copied().unwrap_or(0);
        let mut bits = vec![0u8; ranks];
        if height > 0 {
            bits[usize::from(height) - 1] = 1;
        }
        out.extend(bits);
    }

    thermometer(
        &mut out,
        usize::from(obs.information_tokens),
        usize::from(config.max_information_tokens),
    );
    thermometer(
        &mut out,
        usize::from(obs.life_tokens),
        usize::from(config.max_life_tokens),
    );

    for color in Color::ALL.into_iter().take(colors) {
        for rank in 0..ranks as u8 {
            let discarded = obs
                .discard_pile
                .iter()
                .filter(|c| c.color == color && c.rank == rank)
                .count();
            thermometer(&mut out, discarded, copies_of_rank(rank, ranks));
        }
    }

    for offset in 0..config.players {
        let knowledge = obs.card_knowledge.get(offset);
        for slot in 0..config.hand_size {
            let fact = knowledge.and_then(|k| k.get(slot)).copied().unwrap_or_default();
            let mut color_bits = vec![0u8; colors];
            if let Some(color) = fact.color {
                color_bits[color.index()] = 1;
            }
            let mut rank_bits = vec![0u8; ranks];
            if let Some(rank) = fact.rank {
                rank_bits[usize::from(rank)] = 1;
            }
            out.extend(color_bits);
            out.extend(rank_bits);
        }
    }

    out
}

/// `value` ones followed by zeros, `width` bits total.
fn thermometer(out: &mut Vec<u8>, value: usize, width: usize) {
    let on = value.min(width);
    out.extend(std::iter::repeat(1u8).take(on));
    out.extend(std::iter::repeat(0u8).take(width - on));
}
