//! RNG seed derivation for reproducible sessions.
//!
//! One game seed feeds every random source in a session (deck order, start
//! seat, automated seats, pacing). Each source gets its own derived seed so
//! that adding randomness in one place does not shift another.

/// Seed for the deck shuffle and start-seat draw.
pub fn derive_deck_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_add(1)
}

/// Seed for the automated policy sitting at `seat`.
///
/// Seats at the same table never share a seed.
pub fn derive_agent_seed(game_seed: u64, seat: usize) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(1_000_003))
        .wrapping_add(2)
}

/// Seed for the response-time sampler.
pub fn derive_pacing_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_mul(31).wrapping_add(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_seeds_are_stable_and_distinct() {
        let base = 12345u64;
        assert_eq!(derive_agent_seed(base, 2), derive_agent_seed(base, 2));

        let seeds: Vec<u64> = (0..5).map(|seat| derive_agent_seed(base, seat)).collect();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a, b, "seats must not share a seed");
            }
        }
    }

    #[test]
    fn sources_do_not_collide() {
        let base = 777u64;
        let deck = derive_deck_seed(base);
        assert_ne!(deck, derive_pacing_seed(base));
        for seat in 0..5 {
            assert_ne!(deck, derive_agent_seed(base, seat));
        }
    }

    #[test]
    fn extreme_seeds_wrap() {
        let _ = derive_deck_seed(u64::MAX);
        let _ = derive_agent_seed(u64::MAX, 4);
        let _ = derive_pacing_seed(u64::MAX);
    }
}
