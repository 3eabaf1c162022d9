//! Property-based tests for the rules engine under random legal play.

use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::domain::dealing::deck_size;
use crate::domain::engine::{EndOfGameStatus, RulesEngine};
use crate::domain::rules::HanabiEngine;

/// Configs whose opening deal fills every hand.
fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (2usize..=5, 1usize..=5, 1usize..=5, 1usize..=5, any::<u64>())
        .prop_map(|(players, colors, ranks, hand_size, seed)| GameConfig {
            players,
            colors,
            ranks,
            hand_size,
            seed: Some(seed),
            ..GameConfig::default()
        })
        .prop_filter("deck must cover the opening deal", |c| {
            deck_size(c.colors, c.ranks) >= c.players * c.hand_size
        })
}

fn cards_in_play(engine: &HanabiEngine) -> usize {
    let state = engine.state();
    let in_hands: usize = state.hands.iter().map(Vec::len).sum();
    let on_fireworks = state.fireworks_total() as usize;
    in_hands + state.deck.len() + state.discard_pile.len() + on_fireworks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: random legal play always ends, never loses a card and keeps
    /// tokens inside their bounds.
    #[test]
    fn prop_random_play_preserves_invariants(config in config_strategy(), pick_seed in any::<u64>()) {
        let mut engine = HanabiEngine::new(config.clone()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(pick_seed);
        let total = deck_size(config.colors, config.ranks);
        let max_uid = 2 * config.hand_size
            + (config.players - 1) * (config.colors + config.ranks);

        prop_assert_eq!(cards_in_play(&engine), total);

        let mut steps = 0;
        while !engine.is_terminal() {
            let legal = engine.legal_moves();
            prop_assert!(!legal.is_empty(), "a live game always offers a move");
            for mv in &legal {
                let uid = engine.move_uid(mv);
                prop_assert!(uid.is_some_and(|u| u < max_uid), "uid out of range for {:?}", mv);
            }

            let mv = *legal.choose(&mut rng).unwrap();
            let before = engine.score();
            let outcome = engine.apply_move(&mv).unwrap();
            prop_assert_eq!(outcome.reward, f64::from(engine.score()) - f64::from(before));

            let state = engine.state();
            prop_assert!(state.information_tokens <= config.max_information_tokens);
            prop_assert!(state.life_tokens <= config.max_life_tokens);
            prop_assert_eq!(cards_in_play(&engine), total);

            steps += 1;
            prop_assert!(steps <= 10_000, "game failed to end");
        }

        prop_assert_ne!(engine.end_of_game_status(), EndOfGameStatus::NotFinished);
        prop_assert!(engine.legal_moves().is_empty());
        prop_assert!(engine.score() <= config.max_score());
    }

    /// Property: the same seed deals the same game.
    #[test]
    fn prop_seeded_deal_is_reproducible(config in config_strategy()) {
        let a = HanabiEngine::new(config.clone()).unwrap();
        let b = HanabiEngine::new(config).unwrap();
        prop_assert_eq!(a.state(), b.state());
    }
}
