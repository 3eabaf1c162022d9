//! Standard cooperative fireworks rules.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::domain::dealing::shuffled_deck;
use crate::domain::encoder;
use crate::domain::engine::{EndOfGameStatus, RulesEngine, StepOutcome};
use crate::domain::player_view::RawObservation;
use crate::domain::seed_derivation::derive_deck_seed;
use crate::domain::state::{FullState, HandSlot};
use crate::domain::{Card, Color, Move};
use crate::errors::domain::{DomainError, IllegalMoveKind};

pub struct HanabiEngine {
    config: GameConfig,
    state: FullState,
}

impl HanabiEngine {
    /// Shuffle, deal and pick a start seat from the config's seed.
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        validate(&config)?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(derive_deck_seed(seed)),
            None => ChaCha8Rng::from_os_rng(),
        };
        let draw_order = shuffled_deck(config.colors, config.ranks, &mut rng);
        let start = if config.random_start_player {
            rng.random_range(0..config.players)
        } else {
            0
        };
        Ok(Self::deal(config, draw_order, start))
    }

    /// Deal from a fixed draw order (first card is drawn first). Seat 0
    /// starts. Used for replays and scripted scenarios.
    pub fn from_deck(config: GameConfig, draw_order: Vec<Card>) -> Result<Self, DomainError> {
        validate(&config)?;
        Ok(Self::deal(config, draw_order, 0))
    }

    fn deal(config: GameConfig, draw_order: Vec<Card>, start: usize) -> Self {
        let mut deck = draw_order;
        deck.reverse();
        let mut state = FullState {
            current_player: start,
            hands: vec![Vec::with_capacity(config.hand_size); config.players],
            deck,
            discard_pile: Vec::new(),
            fireworks: vec![0; config.colors],
            information_tokens: config.max_information_tokens,
            life_tokens: config.max_life_tokens,
            turns_to_play: config.players,
        };
        for player in 0..config.players {
            for _ in 0..config.hand_size {
                if state.draw(player).is_none() {
                    break;
                }
            }
        }
        debug!(
            players = config.players,
            deck_left = state.deck.len(),
            start_player = start,
            "dealt new game"
        );
        Self { config, state }
    }

    pub fn state(&self) -> &FullState {
        &self.state
    }

    /// Why `mv` is not legal for the current player, if it is not.
    pub fn check_legal(&self, mv: &Move) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::illegal(
                IllegalMoveKind::GameOver,
                "game is over",
            ));
        }
        let actor = self.state.current_player;
        let hand_len = self.state.hand(actor).len();
        match *mv {
            Move::Discard { card_index, .. } => {
                if self.state.information_tokens >= self.config.max_information_tokens {
                    return Err(DomainError::illegal(
                        IllegalMoveKind::InformationTokensFull,
                        "cannot discard with all information tokens available",
                    ));
                }
                check_card_index(card_index, hand_len)
            }
            Move::Play { card_index, .. } => check_card_index(card_index, hand_len),
            Move::RevealColor {
                color,
                target_offset,
            } => {
                if color.index() >= self.config.colors {
                    return Err(DomainError::illegal(
                        IllegalMoveKind::ValueOutOfRange,
                        format!("color {color} not in play"),
                    ));
                }
                let target = self.check_hint_target(target_offset)?;
                if !self.state.hand(target).iter().any(|s| s.card.color == color) {
                    return Err(DomainError::illegal(
                        IllegalMoveKind::HintTouchesNothing,
                        format!("player {target} holds no {color} card"),
                    ));
                }
                Ok(())
            }
            Move::RevealRank {
                rank,
                target_offset,
            } => {
                if usize::from(rank) >= self.config.ranks {
                    return Err(DomainError::illegal(
                        IllegalMoveKind::ValueOutOfRange,
                        format!("rank {rank} not in play"),
                    ));
                }
                let target = self.check_hint_target(target_offset)?;
                if !self.state.hand(target).iter().any(|s| s.card.rank == rank) {
                    return Err(DomainError::illegal(
                        IllegalMoveKind::HintTouchesNothing,
                        format!("player {target} holds no card of rank {rank}"),
                    ));
                }
                Ok(())
            }
        }
    }

    fn check_hint_target(&self, target_offset: usize) -> Result<usize, DomainError> {
        if target_offset == 0 || target_offset >= self.config.players {
            return Err(DomainError::illegal(
                IllegalMoveKind::InvalidTarget,
                format!("target offset {target_offset} out of range"),
            ));
        }
        if self.state.information_tokens == 0 {
            return Err(DomainError::illegal(
                IllegalMoveKind::NoInformationTokens,
                "no information tokens left",
            ));
        }
        Ok((self.state.current_player + target_offset) % self.config.players)
    }

    /// Every syntactically valid move, in code order.
    fn candidate_moves(&self) -> Vec<Move> {
        let hand_size = self.config.hand_size;
        let mut moves = Vec::new();
        moves.extend((0..hand_size).map(Move::discard));
        moves.extend((0..hand_size).map(Move::play));
        for offset in 1..self.config.players {
            for color in Color::ALL.into_iter().take(self.config.colors) {
                moves.push(Move::reveal_color(color, offset));
            }
        }
        for offset in 1..self.config.players {
            for rank in 0..self.config.ranks as u8 {
                moves.push(Move::reveal_rank(rank, offset));
            }
        }
        moves
    }
}

fn validate(config: &GameConfig) -> Result<(), DomainError> {
    config
        .validate()
        .map_err(|e| DomainError::validation(e.to_string()))
}

fn check_card_index(card_index: usize, hand_len: usize) -> Result<(), DomainError> {
    if card_index < hand_len {
        Ok(())
    } else {
        Err(DomainError::illegal(
            IllegalMoveKind::CardIndexOutOfRange,
            format!("card index {card_index} but hand holds {hand_len}"),
        ))
    }
}

impl RulesEngine for HanabiEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_player(&self) -> usize {
        self.state.current_player
    }

    fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.candidate_moves()
            .into_iter()
            .filter(|mv| self.check_legal(mv).is_ok())
            .collect()
    }

    fn move_uid(&self, mv: &Move) -> Option<usize> {
        let hand_size = self.config.hand_size;
        let players = self.config.players;
        let colors = self.config.colors;
        let ranks = self.config.ranks;
        match *mv {
            Move::Discard { card_index, .. } if card_index < hand_size => Some(card_index),
            Move::Play { card_index, .. } if card_index < hand_size => {
                Some(hand_size + card_index)
            }
            Move::RevealColor {
                color,
                target_offset,
            } if (1..players).contains(&target_offset) && color.index() < colors => {
                Some(2 * hand_size + (target_offset - 1) * colors + color.index())
            }
            Move::RevealRank {
                rank,
                target_offset,
            } if (1..players).contains(&target_offset) && usize::from(rank) < ranks => Some(
                2 * hand_size
                    + (players - 1) * colors
                    + (target_offset - 1) * ranks
                    + usize::from(rank),
            ),
            _ => None,
        }
    }

    fn apply_move(&mut self, mv: &Move) -> Result<StepOutcome, DomainError> {
        let mv = mv.sanitized();
        self.check_legal(&mv)?;

        let score_before = self.score();
        if self.state.deck.is_empty() {
            self.state.turns_to_play = self.state.turns_to_play.saturating_sub(1);
        }

        let actor = self.state.current_player;
        let players = self.config.players;
        match mv {
            Move::Discard { card_index, .. } => {
                let slot = self.state.hands[actor].remove(card_index);
                self.state.discard_pile.push(slot.card);
                self.state.information_tokens += 1;
                self.state.draw(actor);
            }
            Move::Play { card_index, .. } => {
                let HandSlot { card, .. } = self.state.hands[actor].remove(card_index);
                let level = self.state.firework(card.color);
                if card.rank == level {
                    self.state.fireworks[card.color.index()] = level + 1;
                    let completed = usize::from(level) + 1 == self.config.ranks;
                    if completed
                        && self.state.information_tokens < self.config.max_information_tokens
                    {
                        self.state.information_tokens += 1;
                    }
                } else {
                    self.state.life_tokens = self.state.life_tokens.saturating_sub(1);
                    self.state.discard_pile.push(card);
                }
                self.state.draw(actor);
            }
            Move::RevealColor {
                color,
                target_offset,
            } => {
                self.state.information_tokens -= 1;
                let target = (actor + target_offset) % players;
                for slot in self.state.hands[target]
                    .iter_mut()
                    .filter(|s| s.card.color == color)
                {
                    slot.knowledge.color = Some(color);
                }
            }
            Move::RevealRank {
                rank,
                target_offset,
            } => {
                self.state.information_tokens -= 1;
                let target = (actor + target_offset) % players;
                for slot in self.state.hands[target]
                    .iter_mut()
                    .filter(|s| s.card.rank == rank)
                {
                    slot.knowledge.rank = Some(rank);
                }
            }
        }
        self.state.current_player = (actor + 1) % players;

        let status = self.end_of_game_status();
        Ok(StepOutcome {
            reward: f64::from(self.score()) - f64::from(score_before),
            status,
        })
    }

    fn end_of_game_status(&self) -> EndOfGameStatus {
        if self.state.life_tokens < 1 {
            EndOfGameStatus::OutOfLifeTokens
        } else if self
            .state
            .fireworks
            .iter()
            .all(|&f| usize::from(f) == self.config.ranks)
        {
            EndOfGameStatus::CompletedFireworks
        } else if self.state.turns_to_play == 0 {
            EndOfGameStatus::OutOfCards
        } else {
            EndOfGameStatus::NotFinished
        }
    }

    fn score(&self) -> u32 {
        if self.state.life_tokens < 1 {
            0
        } else {
            self.state.fireworks_total()
        }
    }

    fn observation(&self, player: usize) -> RawObservation {
        let players = self.config.players;
        let current = self.state.current_player;
        let (legal_moves, legal_moves_as_int) = if player == current {
            let moves = self.legal_moves();
            let ints = moves.iter().filter_map(|m| self.move_uid(m)).collect();
            (moves, ints)
        } else {
            (Vec::new(), Vec::new())
        };

        let mut observed_hands = Vec::with_capacity(players);
        let mut card_knowledge = Vec::with_capacity(players);
        for offset in 0..players {
            let hand = self.state.hand((player + offset) % players);
            observed_hands.push(
                hand.iter()
                    .map(|slot| (offset != 0).then_some(slot.card))
                    .collect(),
            );
            card_knowledge.push(hand.iter().map(|slot| slot.knowledge).collect());
        }

        RawObservation {
            observer: player,
            current_player: current,
            current_player_offset: (current + players - player % players) % players,
            deck_size: self.state.deck.len(),
            discard_pile: self.state.discard_pile.clone(),
            fireworks: Color::ALL
                .into_iter()
                .take(self.config.colors)
                .map(|c| (c, self.state.firework(c)))
                .collect(),
            information_tokens: self.state.information_tokens,
            life_tokens: self.state.life_tokens,
            legal_moves,
            legal_moves_as_int,
            observed_hands,
            card_knowledge,
            num_players: players,
        }
    }

    fn encode(&self, observation: &RawObservation) -> Vec<u8> {
        encoder::encode(&self.config, observation)
    }
}
