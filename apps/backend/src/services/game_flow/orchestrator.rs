//! Exclusive owner of game state for one session.
//!
//! Every mutation goes through [`Orchestrator::make_move`], which resolves
//! the targeted card, applies the move through the rules engine and appends
//! the record, in that order. Turn order is read from the engine.

use tracing::{debug, info};

use crate::domain::engine::{EndOfGameStatus, RulesEngine};
use crate::domain::player_view::{
    AgentObservation, EventLogEntry, FullObservation, PlayerObservation,
};
use crate::domain::Move;
use crate::error::AppError;
use crate::services::recording::Recorder;

/// A move the engine accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptedMove {
    pub player: usize,
    /// With `played_card` filled in for Play/Discard.
    pub mv: Move,
    pub reward: f64,
    pub status: EndOfGameStatus,
}

pub struct Orchestrator {
    engine: Box<dyn RulesEngine>,
    seat_labels: Vec<String>,
    event_log: Vec<EventLogEntry>,
    recorder: Recorder,
}

impl Orchestrator {
    /// Takes over a freshly dealt engine and records the sentinel.
    pub fn new(engine: Box<dyn RulesEngine>, seat_labels: Vec<String>) -> Result<Self, AppError> {
        if seat_labels.len() != engine.num_players() {
            return Err(AppError::config(format!(
                "{} seat labels for {} players",
                seat_labels.len(),
                engine.num_players()
            )));
        }
        let mut orchestrator = Self {
            engine,
            seat_labels,
            event_log: Vec::new(),
            recorder: Recorder::new(),
        };
        let initial = orchestrator.full_observation();
        orchestrator.recorder.add_initial_record(initial);
        Ok(orchestrator)
    }

    pub fn num_players(&self) -> usize {
        self.engine.num_players()
    }

    pub fn current_player(&self) -> usize {
        self.engine.current_player()
    }

    pub fn seat_label(&self, seat: usize) -> &str {
        self.seat_labels.get(seat).map(String::as_str).unwrap_or("")
    }

    /// Apply a move for the current player.
    ///
    /// An illegal move leaves state, event log and records untouched and comes
    /// back as [`AppError::IllegalMove`].
    pub fn make_move(&mut self, mv: Move) -> Result<AcceptedMove, AppError> {
        let player = self.engine.current_player();
        let resolved = self.resolve_target_card(player, mv.sanitized());
        let outcome = self.engine.apply_move(&resolved)?;

        self.event_log.push(EventLogEntry {
            mv: resolved,
            player_index: player,
        });
        let snapshot = self.full_observation();
        let label = self.seat_label(player).to_string();
        self.recorder.add_record(
            player as i32,
            label,
            Some(resolved),
            Some(outcome.reward),
            snapshot,
        );

        debug!(player, mv = %resolved, reward = outcome.reward, "move applied");
        if outcome.status != EndOfGameStatus::NotFinished {
            info!(
                status = ?outcome.status,
                score = self.engine.score(),
                moves = self.event_log.len(),
                "game finished"
            );
        }

        Ok(AcceptedMove {
            player,
            mv: resolved,
            reward: outcome.reward,
            status: outcome.status,
        })
    }

    /// Capture the identity of the card a Play/Discard targets.
    ///
    /// The actor cannot see their own hand, so the card is read from the next
    /// seat's view, where the actor sits at `current_player_offset`. This must
    /// run before the move is applied: afterwards the card has left the slot.
    fn resolve_target_card(&self, actor: usize, mv: Move) -> Move {
        let Some(index) = mv.card_index() else {
            return mv;
        };
        let next = (actor + 1) % self.num_players();
        let view = self.engine.observation(next);
        let card = view
            .observed_hands
            .get(view.current_player_offset)
            .and_then(|hand| hand.get(index))
            .copied()
            .flatten();
        match card {
            Some(card) => mv.with_played_card(card),
            None => mv,
        }
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.engine.legal_moves()
    }

    /// Unredacted view for one seat, with the whole event log.
    pub fn observation(&self, player: usize) -> PlayerObservation {
        let raw = self.engine.observation(player);
        PlayerObservation::from_raw(&raw, self.event_log.clone())
    }

    /// [`Self::observation`] plus feature vector and engine handle.
    pub fn agent_observation(&self, player: usize) -> AgentObservation {
        let raw = self.engine.observation(player);
        AgentObservation {
            observation: PlayerObservation::from_raw(&raw, self.event_log.clone()),
            vectorized: self.engine.encode(&raw),
            raw,
        }
    }

    pub fn full_observation(&self) -> FullObservation {
        FullObservation {
            current_player: self.engine.current_player(),
            player_observations: (0..self.num_players())
                .map(|seat| self.agent_observation(seat))
                .collect(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.engine.is_terminal()
    }

    /// Final score, `None` while the game is running.
    pub fn score(&self) -> Option<u32> {
        self.engine.is_terminal().then(|| self.engine.score())
    }

    pub fn game_end_status(&self) -> EndOfGameStatus {
        self.engine.end_of_game_status()
    }

    pub fn max_score(&self) -> u32 {
        self.engine.config().max_score()
    }

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::domain::rules::HanabiEngine;
    use crate::domain::Card;

    fn cards(list: &[&str]) -> Vec<Card> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn scripted(hand_size: usize, deck: &[&str]) -> Orchestrator {
        let cfg = GameConfig {
            hand_size,
            ..GameConfig::default()
        };
        let engine = HanabiEngine::from_deck(cfg, cards(deck)).unwrap();
        Orchestrator::new(Box::new(engine), vec!["human".into(), "random".into()]).unwrap()
    }

    #[test]
    fn starts_with_sentinel_only() {
        let orch = scripted(2, &["R1", "G1", "B1", "W1", "Y1"]);
        assert_eq!(orch.recorder().len(), 1);
        assert!(orch.recorder().records()[0].is_sentinel());
        assert!(orch.event_log().is_empty());
        assert_eq!(orch.score(), None);
    }

    #[test]
    fn play_captures_card_identity() {
        let mut orch = scripted(2, &["R1", "G3", "B1", "W1", "Y1"]);
        let accepted = orch.make_move(Move::play(1)).unwrap();
        assert_eq!(accepted.player, 0);
        assert_eq!(accepted.mv.played_card(), Some("G3".parse().unwrap()));
        assert_eq!(orch.event_log()[0].mv, accepted.mv);
        let record = &orch.recorder().records()[1];
        assert_eq!(record.player, 0);
        assert_eq!(record.player_type, "human");
        assert_eq!(record.mv, Some(accepted.mv));
    }

    #[test]
    fn injected_card_identity_is_ignored() {
        let mut orch = scripted(2, &["R1", "G3", "B1", "W1", "Y1"]);
        let forged = Move::play(0).with_played_card("B5".parse().unwrap());
        let accepted = orch.make_move(forged).unwrap();
        assert_eq!(accepted.mv.played_card(), Some("R1".parse().unwrap()));
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut orch = scripted(2, &["R1", "G3", "B1", "W1", "Y1"]);
        let before = orch.full_observation();
        let err = orch.make_move(Move::discard(0)).unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(orch.full_observation(), before);
        assert_eq!(orch.recorder().len(), 1);
    }

    #[test]
    fn labels_must_match_seats() {
        let engine = HanabiEngine::new(GameConfig::default().with_seed(1)).unwrap();
        assert!(Orchestrator::new(Box::new(engine), vec!["human".into()]).is_err());
    }
}
