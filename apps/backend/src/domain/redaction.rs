//! Knowledge redaction: shaping a seat's observation per the session's
//! visibility policy.
//!
//! In diff mode a player only sees the hints they received since their own
//! last move. [`HintBuffers`] keeps, per seat, the moves other seats made
//! since that seat last acted; a fact about one of the viewer's own slots is
//! shown only if a matching hint aimed at the viewer sits in that buffer.
//! Other hands are always visible.

use crate::config::{KnowledgeMode, ResearchConfig};
use crate::domain::player_view::{EventLogEntry, PlayerObservation};
use crate::domain::{Move, SlotKnowledge};
use crate::error::AppError;

/// How many trailing entries of a list a player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Unlimited,
    Last(usize),
}

impl Window {
    /// `-1` is unlimited, `n >= 0` keeps the last `n`.
    pub fn from_setting(n: i32) -> Result<Self, AppError> {
        match n {
            -1 => Ok(Window::Unlimited),
            n if n >= 0 => Ok(Window::Last(n as usize)),
            n => Err(AppError::config(format!(
                "window must be -1 or a non-negative count, got {n}"
            ))),
        }
    }

    /// Trailing slice in original order. `Last(0)` yields an empty list.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match *self {
            Window::Unlimited => items.to_vec(),
            Window::Last(n) => items[items.len().saturating_sub(n)..].to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPolicy {
    pub knowledge: KnowledgeMode,
    pub discards: Window,
    pub events: Window,
    /// Replaces the pile with the "unavailable" marker. Distinct from
    /// `discards: Window::Last(0)`, which shows an empty pile.
    pub discard_pile_disabled: bool,
}

impl VisibilityPolicy {
    /// No redaction at all.
    pub const FULL: VisibilityPolicy = VisibilityPolicy {
        knowledge: KnowledgeMode::Full,
        discards: Window::Unlimited,
        events: Window::Unlimited,
        discard_pile_disabled: false,
    };

    pub fn from_research(research: &ResearchConfig) -> Result<Self, AppError> {
        Ok(Self {
            knowledge: research.knowledge,
            discards: Window::from_setting(research.only_show_last_n_discards)?,
            events: Window::from_setting(research.only_show_last_n_events)?,
            discard_pile_disabled: research.disable_discard_pile,
        })
    }
}

/// Per seat: moves by other seats since that seat's own last move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintBuffers {
    per_player: Vec<Vec<EventLogEntry>>,
}

impl HintBuffers {
    pub fn new(num_players: usize) -> Self {
        Self {
            per_player: vec![Vec::new(); num_players],
        }
    }

    /// Clear the actor's buffer and append the move to everyone else's.
    pub fn record(&mut self, entry: EventLogEntry) {
        for (seat, buffer) in self.per_player.iter_mut().enumerate() {
            if seat == entry.player_index {
                buffer.clear();
            } else {
                buffer.push(entry);
            }
        }
    }

    pub fn for_player(&self, seat: usize) -> &[EventLogEntry] {
        self.per_player.get(seat).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone)]
pub struct KnowledgeRedactor {
    policy: VisibilityPolicy,
    buffers: HintBuffers,
}

impl KnowledgeRedactor {
    pub fn new(policy: VisibilityPolicy, num_players: usize) -> Self {
        Self {
            policy,
            buffers: HintBuffers::new(num_players),
        }
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    /// Call once per accepted move, in acceptance order.
    pub fn record_move(&mut self, entry: EventLogEntry) {
        self.buffers.record(entry);
    }

    pub fn hint_buffer(&self, seat: usize) -> &[EventLogEntry] {
        self.buffers.for_player(seat)
    }

    pub fn redact(&self, viewer: usize, mut obs: PlayerObservation) -> PlayerObservation {
        obs.discard_pile = if self.policy.discard_pile_disabled {
            None
        } else {
            obs.discard_pile.map(|pile| self.policy.discards.apply(&pile))
        };
        obs.event_log = self.policy.events.apply(&obs.event_log);

        if self.policy.knowledge == KnowledgeMode::Diff {
            let players = obs.num_players;
            if let Some(own) = obs.card_knowledge.first_mut() {
                for slot in own.iter_mut() {
                    *slot = SlotKnowledge {
                        color: slot
                            .color
                            .filter(|&c| self.was_told(viewer, players, |mv| {
                                matches!(mv, Move::RevealColor { color, .. } if color == c)
                            })),
                        rank: slot
                            .rank
                            .filter(|&r| self.was_told(viewer, players, |mv| {
                                matches!(mv, Move::RevealRank { rank, .. } if rank == r)
                            })),
                    };
                }
            }
        }
        obs
    }

    /// A hint matching `names` and aimed at `viewer` is in the viewer's buffer.
    fn was_told(&self, viewer: usize, players: usize, names: impl Fn(Move) -> bool) -> bool {
        self.buffers.for_player(viewer).iter().any(|entry| {
            names(entry.mv) && entry.mv.target_player(entry.player_index, players) == Some(viewer)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Card, Color};

    fn entry(mv: Move, player_index: usize) -> EventLogEntry {
        EventLogEntry { mv, player_index }
    }

    fn observation(pile: Vec<Card>, knowledge: Vec<Vec<SlotKnowledge>>) -> PlayerObservation {
        PlayerObservation {
            current_player: 0,
            current_player_offset: 0,
            deck_size: 10,
            discard_pile: Some(pile),
            fireworks: BTreeMap::new(),
            information_tokens: 8,
            life_tokens: 3,
            legal_moves: Vec::new(),
            legal_moves_as_int: Vec::new(),
            observed_hands: Vec::new(),
            num_players: knowledge.len(),
            card_knowledge: knowledge,
            event_log: Vec::new(),
        }
    }

    fn known(color: Color, rank: u8) -> SlotKnowledge {
        SlotKnowledge {
            color: Some(color),
            rank: Some(rank),
        }
    }

    #[test]
    fn window_keeps_tail_in_order() {
        let pile = [1, 2, 3, 4, 5];
        assert_eq!(Window::Last(2).apply(&pile), vec![4, 5]);
        assert_eq!(Window::Last(0).apply(&pile), Vec::<i32>::new());
        assert_eq!(Window::Last(9).apply(&pile), pile.to_vec());
        assert_eq!(Window::Unlimited.apply(&pile), pile.to_vec());
        assert!(Window::from_setting(-2).is_err());
    }

    #[test]
    fn empty_window_differs_from_disabled_pile() {
        let pile = vec![Card::new(Color::Red, 0), Card::new(Color::Blue, 1)];

        let truncated = KnowledgeRedactor::new(
            VisibilityPolicy {
                discards: Window::Last(0),
                ..VisibilityPolicy::FULL
            },
            2,
        );
        let obs = truncated.redact(0, observation(pile.clone(), vec![vec![], vec![]]));
        assert_eq!(obs.discard_pile, Some(Vec::new()));

        let disabled = KnowledgeRedactor::new(
            VisibilityPolicy {
                discard_pile_disabled: true,
                ..VisibilityPolicy::FULL
            },
            2,
        );
        let obs = disabled.redact(0, observation(pile, vec![vec![], vec![]]));
        assert_eq!(obs.discard_pile, None);
        assert_eq!(serde_json::to_value(&obs).unwrap()["discard_pile"], serde_json::Value::Null);
    }

    #[test]
    fn buffer_clears_on_own_move() {
        let mut buffers = HintBuffers::new(3);
        buffers.record(entry(Move::reveal_rank(1, 1), 0));
        buffers.record(entry(Move::play(0), 1));
        assert!(buffers.for_player(1).is_empty());
        assert_eq!(buffers.for_player(0).len(), 1);
        assert_eq!(buffers.for_player(2).len(), 2);
    }

    #[test]
    fn full_mode_passes_knowledge_through() {
        let redactor = KnowledgeRedactor::new(VisibilityPolicy::FULL, 2);
        let knowledge = vec![vec![known(Color::Red, 0)], vec![known(Color::Green, 2)]];
        let obs = redactor.redact(0, observation(vec![], knowledge.clone()));
        assert_eq!(obs.card_knowledge, knowledge);
    }

    #[test]
    fn diff_mode_with_empty_buffer_hides_own_hand_only() {
        let policy = VisibilityPolicy {
            knowledge: KnowledgeMode::Diff,
            ..VisibilityPolicy::FULL
        };
        let redactor = KnowledgeRedactor::new(policy, 2);
        let knowledge = vec![vec![known(Color::Red, 0)], vec![known(Color::Green, 2)]];
        let obs = redactor.redact(0, observation(vec![], knowledge));
        assert_eq!(obs.card_knowledge[0], vec![SlotKnowledge::UNKNOWN]);
        assert_eq!(obs.card_knowledge[1], vec![known(Color::Green, 2)]);
    }

    #[test]
    fn diff_mode_ignores_hints_aimed_elsewhere() {
        let policy = VisibilityPolicy {
            knowledge: KnowledgeMode::Diff,
            ..VisibilityPolicy::FULL
        };
        let mut redactor = KnowledgeRedactor::new(policy, 3);
        // seat 0 tells seat 2 about red; seat 1 must not learn its own red
        redactor.record_move(entry(Move::reveal_color(Color::Red, 2), 0));
        let knowledge = vec![vec![known(Color::Red, 0)], vec![], vec![]];
        let obs = redactor.redact(1, observation(vec![], knowledge));
        assert_eq!(obs.card_knowledge[0], vec![SlotKnowledge::UNKNOWN]);

        redactor.record_move(entry(Move::reveal_color(Color::Red, 1), 0));
        let knowledge = vec![vec![known(Color::Red, 0)], vec![], vec![]];
        let obs = redactor.redact(1, observation(vec![], knowledge));
        assert_eq!(
            obs.card_knowledge[0],
            vec![SlotKnowledge {
                color: Some(Color::Red),
                rank: None
            }]
        );
    }
}
