use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use super::ai_coordinator::{SeatPolicy, TurnScheduler};
use super::{GameSession, Orchestrator, SessionState};
use crate::ai::{create_ai, AiPlayer, Pacing};
use crate::config::{GameConfig, ResearchConfig};
use crate::domain::engine::RulesEngine;
use crate::domain::redaction::{KnowledgeRedactor, VisibilityPolicy};
use crate::domain::rules::HanabiEngine;
use crate::domain::seed_derivation::{derive_agent_seed, derive_pacing_seed};
use crate::error::AppError;
use crate::realtime::{Broadcaster, NullBroadcaster};

/// Builder for [`GameSession`] (used in both tests and main).
///
/// Seats come from `research.player_list` through the registry unless
/// policies are injected with [`Self::with_players`]. The seat count follows
/// whichever source is used; a game config passed in explicitly must agree
/// with it.
pub struct SessionBuilder {
    game: Option<GameConfig>,
    research: ResearchConfig,
    players: Option<Vec<Box<dyn AiPlayer>>>,
    engine: Option<Box<dyn RulesEngine>>,
    broadcaster: Option<Arc<dyn Broadcaster>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            game: None,
            research: ResearchConfig::default(),
            players: None,
            engine: None,
            broadcaster: None,
        }
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = Some(game);
        self
    }

    pub fn with_research(mut self, research: ResearchConfig) -> Self {
        self.research = research;
        self
    }

    pub fn with_players(mut self, players: Vec<Box<dyn AiPlayer>>) -> Self {
        self.players = Some(players);
        self
    }

    /// Use a pre-dealt engine instead of dealing from `game`.
    pub fn with_engine(mut self, engine: Box<dyn RulesEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_broadcaster(mut self, broadcaster: Arc<dyn Broadcaster>) -> Self {
        self.broadcaster = Some(broadcaster);
        self
    }

    pub fn build(self) -> Result<GameSession, AppError> {
        let research = self.research;
        research.validate()?;
        if research.record_file.exists() {
            return Err(AppError::duplicate_output(&research.record_file));
        }

        let (mut game, explicit) = match (&self.engine, self.game) {
            (Some(engine), _) => (engine.config().clone(), Some("engine")),
            (None, Some(game)) => (game, Some("game config")),
            (None, None) => (GameConfig::default(), None),
        };
        let seed = game.seed;

        let players = match self.players {
            Some(players) => players,
            None => research
                .player_list
                .iter()
                .enumerate()
                .map(|(seat, name)| create_ai(name, seed.map(|s| derive_agent_seed(s, seat))))
                .collect::<Result<Vec<_>, _>>()?,
        };
        if let Some(source) = explicit {
            if players.len() != game.players {
                return Err(AppError::config(format!(
                    "{} seat policies for a {}-player {source}",
                    players.len(),
                    game.players
                )));
            }
        }
        game.players = players.len();
        game.validate()?;

        let engine: Box<dyn RulesEngine> = match self.engine {
            Some(engine) => engine,
            None => Box::new(HanabiEngine::new(game.clone())?),
        };

        let seats = players
            .into_iter()
            .map(|player| {
                let pacing = Pacing::for_seat(player.is_human(), &research.timing)?;
                Ok(SeatPolicy { player, pacing })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        let labels: Vec<String> = seats.iter().map(|s| s.player.name().to_string()).collect();

        let policy = VisibilityPolicy::from_research(&research)?;
        let orchestrator = Orchestrator::new(engine, labels.clone())?;
        let redactor = KnowledgeRedactor::new(policy, game.players);
        let scheduler = TurnScheduler::new(
            seats,
            seed.map(derive_pacing_seed),
            research.max_illegal_agent_moves,
        );

        let id = Uuid::new_v4();
        info!(
            session_id = %id,
            seats = ?labels,
            knowledge = %research.knowledge,
            record_file = %research.record_file.display(),
            "session created"
        );

        Ok(GameSession {
            id,
            state: RwLock::new(SessionState {
                orchestrator,
                redactor,
            }),
            scheduler,
            broadcaster: self
                .broadcaster
                .unwrap_or_else(|| Arc::new(NullBroadcaster)),
            record_file: research.record_file,
            records_written: Mutex::new(false),
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_session() -> SessionBuilder {
    SessionBuilder::new()
}
