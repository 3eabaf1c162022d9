use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::game::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::AppError;

/// How much of their own hand a player is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeMode {
    /// Everything the player was ever told.
    Full,
    /// Only hints received since the player's own last move.
    Diff,
}

impl FromStr for KnowledgeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(KnowledgeMode::Full),
            "diff" => Ok(KnowledgeMode::Diff),
            other => Err(AppError::config(format!(
                "knowledge mode must be 'full' or 'diff', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for KnowledgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeMode::Full => write!(f, "full"),
            KnowledgeMode::Diff => write!(f, "diff"),
        }
    }
}

/// Response-time distribution for automated seats, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub mean: f64,
    pub standard_deviation: f64,
    pub minimum_response_time: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mean: 2.0,
            standard_deviation: 1.0,
            minimum_response_time: 1.0,
        }
    }
}

impl TimingConfig {
    /// Automated seats move without delay.
    pub const IMMEDIATE: TimingConfig = TimingConfig {
        mean: 0.0,
        standard_deviation: 0.0,
        minimum_response_time: 0.0,
    };

    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("mean", self.mean),
            ("standard_deviation", self.standard_deviation),
            ("minimum_response_time", self.minimum_response_time),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AppError::config(format!("timing {name} must be finite")));
            }
        }
        if self.standard_deviation < 0.0 {
            return Err(AppError::config("timing standard_deviation must be >= 0"));
        }
        if self.minimum_response_time < 0.0 {
            return Err(AppError::config("timing minimum_response_time must be >= 0"));
        }
        Ok(())
    }
}

/// Session parameters that shape what players see and what gets recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchConfig {
    pub record_file: PathBuf,
    /// Registry names, one per seat.
    pub player_list: Vec<String>,
    pub timing: TimingConfig,
    pub knowledge: KnowledgeMode,
    /// -1 shows the whole pile.
    pub only_show_last_n_discards: i32,
    /// -1 shows the whole log.
    pub only_show_last_n_events: i32,
    pub disable_discard_pile: bool,
    /// Consecutive unusable proposals from one automated seat before the
    /// session aborts.
    pub max_illegal_agent_moves: u32,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            record_file: PathBuf::from("records.csv"),
            player_list: vec!["human".to_string(), "random".to_string()],
            timing: TimingConfig::default(),
            knowledge: KnowledgeMode::Full,
            only_show_last_n_discards: -1,
            only_show_last_n_events: -1,
            disable_discard_pile: false,
            max_illegal_agent_moves: 3,
        }
    }
}

impl ResearchConfig {
    pub fn with_players<S: Into<String>>(mut self, players: impl IntoIterator<Item = S>) -> Self {
        self.player_list = players.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_record_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.record_file = path.into();
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_knowledge(mut self, knowledge: KnowledgeMode) -> Self {
        self.knowledge = knowledge;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_list.len()) {
            return Err(AppError::config(format!(
                "player list must name between {MIN_PLAYERS} and {MAX_PLAYERS} seats, got {}",
                self.player_list.len()
            )));
        }
        if self.only_show_last_n_discards < -1 {
            return Err(AppError::config(
                "only_show_last_n_discards must be -1 or a non-negative count",
            ));
        }
        if self.only_show_last_n_events < -1 {
            return Err(AppError::config(
                "only_show_last_n_events must be -1 or a non-negative count",
            ));
        }
        if self.max_illegal_agent_moves < 1 {
            return Err(AppError::config("max_illegal_agent_moves must be at least 1"));
        }
        if self.record_file.as_os_str().is_empty() {
            return Err(AppError::config("record_file must not be empty"));
        }
        self.timing.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ResearchConfig::default().validate().unwrap();
    }

    #[test]
    fn windows_below_minus_one_are_rejected() {
        let mut cfg = ResearchConfig::default();
        cfg.only_show_last_n_discards = -2;
        assert!(cfg.validate().is_err());

        let mut cfg = ResearchConfig::default();
        cfg.only_show_last_n_events = -5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_spread_is_rejected() {
        let cfg = ResearchConfig::default().with_timing(TimingConfig {
            standard_deviation: -1.0,
            ..TimingConfig::default()
        });
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn knowledge_mode_parses() {
        assert_eq!("DIFF".parse::<KnowledgeMode>().unwrap(), KnowledgeMode::Diff);
        assert!("partial".parse::<KnowledgeMode>().is_err());
    }
}
