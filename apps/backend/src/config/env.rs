//! Session settings from `HANABI_*` environment variables.
//!
//! Every variable is optional. The seat count comes from the player list,
//! and `HANABI_SEED=-1` asks for OS randomness.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::game::GameConfig;
use super::research::{KnowledgeMode, ResearchConfig, TimingConfig};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub game: GameConfig,
    pub research: ResearchConfig,
}

pub fn load_settings() -> Result<SessionSettings, AppError> {
    let game_defaults = GameConfig::default();
    let research_defaults = ResearchConfig::default();

    let player_list = match env::var("HANABI_PLAYERS") {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => research_defaults.player_list.clone(),
    };

    let seed: i64 = parse_var("HANABI_SEED", -1)?;
    let seed = match seed {
        -1 => None,
        s if s < -1 => {
            return Err(AppError::config(format!(
                "HANABI_SEED must be -1 or a non-negative integer, got {s}"
            )))
        }
        s => Some(s as u64),
    };

    let game = GameConfig {
        players: player_list.len(),
        colors: parse_var("HANABI_COLORS", game_defaults.colors)?,
        ranks: parse_var("HANABI_RANKS", game_defaults.ranks)?,
        hand_size: parse_var("HANABI_HAND_SIZE", game_defaults.hand_size)?,
        max_information_tokens: parse_var(
            "HANABI_MAX_INFORMATION_TOKENS",
            game_defaults.max_information_tokens,
        )?,
        max_life_tokens: parse_var("HANABI_MAX_LIFE_TOKENS", game_defaults.max_life_tokens)?,
        seed,
        random_start_player: flag_var(
            "HANABI_RANDOM_START_PLAYER",
            game_defaults.random_start_player,
        )?,
    };

    let timing_defaults = TimingConfig::default();
    let research = ResearchConfig {
        record_file: env::var("HANABI_RECORD_FILE")
            .map(PathBuf::from)
            .unwrap_or(research_defaults.record_file),
        player_list,
        timing: TimingConfig {
            mean: parse_var("HANABI_MEAN", timing_defaults.mean)?,
            standard_deviation: parse_var("HANABI_STD", timing_defaults.standard_deviation)?,
            minimum_response_time: parse_var(
                "HANABI_MIN_RESPONSE_TIME",
                timing_defaults.minimum_response_time,
            )?,
        },
        knowledge: parse_var::<KnowledgeMode>("HANABI_KNOWLEDGE", research_defaults.knowledge)?,
        only_show_last_n_discards: parse_var(
            "HANABI_ONLY_SHOW_LAST_N_DISCARDS",
            research_defaults.only_show_last_n_discards,
        )?,
        only_show_last_n_events: parse_var(
            "HANABI_ONLY_SHOW_LAST_N_EVENTS",
            research_defaults.only_show_last_n_events,
        )?,
        disable_discard_pile: flag_var(
            "HANABI_DISABLE_DISCARD_PILE",
            research_defaults.disable_discard_pile,
        )?,
        max_illegal_agent_moves: parse_var(
            "HANABI_MAX_ILLEGAL_AGENT_MOVES",
            research_defaults.max_illegal_agent_moves,
        )?,
    };

    game.validate()?;
    research.validate()?;
    Ok(SessionSettings { game, research })
}

/// Parse a variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{name}: cannot parse '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

/// Unset falls back to `default`. Empty, `0`, `false` and `no` are off;
/// `1`, `true` and `yes` are on.
fn flag_var(name: &str, default: bool) -> Result<bool, AppError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => Err(AppError::config(format!(
                "{name}: expected a boolean, got '{other}'"
            ))),
        },
        Err(_) => Ok(default),
    }
}
