pub mod env;
pub mod game;
pub mod research;

pub use env::{load_settings, SessionSettings};
pub use game::GameConfig;
pub use research::{KnowledgeMode, ResearchConfig, TimingConfig};
