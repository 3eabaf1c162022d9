//! Error codes for the session backend.
//!
//! Every failure the session reports carries one of these codes. They are
//! SCREAMING_SNAKE_CASE and appear verbatim in logs and in the runner's
//! error output. Add new codes here; never pass ad-hoc strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction
    /// Game or research parameters out of range
    ConfigError,
    /// Record destination already exists
    DuplicateOutput,
    /// Player list names an actor that is not registered
    UnknownActor,

    // Play
    /// Move rejected by the rules engine
    IllegalMove,
    /// Scheduler asked a human seat for a move
    HumanActorInvoked,
    /// Automated seat kept proposing unusable moves
    AgentStalled,

    // Persistence
    /// Filesystem or CSV failure while writing records
    IoError,
    /// JSON encoding failure
    SerializationError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigError => "CONFIG_ERROR",
            Self::DuplicateOutput => "DUPLICATE_OUTPUT",
            Self::UnknownActor => "UNKNOWN_ACTOR",
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::HumanActorInvoked => "HUMAN_ACTOR_INVOKED",
            Self::AgentStalled => "AGENT_STALLED",
            Self::IoError => "IO_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
