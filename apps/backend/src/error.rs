use std::path::PathBuf;

use thiserror::Error;

use crate::errors::domain::{DomainError, IllegalMoveKind};
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Record destination already exists: {}", path.display())]
    DuplicateOutput { path: PathBuf },
    #[error("Unknown actor: {name}")]
    UnknownActor { name: String },
    #[error("Illegal move: {detail}")]
    IllegalMove {
        kind: IllegalMoveKind,
        detail: String,
    },
    #[error("Scheduler invoked the human seat {seat}")]
    HumanActorInvoked { seat: usize },
    #[error("Seat {seat} produced {attempts} unusable moves in a row")]
    AgentStalled { seat: usize, attempts: u32 },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Serialization error: {detail}")]
    Serialization { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::DuplicateOutput { .. } => ErrorCode::DuplicateOutput,
            AppError::UnknownActor { .. } => ErrorCode::UnknownActor,
            AppError::IllegalMove { .. } => ErrorCode::IllegalMove,
            AppError::HumanActorInvoked { .. } => ErrorCode::HumanActorInvoked,
            AppError::AgentStalled { .. } => ErrorCode::AgentStalled,
            AppError::Io { .. } => ErrorCode::IoError,
            AppError::Serialization { .. } => ErrorCode::SerializationError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Errors that must end the session rather than be absorbed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::IllegalMove { .. })
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn duplicate_output(path: impl Into<PathBuf>) -> Self {
        Self::DuplicateOutput { path: path.into() }
    }

    pub fn unknown_actor(name: impl Into<String>) -> Self {
        Self::UnknownActor { name: name.into() }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::IllegalMove(kind, detail) => AppError::IllegalMove { kind, detail },
            DomainError::Validation(detail) => AppError::Config { detail },
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io {
            detail: e.to_string(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Io {
            detail: format!("csv error: {e}"),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization {
            detail: e.to_string(),
        }
    }
}
