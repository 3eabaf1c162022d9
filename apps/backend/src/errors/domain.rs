//! Rules-level error type raised by the game engine.
//!
//! Engine code knows nothing about sessions or files. Callers convert into
//! `crate::error::AppError` through the `From<DomainError>` impl.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why the engine refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    GameOver,
    CardIndexOutOfRange,
    InformationTokensFull,
    NoInformationTokens,
    InvalidTarget,
    ValueOutOfRange,
    HintTouchesNothing,
    /// Move submitted for a seat that is not the current player
    OutOfTurn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Move is not legal for the current player in the current state
    IllegalMove(IllegalMoveKind, String),
    /// Engine constructed with parameters it cannot honor
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::IllegalMove(kind, d) => write!(f, "illegal move {kind:?}: {d}"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove(kind, detail.into())
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
