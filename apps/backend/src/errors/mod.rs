//! Error handling for the session backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, IllegalMoveKind};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
