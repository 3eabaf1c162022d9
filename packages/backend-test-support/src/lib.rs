//! Session test support utilities
//!
//! Shared by the backend's unit and integration tests: one-shot logging
//! initialization and scratch locations for record files.

pub mod logging;
pub mod scratch;
