//! Errors raised by platform collaborators (storage, audio)
//!
//! The simulation itself never fails; these only ever reach `Game`, which logs
//! and carries on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("platform service unavailable")]
    Unavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt stored value: {0:?}")]
    Corrupt(String),

    #[error("platform call failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, PlatformError>;
