//! Error types.
//!
//! Every error is raised before the first turn of a match executes: once a
//! deck is built and the engine config validated, turn transitions cannot
//! fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by deck building, engine setup and trial batches.
#[derive(Debug, Error)]
pub enum SimError {
    /// A deck names a card the catalog does not contain.
    #[error("deck '{deck}' references unknown card '{card}'")]
    InvalidCardReference { deck: String, card: String },

    /// Empty deck, non-positive trial count, bad catalog stats or engine limits.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A deck file could not be read or parsed.
    #[error("failed to load deck file {path}: {reason}")]
    DeckFile { path: PathBuf, reason: String },

    /// Results could not be written as JSON.
    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
