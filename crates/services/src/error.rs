//! Shared error types for the services crate.

use thiserror::Error;

use geoquiz_core::model::{RoundSummaryError, SettingsError};
use storage::sqlite::SqliteInitError;

/// Errors emitted by the session engine when a command arrives out of sequence.
///
/// The lenient session API swallows these and leaves the round untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for this round")]
    Unavailable,
    #[error("round is already over")]
    RoundOver,
    #[error("round is still in progress")]
    RoundInProgress,
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error(transparent)]
    Summary(#[from] RoundSummaryError),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value: {raw}")]
    InvalidDbUrl { var: &'static str, raw: String },
    #[error("invalid {var} value: {raw}")]
    InvalidQuestionCount { var: &'static str, raw: String },
    #[error("invalid {var} value: {raw}")]
    InvalidSeed { var: &'static str, raw: String },
    #[error("{var} cannot be empty")]
    EmptySlot { var: &'static str },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while bootstrapping persistent services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
