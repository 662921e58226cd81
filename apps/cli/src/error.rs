//! CLI error types.

use droidworks_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors that end the CLI session.
///
/// Bad menu input is not one of them: the UI re-prompts on its own.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration values parsed but were rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// A catalog operation failed (e.g. an unranked category while sorting).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Standard input reached end of file mid-session.
    #[error("Input closed")]
    InputClosed,

    /// Reading the terminal or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
