//! Error types for the corgi-hex CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown command or wrong number of arguments.
    #[error("{0}")]
    Usage(String),

    /// An argument could not be parsed.
    #[error("invalid {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    /// An environment variable held an unusable value.
    #[error("invalid value for {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// Grid construction error
    #[error(transparent)]
    Grid(#[from] corgi_hexgrid::Error),

    /// JSON encoding error
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
