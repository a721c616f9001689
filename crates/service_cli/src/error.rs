//! CLI error type

use maths_core::types::error::StatisticsError;
use maths_random::RngError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `uncommons` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator construction, seeding or sampling failed
    #[error("Generator error: {0}")]
    Rng(#[from] RngError),

    /// Statistics over the sampled values could not be computed
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    /// Reading or writing a file or stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A frozen generator or report could not be (de)serialised
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
