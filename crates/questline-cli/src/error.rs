//! Questline CLI — error types.

use questline_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the demo runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading the scenario or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario file is not valid YAML for a scenario.
    #[error("scenario error: {0}")]
    Scenario(#[from] serde_yaml::Error),

    /// A character in the scenario could not be created.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}
