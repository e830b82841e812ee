//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Selects the log output format.
pub const LOG_FORMAT_VAR: &str = "QUESTLINE_LOG_FORMAT";
/// Optional path to a YAML scenario; the built-in scenario runs otherwise.
pub const SCENARIO_VAR: &str = "QUESTLINE_SCENARIO";
/// When `true`, every recorded event is printed as JSON.
pub const PRINT_EVENTS_VAR: &str = "QUESTLINE_PRINT_EVENTS";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Demo runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Log output format.
    pub log_format: LogFormat,
    /// Scenario file to run instead of the built-in one.
    pub scenario_path: Option<PathBuf>,
    /// Print event payloads after each step.
    pub print_events: bool,
}

impl DemoConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{LOG_FORMAT_VAR} must be `text` or `json`, got `{other}`"
                )));
            }
        };

        let scenario_path = lookup(SCENARIO_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let print_events = match lookup(PRINT_EVENTS_VAR).as_deref().map(str::trim) {
            None | Some("" | "false" | "0") => false,
            Some("true" | "1") => true,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{PRINT_EVENTS_VAR} must be a boolean, got `{other}`"
                )));
            }
        };

        Ok(Self {
            log_format,
            scenario_path,
            print_events,
        })
    }
}
