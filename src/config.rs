//! Tax schedule configuration.
//!
//! A schedule file is a JSON array of brackets, ordered from the lowest
//! threshold up:
//!
//! ```json
//! [
//!   { "lower": "0", "upper": "18200", "base_tax": "0", "rate": "0" },
//!   { "lower": "18200", "upper": null, "base_tax": "0", "rate": "0.19" }
//! ]
//! ```

use crate::domain::tax::{TaxBracket, TaxSchedule};
use crate::error::ScheduleError;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tax schedule file not found: {path}")]
    NotFound { path: String },
    #[error("Failed to parse tax schedule '{path}': {message}")]
    Parse { path: String, message: String },
    #[error("Invalid tax schedule '{path}'")]
    Invalid {
        path: String,
        #[source]
        source: ScheduleError,
    },
}

/// Loads and validates a schedule from a JSON file.
pub fn load_schedule<P: AsRef<Path>>(path: P) -> Result<TaxSchedule, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
        path: path_str.clone(),
    })?;
    let brackets: Vec<TaxBracket> =
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let schedule = TaxSchedule::new(brackets).map_err(|source| ConfigError::Invalid {
        path: path_str.clone(),
        source,
    })?;
    info!(path = %path_str, brackets = schedule.brackets().len(), "loaded tax schedule");
    Ok(schedule)
}

/// Uses the schedule file when one is configured, otherwise the built-in table.
pub fn resolve_schedule(path: Option<&Path>) -> Result<TaxSchedule, ConfigError> {
    match path {
        Some(path) => load_schedule(path),
        None => Ok(TaxSchedule::default()),
    }
}
