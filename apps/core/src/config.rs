//! Environment-driven configuration.
//!
//! Values come from `EXAMNOTES_*` environment variables, optionally seeded
//! from a `.env` file by the binary.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;
use crate::guide::ExamLevel;

pub const ENV_DEFAULT_LEVEL: &str = "EXAMNOTES_DEFAULT_LEVEL";
pub const ENV_MIN_PROVIDER_CORPUS: &str = "EXAMNOTES_MIN_PROVIDER_CORPUS";
pub const ENV_MIN_SUMMARY_LEN: &str = "EXAMNOTES_MIN_SUMMARY_LEN";
pub const ENV_RETRY_LOW_QUALITY: &str = "EXAMNOTES_RETRY_LOW_QUALITY";

/// Settings for guide generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NotesConfig {
    /// Level used when the caller does not name one.
    pub default_level: ExamLevel,
    /// Corpora shorter than this (in characters) never reach the provider.
    #[validate(range(min = 1, max = 100000))]
    pub min_provider_corpus: usize,
    /// Provider summaries shorter than this are rated low quality.
    #[validate(range(min = 1, max = 100000))]
    pub min_summary_len: usize,
    /// Retry a low-quality provider summary once with the strict prompt.
    pub retry_low_quality: bool,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            default_level: ExamLevel::Msce,
            min_provider_corpus: 100,
            min_summary_len: 500,
            retry_low_quality: true,
        }
    }
}

impl NotesConfig {
    /// Load from the environment, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            default_level: read_var(ENV_DEFAULT_LEVEL)?.unwrap_or(defaults.default_level),
            min_provider_corpus: read_var(ENV_MIN_PROVIDER_CORPUS)?
                .unwrap_or(defaults.min_provider_corpus),
            min_summary_len: read_var(ENV_MIN_SUMMARY_LEN)?.unwrap_or(defaults.min_summary_len),
            retry_low_quality: read_var(ENV_RETRY_LOW_QUALITY)?
                .unwrap_or(defaults.retry_low_quality),
        };

        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn read_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}
