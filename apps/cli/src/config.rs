//! # Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags override whatever is loaded here.
//!
//! | Variable              | Values            | Default  |
//! |-----------------------|-------------------|----------|
//! | `EAN13_LABEL_POLICY`  | `append`, `drop`  | `append` |
//! | `EAN13_OUTPUT_FORMAT` | `text`, `json`    | `text`   |
//! | `EAN13_CLIPBOARD`     | `true`, `false`   | `true`   |
//!
//! `EAN13_WEIGHT` is read by clap directly (see [`crate::cli`]).

use std::env;

use ean_core::LabelPolicy;

use crate::output::OutputFormat;

pub const LABEL_POLICY_VAR: &str = "EAN13_LABEL_POLICY";
pub const OUTPUT_FORMAT_VAR: &str = "EAN13_OUTPUT_FORMAT";
pub const CLIPBOARD_VAR: &str = "EAN13_CLIPBOARD";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// What happens to line labels in generated codes
    pub label_policy: LabelPolicy,

    /// How results are printed
    pub output_format: OutputFormat,

    /// Emit the OSC 52 clipboard sequence when copying
    pub clipboard_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            label_policy: LabelPolicy::Append,
            output_format: OutputFormat::Text,
            clipboard_enabled: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let label_policy = match lookup(LABEL_POLICY_VAR) {
            None => defaults.label_policy,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "append" => LabelPolicy::Append,
                "drop" => LabelPolicy::Drop,
                _ => return Err(ConfigError::InvalidValue(LABEL_POLICY_VAR.to_string())),
            },
        };

        let output_format = match lookup(OUTPUT_FORMAT_VAR) {
            None => defaults.output_format,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidValue(OUTPUT_FORMAT_VAR.to_string())),
            },
        };

        let clipboard_enabled = match lookup(CLIPBOARD_VAR) {
            None => defaults.clipboard_enabled,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(CLIPBOARD_VAR.to_string()))?,
        };

        Ok(AppConfig {
            label_policy,
            output_format,
            clipboard_enabled,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
