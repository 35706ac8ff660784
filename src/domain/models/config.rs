//! Configuration models loaded by the figment loader.

use serde::{Deserialize, Serialize};

use super::hint::Theme;

/// Main configuration structure for Captain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Hint rendering and suggestion configuration
    #[serde(default)]
    pub hint: HintConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hint rendering and suggestion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HintConfig {
    /// Header wording: standard or pirate
    #[serde(default)]
    pub theme: Theme,

    /// Maximum suggestions offered for an unresolved mention (1-20)
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Maximum aliases shown next to each suggestion (0-10)
    #[serde(default = "default_max_aliases")]
    pub max_aliases: usize,
}

const fn default_suggestion_limit() -> usize {
    3
}

const fn default_max_aliases() -> usize {
    3
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            suggestion_limit: default_suggestion_limit(),
            max_aliases: default_max_aliases(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
