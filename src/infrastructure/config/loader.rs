//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Largest accepted `hint.suggestion_limit`.
pub const MAX_SUGGESTION_LIMIT: usize = 20;

/// Largest accepted `hint.max_aliases`.
pub const MAX_ALIASES_SHOWN: usize = 10;

/// Configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Suggestion limit outside 1..=20
    #[error("Invalid suggestion_limit: {0}. Must be between 1 and 20")]
    InvalidSuggestionLimit(usize),

    /// Alias cap above 10
    #[error("Invalid max_aliases: {0}. Must be at most 10")]
    InvalidMaxAliases(usize),

    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format name
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .captain/config.yaml (project config)
    /// 3. .captain/local.yaml (project local overrides, optional)
    /// 4. Environment variables (CAPTAIN_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(".")
    }

    /// Same as [`ConfigLoader::load`] with the `.captain` directory looked up
    /// under `root` instead of the working directory
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let project_dir = root.as_ref().join(".captain");
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(project_dir.join("config.yaml")))
            .merge(Yaml::file(project_dir.join("local.yaml")))
            .merge(Env::prefixed("CAPTAIN_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let hint = &config.hint;
        if hint.suggestion_limit == 0 || hint.suggestion_limit > MAX_SUGGESTION_LIMIT {
            return Err(ConfigError::InvalidSuggestionLimit(hint.suggestion_limit));
        }

        if hint.max_aliases > MAX_ALIASES_SHOWN {
            return Err(ConfigError::InvalidMaxAliases(hint.max_aliases));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{HintConfig, LoggingConfig, Theme};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.hint.theme, Theme::Standard);
        assert_eq!(config.hint.suggestion_limit, 3);
        assert_eq!(config.hint.max_aliases, 3);
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
hint:
  theme: pirate
  suggestion_limit: 5
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.hint.theme, Theme::Pirate);
        assert_eq!(config.hint.suggestion_limit, 5);
        assert_eq!(config.hint.max_aliases, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_zero_suggestion_limit() {
        let config = Config {
            hint: HintConfig {
                suggestion_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidSuggestionLimit(0))
        );
    }

    #[test]
    fn test_validate_suggestion_limit_too_large() {
        let config = Config {
            hint: HintConfig {
                suggestion_limit: MAX_SUGGESTION_LIMIT + 1,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidSuggestionLimit(21))
        ));
    }

    #[test]
    fn test_validate_max_aliases() {
        let config = Config {
            hint: HintConfig {
                max_aliases: 11,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(ConfigLoader::validate(&config), Err(ConfigError::InvalidMaxAliases(11)));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let config = Config {
            logging: LoggingConfig {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidSuggestionLimit(0).to_string(),
            "Invalid suggestion_limit: 0. Must be between 1 and 20"
        );
        assert_eq!(
            ConfigError::InvalidLogFormat("xml".to_string()).to_string(),
            "Invalid log format: xml. Must be one of: json, pretty"
        );
    }
}
