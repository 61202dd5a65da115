use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::parser::ParserConfig;
use crate::dns_header::HEADER_LEN;

/// Main configuration structure for the inverse-query parser
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Message source and buffer sizing
    #[serde(default)]
    pub parser: ParserConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. iquery.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("iquery.toml").exists() {
            Self::from_file("iquery.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.message_path {
            self.parser.message_path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.message_capacity < HEADER_LEN {
            return Err(ConfigError::Validation(format!(
                "message_capacity must be at least {} bytes, got {}",
                HEADER_LEN, self.parser.message_capacity
            )));
        }

        if self.parser.answer_capacity == 0 {
            return Err(ConfigError::Validation(
                "answer_capacity cannot be 0".to_string(),
            ));
        }

        if self.parser.message_path.is_empty() {
            return Err(ConfigError::Validation(
                "message_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub message_path: Option<String>,
    pub log_level: Option<String>,
}
