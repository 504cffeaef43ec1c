//! Serde-loadable logger configuration
//!
//! ```
//! use rust_structured_logger::{Level, LoggerConfig, OutputFormat};
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "warning", "format": "json" }"#).unwrap();
//! assert_eq!(config.level, Level::Warning);
//! assert_eq!(config.format, OutputFormat::Json);
//!
//! let logger = config.build();
//! assert_eq!(logger.level(), Level::Warning);
//! ```

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    level::Level,
    logger::Logger,
    timestamp::TimestampFormat,
};
use crate::formatters::{JsonFormatter, TextFormatter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which built-in formatter a config selects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key=value` lines, see [`TextFormatter`]
    #[default]
    Text,
    /// One JSON object per line, see [`JsonFormatter`]
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
    pub format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub disable_timestamp: bool,
    /// Text output only
    pub colors: bool,
    /// Text output only
    pub sort_fields: bool,
    pub no_lock: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            format: OutputFormat::Text,
            timestamp_format: TimestampFormat::default(),
            disable_timestamp: false,
            colors: false,
            sort_fields: false,
            no_lock: false,
        }
    }
}

impl LoggerConfig {
    /// Parse a config; a custom timestamp format must be valid strftime
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))?;
        config.timestamp_format.validate()?;
        Ok(config)
    }

    /// Formatter described by this config
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        match self.format {
            OutputFormat::Text => Arc::new(
                TextFormatter::new()
                    .with_colors(self.colors)
                    .with_sorting(self.sort_fields)
                    .with_timestamp(!self.disable_timestamp)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
            OutputFormat::Json => Arc::new(
                JsonFormatter::new()
                    .with_timestamp(!self.disable_timestamp)
                    .with_timestamp_format(self.timestamp_format.clone()),
            ),
        }
    }

    /// Logger writing to stderr as configured
    pub fn build(&self) -> Logger {
        Logger::from_config(self)
    }
}
