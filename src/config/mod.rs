//! Configuration layer: typed settings hosts feed into the visual.

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_WARNING_TEXT: &str = "YOU NEED TO ACCEPT THE HTML RISK IN FORMAT SETTINGS";
const DEFAULT_CONTENT_CLASS: &str = "vetrina-html-wrapper";

/// Host-side configuration for one embedded visual.
///
/// This is distinct from the user-facing format-pane settings: the host
/// fixes this once at embed time, while [`RiskSettings`] is re-parsed from
/// the data view on every update.
///
/// [`RiskSettings`]: crate::application::visual::RiskSettings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualConfig {
    /// Advisory text shown while the risk gate is closed.
    pub warning_text: String,
    /// CSS class hosts apply to the content region's wrapper element.
    pub content_class: String,
    pub logging: LoggingSettings,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            warning_text: DEFAULT_WARNING_TEXT.to_string(),
            content_class: DEFAULT_CONTENT_CLASS.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl VisualConfig {
    /// Load configuration from a TOML document, validating the result.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|err| ConfigError::Parse {
            message: err.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.warning_text.trim().is_empty() {
            return Err(ConfigError::validation("warning_text must not be empty"));
        }
        if self.content_class.trim().is_empty() {
            return Err(ConfigError::validation("content_class must not be empty"));
        }
        Ok(())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

/// Verbosity floor applied when `RUST_LOG` supplies no directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration parse failed: {message}")]
    Parse { message: String },
    #[error("configuration validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
