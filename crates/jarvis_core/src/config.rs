//! Application identity and runtime settings.
//!
//! # Responsibility
//! - Provide defaults matching the shipped app (`com.jarvis.app`, `Jarvis`).
//! - Apply `JARVIS_*` environment overrides.
//!
//! # Invariants
//! - Blank environment values are ignored.
//! - Invalid values are reported, never silently replaced.

use crate::chat::session::DEFAULT_REPLY_DELAY_MS;
use crate::clock::EpochMs;
use crate::logging::{default_log_level, parse_level};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const APP_ID: &str = "com.jarvis.app";
pub const APP_NAME: &str = "Jarvis";
pub const DEFAULT_USER_NAME: &str = "Felipe";

pub const ENV_USER_NAME: &str = "JARVIS_USER_NAME";
pub const ENV_REPLY_DELAY_MS: &str = "JARVIS_REPLY_DELAY_MS";
pub const ENV_LOG_LEVEL: &str = "JARVIS_LOG_LEVEL";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidReplyDelay(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReplyDelay(value) => write!(
                f,
                "{ENV_REPLY_DELAY_MS} must be a non-negative integer, got `{value}`"
            ),
            Self::InvalidLogLevel(value) => {
                write!(f, "{ENV_LOG_LEVEL} is not a log level: `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one shell instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_id: String,
    pub app_name: String,
    /// Name shown in the home greeting.
    pub user_name: String,
    pub reply_delay_ms: EpochMs,
    /// Start with the greeting message and welcome note.
    pub seeded: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: APP_ID.to_string(),
            app_name: APP_NAME.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            seeded: true,
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `JARVIS_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(name) = read(ENV_USER_NAME) {
            config.user_name = name;
        }
        if let Some(raw) = read(ENV_REPLY_DELAY_MS) {
            config.reply_delay_ms = raw
                .parse::<u32>()
                .map(EpochMs::from)
                .map_err(|_| ConfigError::InvalidReplyDelay(raw.clone()))?;
        }
        if let Some(raw) = read(ENV_LOG_LEVEL) {
            config.log_level = parse_level(&raw)
                .map_err(|_| ConfigError::InvalidLogLevel(raw.clone()))?
                .to_string();
        }
        Ok(config)
    }
}
