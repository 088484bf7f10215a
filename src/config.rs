//! Configuration management for the contact assistant.
//!
//! All settings are optional and come from environment variables, with a
//! best-effort `.env` read first. The assistant keeps no files or
//! persisted state of its own.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command when no argument is
    /// given (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: default birthdays window (default: 7)
    /// - `ASSISTANT_LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_i64("ASSISTANT_BIRTHDAY_WINDOW_DAYS", 7)?;

        if birthday_window_days < 1 {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("ASSISTANT_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
