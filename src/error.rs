//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// Every variant's `Display` output is the already-composed user-facing
/// message; the dispatch boundary prints it verbatim and keeps the loop
/// running.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A domain value failed validation (bad phone or birthday format)
    #[error("{0}")]
    InvalidValue(#[from] ValidationError),

    /// An operation presupposed a phone number that isn't on the record
    #[error("Phone number not found.")]
    PhoneNotFound,

    /// Too few tokens supplied for the command
    #[error("Not enough arguments. Usage: {usage}")]
    NotEnoughArguments { usage: &'static str },

    /// The birthdays window argument is not a number
    #[error("Invalid number of days.")]
    InvalidDays,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::PhoneNotFound;
        assert_eq!(err.to_string(), "Phone number not found.");

        let err = CommandError::NotEnoughArguments {
            usage: "phone <name>",
        };
        assert_eq!(err.to_string(), "Not enough arguments. Usage: phone <name>");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("ASSISTANT_BIRTHDAY_WINDOW_DAYS"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: CommandError = ValidationError::InvalidPhone("123".to_string()).into();
        assert_eq!(err.to_string(), "Invalid phone number");

        let err: CommandError = ValidationError::InvalidBirthday("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
