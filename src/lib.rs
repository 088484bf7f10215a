//! Contact Assistant - a line-oriented CLI for an in-memory address book.
//!
//! The assistant reads one command per line, validates input against a
//! small typed data model, and prints a human-readable response. All
//! data lives in memory and is lost on exit.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record and the address book with its
//!   birthday-window query
//! - **repl**: tokenizing, command dispatch, and the blocking loop
//! - **error**: command-level error types with user-facing messages
//! - **config**: settings from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use repl::{dispatch, parse_input, Dispatch};
