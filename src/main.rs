//! Contact Assistant - Main entry point
//!
//! Runs the line-oriented command loop over a process-owned address book.

use anyhow::Result;
use contact_assistant::{repl, AddressBook, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout clean for responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact assistant (default birthday window: {} days)",
        config.birthday_window_days
    );

    let mut book = AddressBook::new();
    if let Err(e) = repl::run(&mut book, &config) {
        error!("Command loop failed: {}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
