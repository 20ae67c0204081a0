//! Contact Book - Main entry point
//!
//! Loads configuration, opens the contact book from the configured backend,
//! and runs the interactive menu on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, ContactBook};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(backend = ?config.backend, "Configuration loaded");

    let mut book = match ContactBook::open(config.repository()) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to open contact book: {}", e);
            return Err(e.into());
        }
    };

    contact_book::shell::run_shell(&mut book)?;

    book.flush()?;
    info!("Contact book closed");
    Ok(())
}
