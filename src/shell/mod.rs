//! Interactive text shell for the contact book.
//!
//! This module provides the numbered menu that drives a [`ContactBook`]
//! from standard input and output.

pub mod handlers;

pub use handlers::Shell;

use crate::services::ContactBook;
use anyhow::Result;
use std::io;

/// Run the menu loop on stdin/stdout until the user exits.
///
/// # Returns
/// An error if reading from stdin or writing to stdout fails
pub fn run_shell(book: &mut ContactBook) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    Shell::new(book, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
