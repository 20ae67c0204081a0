//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::{
    ContactRepository, InMemoryRepository, JsonFileRepository, DEFAULT_DATA_FILE,
};
use std::env;
use std::path::PathBuf;

/// Where contacts live between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON document on disk
    File,
    /// Held in memory for the session only
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: file)
    pub backend: StorageBackend,

    /// Path of the JSON document (default: storage/data/contactsDB.json)
    pub data_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_BACKEND`: `file` or `memory` (default: file)
    /// - `CONTACT_BOOK_DATA_FILE`: JSON document path (default: storage/data/contactsDB.json)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let backend = match env::var("CONTACT_BOOK_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                var: "CONTACT_BOOK_BACKEND".to_string(),
                reason: format!("Must be 'file' or 'memory', got: {}", value),
            })?,
            Err(_) => defaults.backend,
        };

        let data_file = match env::var("CONTACT_BOOK_DATA_FILE") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_DATA_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(value) => PathBuf::from(value.trim()),
            Err(_) => defaults.data_file,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            backend,
            data_file,
            log_level,
        })
    }

    /// Build the repository selected by this configuration.
    pub fn repository(&self) -> Box<dyn ContactRepository> {
        match self.backend {
            StorageBackend::File => Box::new(JsonFileRepository::new(&self.data_file)),
            StorageBackend::Memory => Box::new(InMemoryRepository::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend: StorageBackend::File,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".to_string(),
        }
    }
}
