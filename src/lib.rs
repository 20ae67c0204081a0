//! Contact Book - a single-user contact manager with a text menu.
//!
//! Contacts are kept in an ordered in-memory store and can be persisted as a
//! JSON document between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validation rules and value objects for names, phones, emails
//! - **models**: The contact record and its derived display values
//! - **store**: Ordered in-memory collection with CRUD keyed by name
//! - **repositories**: Persistence backends (JSON file, in-memory)
//! - **services**: The contact book, pairing a store with a repository
//! - **shell**: Interactive numbered menu
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod shell;
pub mod store;

pub use config::{Config, StorageBackend};
pub use error::{BookError, ConfigError, StorageError, StoreError};
pub use models::Contact;
pub use repositories::{ContactRepository, InMemoryRepository, JsonFileRepository};
pub use services::ContactBook;
pub use shell::Shell;
pub use store::ContactStore;
