use crate::error::StorageResult;
use crate::models::Contact;

/// Repository for persisting the whole contact collection.
///
/// Provides abstraction over where the contact book lives between sessions,
/// enabling different implementations (JSON file, in-memory, mock).
pub trait ContactRepository {
    /// Load every stored contact in order.
    fn load(&mut self) -> StorageResult<Vec<Contact>>;

    /// Replace the stored collection with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> StorageResult<()>;

    /// Short label for logs ("json file", "memory", ...).
    fn describe(&self) -> String;
}
