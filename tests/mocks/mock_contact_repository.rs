use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Clones share state, so a test can hand one clone to a `ContactBook` and
/// keep another to inspect saved contacts and call counts.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose next load returns `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let repo = Self::new();
        *repo.contacts.lock().unwrap() = contacts;
        repo
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// Contacts as of the last successful save.
    pub fn saved(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&mut self) -> StorageResult<Vec<Contact>> {
        self.track_call("load");
        Ok(self.contacts.lock().unwrap().clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
