use crate::error::StorageResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Session-only repository. Saves replace the held collection and nothing
/// survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contacts: Vec<Contact>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that loads `contacts` on first use.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// The collection as of the last save.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl ContactRepository for InMemoryRepository {
    fn load(&mut self) -> StorageResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> StorageResult<()> {
        self.contacts = contacts.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
