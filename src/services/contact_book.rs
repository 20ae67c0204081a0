//! Contact book service.
//!
//! Pairs one [`ContactStore`] with one [`ContactRepository`]: the store is
//! hydrated when the book is opened and written back after every mutation.

use crate::error::{BookError, BookResult};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::store::ContactStore;

/// The contact collection for one interactive session.
pub struct ContactBook {
    store: ContactStore,
    repository: Box<dyn ContactRepository>,
}

impl ContactBook {
    /// Open a book, loading its contacts from `repository`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Storage` if the repository cannot be read or its
    /// content does not decode.
    pub fn open(mut repository: Box<dyn ContactRepository>) -> BookResult<Self> {
        let contacts = repository.load()?;
        tracing::info!(
            backend = %repository.describe(),
            count = contacts.len(),
            "Opened contact book"
        );

        Ok(Self {
            store: ContactStore::from(contacts),
            repository,
        })
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn list(&self) -> &[Contact] {
        self.store.list()
    }

    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.store.get(first_name, last_name)
    }

    /// Add a contact and persist the book.
    ///
    /// The contact stays in the book even if persisting fails; the storage
    /// error is still returned so the caller can report it.
    pub fn add(&mut self, contact: Contact) -> BookResult<()> {
        tracing::debug!(name = %contact.full_name(), "Adding contact");
        self.store.add(contact);
        self.flush()
    }

    pub fn update_phone(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_phone: &str,
    ) -> BookResult<()> {
        self.store.update_phone(first_name, last_name, new_phone)?;
        tracing::debug!(first_name, last_name, "Updated phone");
        self.flush()
    }

    pub fn update_email(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_email: &str,
    ) -> BookResult<()> {
        self.store.update_email(first_name, last_name, new_email)?;
        tracing::debug!(first_name, last_name, "Updated email");
        self.flush()
    }

    /// Delete the first matching contact and persist the book.
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> BookResult<Contact> {
        let removed = self.store.delete(first_name, last_name)?;
        tracing::debug!(first_name, last_name, "Deleted contact");
        self.flush()?;
        Ok(removed)
    }

    /// Write the whole collection to the repository.
    pub fn flush(&mut self) -> BookResult<()> {
        self.repository.save(self.store.list()).map_err(|e| {
            tracing::warn!(
                backend = %self.repository.describe(),
                error = %e,
                "Failed to save contacts"
            );
            BookError::from(e)
        })
    }
}
