//! In-memory contact store.
//!
//! The store owns an ordered collection of contacts and exposes CRUD keyed by
//! (first name, last name). Names are not unique; every keyed operation acts
//! on the first match in insertion order. The store performs no I/O and
//! never logs.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;

/// Ordered collection of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contact. No duplicate check and no validation.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// All contacts in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Owned copy of all contacts in insertion order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// First contact whose names match exactly.
    pub fn get(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.matches(first_name, last_name))
    }

    /// Replace the phone number of the first matching contact.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if no contact matches, or
    /// `StoreError::Invalid` if `new_phone` is not a valid phone number. The
    /// stored record is untouched in both cases.
    pub fn update_phone(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_phone: &str,
    ) -> StoreResult<()> {
        let contact = self.find_mut(first_name, last_name)?;
        let phone = PhoneNumber::new(new_phone)?;
        contact.phone = phone.into_inner();
        Ok(())
    }

    /// Replace the email address of the first matching contact.
    ///
    /// # Errors
    ///
    /// Same contract as [`ContactStore::update_phone`], validated as an email.
    pub fn update_email(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_email: &str,
    ) -> StoreResult<()> {
        let contact = self.find_mut(first_name, last_name)?;
        let email = EmailAddress::new(new_email)?;
        contact.email = email.into_inner();
        Ok(())
    }

    /// Remove the first matching contact and return it. The remaining
    /// contacts keep their relative order.
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> StoreResult<Contact> {
        let index = self
            .position(first_name, last_name)
            .ok_or_else(|| not_found(first_name, last_name))?;
        Ok(self.contacts.remove(index))
    }

    /// Consume the store, yielding its contacts in order.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.matches(first_name, last_name))
    }

    fn find_mut(&mut self, first_name: &str, last_name: &str) -> StoreResult<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|contact| contact.matches(first_name, last_name))
            .ok_or_else(|| not_found(first_name, last_name))
    }
}

impl From<Vec<Contact>> for ContactStore {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

fn not_found(first_name: &str, last_name: &str) -> StoreError {
    StoreError::NotFound {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}
