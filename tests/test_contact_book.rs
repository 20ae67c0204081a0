//! Tests for the contact book service: hydration, write-through, and
//! behaviour when persistence fails.

mod mocks;

use contact_book::error::{BookError, StoreError};
use contact_book::models::Contact;
use contact_book::repositories::JsonFileRepository;
use contact_book::services::ContactBook;
use mocks::MockContactRepository;
use tempfile::TempDir;

fn sample_contact(first_name: &str, last_name: &str) -> Contact {
    Contact {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: "1234567890".to_string(),
        email: "someone@example.com".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_open_loads_once() {
    let repo = MockContactRepository::with_contacts(vec![sample_contact("John", "Doe")]);
    let book = ContactBook::open(Box::new(repo.clone())).unwrap();

    assert_eq!(book.list().len(), 1);
    assert_eq!(repo.get_call_count("load"), 1);
    assert_eq!(repo.get_call_count("save"), 0);
}

#[test]
fn test_every_mutation_is_saved() {
    let repo = MockContactRepository::new();
    let mut book = ContactBook::open(Box::new(repo.clone())).unwrap();

    book.add(sample_contact("John", "Doe")).unwrap();
    book.add(sample_contact("Jane", "Smith")).unwrap();
    book.update_phone("John", "Doe", "555.666.7777").unwrap();
    book.update_email("Jane", "Smith", "jane@example.org").unwrap();
    let removed = book.delete("John", "Doe").unwrap();

    assert_eq!(removed.phone, "555.666.7777");
    assert_eq!(repo.get_call_count("save"), 5);

    let saved = repo.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].email, "jane@example.org");
}

#[test]
fn test_failed_operations_are_not_saved() {
    let repo = MockContactRepository::new();
    let mut book = ContactBook::open(Box::new(repo.clone())).unwrap();
    book.add(sample_contact("John", "Doe")).unwrap();

    assert!(book.update_phone("John", "Doe", "bad").is_err());
    assert!(book.update_email("Nobody", "Here", "a@b.co").is_err());
    assert!(book.delete("Nobody", "Here").is_err());

    assert_eq!(repo.get_call_count("save"), 1);
}

#[test]
fn test_save_failure_keeps_change_in_memory() {
    let repo = MockContactRepository::new();
    let mut book = ContactBook::open(Box::new(repo.clone())).unwrap();
    repo.fail_saves();

    let err = book.add(sample_contact("John", "Doe")).unwrap_err();
    assert!(matches!(err, BookError::Storage(_)));
    assert!(book.get("John", "Doe").is_some());
    assert!(repo.saved().is_empty());

    let err = book.update_phone("Jane", "Smith", "1234567890").unwrap_err();
    assert!(matches!(err, BookError::Store(StoreError::NotFound { .. })));
}

#[test]
fn test_json_backed_book_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contactsDB.json");

    {
        let mut book = ContactBook::open(Box::new(JsonFileRepository::new(&path))).unwrap();
        assert!(book.list().is_empty());
        book.add(sample_contact("John", "Doe")).unwrap();
        book.add(sample_contact("Jane", "Smith")).unwrap();
        book.delete("John", "Doe").unwrap();
    }

    let book = ContactBook::open(Box::new(JsonFileRepository::new(&path))).unwrap();
    assert_eq!(book.list(), &[sample_contact("Jane", "Smith")]);
}
