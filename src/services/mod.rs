//! Application service layer.
//!
//! Services orchestrate the in-memory store and the persistence repository.
//! They provide a clean boundary between the interactive shell and the data
//! access layer.

mod contact_book;

pub use contact_book::ContactBook;
