//! Data models for the contact book.

pub mod contact;

pub use contact::{parse_birth_date, Contact, BIRTH_DATE_FORMAT};
