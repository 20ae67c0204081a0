//! Domain value objects and validation rules.
//!
//! This module contains the validation rules for names, phone numbers and
//! email addresses, both as plain predicates and as type-safe wrappers that
//! validate at construction time.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use name::{is_valid_name, PersonName};
pub use phone::{is_valid_phone, PhoneNumber};
