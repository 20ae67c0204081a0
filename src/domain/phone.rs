//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Ten ASCII digits, with optional parentheses around the area code and an
/// optional `-`, `.` or ASCII whitespace separator between groups.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?[0-9]{3}\)?[-. \t\n\f\r]?[0-9]{3}[-. \t\n\f\r]?[0-9]{4}$")
        .expect("phone pattern is valid")
});

/// Check whether `phone` is a North-American style 10-digit number.
///
/// Accepted shapes include `1234567890`, `(123) 456-7890`, `123-456-7890`
/// and `123.456.7890`. An empty string is not a valid phone number.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// A type-safe wrapper for phone numbers.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(555) 123-4567").unwrap();
/// assert_eq!(phone.as_str(), "(555) 123-4567");
/// assert!(PhoneNumber::new("555-123-456").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
