//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether `email` looks like `local-part@domain.tld`.
///
/// The top-level label must be at least two ASCII letters, so `a@b.co`
/// passes while `a@b.c` does not.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// assert!(EmailAddress::new("a@b.c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validates_format() {
        assert!(is_valid_email("user.name@domain.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user+tag@example.co.uk"));
        assert!(is_valid_email("first_last%x@sub-domain.org"));

        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_rejects_invalid() {
        assert_eq!(
            EmailAddress::new("invalid"),
            Err(ValidationError::InvalidEmail("invalid".to_string()))
        );
    }
}
