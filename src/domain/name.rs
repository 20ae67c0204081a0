//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// One or more characters from the Unicode Letter (`L`) general category.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}+$").expect("name pattern is valid"));

/// Check whether `name` is non-empty and made only of letters.
///
/// A letter is any character in the Unicode `L` category. Digits, letter
/// numbers such as `Ⅻ`, combining marks, punctuation and whitespace are
/// rejected.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// A validated first or last name.
///
/// # Example
///
/// ```
/// use contact_book::domain::PersonName;
///
/// assert!(PersonName::new("Ada").is_ok());
/// assert!(PersonName::new("R2D2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty string and
    /// `ValidationError::InvalidName` if any character is not a letter.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_valid_name(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
