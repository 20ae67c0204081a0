//! Contact model representing one person in the contact book.

use crate::domain::{is_valid_email, EmailAddress, PersonName, PhoneNumber};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for birthdate input and display.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// A contact in the book.
///
/// The field names on disk are `FirstName`, `LastName`, `BirthDate`,
/// `Phone` and `Email`. An empty `phone` means no phone is on file and a
/// `None` birth date means the birthdate is unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Contact {
    /// First name (letters only)
    pub first_name: String,

    /// Last name (letters only)
    pub last_name: String,

    /// Birthdate, if known
    #[serde(with = "birth_date")]
    pub birth_date: Option<NaiveDate>,

    /// Phone number as entered, or empty
    pub phone: String,

    /// Email address as entered
    pub email: String,
}

impl Contact {
    /// Create a contact from validated names. Phone, email and birthdate start
    /// out empty.
    pub fn new(first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            first_name: first_name.into_inner(),
            last_name: last_name.into_inner(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = phone.into_inner();
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = email.into_inner();
        self
    }

    pub fn with_birth_date(mut self, birth_date: Option<NaiveDate>) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Exact, case-sensitive match on both name fields.
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Age in whole years as of `today`, or 0 when the birthdate is unknown.
    ///
    /// The birthday counts as passed once `today`'s day-of-year reaches the
    /// birthdate's day-of-year. Around Feb 29 in mixed leap/non-leap years
    /// this can be off by one day compared with a month/day comparison.
    pub fn age(&self, today: NaiveDate) -> i32 {
        let Some(birth_date) = self.birth_date else {
            return 0;
        };

        let mut age = today.year() - birth_date.year();
        if today.ordinal() < birth_date.ordinal() {
            age -= 1;
        }
        age
    }

    /// Age as of the local calendar date.
    pub fn current_age(&self) -> i32 {
        self.age(Local::now().date_naive())
    }

    /// Birthdate as `YYYY-MM-DD`, or "Birthdate unknown".
    pub fn formatted_birthday(&self) -> String {
        match self.birth_date {
            Some(date) => date.format(BIRTH_DATE_FORMAT).to_string(),
            None => "Birthdate unknown".to_string(),
        }
    }

    /// Phone rendered for display.
    ///
    /// Ten bare digits become `(XXX) XXX-XXXX`; anything else non-empty is
    /// shown as stored.
    pub fn formatted_phone(&self) -> String {
        let phone = self.phone.as_str();
        if phone.is_empty() {
            return "No phone available".to_string();
        }

        if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
            return format!("({}) {}-{}", &phone[..3], &phone[3..6], &phone[6..]);
        }

        phone.to_string()
    }

    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Age: {}, Birthdate: {}, Phone: {}, Email: {} (Valid: {})",
            self.first_name,
            self.last_name,
            self.current_age(),
            self.formatted_birthday(),
            self.formatted_phone(),
            self.email,
            self.has_valid_email()
        )
    }
}

/// Parse a `YYYY-MM-DD` birthdate, returning `None` for anything else.
pub fn parse_birth_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT).ok()
}

/// Serde adapter for the `BirthDate` field.
///
/// Known dates are written as midnight UTC timestamps. Unknown dates are
/// written as the zero timestamp `0001-01-01T00:00:00Z`, which reads back
/// as `None`, as do `null` and a missing field.
mod birth_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const ZERO_TIMESTAMP: &str = "0001-01-01T00:00:00Z";

    fn is_zero(date: NaiveDate) -> bool {
        NaiveDate::from_ymd_opt(1, 1, 1) == Some(date)
    }

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) if !is_zero(*date) => {
                serializer.serialize_str(&format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
            }
            _ => serializer.serialize_str(ZERO_TIMESTAMP),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        let date = match DateTime::parse_from_rfc3339(&raw) {
            Ok(timestamp) => timestamp.date_naive(),
            Err(_) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                serde::de::Error::custom(format!("invalid BirthDate: {}", raw))
            })?,
        };

        Ok(if is_zero(date) { None } else { Some(date) })
    }
}
