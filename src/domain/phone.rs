//! PhoneNumber value object.

use super::errors::{ContactError, ContactResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Exactly ten ASCII digits, nothing else.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is a string of exactly 10 ASCII digits. No formatting
/// characters, country prefixes or whitespace are accepted, so two numbers
/// are equal exactly when their digit strings are equal.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("+380501234567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Length every phone number must have.
    pub const DIGITS: usize = 10;

    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidPhoneFormat` carrying the raw input if it
    /// is not exactly ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> ContactResult<Self> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ContactError::InvalidPhoneFormat(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`PhoneNumber::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
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

impl FromStr for PhoneNumber {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
