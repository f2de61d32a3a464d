//! ContactName value object.

use super::errors::{ContactError, ContactResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The identifying name of a contact.
///
/// Names are case-sensitive and serve as the unique key of the address
/// book. Construction only rejects blank input.
///
/// # Example
///
/// ```
/// use address_book::domain::ContactName;
///
/// let name = ContactName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert_ne!(name, ContactName::new("alice").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::EmptyName` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
