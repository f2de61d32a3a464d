//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{Birthday, ContactName, ContactResult, ContactError, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of a birthday when none is set.
pub const NO_BIRTHDAY: &str = "not set";

/// A single contact in the address book.
///
/// Phones keep insertion order and may repeat; every phone operation
/// validates its input before touching the list. `Record` deliberately has
/// no `PartialEq`: use [`Record::matches_identity`] or
/// [`Record::conflicts_with`] to compare two records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name.
    pub fn try_new(name: impl Into<String>) -> ContactResult<Self> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `InvalidPhoneFormat` if `old` or `new` is malformed
    /// - `PhoneNotFound` if `old` is well formed but not on this record,
    ///   whatever `new` looks like
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position_of(old)?;
        let replacement = PhoneNumber::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Remove the first occurrence of `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<PhoneNumber> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Look up a phone number on this record.
    ///
    /// Absence is `Ok(None)`; only malformed input is an error.
    pub fn find_phone(&self, phone: &str) -> ContactResult<Option<&PhoneNumber>> {
        let phone = PhoneNumber::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == phone))
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// The formatted birthday, or [`NO_BIRTHDAY`].
    pub fn render_birthday(&self) -> String {
        self.birthday
            .map(|b| b.format())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string())
    }

    /// Same name and no phone in common: safe to treat as one identity slot.
    pub fn matches_identity(&self, other: &Record) -> bool {
        self.name == other.name && !self.shares_phone_with(other)
    }

    /// Same name and at least one shared phone number.
    pub fn conflicts_with(&self, other: &Record) -> bool {
        self.name == other.name && self.shares_phone_with(other)
    }

    fn shares_phone_with(&self, other: &Record) -> bool {
        self.phones.iter().any(|p| other.phones.contains(p))
    }

    fn position_of(&self, phone: &str) -> ContactResult<usize> {
        let target = PhoneNumber::new(phone)?;
        self.phones
            .iter()
            .position(|p| *p == target)
            .ok_or_else(|| ContactError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday {}", birthday)?;
        }
        Ok(())
    }
}
