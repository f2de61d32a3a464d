//! Birthday value object.

use super::errors::{ContactError, ContactResult};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display and input format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Two-digit day, two-digit month, four-digit year.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A contact's date of birth.
///
/// Parsing is strict: only the canonical `DD.MM.YYYY` shape is accepted and
/// the date must exist on the calendar, so `format(parse(s)) == s` for every
/// accepted `s`. Equality compares the underlying date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::parse("09.03.1990").unwrap();
/// assert_eq!(birthday.format(), "09.03.1990");
/// assert!(Birthday::parse("31.04.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidBirthdayFormat` carrying the raw input if
    /// the shape is wrong or the date does not exist (e.g. `31.04.2000`).
    pub fn parse(raw: &str) -> ContactResult<Self> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ContactError::InvalidBirthdayFormat(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::InvalidBirthdayFormat(raw.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render as `DD.MM.YYYY`.
    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            // Only 29.02 can fail, and the 28th exists in every year.
            NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(self.0)
        })
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.format().serialize(serializer)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
