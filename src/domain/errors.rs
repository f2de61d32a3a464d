//! Domain validation errors.

use thiserror::Error;

/// Errors raised by the contact value objects and records.
///
/// Every variant that stems from user input carries the offending value so
/// callers can report it back verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The phone number is not exactly 10 digits.
    #[error("The phone number {0} does not match the requirements.")]
    InvalidPhoneFormat(String),

    /// The birthday is not a real `DD.MM.YYYY` date.
    #[error("Birthday format '{0}' is incorrect. It should be DD.MM.YYYY.")]
    InvalidBirthdayFormat(String),

    /// The phone number is well formed but not stored on the record.
    #[error("This number does not exist {0}.")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;
