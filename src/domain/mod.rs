//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: its name, its phone numbers and its birthday. These value objects
//! validate at construction time so invalid data can never be represented
//! in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::{ContactError, ContactResult};
pub use name::ContactName;
pub use phone::PhoneNumber;
