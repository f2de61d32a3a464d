//! Data models for the address book.
//!
//! This module contains the contact record, the address book that keys
//! records by name, and the weekly birthday-reminder schedule computed from
//! the book.

pub mod address_book;
pub mod record;
pub mod reminders;

pub use address_book::AddressBook;
pub use record::{Record, NO_BIRTHDAY};
pub use reminders::{reminder_weekday, weekday_name, WeeklyReminders, REMINDER_WINDOW_DAYS};
