//! Shared context for command handlers

use crate::models::AddressBook;
use chrono::NaiveDate;

/// What a command handler may touch: the book being edited and the date
/// birthday reminders are computed from.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
}

impl<'a> CommandContext<'a> {
    pub fn new(book: &'a mut AddressBook, today: NaiveDate) -> Self {
        Self { book, today }
    }
}
