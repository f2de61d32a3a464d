//! Address Book - a personal contact store with birthday reminders.
//!
//! Contacts have a unique name, any number of validated phone numbers and an
//! optional birthday. The book answers which contacts have a birthday in the
//! coming week and on which weekday each reminder should surface.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact record, address book and the weekly reminder schedule
//! - **commands**: Input tokenizer, command registry and handlers
//! - **repositories**: Snapshot persistence of the address book
//! - **session**: Interactive loop tying commands and persistence together
//! - **config**: Configuration management from environment variables
//! - **error**: Error types of the layers around the core

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::CommandRegistry;
pub use config::Config;
pub use domain::{Birthday, ContactError, ContactName, PhoneNumber};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, WeeklyReminders};
pub use repositories::{BookRepository, JsonFileBookRepository};
pub use session::Session;
