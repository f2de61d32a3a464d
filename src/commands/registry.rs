//! Command handler registry
//!
//! Command names map to handlers through an explicit table. Names missing
//! from the table go to a separate fallback handler.

use super::context::CommandContext;
use super::handlers;
use crate::error::CommandResult;
use std::collections::HashMap;
use tracing::debug;

/// Signature shared by every command handler.
pub type CommandHandler = fn(&mut CommandContext<'_>, &[String]) -> CommandResult<String>;

/// Commands that end the session.
pub const EXIT_COMMANDS: [&str; 2] = ["close", "exit"];

/// Whether `command` ends the session.
pub fn is_exit_command(command: &str) -> bool {
    EXIT_COMMANDS.contains(&command)
}

/// Registry mapping command names to handlers
///
/// # Example
///
/// ```
/// use address_book::commands::{CommandContext, CommandRegistry};
/// use address_book::AddressBook;
/// use chrono::NaiveDate;
///
/// let registry = CommandRegistry::standard();
/// let mut book = AddressBook::new();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let mut ctx = CommandContext::new(&mut book, today);
///
/// let args = vec!["Bill".to_string(), "0501234567".to_string()];
/// assert_eq!(registry.dispatch("add", &mut ctx, &args), "Contact Bill added.");
/// assert_eq!(registry.dispatch("dance", &mut ctx, &[]), "Invalid command.");
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, CommandHandler>,
    fallback: CommandHandler,
}

impl CommandRegistry {
    /// Create an empty registry that sends everything to `fallback`
    pub fn new(fallback: CommandHandler) -> Self {
        Self {
            handlers: HashMap::new(),
            fallback,
        }
    }

    /// Registry with every address book command
    pub fn standard() -> Self {
        let mut registry = Self::new(handlers::invalid_command);
        registry.register(&EXIT_COMMANDS, handlers::goodbye);
        registry.register(&["hello"], handlers::hello);
        registry.register(&["add"], handlers::add_contact);
        registry.register(&["change"], handlers::change_contact);
        registry.register(&["phone"], handlers::show_phone);
        registry.register(&["all"], handlers::show_all);
        registry.register(&["add-birthday"], handlers::add_birthday);
        registry.register(&["show-birthday"], handlers::show_birthday);
        registry.register(&["birthdays"], handlers::birthdays);
        registry.register(&["remove-phone"], handlers::remove_phone);
        registry.register(&["delete"], handlers::delete_contact);
        registry
    }

    /// Register `handler` under each of `names`
    pub fn register(&mut self, names: &[&'static str], handler: CommandHandler) {
        for &name in names {
            self.handlers.insert(name, handler);
        }
    }

    /// Get handler for a command name
    ///
    /// Returns None if no handler is registered for the given name.
    pub fn get(&self, name: &str) -> Option<CommandHandler> {
        self.handlers.get(name).copied()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Handler for `name`, or the fallback
    pub fn resolve(&self, name: &str) -> CommandHandler {
        self.get(name).unwrap_or(self.fallback)
    }

    /// Run the command and render its outcome as a user message.
    ///
    /// Handler errors are rendered through their `Display`, so this never fails.
    pub fn dispatch(&self, name: &str, ctx: &mut CommandContext<'_>, args: &[String]) -> String {
        let handler = self.resolve(name);
        match handler(ctx, args) {
            Ok(message) => message,
            Err(e) => {
                debug!(command = %name, error = %e, "Command failed");
                e.to_string()
            }
        }
    }

    /// Number of registered command names
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Get all registered command names
    pub fn command_names(&self) -> impl Iterator<Item = &&'static str> {
        self.handlers.keys()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
