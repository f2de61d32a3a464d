//! Command layer.
//!
//! Turns a line of user input into an address book operation and the
//! message describing its outcome. Tokenizing lives in [`parser`], the
//! name-to-handler table in [`registry`] and the operations themselves in
//! [`handlers`].

pub mod context;
pub mod handlers;
pub mod parser;
pub mod registry;

pub use context::CommandContext;
pub use parser::{parse_input, ParsedInput};
pub use registry::{is_exit_command, CommandHandler, CommandRegistry, EXIT_COMMANDS};
