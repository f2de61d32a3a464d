//! Interactive assistant session.
//!
//! A session owns the address book for its whole lifetime: it is loaded
//! through a [`BookRepository`] when the session opens, edited only through
//! the command layer while it runs, and handed back to the repository when
//! the session saves. Input and output are generic async streams so the
//! loop runs the same against a terminal or an in-memory buffer.

use crate::commands::{is_exit_command, parse_input, CommandContext, CommandRegistry};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use chrono::NaiveDate;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

/// Source of "today" for birthday reminders.
pub type Clock = fn() -> NaiveDate;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const RETRY_PROMPT: &str = "Would you like to retry? (y/n, default n)";

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Message to show, if any
    pub message: Option<String>,

    /// Whether the session should stop reading commands
    pub exit: bool,
}

/// An interactive session over one address book.
pub struct Session {
    book: AddressBook,
    repository: Arc<dyn BookRepository>,
    registry: CommandRegistry,
    clock: Clock,
}

impl Session {
    /// Create a session over an already loaded book.
    pub fn new(book: AddressBook, repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book,
            repository,
            registry: CommandRegistry::standard(),
            clock: local_today,
        }
    }

    /// Load the book from `repository` and open a session over it.
    ///
    /// A snapshot that cannot be loaded is reported to the user and replaced
    /// by an empty book; the session still opens.
    pub async fn open<W>(repository: Arc<dyn BookRepository>, writer: &mut W) -> io::Result<Self>
    where
        W: AsyncWrite + Unpin,
    {
        let book = match repository.load().await {
            Ok(book) => {
                info!(records = book.len(), "Address book loaded");
                write_line(writer, "Loaded previous address book").await?;
                book
            }
            Err(e) => {
                warn!(error = %e, "Address book could not be loaded");
                write_line(
                    writer,
                    &format!(
                        "Previous address book could not be loaded. {}\nInitializing new one.",
                        e
                    ),
                )
                .await?;
                AddressBook::new()
            }
        };

        Ok(Self::new(book, repository))
    }

    /// Use `clock` instead of the local date for birthday reminders.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Tokenize and run one line of input. Blank lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let Some(input) = parse_input(line) else {
            return LineOutcome {
                message: None,
                exit: false,
            };
        };

        debug!(command = %input.command, args = input.args.len(), "Dispatching command");

        let mut ctx = CommandContext::new(&mut self.book, (self.clock)());
        let message = self.registry.dispatch(&input.command, &mut ctx, &input.args);

        LineOutcome {
            message: Some(message),
            exit: is_exit_command(&input.command),
        }
    }

    /// Greet the user and process commands until `close`/`exit` or end of input.
    pub async fn run<R, W>(&mut self, reader: &mut R, writer: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(writer, GREETING).await?;

        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let mut line = String::new();
            if reader.read_line(&mut line).await? == 0 {
                info!("Input closed, ending session");
                write_line(writer, "").await?;
                return Ok(());
            }

            let outcome = self.handle_line(&line);
            if let Some(message) = outcome.message {
                write_line(writer, &message).await?;
            }
            if outcome.exit {
                return Ok(());
            }
        }
    }

    /// Save the book, offering to retry while saving fails.
    ///
    /// Returns whether the book was saved.
    pub async fn save<R, W>(&self, reader: &mut R, writer: &mut W) -> io::Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        loop {
            match self.repository.save(&self.book).await {
                Ok(()) => {
                    info!(records = self.book.len(), "Address book saved");
                    write_line(writer, "The address book was saved").await?;
                    return Ok(true);
                }
                Err(e) => {
                    error!(error = %e, "Address book could not be saved");
                    write_line(
                        writer,
                        &format!("The address book could not be saved. Error: {}", e),
                    )
                    .await?;
                    write_line(writer, RETRY_PROMPT).await?;

                    let mut answer = String::new();
                    reader.read_line(&mut answer).await?;
                    if !answer.trim_start().to_lowercase().starts_with('y') {
                        return Ok(false);
                    }
                }
            }
        }
    }
}

async fn write_line<W>(writer: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageResult;
    use async_trait::async_trait;

    struct NullRepository;

    #[async_trait]
    impl BookRepository for NullRepository {
        async fn load(&self) -> StorageResult<AddressBook> {
            Ok(AddressBook::new())
        }

        async fn save(&self, _book: &AddressBook) -> StorageResult<()> {
            Ok(())
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session() -> Session {
        Session::new(AddressBook::new(), Arc::new(NullRepository)).with_clock(fixed_today)
    }

    #[test]
    fn test_handle_line_blank_is_ignored() {
        let mut session = session();
        assert_eq!(
            session.handle_line("   \n"),
            LineOutcome {
                message: None,
                exit: false
            }
        );
    }

    #[test]
    fn test_handle_line_unknown_command() {
        let mut session = session();
        let outcome = session.handle_line("dance");
        assert_eq!(outcome.message.as_deref(), Some("Invalid command."));
        assert!(!outcome.exit);
    }

    #[test]
    fn test_handle_line_exit_is_case_insensitive() {
        let mut session = session();
        let outcome = session.handle_line("EXIT");
        assert_eq!(outcome.message.as_deref(), Some("Good bye!"));
        assert!(outcome.exit);
    }

    #[test]
    fn test_handle_line_uses_clock() {
        let mut session = session();
        session.handle_line("add Bill 0501234567");
        session.handle_line("add-birthday Bill 22.10.1990");
        let outcome = session.handle_line("birthdays");
        assert_eq!(outcome.message.as_deref(), Some("Thursday: Bill"));
        assert_eq!(session.book().len(), 1);
    }
}
