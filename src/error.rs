//! Error types for the address book collaborators.
//!
//! Value-object and record failures live in [`crate::domain::ContactError`].
//! This module defines the errors of the layers built around the core: the
//! command layer, the snapshot storage and configuration loading.

use crate::domain::ContactError;
use thiserror::Error;

/// Errors that a command handler can report back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// `add` was asked to create a name that is already stored
    #[error("This contact exists {0}.")]
    NameAlreadyExists(String),

    /// The command refers to a name that is not stored
    #[error("This contact does not exist {0}.")]
    NameNotFound(String),

    /// Wrong number of arguments for the command
    #[error("Bad arguments {0:?}.")]
    BadArguments(Vec<String>),

    /// A value object or record rejected the input
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Errors that can occur while loading or saving the address book snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot location is unusable
    #[error("Invalid snapshot location: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
