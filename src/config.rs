//! Configuration management for the address book.
//!
//! This module loads configuration from environment variables, reading an
//! optional `.env` file first. Nothing is printed to stdout while loading.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book snapshot.
pub const DEFAULT_STORAGE_PATH: &str = "address_book.json";

/// Default log filter when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON snapshot (default: `address_book.json`)
    pub storage_path: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Snapshot file (default: `address_book.json`)
    /// - `LOG_LEVEL`: One of off, error, warn, info, debug, trace (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let storage_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL)?;

        Ok(Config {
            storage_path,
            log_level,
        })
    }

    /// Parse a log level variable, case-insensitively, with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
