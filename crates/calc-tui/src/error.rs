//! Error types for the terminal shell

use std::path::Path;

use calc_core::CalcError;
use thiserror::Error;

/// Result type for shell operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors that can occur outside the calculator itself
#[derive(Debug, Error)]
pub enum ShellError {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Button labels could not be turned into events
    #[error("Calculator error: {0}")]
    Calc(#[from] CalcError),

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl ShellError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a configuration error tied to a file
    #[must_use]
    pub fn config_file(path: &Path, cause: impl std::fmt::Display) -> Self {
        Self::config(format!("{}: {cause}", path.display()))
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
