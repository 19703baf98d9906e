//! Tracing subscriber setup
//!
//! The interactive shell owns the terminal, so it only logs to a file. The
//! headless `press` command logs to stderr.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{ShellError, ShellResult};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// A file, truncated on start
    File(PathBuf),
    /// No subscriber at all
    Off,
}

impl LogTarget {
    /// Picks the target for a command
    ///
    /// A log file always wins; otherwise only headless commands may use
    /// stderr.
    #[must_use]
    pub fn select(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Default filter directive for a `-v` count
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter: `RUST_LOG` wins over the `-v` count
#[must_use]
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Installs the global subscriber
pub fn init(verbosity: u8, target: &LogTarget) -> ShellResult<()> {
    let filter = env_filter(verbosity);
    let result = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| ShellError::logging(e.to_string()))
}
