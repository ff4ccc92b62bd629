//! Error handling for the CLI application

use std::fmt;

/// CLI-specific error conditions raised by the commands
#[derive(Debug)]
pub enum CliError {
    /// Input or rule file does not exist
    FileNotFound(String),
    /// Rule file or tag pattern is unusable
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
