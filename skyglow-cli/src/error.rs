//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use skyglow::config::ConfigError;
use skyglow::enrich::EnrichError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigError),
    /// Invalid command-line argument
    InvalidArgument(String),
    /// CSV enrichment failure
    Enrich(EnrichError),
    /// One or more configured maps failed validation
    Validation { failed: usize },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check your config file, or recreate it with: skyglow init --force");
            }
            CliError::Validation { .. } => {
                eprintln!();
                eprintln!("Run 'skyglow regions' to see where each map file is expected.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Enrich(e) => write!(f, "Enrichment failed: {}", e),
            CliError::Validation { failed } => {
                write!(f, "{} map(s) failed validation", failed)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Enrich(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<EnrichError> for CliError {
    fn from(e: EnrichError) -> Self {
        CliError::Enrich(e)
    }
}
