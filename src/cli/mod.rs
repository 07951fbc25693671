//! CLI support for jql2
//!
//! Provides programmatic access to the jql2 CLI functionality for
//! embedding in other tools.

mod check;
mod convert;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::query_to_json;

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Parser error
    Parse(crate::ParseError),
    /// Generator error
    Generate(crate::GenerateError),
    /// IO error
    Io(io::Error),
    /// No query provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Generate(e) => write!(f, "Generate error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(
                    f,
                    "No query provided. Pass it as an argument or pipe it to stdin."
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Generate(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::GenerateError> for CliError {
    fn from(e: crate::GenerateError) -> Self {
        CliError::Generate(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
