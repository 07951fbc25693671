//! Validate and canonicalize JCR-SQL2 queries

use super::{query_to_json, CliError};
use crate::{generate, parse};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The JCR-SQL2 query to check
    pub query: String,
    /// Only validate syntax, don't print the canonical form
    pub syntax_only: bool,
    /// Print the parsed QOM as JSON instead of the canonical form
    pub dump: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Canonical regenerated query text
    Canonical(String),
    /// JSON view of the parsed QOM
    Dump(serde_json::Value),
}

/// Parse a query and produce the requested view of it.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = parse(&options.query)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    if options.dump {
        return Ok(CheckResult::Dump(query_to_json(&query)));
    }
    Ok(CheckResult::Canonical(generate(&query)?))
}
