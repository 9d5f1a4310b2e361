//! CLI support for ruleval
//!
//! Provides programmatic access to the `ruleval` command so other hosts can
//! reuse the same batch evaluation and rendering.

mod check;
mod demo;
mod docs;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use demo::{run_demo, DEMO_EXPRESSIONS};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Expression failed to lex, parse or evaluate
    Eval {
        expression: String,
        source: crate::Error,
    },
    /// JSON rendering error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No expression provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Eval { expression, source } => {
                write!(f, "Error evaluating `{}`: {}", expression, source)
            }
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No expression provided. Pass one as an argument or pipe expressions to stdin."
            ),
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'ruleval docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Eval { source, .. } => Some(source),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
