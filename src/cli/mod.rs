//! CLI support for sieve-lang
//!
//! Provides programmatic access to the `sieve` commands so other tools can
//! embed them.

mod check;
mod convert;
mod docs;
mod suggest;

pub use check::{CheckOptions, CheckReport, execute_check, format_tokens};
pub use convert::{text_to_tree_json, tree_json_to_text};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use suggest::{SuggestLine, execute_suggest};

use std::{fs, io, path::Path};

use crate::{Schema, SchemaError, TokenizeError, ValidationError};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Schema file could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    /// Query text could not be tokenized
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
    /// Query is not complete or contains invalid tokens
    #[error("Invalid query: {0}")]
    Invalid(#[from] ValidationError),
    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
    /// Cursor offset outside the query
    #[error("Cursor offset {0} is outside the query")]
    Cursor(usize),
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'sieve docs' to see available categories.")]
    UnknownCategory(String),
}

/// Reads a schema file.
pub fn load_schema(path: &Path) -> Result<Schema, CliError> {
    let json = fs::read_to_string(path)?;
    log::debug!("loading schema from {}", path.display());
    Ok(Schema::from_json(&json)?)
}
