//! Completion candidates for the CLI

use super::CliError;
use crate::{QueryEngine, ast::tokens::join, cursor::token_index_at};

/// One candidate and the query text it would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestLine {
    pub value: String,
    pub preview: String,
}

/// Suggest completions for `query` with the caret at character `offset`
/// (end of the query when absent).
pub fn execute_suggest(
    engine: &QueryEngine,
    query: &str,
    offset: Option<usize>,
) -> Result<Vec<SuggestLine>, CliError> {
    let tokens = engine.tokenize(query)?;

    let cursor = match offset {
        None => None,
        Some(0) if tokens.is_empty() => None,
        Some(offset) => Some(token_index_at(&tokens, offset).ok_or(CliError::Cursor(offset))?),
    };

    let suggestions = engine.suggest(&tokens, cursor);
    Ok(suggestions
        .suggestions
        .iter()
        .map(|s| SuggestLine {
            value: s.value.clone(),
            preview: join(&s.apply(&tokens)),
        })
        .collect())
}
