//! Whole-query validation for submission.
//!
//! Tokenization never fails on bad input; it marks it with `None` tokens.
//! This pass looks at a finished stream and says whether the query as a
//! whole is complete and well-formed, so a host can flag it without
//! interrupting typing.

use crate::ast::{Token, TokenKind};

/// Why a token stream is not a complete query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A token was not admissible where it appears
    #[error("'{value}' is not valid here (token {index})")]
    InvalidToken { index: usize, value: String },

    /// Brackets do not pair up
    #[error("unbalanced brackets: {open} opened, {close} closed")]
    UnbalancedBrackets { open: usize, close: usize },

    /// The query stops in the middle of a rule
    #[error("query is incomplete after {last}")]
    Incomplete { last: TokenKind },
}

/// Checks that `tokens` form a complete query. An empty stream is valid.
pub fn validate(tokens: &[Token]) -> Result<(), ValidationError> {
    if let Some((index, token)) = tokens.iter().enumerate().find(|(_, t)| t.kind.is_none()) {
        return Err(ValidationError::InvalidToken {
            index,
            value: token.value.clone(),
        });
    }

    let open = tokens.iter().filter(|t| t.kind.is_open_group()).count();
    let close = tokens.iter().filter(|t| t.kind.is_close_group()).count();
    if open != close {
        return Err(ValidationError::UnbalancedBrackets { open, close });
    }

    match tokens.iter().rev().find(|t| !t.kind.is_space()) {
        Some(last) if !last.kind.ends_rule() => Err(ValidationError::Incomplete { last: last.kind }),
        _ => Ok(()),
    }
}

pub fn is_valid(tokens: &[Token]) -> bool {
    validate(tokens).is_ok()
}
