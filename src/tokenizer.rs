//! Tokenizers turning query text or a rule tree into classified tokens.
//!
//! - [`TextTokenizer`] scans free-form text. Its output is lossless: the
//!   token values concatenate back to the input.
//! - [`TreeTokenizer`] linearizes a tree and classifies each slot, so the
//!   rule builder can show the same token kinds as the text editor.

mod tree;

use std::sync::Arc;

pub use tree::TreeTokenizer;

use crate::{
    ast::{Token, TokenKind},
    classifier::Classifier,
    lexer::{self, Lexer},
    schema::Schema,
};

/// Errors that can occur while scanning text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// Nothing could be extracted at this byte offset
    #[error("could not tokenize input at offset {offset}")]
    Unrecognized { offset: usize },
}

/// Scans query text into tokens.
#[derive(Debug, Clone)]
pub struct TextTokenizer {
    lexer: Lexer,
    classifier: Classifier,
}

impl TextTokenizer {
    pub fn new(schema: Arc<Schema>) -> Self {
        TextTokenizer {
            lexer: Lexer::new(&schema),
            classifier: Classifier::new(schema),
        }
    }

    /// Tokenizes `text`.
    ///
    /// Each step takes the prefix matched by the pattern table; failing that a
    /// whitespace run becomes a space and a non-whitespace run becomes a
    /// `None` token.
    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < text.len() {
            let rest = &text[offset..];

            let (kind, len) = if let Some(m) = self.lexer.find_match(rest) {
                (m.kind, m.len)
            } else if let Some(len) = lexer::whitespace_len(rest) {
                (TokenKind::Space, len)
            } else if let Some(len) = lexer::non_whitespace_len(rest) {
                (TokenKind::None, len)
            } else {
                return Err(TokenizeError::Unrecognized { offset });
            };

            if let Some(token) = self.classifier.classify(&tokens, kind, &rest[..len]) {
                tokens.push(token);
            }
            offset += len;
        }

        log::debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
        Ok(tokens)
    }
}
