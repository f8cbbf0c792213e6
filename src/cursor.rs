//! Mapping between character offsets in query text and token positions.
//!
//! Offsets count characters, not bytes, matching what a text editor reports
//! as its caret position.

use std::ops::Range;

use crate::ast::Token;

/// Index of the token containing the character at `offset`.
///
/// An offset at the very end of the text selects the last token, so a caret
/// after the final character still has a token to complete. Returns `None`
/// for an empty stream or an offset past the end.
pub fn token_index_at(tokens: &[Token], offset: usize) -> Option<usize> {
    let total: usize = tokens.iter().map(|t| t.value.chars().count()).sum();
    if tokens.is_empty() || offset > total {
        return None;
    }
    if offset == total {
        return Some(tokens.len() - 1);
    }

    let mut end = 0;
    tokens.iter().position(|t| {
        end += t.value.chars().count();
        end > offset
    })
}

/// Character range covered by the token at `index`.
pub fn token_span(tokens: &[Token], index: usize) -> Option<Range<usize>> {
    let token = tokens.get(index)?;
    let start: usize = tokens[..index].iter().map(|t| t.value.chars().count()).sum();
    Some(start..start + token.value.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TokenKind;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Field, "Âge"),
            Token::space(),
            Token::none(">"),
        ]
    }

    #[test]
    fn offsets_map_to_tokens() {
        let tokens = tokens();
        assert_eq!(token_index_at(&tokens, 0), Some(0));
        assert_eq!(token_index_at(&tokens, 2), Some(0));
        assert_eq!(token_index_at(&tokens, 3), Some(1));
        assert_eq!(token_index_at(&tokens, 4), Some(2));
        assert_eq!(token_index_at(&tokens, 5), Some(2));
        assert_eq!(token_index_at(&tokens, 6), None);
        assert_eq!(token_index_at(&[], 0), None);
    }

    #[test]
    fn spans_count_characters() {
        let tokens = tokens();
        assert_eq!(token_span(&tokens, 0), Some(0..3));
        assert_eq!(token_span(&tokens, 2), Some(4..5));
        assert_eq!(token_span(&tokens, 3), None);
    }
}
