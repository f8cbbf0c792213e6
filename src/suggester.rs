//! Completion candidates for a cursor position.
//!
//! The suggester looks at the nearest non-space token before the cursor and
//! offers what may come next: field labels, operator labels, lookup names or
//! logic words. Each [`Suggestion`] knows how to splice itself into the
//! token stream without touching anything after the cursor.

use std::{collections::HashSet, sync::Arc};

use crate::{
    ast::{Logic, Token, TokenKind},
    schema::{Field, Schema},
    value::{quote_if_needed, unquote},
};

/// A candidate next item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    cursor: Option<usize>,
    replaces_current: bool,
}

impl Suggestion {
    /// Whether applying this suggestion replaces the token under the cursor
    /// instead of inserting after it.
    pub fn replaces_current(&self) -> bool {
        self.replaces_current
    }

    /// Splices the candidate into `tokens`, the stream it was computed for.
    ///
    /// Tokens before the cursor are kept, the cursor token is kept unless it
    /// is being replaced, the candidate is inserted as a `None` token, and the
    /// remaining tokens follow unchanged. A single space is appended when
    /// nothing follows.
    pub fn apply(&self, tokens: &[Token]) -> Vec<Token> {
        let at = self.cursor.unwrap_or(tokens.len()).min(tokens.len());
        let mut out: Vec<Token> = tokens[..at].to_vec();

        if let Some(current) = tokens.get(at)
            && !self.replaces_current
        {
            out.push(current.clone());
        }

        out.push(Token::none(self.value.as_str()));

        let rest = tokens.get(at + 1..).unwrap_or_default();
        if rest.is_empty() {
            out.push(Token::space());
        }
        out.extend_from_slice(rest);
        out
    }
}

/// Result of [`Suggester::suggest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub suggestions: Vec<Suggestion>,
    /// The token under the cursor, if any.
    pub selected_token: Option<Token>,
}

impl Suggestions {
    pub fn values(&self) -> Vec<&str> {
        self.suggestions.iter().map(|s| s.value.as_str()).collect()
    }
}

/// Which slot the candidates fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Field,
    Operator,
    Value,
    Logic,
}

impl Target {
    /// Whether a token of `kind` at the cursor occupies this slot already.
    fn is_filled_by(self, kind: TokenKind) -> bool {
        kind.is_none()
            || match self {
                Target::Field => kind.is_field(),
                Target::Operator => kind.is_operator(),
                Target::Value => kind.is_value(),
                Target::Logic => kind.is_logic(),
            }
    }
}

#[derive(Debug, Clone)]
pub struct Suggester {
    schema: Arc<Schema>,
}

impl Suggester {
    pub fn new(schema: Arc<Schema>) -> Self {
        Suggester { schema }
    }

    /// Candidates for the token at `cursor` (an index into `tokens`). Without
    /// a cursor the candidates continue the end of the stream.
    pub fn suggest(&self, tokens: &[Token], cursor: Option<usize>) -> Suggestions {
        let prior = match cursor {
            Some(i) => &tokens[..i.min(tokens.len())],
            None => tokens,
        };
        let selected_token = cursor.and_then(|i| tokens.get(i)).cloned();
        let last = prior.iter().rev().find(|t| !t.kind.is_space());

        let (target, items) = match last {
            None => (Target::Field, self.schema.labels()),
            Some(token) => match token.kind {
                TokenKind::Logic(_) | TokenKind::OpenBracket => (Target::Field, self.schema.labels()),
                kind if kind.ends_rule() => (Target::Logic, logic_words()),
                kind if kind.is_comparer() => (Target::Value, self.lookups(prior, &HashSet::new())),
                TokenKind::Comma | TokenKind::Slash => {
                    (Target::Value, self.lookups(prior, &used_values(prior)))
                }
                TokenKind::Field => (Target::Operator, self.operator_labels(&token.value)),
                _ => (Target::Field, Vec::new()),
            },
        };

        let replaces_current = selected_token
            .as_ref()
            .is_some_and(|t| target.is_filled_by(t.kind));

        log::debug!(
            "{} suggestions for {:?} (replace current: {})",
            items.len(),
            target,
            replaces_current
        );

        Suggestions {
            suggestions: items
                .into_iter()
                .map(|value| Suggestion {
                    value,
                    cursor,
                    replaces_current,
                })
                .collect(),
            selected_token,
        }
    }

    fn target_field(&self, prior: &[Token]) -> Option<&Field> {
        let field = prior.iter().rev().find(|t| t.kind.is_field())?;
        self.schema.find_field(&field.value)
    }

    /// Lookup names of the field being filled, minus the ones in `used`,
    /// quoted the way the text form needs them.
    fn lookups(&self, prior: &[Token], used: &HashSet<String>) -> Vec<String> {
        let Some(field) = self.target_field(prior) else {
            return Vec::new();
        };

        field
            .values
            .iter()
            .filter(|lookup| {
                let by_name = used.contains(&lookup.name.to_lowercase());
                let by_value = !lookup.value.is_empty() && used.contains(&lookup.value.to_lowercase());
                !by_name && !by_value
            })
            .map(|lookup| quote_if_needed(&lookup.name))
            .collect()
    }

    fn operator_labels(&self, field: &str) -> Vec<String> {
        self.schema
            .find_field(field)
            .map(|f| f.operators.iter().map(|op| op.label().to_string()).collect())
            .unwrap_or_default()
    }
}

fn logic_words() -> Vec<String> {
    vec![Logic::And.label().to_string(), Logic::Or.label().to_string()]
}

/// Values already present in the list being typed, lowercased.
fn used_values(prior: &[Token]) -> HashSet<String> {
    prior
        .iter()
        .rev()
        .take_while(|t| !t.kind.is_field())
        .filter(|t| t.kind.is_value())
        .map(|t| unquote(&t.value).to_lowercase())
        .collect()
}
