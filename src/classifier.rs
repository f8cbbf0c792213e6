//! Contextual admissibility of lexically recognized text.
//!
//! Given the tokens accepted so far and a freshly recognized `(kind, text)`
//! pair, the classifier decides which token to emit. Text that is not valid
//! at its position is emitted as [`TokenKind::None`] instead of being dropped,
//! so a half-typed query keeps every character.

use std::sync::Arc;

use crate::{
    ast::{Token, TokenKind, ValueKind},
    schema::Schema,
};

/// What the classifier knows about the stream so far.
struct Context<'t> {
    last: Option<&'t Token>,
    last_field: Option<&'t Token>,
    last_operator: Option<&'t Token>,
    open_groups: usize,
    close_groups: usize,
}

impl<'t> Context<'t> {
    fn new(prior: &'t [Token]) -> Self {
        let significant = prior.iter().filter(|t| !t.kind.is_space());

        Context {
            last: significant.clone().last(),
            last_field: prior.iter().rev().find(|t| t.kind.is_field()),
            last_operator: prior.iter().rev().find(|t| t.kind.is_operator()),
            open_groups: significant.clone().filter(|t| t.kind.is_open_group()).count(),
            close_groups: significant.filter(|t| t.kind.is_close_group()).count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    schema: Arc<Schema>,
}

impl Classifier {
    pub fn new(schema: Arc<Schema>) -> Self {
        Classifier { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Decides the token for `value`, recognized as `kind`, following `prior`.
    ///
    /// Returns `None` only for a space directly after another space.
    pub fn classify(&self, prior: &[Token], kind: TokenKind, value: &str) -> Option<Token> {
        if kind.is_space() {
            if prior.last().is_some_and(|t| t.kind.is_space()) {
                return None;
            }
            return Some(Token::new(TokenKind::Space, value));
        }

        let ctx = Context::new(prior);
        let token = self.admit(&ctx, kind, value).unwrap_or_else(|| Token::none(value));

        log::trace!("classified {:?} as {} ({})", value, token.kind, kind);
        Some(token)
    }

    fn admit(&self, ctx: &Context<'_>, kind: TokenKind, value: &str) -> Option<Token> {
        let Some(last) = ctx.last.map(|t| t.kind) else {
            return match kind {
                TokenKind::Field | TokenKind::Literal => self.field_token(value),
                k if k.is_open_group() => Some(Token::new(kind, value)),
                _ => None,
            };
        };

        match kind {
            TokenKind::Field => {
                if last.is_pre_field() {
                    self.field_token(value)
                } else if last.is_comparer() || last.is_separator() {
                    self.value_token(ctx, ValueKind::Generic, value)
                } else {
                    None
                }
            }
            TokenKind::Literal => {
                if last.is_comparer() || last.is_separator() {
                    self.value_token(ctx, ValueKind::Generic, value)
                } else if last.is_pre_field() {
                    self.field_token(value)
                } else {
                    None
                }
            }
            TokenKind::Value(value_kind) => {
                if last.is_comparer() || last.is_separator() {
                    self.value_token(ctx, value_kind, value)
                } else {
                    None
                }
            }
            TokenKind::Operator(op) => {
                let field = ctx.last.filter(|t| t.kind.is_field())?;
                self.schema
                    .find_field(&field.value)
                    .filter(|f| f.allows(op))
                    .map(|_| Token::new(kind, value))
            }
            TokenKind::Logic(_) => last.ends_rule().then(|| Token::new(kind, value)),
            TokenKind::OpenBracket => {
                (last.is_logic() || last.is_open_group()).then(|| Token::new(kind, value))
            }
            TokenKind::CloseBracket => (ctx.open_groups > ctx.close_groups && last.ends_rule())
                .then(|| Token::new(kind, value)),
            TokenKind::Comma | TokenKind::Slash => {
                let list_operator = ctx
                    .last_operator
                    .is_some_and(|t| t.kind.is_comparer() && t.kind.is_multi_allowed());
                (list_operator && last.is_value()).then(|| Token::new(kind, value))
            }
            TokenKind::None | TokenKind::Space => None,
        }
    }

    fn field_token(&self, value: &str) -> Option<Token> {
        self.schema
            .find_field(value)
            .map(|_| Token::new(TokenKind::Field, value))
    }

    /// A value for the most recent field, typed only while the most recent
    /// operator still expects one.
    fn value_token(&self, ctx: &Context<'_>, value_kind: ValueKind, value: &str) -> Option<Token> {
        let field = self.schema.find_field(&ctx.last_field?.value)?;
        if !self.schema.is_value_allowed(field, value) {
            return None;
        }

        ctx.last_operator
            .is_some_and(|t| t.kind.is_comparer())
            .then(|| Token::new(TokenKind::Value(value_kind), value))
    }
}
