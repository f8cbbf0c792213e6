use std::fmt;

use crate::ast::{Logic, Operator};

/// The typed flavour of a value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A bare word accepted as a value, e.g. a lookup name
    Generic,
    /// Quoted text
    ///
    /// # Examples
    /// ```text
    /// "New York"
    /// 'draft'
    /// ```
    String,
    /// Integer or decimal number
    Number,
    /// `true` or `false`
    Boolean,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM` or `HH:MM:SS`
    Time,
    /// `YYYY-MM-DD HH:MM[:SS]`
    DateTime,
}

/// Kind of a token.
///
/// The set is closed: every token produced by a tokenizer carries exactly one
/// kind, and text that is not admissible where it appears becomes
/// [`TokenKind::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Recognized text that is not valid at its position
    None,

    /// A run of whitespace
    Space,

    /// A field name or label from the schema
    Field,

    /// A bare word not yet classified. Only the lexer produces this kind;
    /// classification turns it into a field, a value or `None`.
    Literal,

    /// `and` / `or`
    Logic(Logic),

    /// Comparison operator, with or without a value
    Operator(Operator),

    /// A value accepted for the current field
    Value(ValueKind),

    /// `(`
    OpenBracket,

    /// `)`
    CloseBracket,

    /// `,` between list values
    Comma,

    /// `/` between list values
    Slash,
}

impl TokenKind {
    pub fn is_none(self) -> bool {
        self == TokenKind::None
    }

    pub fn is_space(self) -> bool {
        self == TokenKind::Space
    }

    pub fn is_field(self) -> bool {
        self == TokenKind::Field
    }

    /// Any operator, including the ones that take no value.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    /// Operators that must be followed by a value.
    pub fn is_comparer(self) -> bool {
        matches!(self, TokenKind::Operator(op) if op.takes_value())
    }

    /// `Blank` / `NotBlank`.
    pub fn is_not_comparer(self) -> bool {
        matches!(self, TokenKind::Operator(op) if !op.takes_value())
    }

    pub fn is_multi_allowed(self) -> bool {
        matches!(self, TokenKind::Operator(op) if op.allows_multiple())
    }

    pub fn is_value(self) -> bool {
        matches!(self, TokenKind::Value(_))
    }

    pub fn is_logic(self) -> bool {
        matches!(self, TokenKind::Logic(_))
    }

    pub fn is_open_group(self) -> bool {
        self == TokenKind::OpenBracket
    }

    pub fn is_close_group(self) -> bool {
        self == TokenKind::CloseBracket
    }

    pub fn is_separator(self) -> bool {
        matches!(self, TokenKind::Comma | TokenKind::Slash)
    }

    /// Kinds after which a field may start. The start of the stream also
    /// qualifies; callers handle that case with an `Option`.
    pub fn is_pre_field(self) -> bool {
        self.is_open_group() || self.is_logic()
    }

    /// Whether a rule is complete once this kind has been read.
    pub fn ends_rule(self) -> bool {
        self.is_value() || self.is_close_group() || self.is_not_comparer()
    }

    /// Stable name, suitable for styling hooks.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::None => "None",
            TokenKind::Space => "Space",
            TokenKind::Field => "Field",
            TokenKind::Literal => "Literal",
            TokenKind::Logic(logic) => logic.label(),
            TokenKind::Operator(op) => op.identifier(),
            TokenKind::Value(ValueKind::Generic) => "Value",
            TokenKind::Value(ValueKind::String) => "StringValue",
            TokenKind::Value(ValueKind::Number) => "NumberValue",
            TokenKind::Value(ValueKind::Boolean) => "BooleanValue",
            TokenKind::Value(ValueKind::Date) => "DateValue",
            TokenKind::Value(ValueKind::Time) => "TimeValue",
            TokenKind::Value(ValueKind::DateTime) => "DateTimeValue",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
            TokenKind::Comma => "Comma",
            TokenKind::Slash => "Slash",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of query text.
///
/// `value` is the exact source text, so joining the values of a text
/// tokenizer's output reproduces its input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    /// An unclassified token carrying raw text.
    pub fn none(value: impl Into<String>) -> Self {
        Token::new(TokenKind::None, value)
    }

    /// A single-space separator.
    pub fn space() -> Self {
        Token::new(TokenKind::Space, " ")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

/// Joins token values back into query text.
pub fn join(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value.as_str()).collect()
}
