//! Prefix matching of query text against the lexical pattern table.
//!
//! Matching runs in three phases and the first hit wins:
//!
//! 1. structural and operator patterns, in a fixed priority order (`>=` before
//!    `>`, `not equal` before `equal`, ...)
//! 2. schema field labels and names, longest first
//! 3. generic literals: quoted strings, datetime, date, time, number, boolean,
//!    bare word
//!
//! The lexer only says what a piece of text *looks like*; whether it is
//! admissible where it appears is decided by [`crate::classifier`].

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    ast::{Logic, Operator, TokenKind, ValueKind},
    schema::Schema,
};

struct Pattern {
    regex: Regex,
    kind: TokenKind,
}

fn pattern(source: &str, kind: TokenKind) -> Pattern {
    Pattern {
        regex: Regex::new(&format!("(?i)^(?:{})", source)).expect("lexer pattern is valid"),
        kind,
    }
}

fn op(operator: Operator) -> TokenKind {
    TokenKind::Operator(operator)
}

static STRUCTURAL_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        pattern(r"\(", TokenKind::OpenBracket),
        pattern(r"\)", TokenKind::CloseBracket),
        pattern(r",", TokenKind::Comma),
        pattern(r"/", TokenKind::Slash),
        pattern(r"and\b", TokenKind::Logic(Logic::And)),
        pattern(r"&&", TokenKind::Logic(Logic::And)),
        pattern(r"or\b", TokenKind::Logic(Logic::Or)),
        pattern(r"\|\|", TokenKind::Logic(Logic::Or)),
        pattern(r"=", op(Operator::Equal)),
        pattern(r"equal\b", op(Operator::Equal)),
        pattern(r"!=", op(Operator::NotEqual)),
        pattern(r"not equal\b", op(Operator::NotEqual)),
        pattern(r">=", op(Operator::GreaterThanOrEqual)),
        pattern(r"greater than or equal\b", op(Operator::GreaterThanOrEqual)),
        pattern(r">", op(Operator::GreaterThan)),
        pattern(r"greater than\b", op(Operator::GreaterThan)),
        pattern(r"<=", op(Operator::LessThanOrEqual)),
        pattern(r"less than or equal\b", op(Operator::LessThanOrEqual)),
        pattern(r"<", op(Operator::LessThan)),
        pattern(r"less than\b", op(Operator::LessThan)),
        pattern(r"\[\]", op(Operator::Blank)),
        pattern(r"blank\b", op(Operator::Blank)),
        pattern(r"!\[\]", op(Operator::NotBlank)),
        pattern(r"not blank\b", op(Operator::NotBlank)),
        pattern(r"~\*", op(Operator::StartWith)),
        pattern(r"start with\b", op(Operator::StartWith)),
        pattern(r"!~\*", op(Operator::NotStartWith)),
        pattern(r"not start with\b", op(Operator::NotStartWith)),
        pattern(r"\*~", op(Operator::EndWith)),
        pattern(r"end with\b", op(Operator::EndWith)),
        pattern(r"!\*~", op(Operator::NotEndWith)),
        pattern(r"not end with\b", op(Operator::NotEndWith)),
        pattern(r"~", op(Operator::Contain)),
        pattern(r"contain\b", op(Operator::Contain)),
        pattern(r"!~", op(Operator::NotContain)),
        pattern(r"not contain\b", op(Operator::NotContain)),
        pattern(r"in\b", op(Operator::In)),
        pattern(r"not in\b", op(Operator::NotIn)),
    ]
});

static LITERAL_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        pattern(r#""[^"]*""#, TokenKind::Value(ValueKind::String)),
        pattern(r"'[^']*'", TokenKind::Value(ValueKind::String)),
        pattern(
            r"\d\d\d\d-\d\d-\d\d \d\d:\d\d(:\d\d)?",
            TokenKind::Value(ValueKind::DateTime),
        ),
        pattern(r"\d\d\d\d-\d\d-\d\d", TokenKind::Value(ValueKind::Date)),
        pattern(r"\d\d:\d\d(:\d\d)?", TokenKind::Value(ValueKind::Time)),
        pattern(r"[0-9]+([.][0-9]+)?", TokenKind::Value(ValueKind::Number)),
        pattern(r"(true|false)\b", TokenKind::Value(ValueKind::Boolean)),
        pattern(r"[a-zA-Z0-9_\-]+", TokenKind::Literal),
    ]
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+").expect("whitespace pattern is valid"));

static NON_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+").expect("non-whitespace pattern is valid"));

/// A recognized prefix: its lexical kind and byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexMatch {
    pub kind: TokenKind,
    pub len: usize,
}

/// Field names and labels, longest first so that `Created At` wins over
/// `Created`. At equal length labels precede names.
#[derive(Debug, Clone, Default)]
struct FieldIndex {
    keys: Vec<String>,
}

impl FieldIndex {
    fn new(schema: &Schema) -> Self {
        let labels = schema.fields().iter().map(|f| f.label.clone());
        let names = schema.fields().iter().map(|f| f.name.clone());

        let mut keys: Vec<String> = labels.chain(names).filter(|k| !k.is_empty()).collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));

        FieldIndex { keys }
    }

    fn find(&self, text: &str) -> Option<usize> {
        self.keys
            .iter()
            .find_map(|key| prefix_len_ignore_case(text, key).filter(|&len| is_word_end(text, key, len)))
    }
}

/// Byte length of `key` at the start of `text`, compared case-insensitively.
fn prefix_len_ignore_case(text: &str, key: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let mut end = 0;

    for k in key.chars() {
        let (i, c) = chars.next()?;
        if !c.to_lowercase().eq(k.to_lowercase()) {
            return None;
        }
        end = i + c.len_utf8();
    }

    Some(end)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Mirrors a regex `\b` placed after the key.
fn is_word_end(text: &str, key: &str, len: usize) -> bool {
    let next = text[len..].chars().next();
    match key.chars().last() {
        Some(last) if is_word_char(last) => !next.is_some_and(is_word_char),
        _ => next.is_some_and(is_word_char),
    }
}

/// The pattern table for one schema.
#[derive(Debug, Clone)]
pub struct Lexer {
    fields: FieldIndex,
}

impl Lexer {
    pub fn new(schema: &Schema) -> Self {
        Lexer {
            fields: FieldIndex::new(schema),
        }
    }

    /// Matches a prefix of `text` against the pattern table.
    pub fn find_match(&self, text: &str) -> Option<LexMatch> {
        if let Some(m) = first_match(&STRUCTURAL_PATTERNS, text) {
            return Some(m);
        }

        if let Some(len) = self.fields.find(text) {
            return Some(LexMatch {
                kind: TokenKind::Field,
                len,
            });
        }

        first_match(&LITERAL_PATTERNS, text)
    }

    /// Lexical kind of a complete piece of text, as used for tree slots.
    ///
    /// Text the table only partially covers is treated as a bare word.
    pub fn kind_of(&self, text: &str) -> TokenKind {
        match self.find_match(text) {
            Some(m) if m.len == text.len() => m.kind,
            _ => TokenKind::Literal,
        }
    }
}

/// Whether `text` reads back as exactly one unquoted literal, whatever the
/// schema.
///
/// Words the structural table claims (`and`, `in`, `equal`, ...) and text the
/// literal table only partially covers (`a/b`, `3.5kg`) are not bare.
pub fn is_bare_literal(text: &str) -> bool {
    if first_match(&STRUCTURAL_PATTERNS, text).is_some() {
        return false;
    }
    first_match(&LITERAL_PATTERNS, text)
        .is_some_and(|m| m.len == text.len() && m.kind != TokenKind::Value(ValueKind::String))
}

fn first_match(patterns: &[Pattern], text: &str) -> Option<LexMatch> {
    patterns.iter().find_map(|p| {
        p.regex
            .find(text)
            .filter(|m| !m.is_empty())
            .map(|m| LexMatch {
                kind: p.kind,
                len: m.end(),
            })
    })
}

/// Byte length of the whitespace run at the start of `text`.
pub fn whitespace_len(text: &str) -> Option<usize> {
    WHITESPACE.find(text).map(|m| m.end())
}

/// Byte length of the non-whitespace run at the start of `text`.
pub fn non_whitespace_len(text: &str) -> Option<usize> {
    NON_WHITESPACE.find(text).map(|m| m.end())
}
