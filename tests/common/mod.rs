// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use sieve_lang::{
    QueryEngine, Schema,
    ast::{Token, TokenKind},
};

pub const FIELDS_JSON: &str = r#"[
    { "name": "age", "label": "Age", "type": "number",
      "operators": ["Equal", "NotEqual", "GreaterThan", "GreaterThanOrEqual",
                    "LessThan", "LessThanOrEqual", "Blank", "NotBlank"] },
    { "name": "status", "label": "Status", "type": "string",
      "operators": ["Equal", "NotEqual", "In", "NotIn"],
      "values": [{ "name": "Active", "value": 1 }, { "name": "Inactive", "value": 0 }] },
    { "name": "tag", "label": "Tag", "type": "string[]",
      "operators": ["In", "NotIn", "Equal"],
      "values": [{ "name": "A" }, { "name": "B" }, { "name": "C" }] },
    { "name": "name", "label": "Name", "type": "string",
      "operators": ["Equal", "Contain", "StartWith", "EndWith", "NotContain", "Blank", "NotBlank"] },
    { "name": "birthday", "label": "Birthday", "type": "date",
      "operators": ["Equal", "GreaterThan", "LessThan"] },
    { "name": "verified", "label": "Verified", "type": "boolean",
      "operators": ["Equal", "NotEqual"] },
    { "name": "created_at", "label": "Created At", "type": "datetime",
      "operators": ["GreaterThan", "LessThan"] },
    { "name": "opens", "label": "Opens", "type": "time",
      "operators": ["Equal", "GreaterThan"] }
]"#;

pub fn schema() -> Arc<Schema> {
    Arc::new(Schema::from_json(FIELDS_JSON).unwrap())
}

pub fn engine() -> QueryEngine {
    QueryEngine::with_shared(schema())
}

/// Kinds of the non-space tokens.
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .filter(|t| !t.kind.is_space())
        .map(|t| t.kind)
        .collect()
}

pub fn tok(kind: TokenKind, value: &str) -> Token {
    Token::new(kind, value)
}
