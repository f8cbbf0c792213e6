pub mod ast;
pub mod classifier;
pub mod cursor;
pub mod engine;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod schema;
pub mod suggester;
pub mod tokenizer;
pub mod transform;
pub mod validator;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Logic, Node, Operator, Token, TokenKind, ValueKind};
pub use engine::QueryEngine;
pub use output::{TextPrinter, to_text};
pub use parser::{Parser, TextQueryConverter};
pub use schema::{Field, FieldType, Lookup, Schema, SchemaError};
pub use suggester::{Suggester, Suggestion, Suggestions};
pub use tokenizer::{TextTokenizer, TokenizeError, TreeTokenizer};
pub use transform::EditError;
pub use validator::ValidationError;
