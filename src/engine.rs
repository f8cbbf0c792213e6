use std::sync::Arc;

use crate::{
    ast::{Node, Token},
    output::TextPrinter,
    parser::Parser,
    schema::Schema,
    suggester::{Suggester, Suggestions},
    tokenizer::{TextTokenizer, TokenizeError, TreeTokenizer},
    validator::{self, ValidationError},
};

/// Every engine stage over one shared schema.
///
/// All methods take `&self` and keep no state between calls, so one engine
/// can serve any number of threads.
///
/// # Examples
///
/// ```
/// use sieve_lang::{Field, FieldType, Operator, QueryEngine, Schema};
/// use sieve_lang::ast::Node;
///
/// let schema = Schema::new(vec![
///     Field::new("age", "Age", FieldType::Number)
///         .with_operators(&[Operator::Equal, Operator::GreaterThan]),
/// ]).unwrap();
/// let engine = QueryEngine::new(schema);
///
/// let tree = engine.text_to_tree("Age > 30").unwrap();
/// assert_eq!(tree, Node::rule("Age", ">", "30"));
/// assert_eq!(engine.tree_to_text(&tree), "Age > 30");
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine {
    schema: Arc<Schema>,
    text_tokenizer: TextTokenizer,
    tree_tokenizer: TreeTokenizer,
    suggester: Suggester,
    printer: TextPrinter,
}

impl QueryEngine {
    pub fn new(schema: Schema) -> Self {
        Self::with_shared(Arc::new(schema))
    }

    pub fn with_shared(schema: Arc<Schema>) -> Self {
        QueryEngine {
            text_tokenizer: TextTokenizer::new(schema.clone()),
            tree_tokenizer: TreeTokenizer::new(schema.clone()),
            suggester: Suggester::new(schema.clone()),
            printer: TextPrinter::new(),
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        self.text_tokenizer.tokenize(text)
    }

    /// Like [`tokenize`](Self::tokenize), treating a failure as "no tokens".
    pub fn tokenize_lossy(&self, text: &str) -> Vec<Token> {
        self.tokenize(text).unwrap_or_else(|e| {
            log::warn!("{}", e);
            Vec::new()
        })
    }

    pub fn tokenize_tree(&self, tree: &Node) -> Vec<Token> {
        self.tree_tokenizer.tokenize(tree)
    }

    pub fn text_to_tree(&self, text: &str) -> Result<Node, TokenizeError> {
        let tokens = self.tokenize(text)?;
        Ok(Parser::new(tokens).parse())
    }

    pub fn tree_to_text(&self, tree: &Node) -> String {
        self.printer.print(tree)
    }

    pub fn suggest(&self, tokens: &[Token], cursor: Option<usize>) -> Suggestions {
        self.suggester.suggest(tokens, cursor)
    }

    pub fn validate(&self, tokens: &[Token]) -> Result<(), ValidationError> {
        validator::validate(tokens)
    }

    /// Whether `text` is a complete, valid query. Text that cannot be
    /// tokenized is invalid.
    pub fn is_valid_text(&self, text: &str) -> bool {
        self.tokenize(text)
            .map(|tokens| validator::is_valid(&tokens))
            .unwrap_or(false)
    }
}
