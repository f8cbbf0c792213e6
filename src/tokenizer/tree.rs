use std::sync::Arc;

use crate::{
    ast::{Node, Token, TokenKind},
    classifier::Classifier,
    lexer::Lexer,
    output::TextPrinter,
    schema::Schema,
};

/// Tokenizes a rule tree.
///
/// The tree is linearized exactly as [`crate::output::to_text`] prints it and
/// every slot is classified in context, so joining the token values gives
/// the printed text.
#[derive(Debug, Clone)]
pub struct TreeTokenizer {
    lexer: Lexer,
    classifier: Classifier,
    printer: TextPrinter,
}

impl TreeTokenizer {
    pub fn new(schema: Arc<Schema>) -> Self {
        TreeTokenizer {
            lexer: Lexer::new(&schema),
            classifier: Classifier::new(schema),
            printer: TextPrinter::new(),
        }
    }

    pub fn tokenize(&self, tree: &Node) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        for piece in self.printer.tokens(tree) {
            let kind = match piece.kind {
                TokenKind::None => self.lexer.kind_of(&piece.value),
                structural => structural,
            };

            if let Some(token) = self.classifier.classify(&tokens, kind, &piece.value) {
                tokens.push(token);
            }
        }

        log::debug!("tokenized tree into {} tokens", tokens.len());
        tokens
    }

    /// Parses the JSON tree form first; malformed input is normalized.
    pub fn tokenize_json(&self, tree: &serde_json::Value) -> Vec<Token> {
        self.tokenize(&Node::from_json(tree))
    }
}
