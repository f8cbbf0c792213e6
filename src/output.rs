//! Tree to text conversion.
//!
//! A tree is linearized into the same token shapes the text tokenizer
//! produces and then joined. Groups are bracketed; the outermost bracket pair
//! is dropped because the root is printed as if it were the only child of an
//! implicit group.
//!
//! # Examples
//!
//! ```
//! use sieve_lang::ast::Node;
//! use sieve_lang::output::to_text;
//!
//! let tree = Node::group("and", vec![
//!     Node::rule("Age", ">", "30"),
//!     Node::rule_list("Tag", "in", &["A", "New York"]),
//! ]);
//!
//! assert_eq!(to_text(&tree), "Age > 30 and Tag in A / \"New York\"");
//! ```

use crate::{
    ast::{Group, Node, Rule, RuleValue, Slot, Token, TokenKind, tokens::join},
    value::quote_if_needed,
};

/// Linearizes trees into text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPrinter;

impl TextPrinter {
    pub fn new() -> Self {
        TextPrinter
    }

    pub fn print(&self, node: &Node) -> String {
        join(&self.tokens(node))
    }

    /// The linear token stream for `node`.
    ///
    /// Slot text is emitted as [`TokenKind::None`]; only brackets, spaces and
    /// list slashes carry structural kinds. Empty slots are skipped.
    pub fn tokens(&self, node: &Node) -> Vec<Token> {
        let mut out = Vec::new();

        match node {
            Node::Group(group) => {
                self.push_group(group, &mut out);
                strip_outer_brackets(&mut out);
            }
            // A root rule is printed as the sole child of an implicit group,
            // whose brackets would be stripped right away.
            Node::Rule(rule) => self.push_rule(rule, &mut out),
        }

        out
    }

    fn push_group(&self, group: &Group, out: &mut Vec<Token>) {
        out.push(Token::new(TokenKind::OpenBracket, "("));

        for (i, child) in group.children.iter().enumerate() {
            if i > 0 {
                out.push(Token::space());
                if !group.logic.is_empty() {
                    out.push(Token::none(group.logic.as_str()));
                    out.push(Token::space());
                }
            }

            match child {
                Node::Group(inner) => self.push_group(inner, out),
                Node::Rule(rule) => self.push_rule(rule, out),
            }
        }

        out.push(Token::new(TokenKind::CloseBracket, ")"));
    }

    fn push_rule(&self, rule: &Rule, out: &mut Vec<Token>) {
        let mut parts: Vec<Vec<Token>> = Vec::new();

        for slot in [Slot::Field, Slot::Operator] {
            if let Some(text) = rule.slot(slot)
                && !text.is_empty()
            {
                parts.push(vec![Token::none(text)]);
            }
        }

        match &rule.value {
            RuleValue::Single(v) if !v.is_empty() => parts.push(vec![Token::none(quote_if_needed(v))]),
            RuleValue::Single(_) => {}
            RuleValue::List(values) => {
                let mut list = Vec::new();
                for v in values.iter().filter(|v| !v.is_empty()) {
                    if !list.is_empty() {
                        list.push(Token::space());
                        list.push(Token::new(TokenKind::Slash, "/"));
                        list.push(Token::space());
                    }
                    list.push(Token::none(quote_if_needed(v)));
                }
                if !list.is_empty() {
                    parts.push(list);
                }
            }
        }

        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(Token::space());
            }
            out.extend(part);
        }
    }
}

/// Drops the bracket pair wrapping the whole stream.
fn strip_outer_brackets(tokens: &mut Vec<Token>) {
    let wrapped = tokens.first().is_some_and(|t| t.kind.is_open_group())
        && tokens.last().is_some_and(|t| t.kind.is_close_group());

    if wrapped {
        tokens.pop();
        tokens.remove(0);
    }
}

/// Converts a tree to query text.
pub fn to_text(node: &Node) -> String {
    TextPrinter::new().print(node)
}
