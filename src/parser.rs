//! Text to tree conversion.
//!
//! The [`Parser`] consumes a token stream by recursive descent and builds the
//! rule/group tree. It never fails: tokens that do not fit the grammar either
//! fill an empty rule slot (so a half-typed query still shows up in the rule
//! builder) or are skipped.

use std::{collections::VecDeque, sync::Arc};

use crate::{
    ast::{Group, Logic, Node, Rule, RuleValue, Slot, Token, TokenKind},
    schema::Schema,
    tokenizer::{TextTokenizer, TokenizeError},
    value::unquote,
};

/// Builds a tree from tokens.
pub struct Parser {
    tokens: VecDeque<Token>,
}

/// Where the current rule is.
struct RuleState {
    node: Node,
    slot: Slot,
    /// The node came from a bracketed group and must not absorb a following
    /// logic chain.
    bracketed: bool,
}

impl RuleState {
    fn new() -> Self {
        RuleState {
            node: Node::default(),
            slot: Slot::Field,
            bracketed: false,
        }
    }

    fn rule_mut(&mut self) -> Option<&mut Rule> {
        match &mut self.node {
            Node::Rule(rule) => Some(rule),
            Node::Group(_) => None,
        }
    }
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into(),
        }
    }

    /// Consumes every token and returns the tree.
    pub fn parse(&mut self) -> Node {
        let node = self.parse_node(false);
        log::debug!("parsed tree: {:?}", node);
        node
    }

    /// Next token that is not a space.
    fn next_token(&mut self) -> Option<Token> {
        while let Some(token) = self.tokens.pop_front() {
            if !token.kind.is_space() {
                return Some(token);
            }
        }
        None
    }

    /// Kind of the next token that is not a space, without consuming it.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.iter().map(|t| t.kind).find(|k| !k.is_space())
    }

    /// Parses until the input ends or a close bracket is reached.
    ///
    /// With `single_term` set the call parses one operand of a logic word
    /// and returns as soon as that operand is complete.
    fn parse_node(&mut self, single_term: bool) -> Node {
        let mut state = RuleState::new();

        while let Some(token) = self.next_token() {
            let kind = token.kind;

            if kind.is_field() {
                if let Some(rule) = state.rule_mut() {
                    rule.field = token.value;
                    state.slot = Slot::Operator;
                }
            } else if kind.is_comparer() {
                if let Some(rule) = state.rule_mut() {
                    rule.operator = token.value;
                    state.slot = Slot::Value;
                }
            } else if kind.is_not_comparer() {
                if let Some(rule) = state.rule_mut() {
                    rule.operator = token.value;
                    rule.value = RuleValue::default();
                    state.slot = Slot::Field;
                }
                if single_term {
                    return state.node;
                }
            } else if kind.is_value() {
                if let Some(rule) = state.rule_mut() {
                    let value = unquote(&token.value).to_string();
                    match &mut rule.value {
                        RuleValue::List(values) => values.push(value),
                        single => *single = RuleValue::Single(value),
                    }
                    state.slot = Slot::Field;
                }
                if single_term && !self.peek_kind().is_some_and(TokenKind::is_separator) {
                    return state.node;
                }
            } else if let TokenKind::Logic(logic) = kind {
                let next = self.parse_node(true);
                state.node = join_logic(state.node, state.bracketed, logic, token.value, next);
                state.bracketed = false;
            } else if kind.is_separator() {
                if let Some(rule) = state.rule_mut() {
                    rule.value = std::mem::take(&mut rule.value).into_list();
                }
            } else if kind.is_open_group() {
                state.node = self.parse_node(false);
                state.bracketed = true;
                if single_term {
                    return state.node;
                }
            } else if kind.is_close_group() {
                return state.node;
            } else {
                fill_slot(&mut state, token.value);
            }
        }

        state.node
    }
}

/// Joins `left` and `right` under `logic`, extending `left` when it is an
/// unbracketed group using the same logic word.
fn join_logic(left: Node, bracketed: bool, logic: Logic, word: String, right: Node) -> Node {
    match left {
        Node::Group(mut group) if !bracketed && group.logic() == Some(logic) => {
            group.children.push(right);
            Node::Group(group)
        }
        left => Node::Group(Group::new(word, vec![left, right])),
    }
}

/// Puts an unclassified token into the current slot if that slot is empty,
/// then moves on to the next slot.
fn fill_slot(state: &mut RuleState, value: String) {
    let slot = state.slot;
    let Some(rule) = state.rule_mut() else {
        log::trace!("dropping {:?} after a group", value);
        return;
    };

    if !rule.is_slot_empty(slot) {
        log::trace!("dropping {:?}, slot {:?} is taken", value, slot);
        return;
    }

    rule.set_slot(slot, value);
    state.slot = match slot {
        Slot::Field => Slot::Operator,
        Slot::Operator | Slot::Value => Slot::Value,
    };
}

/// Converts query text to a tree.
#[derive(Debug, Clone)]
pub struct TextQueryConverter {
    tokenizer: TextTokenizer,
}

impl TextQueryConverter {
    pub fn new(schema: Arc<Schema>) -> Self {
        TextQueryConverter {
            tokenizer: TextTokenizer::new(schema),
        }
    }

    pub fn convert(&self, text: &str) -> Result<Node, TokenizeError> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(Parser::new(tokens).parse())
    }
}
