//! # Sieve Filter Language - Tokens and Trees
//!
//! This module defines the two representations a filter query moves between:
//! a flat stream of classified tokens (what the text editor works with) and a
//! nested rule/group tree (what the visual rule builder works with).
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Token values and the closed set of token kinds
//! - **[operators]** - Comparison operators and logic words
//! - **[node]** - The rule/group tree and its JSON interchange format
//!
//! ## Quick Start
//!
//! ```text
//! Age > 30 and Status = Active
//! ```
//!
//! tokenizes to
//!
//! ```text
//! Field("Age") Space GreaterThan(">") Space NumberValue("30") Space And("and") ...
//! ```
//!
//! and converts to the tree
//!
//! ```text
//! ["and", [["Age", ">", "30"], ["Status", "=", "Active"]]]
//! ```
//!
//! ## Core Concepts
//!
//! ### Rules
//!
//! A rule is a single condition: a field, an operator and a value (or a list
//! of values for operators such as `in`):
//!
//! ```text
//! Tag in A / B / C
//! Name ![]
//! ```
//!
//! ### Groups
//!
//! A group joins two or more children with one logic word. Brackets in the
//! text form become nested groups:
//!
//! ```text
//! Age > 30 and (Status = Active or Status = Inactive)
//! ```
//!
//! ### Invalid Input
//!
//! Text that is recognized but not admissible at its position is kept as a
//! [`TokenKind::None`] token, so a half-typed query still round-trips.
pub mod node;
pub mod operators;
pub mod tokens;

pub use node::{Group, Node, Rule, RuleValue, Slot};
pub use operators::{Logic, Operator};
pub use tokens::{Token, TokenKind, ValueKind};
