use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Comparison operators a rule can use.
///
/// Every operator has an identifier (used in schemas), a worded label (used
/// for suggestions) and usually a symbolic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterThanOrEqual,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessThanOrEqual,
    /// Contains (`~`)
    Contain,
    /// Does not contain (`!~`)
    NotContain,
    /// Starts with (`~*`)
    StartWith,
    /// Does not start with (`!~*`)
    NotStartWith,
    /// Ends with (`*~`)
    EndWith,
    /// Does not end with (`!*~`)
    NotEndWith,
    /// Value is one of a list (`in`)
    In,
    /// Value is none of a list (`not in`)
    NotIn,
    /// Field has no value (`[]`)
    Blank,
    /// Field has a value (`![]`)
    NotBlank,
}

impl Operator {
    pub const ALL: [Operator; 16] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::Contain,
        Operator::NotContain,
        Operator::StartWith,
        Operator::NotStartWith,
        Operator::EndWith,
        Operator::NotEndWith,
        Operator::In,
        Operator::NotIn,
        Operator::Blank,
        Operator::NotBlank,
    ];

    /// Identifier used in field schemas, e.g. `GreaterThanOrEqual`.
    pub fn identifier(self) -> &'static str {
        match self {
            Operator::Equal => "Equal",
            Operator::NotEqual => "NotEqual",
            Operator::GreaterThan => "GreaterThan",
            Operator::GreaterThanOrEqual => "GreaterThanOrEqual",
            Operator::LessThan => "LessThan",
            Operator::LessThanOrEqual => "LessThanOrEqual",
            Operator::Contain => "Contain",
            Operator::NotContain => "NotContain",
            Operator::StartWith => "StartWith",
            Operator::NotStartWith => "NotStartWith",
            Operator::EndWith => "EndWith",
            Operator::NotEndWith => "NotEndWith",
            Operator::In => "In",
            Operator::NotIn => "NotIn",
            Operator::Blank => "Blank",
            Operator::NotBlank => "NotBlank",
        }
    }

    /// Worded form offered as a suggestion, e.g. `Greater Than Or Equal`.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Equal => "Equal",
            Operator::NotEqual => "Not Equal",
            Operator::GreaterThan => "Greater Than",
            Operator::GreaterThanOrEqual => "Greater Than Or Equal",
            Operator::LessThan => "Less Than",
            Operator::LessThanOrEqual => "Less Than Or Equal",
            Operator::Contain => "Contain",
            Operator::NotContain => "Not Contain",
            Operator::StartWith => "Start With",
            Operator::NotStartWith => "Not Start With",
            Operator::EndWith => "End With",
            Operator::NotEndWith => "Not End With",
            Operator::In => "In",
            Operator::NotIn => "Not In",
            Operator::Blank => "Blank",
            Operator::NotBlank => "Not Blank",
        }
    }

    /// Symbolic form, if the operator has one.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operator::Equal => Some("="),
            Operator::NotEqual => Some("!="),
            Operator::GreaterThan => Some(">"),
            Operator::GreaterThanOrEqual => Some(">="),
            Operator::LessThan => Some("<"),
            Operator::LessThanOrEqual => Some("<="),
            Operator::Contain => Some("~"),
            Operator::NotContain => Some("!~"),
            Operator::StartWith => Some("~*"),
            Operator::NotStartWith => Some("!~*"),
            Operator::EndWith => Some("*~"),
            Operator::NotEndWith => Some("!*~"),
            Operator::In | Operator::NotIn => None,
            Operator::Blank => Some("[]"),
            Operator::NotBlank => Some("![]"),
        }
    }

    /// Whether a value must follow the operator. `Blank`/`NotBlank` stand alone.
    pub fn takes_value(self) -> bool {
        !matches!(self, Operator::Blank | Operator::NotBlank)
    }

    /// Whether the operator accepts a comma or slash separated value list.
    pub fn allows_multiple(self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    /// Resolve an operator from its identifier, ignoring case.
    pub fn from_identifier(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.identifier().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| format!("unknown operator '{}'", s))
    }
}

impl TryFrom<String> for Operator {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.identifier().to_string()
    }
}

/// Logic words joining rules into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    /// `and` / `&&`
    And,
    /// `or` / `||`
    Or,
}

impl Logic {
    pub fn label(self) -> &'static str {
        match self {
            Logic::And => "And",
            Logic::Or => "Or",
        }
    }

    /// Resolve a logic word as it appears in a group's first slot.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim() {
            "&&" => Some(Logic::And),
            "||" => Some(Logic::Or),
            w if w.eq_ignore_ascii_case("and") => Some(Logic::And),
            w if w.eq_ignore_ascii_case("or") => Some(Logic::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
