use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

use crate::ast::Logic;

/// A node of the rule-builder tree.
///
/// The JSON interchange form is a nested array:
///
/// ```text
/// ["Age", ">", "30"]                          // rule
/// ["Tag", "in", ["A", "B"]]                   // rule with a value list
/// ["and", [["Age", ">", "30"], [...]]]        // group
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    Group(Group),
}

/// A single condition. Slots hold the text the user wrote, so an empty or
/// invalid slot is still representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub field: String,
    pub operator: String,
    pub value: RuleValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    Single(String),
    List(Vec<String>),
}

/// Children joined by one logic word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub logic: String,
    pub children: Vec<Node>,
}

/// The three positions of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Field,
    Operator,
    Value,
}

impl Default for RuleValue {
    fn default() -> Self {
        RuleValue::Single(String::new())
    }
}

impl RuleValue {
    /// All values in order; a single empty value yields nothing.
    pub fn values(&self) -> Vec<&str> {
        match self {
            RuleValue::Single(v) if v.is_empty() => vec![],
            RuleValue::Single(v) => vec![v.as_str()],
            RuleValue::List(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RuleValue::Single(v) => v.is_empty(),
            RuleValue::List(vs) => vs.is_empty(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RuleValue::List(_))
    }

    /// Turns a single value into a one-element list; lists are unchanged.
    pub fn into_list(self) -> RuleValue {
        match self {
            RuleValue::Single(v) => RuleValue::List(vec![v]),
            list => list,
        }
    }

    fn to_json(&self) -> Json {
        match self {
            RuleValue::Single(v) => Json::String(v.clone()),
            RuleValue::List(vs) => Json::Array(vs.iter().cloned().map(Json::String).collect()),
        }
    }
}

impl Rule {
    pub fn new(field: impl Into<String>, operator: impl Into<String>, value: RuleValue) -> Self {
        Rule {
            field: field.into(),
            operator: operator.into(),
            value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_empty() && self.operator.is_empty() && self.value.is_empty()
    }

    pub fn slot(&self, slot: Slot) -> Option<&str> {
        match (slot, &self.value) {
            (Slot::Field, _) => Some(&self.field),
            (Slot::Operator, _) => Some(&self.operator),
            (Slot::Value, RuleValue::Single(v)) => Some(v),
            (Slot::Value, RuleValue::List(_)) => None,
        }
    }

    pub fn is_slot_empty(&self, slot: Slot) -> bool {
        match slot {
            Slot::Field => self.field.is_empty(),
            Slot::Operator => self.operator.is_empty(),
            Slot::Value => self.value.is_empty(),
        }
    }

    /// Overwrites a slot. Writing the value slot replaces any list.
    pub fn set_slot(&mut self, slot: Slot, value: impl Into<String>) {
        match slot {
            Slot::Field => self.field = value.into(),
            Slot::Operator => self.operator = value.into(),
            Slot::Value => self.value = RuleValue::Single(value.into()),
        }
    }
}

impl Group {
    pub fn new(logic: impl Into<String>, children: Vec<Node>) -> Self {
        Group {
            logic: logic.into(),
            children,
        }
    }

    pub fn logic(&self) -> Option<Logic> {
        Logic::from_word(&self.logic)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Rule(Rule::default())
    }
}

impl Node {
    /// Shorthand for a single-valued rule.
    pub fn rule(field: &str, operator: &str, value: &str) -> Node {
        Node::Rule(Rule::new(field, operator, RuleValue::Single(value.to_string())))
    }

    /// Shorthand for a rule with a value list.
    pub fn rule_list(field: &str, operator: &str, values: &[&str]) -> Node {
        let values = values.iter().map(|v| v.to_string()).collect();
        Node::Rule(Rule::new(field, operator, RuleValue::List(values)))
    }

    pub fn group(logic: &str, children: Vec<Node>) -> Node {
        Node::Group(Group::new(logic, children))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::Rule(_) => None,
        }
    }

    /// Builds a node from its JSON form, normalizing whatever a tree editor
    /// may hand over:
    ///
    /// - `null`, `[]` or anything unrecognized becomes an empty rule
    /// - an array whose second slot is an array becomes a group
    /// - numbers and booleans in slots are stringified
    /// - token objects (`{"type": .., "value": ..}`) are unwrapped to their value
    pub fn from_json(json: &Json) -> Node {
        let Json::Array(slots) = json else {
            return match json {
                Json::String(s) => Node::Rule(Rule::new(s.clone(), "", RuleValue::default())),
                _ => Node::default(),
            };
        };

        match slots.get(1) {
            Some(Json::Array(children)) => Node::Group(Group::new(
                slots.first().map(slot_text).unwrap_or_default(),
                children.iter().map(Node::from_json).collect(),
            )),
            _ => {
                let value = match slots.get(2) {
                    Some(Json::Array(items)) => RuleValue::List(items.iter().map(slot_text).collect()),
                    Some(other) => RuleValue::Single(slot_text(other)),
                    None => RuleValue::default(),
                };
                Node::Rule(Rule::new(
                    slots.first().map(slot_text).unwrap_or_default(),
                    slots.get(1).map(slot_text).unwrap_or_default(),
                    value,
                ))
            }
        }
    }

    pub fn to_json(&self) -> Json {
        match self {
            Node::Rule(rule) => Json::Array(vec![
                Json::String(rule.field.clone()),
                Json::String(rule.operator.clone()),
                rule.value.to_json(),
            ]),
            Node::Group(group) => Json::Array(vec![
                Json::String(group.logic.clone()),
                Json::Array(group.children.iter().map(Node::to_json).collect()),
            ]),
        }
    }
}

fn slot_text(json: &Json) -> String {
    match json {
        Json::Null => String::new(),
        Json::String(s) => s.clone(),
        Json::Bool(b) => b.to_string(),
        Json::Number(n) => n.to_string(),
        Json::Object(obj) => obj.get("value").map(slot_text).unwrap_or_default(),
        Json::Array(_) => String::new(),
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Json::deserialize(deserializer).map(|json| Node::from_json(&json))
    }
}
