//! Field schema: the queryable fields, their types, operators and lookups.
//!
//! A schema is built once and shared read-only by every tokenizer, converter
//! and suggester. Field names and labels are compared case-insensitively.
//!
//! # JSON format
//!
//! ```text
//! [
//!   { "name": "age", "label": "Age", "type": "number",
//!     "operators": ["Equal", "GreaterThan"] },
//!   { "name": "status", "label": "Status", "type": "string",
//!     "operators": ["Equal", "In"],
//!     "values": [{ "name": "Active", "value": 1 }, { "name": "Inactive", "value": 0 }] }
//! ]
//! ```
//!
//! An object with a `fields` array is accepted as well.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{ast::Operator, value};

/// Declared type of a field. Array variants validate each value like their
/// scalar counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "string[]", alias = "string_array")]
    StringArray,
    #[serde(rename = "number[]", alias = "number_array")]
    NumberArray,
    #[serde(rename = "boolean[]", alias = "boolean_array")]
    BooleanArray,
    #[serde(rename = "date[]", alias = "date_array")]
    DateArray,
    #[serde(rename = "time[]", alias = "time_array")]
    TimeArray,
    #[serde(rename = "datetime[]", alias = "datetime_array")]
    DateTimeArray,
}

impl FieldType {
    /// Whether `literal` has the lexical shape this type requires.
    pub fn accepts(self, literal: &str) -> bool {
        match self {
            FieldType::String | FieldType::StringArray => value::is_string(literal),
            FieldType::Number | FieldType::NumberArray => value::is_number(literal),
            FieldType::Boolean | FieldType::BooleanArray => value::is_boolean(literal),
            FieldType::Date | FieldType::DateArray => value::is_date(literal),
            FieldType::Time | FieldType::TimeArray => value::is_time(literal),
            FieldType::DateTime | FieldType::DateTimeArray => value::is_datetime(literal),
        }
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            FieldType::StringArray
                | FieldType::NumberArray
                | FieldType::BooleanArray
                | FieldType::DateArray
                | FieldType::TimeArray
                | FieldType::DateTimeArray
        )
    }
}

/// A fixed value option: display name plus underlying value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub value: String,
}

impl Lookup {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Lookup {
            name: name.into(),
            value: value.into(),
        }
    }

    fn matches(&self, literal: &str) -> bool {
        let literal = literal.to_lowercase();
        self.name.to_lowercase() == literal
            || (!self.value.is_empty() && self.value.to_lowercase() == literal)
    }
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A queryable attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub values: Vec<Lookup>,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Field {
            name: name.into(),
            label: label.into(),
            field_type,
            operators: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_operators(mut self, operators: &[Operator]) -> Self {
        self.operators = operators.to_vec();
        self
    }

    pub fn with_values(mut self, values: Vec<Lookup>) -> Self {
        self.values = values;
        self
    }

    /// Matches the field by name or label, ignoring case.
    pub fn is_named(&self, name_or_label: &str) -> bool {
        let wanted = name_or_label.to_lowercase();
        self.name.to_lowercase() == wanted || self.label.to_lowercase() == wanted
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.operators.contains(&operator)
    }
}

/// Errors raised while building a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field #{0} has an empty name")]
    EmptyName(usize),

    #[error("field name or label '{0}' is declared more than once")]
    Duplicate(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaDocument {
    Fields(Vec<Field>),
    Wrapped { fields: Vec<Field> },
}

/// Read-only lookup structure over [`Field`] entries.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Builds a schema, rejecting empty names and names or labels that would
    /// be ambiguous across fields.
    pub fn new(fields: Vec<Field>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();

        for (index, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyName(index));
            }

            let mut keys = vec![field.name.to_lowercase()];
            let label = field.label.to_lowercase();
            if !label.is_empty() && label != keys[0] {
                keys.push(label);
            }

            for key in keys {
                if !seen.insert(key.clone()) {
                    return Err(SchemaError::Duplicate(key));
                }
            }
        }

        log::debug!("schema built with {} fields", fields.len());
        Ok(Schema { fields })
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let fields = match serde_json::from_str(json)? {
            SchemaDocument::Fields(fields) => fields,
            SchemaDocument::Wrapped { fields } => fields,
        };
        Schema::new(fields)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Finds a field by name or label, ignoring case.
    pub fn find_field(&self, name_or_label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_named(name_or_label))
    }

    pub fn operators_of<'a>(&self, field: &'a Field) -> &'a [Operator] {
        &field.operators
    }

    /// Whether `literal` is an acceptable value for `field`.
    ///
    /// A field with lookups only accepts a lookup name or value; otherwise the
    /// literal must have the shape of the field's type.
    pub fn is_value_allowed(&self, field: &Field, literal: &str) -> bool {
        if field.values.is_empty() {
            return field.field_type.accepts(literal);
        }
        self.find_lookup(field, literal).is_some()
    }

    /// The lookup matching `literal` by name or value.
    pub fn find_lookup<'a>(&self, field: &'a Field, literal: &str) -> Option<&'a Lookup> {
        let literal = value::unquote(literal);
        field.values.iter().find(|lookup| lookup.matches(literal))
    }

    /// Display labels of all fields, in declaration order.
    pub fn labels(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.label.clone()).collect()
    }
}
