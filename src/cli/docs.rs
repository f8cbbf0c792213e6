//! Documentation content for the sieve CLI

use std::fmt::Write;

use super::CliError;
use crate::Operator;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Values,
    Trees,
    Suggestions,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "values" | "value" | "types" => Some(Self::Values),
            "trees" | "tree" | "json" => Some(Self::Trees),
            "suggestions" | "suggest" | "completion" => Some(Self::Suggestions),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIEVE DOCUMENTATION

Sieve is a small filter language. A query compares schema fields against
values and joins the comparisons with And / Or, optionally grouped in
brackets. Every query has an equivalent JSON tree.

DOCUMENTATION CATEGORIES

  syntax            Rules, logic words, brackets and value lists
  operators         Every comparison operator with its spellings
  values            Literal forms and how field types accept them
  trees             The JSON tree form of a query
  suggestions       Completion candidates at a caret position

QUICK REFERENCE

  Age > 30                          Rule
  Age > 30 and Name ~ bob           Logic
  (Age > 30 or Age < 10) and ...    Group
  Tag in A, B / C                   Value list
  Name []                           Operator without a value

Run 'sieve doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<String, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC.to_string()),
        Some(DocCategory::Operators) => Ok(operators_doc()),
        Some(DocCategory::Values) => Ok(VALUES_DOC.to_string()),
        Some(DocCategory::Trees) => Ok(TREES_DOC.to_string()),
        Some(DocCategory::Suggestions) => Ok(SUGGESTIONS_DOC.to_string()),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

fn operators_doc() -> String {
    let mut doc = String::from(
        "OPERATORS - Comparisons between a field and its value\n\n  SYMBOL  WORDS                    VALUE\n",
    );
    for op in Operator::ALL {
        let value = if !op.takes_value() {
            "none"
        } else if op.allows_multiple() {
            "one or more"
        } else {
            "one"
        };
        let _ = writeln!(
            doc,
            "  {:<8}{:<25}{}",
            op.symbol().unwrap_or("-"),
            op.label().to_lowercase(),
            value
        );
    }
    doc.push_str(
        r#"
  Words are matched case-insensitively: "Greater Than", "greater than" and
  ">" all read as the same operator.

  Constraints:
    - A field only accepts the operators its schema entry lists
    - An operator the field does not allow is left unclassified
"#,
    );
    doc
}

const SYNTAX_DOC: &str = r#"SYNTAX - Rules, logic and groups

RULES
  <field> <operator> <value>
    Field is a schema name or label. Labels may contain spaces.

    Example:
      Age > 30
      Created At >= 2024-01-01

  <field> <operator>
    Blank and Not Blank take no value.

    Example:
      Name []
      Name not blank

LOGIC
  and  or  &&  ||
    Joins rules. A run of the same logic word forms one group.

    Example:
      Age > 30 and Age < 60 and Verified = true

GROUPS
  ( ... )
    Brackets nest a sub-query. A bracketed group is never merged into
    its parent, even when the logic words match.

    Example:
      (Age > 30 or Age < 10) and Status = Active

VALUE LISTS
  <value>, <value> / <value>
    In and Not In take several values separated by commas or slashes.

    Example:
      Tag in A, B, C
"#;

const VALUES_DOC: &str = r#"VALUES - Literals and field types

LITERAL FORMS
  "quoted text"   'quoted text'   Strings, may contain spaces
  42  -3.5                        Numbers
  true  false                     Booleans
  2024-01-31                      Dates
  13:45  13:45:10                 Times
  2024-01-31 13:45                Date-times
  plain_word                      Bare words

FIELD TYPES
  string  number  boolean  date  time  datetime
  and the array forms string[]  number[]  ...

  A value is accepted when its shape matches the field type. Fields with
  lookup values accept only those values, by name or by value.

    Example:
      Status = Active       Active is a lookup of Status
      Status = Unknown      Unknown stays unclassified
"#;

const TREES_DOC: &str = r#"TREES - JSON form of a query

RULE
  ["<field>", "<operator>", <value>]
    The value is a string, or an array of strings for value lists.

    Example:
      Age > 30          ["Age", ">", "30"]
      Tag in A, B       ["Tag", "in", ["A", "B"]]

GROUP
  ["<logic>", [<node>, <node>, ...]]

    Example:
      Age > 30 and Age < 10
        ["and", [["Age", ">", "30"], ["Age", "<", "10"]]]

CONVERSION
  sieve --schema fields.json tree "Age > 30"
  sieve --schema fields.json text '["Age", ">", "30"]'

  Constraints:
    - Values containing spaces are quoted when printed
    - Empty slots are left out of the printed text
"#;

const SUGGESTIONS_DOC: &str = r#"SUGGESTIONS - Completion candidates

WHAT IS OFFERED
  Start of query, after a logic word or "("   Field labels
  After a field                                 Operators the field allows
  After an operator                             Lookup values of the field
  After "," or "/"                              Lookup values not yet listed
  After a value, ")" or Blank                   And, Or

CARET
  sieve --schema fields.json suggest "Age " --cursor 4
    The caret is a character offset. Without one, candidates continue
    the end of the query. Each candidate is shown with the query text
    it would produce.
"#;
