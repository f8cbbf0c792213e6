//! Tokenize and validate queries

use super::CliError;
use crate::{QueryEngine, Token, ValidationError};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to check
    pub query: String,
    /// Fail when the query is not valid instead of reporting it
    pub strict: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub struct CheckReport {
    /// Classified tokens of the query
    pub tokens: Vec<Token>,
    /// Validation outcome
    pub outcome: Result<(), ValidationError>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Execute a check operation
pub fn execute_check(engine: &QueryEngine, options: &CheckOptions) -> Result<CheckReport, CliError> {
    let tokens = engine.tokenize(&options.query)?;
    let outcome = engine.validate(&tokens);

    if options.strict
        && let Err(e) = outcome
    {
        return Err(CliError::Invalid(e));
    }

    Ok(CheckReport { tokens, outcome })
}

/// One line per token: kind and quoted text.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:<16}{:?}\n", t.kind.name(), t.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, FieldType, Operator, Schema};

    fn engine() -> QueryEngine {
        QueryEngine::new(
            Schema::new(vec![
                Field::new("age", "Age", FieldType::Number).with_operators(&[Operator::Equal]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn reports_validity() {
        let options = CheckOptions {
            query: "Age = 3".into(),
            strict: false,
        };
        assert!(execute_check(&engine(), &options).unwrap().is_valid());

        let options = CheckOptions {
            query: "Age =".into(),
            strict: false,
        };
        assert!(!execute_check(&engine(), &options).unwrap().is_valid());
    }

    #[test]
    fn strict_mode_fails() {
        let options = CheckOptions {
            query: "Age > 3".into(),
            strict: true,
        };
        assert!(matches!(
            execute_check(&engine(), &options),
            Err(CliError::Invalid(ValidationError::InvalidToken { index: 2, .. }))
        ));
    }

    #[test]
    fn token_listing() {
        let tokens = engine().tokenize("Age = 3").unwrap();
        assert_eq!(
            format_tokens(&tokens[..3]),
            "Field           \"Age\"\nSpace           \" \"\nEqual           \"=\"\n"
        );
    }
}
