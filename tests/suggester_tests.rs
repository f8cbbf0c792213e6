// tests/suggester_tests.rs

mod common;

use common::{engine, schema, tok};
use sieve_lang::{
    QueryEngine, Schema, Suggester,
    ast::{Operator, TokenKind, ValueKind, tokens::join},
};

fn suggest_at_end(text: &str) -> Vec<String> {
    let engine = engine();
    let tokens = engine.tokenize(text).unwrap();
    engine
        .suggest(&tokens, None)
        .values()
        .into_iter()
        .map(String::from)
        .collect()
}

// ============================================================================
// What is offered
// ============================================================================

#[test]
fn test_empty_query_offers_field_labels() {
    assert_eq!(
        suggest_at_end(""),
        vec!["Age", "Status", "Tag", "Name", "Birthday", "Verified", "Created At", "Opens"]
    );
}

#[test]
fn test_after_field_offers_its_operators() {
    assert_eq!(
        suggest_at_end("Age "),
        vec![
            "Equal",
            "Not Equal",
            "Greater Than",
            "Greater Than Or Equal",
            "Less Than",
            "Less Than Or Equal",
            "Blank",
            "Not Blank",
        ]
    );
    assert_eq!(suggest_at_end("Verified"), vec!["Equal", "Not Equal"]);
}

#[test]
fn test_after_operator_offers_lookups() {
    assert_eq!(suggest_at_end("Status = "), vec!["Active", "Inactive"]);
    assert!(suggest_at_end("Age = ").is_empty());
}

#[test]
fn test_after_separator_skips_used_lookups() {
    assert_eq!(suggest_at_end("Tag in A, "), vec!["B", "C"]);
    assert_eq!(suggest_at_end("Tag in c / A /"), vec!["B"]);
    assert_eq!(suggest_at_end("Status in 1,"), vec!["Inactive"]);
}

#[test]
fn test_after_complete_rule_offers_logic() {
    assert_eq!(suggest_at_end("Age > 3 "), vec!["And", "Or"]);
    assert_eq!(suggest_at_end("Name []"), vec!["And", "Or"]);
    assert_eq!(suggest_at_end("(Age > 3)"), vec!["And", "Or"]);
}

#[test]
fn test_after_logic_or_bracket_offers_fields() {
    assert_eq!(suggest_at_end("Age > 3 and ").len(), 8);
    assert_eq!(suggest_at_end("(").len(), 8);
}

#[test]
fn test_nothing_after_unclassified_text() {
    assert!(suggest_at_end("Height ").is_empty());
    assert!(suggest_at_end("Age between ").is_empty());
}

// ============================================================================
// Cursor and apply
// ============================================================================

#[test]
fn test_cursor_on_operator_replaces_it() {
    let engine = engine();
    let tokens = engine.tokenize("Age > 30").unwrap();

    let result = engine.suggest(&tokens, Some(2));
    assert_eq!(result.selected_token, Some(tok(TokenKind::Operator(Operator::GreaterThan), ">")));
    assert_eq!(result.values()[0], "Equal");

    let less_than = result
        .suggestions
        .iter()
        .find(|s| s.value == "Less Than")
        .unwrap();
    assert!(less_than.replaces_current());

    let applied = less_than.apply(&tokens);
    assert_eq!(join(&applied), "Age Less Than 30");

    let retokenized = engine.tokenize(&join(&applied)).unwrap();
    assert_eq!(retokenized[2], tok(TokenKind::Operator(Operator::LessThan), "Less Than"));
}

#[test]
fn test_cursor_on_partial_value() {
    let engine = engine();
    let tokens = engine.tokenize("Status = Act and Age > 3").unwrap();

    let result = engine.suggest(&tokens, Some(4));
    assert_eq!(result.selected_token, Some(tok(TokenKind::None, "Act")));
    assert_eq!(result.values(), vec!["Active", "Inactive"]);

    let applied = result.suggestions[0].apply(&tokens);
    assert_eq!(join(&applied), "Status = Active and Age > 3");
    assert!(engine.validate(&engine.tokenize(&join(&applied)).unwrap()).is_ok());
}

#[test]
fn test_without_cursor_appends() {
    let engine = engine();
    let tokens = engine.tokenize("Age > 3 ").unwrap();

    let result = engine.suggest(&tokens, None);
    assert_eq!(result.selected_token, None);
    assert!(!result.suggestions[0].replaces_current());
    assert_eq!(join(&result.suggestions[0].apply(&tokens)), "Age > 3 And ");
}

#[test]
fn test_suggester_built_directly() {
    let suggester = Suggester::new(schema());
    let result = suggester.suggest(&[], None);
    assert_eq!(result.values().len(), 8);
    assert_eq!(join(&result.suggestions[6].apply(&[])), "Created At ");
}

#[test]
fn test_lookup_with_spaces_is_applied_quoted() {
    let schema = Schema::from_json(
        r#"[{ "name": "city", "label": "City", "type": "string", "operators": ["Equal", "In"],
              "values": [{ "name": "New York" }, { "name": "Paris" }] }]"#,
    )
    .unwrap();
    let engine = QueryEngine::new(schema);

    let tokens = engine.tokenize("City = ").unwrap();
    let result = engine.suggest(&tokens, None);
    assert_eq!(result.values(), vec![r#""New York""#, "Paris"]);

    let text = join(&result.suggestions[0].apply(&tokens));
    assert_eq!(text, r#"City = "New York" "#);

    let retokenized = engine.tokenize(&text).unwrap();
    assert_eq!(retokenized[4], tok(TokenKind::Value(ValueKind::String), r#""New York""#));
    assert!(engine.is_valid_text(&text));

    // a quoted entry already in the list is not offered again
    let tokens = engine.tokenize(r#"City in "New York", "#).unwrap();
    assert_eq!(engine.suggest(&tokens, None).values(), vec!["Paris"]);
}
