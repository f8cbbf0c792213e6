// tests/parser_tests.rs

mod common;

use common::{engine, schema};
use sieve_lang::{
    TextQueryConverter,
    ast::{Node, Token, TokenKind},
    parser::Parser,
};

fn tree(text: &str) -> Node {
    engine().text_to_tree(text).unwrap()
}

// ============================================================================
// Rules
// ============================================================================

#[test]
fn test_single_rule() {
    assert_eq!(tree("Age > 30"), Node::rule("Age", ">", "30"));
}

#[test]
fn test_slots_keep_source_spelling() {
    assert_eq!(
        tree("age greater than 30"),
        Node::rule("age", "greater than", "30")
    );
}

#[test]
fn test_quoted_values_are_unquoted() {
    assert_eq!(tree(r#"Name = "Jo Ann""#), Node::rule("Name", "=", "Jo Ann"));
    assert_eq!(tree("Name = 'Jo Ann'"), Node::rule("Name", "=", "Jo Ann"));
}

#[test]
fn test_value_list() {
    assert_eq!(tree("Tag in A, B, C"), Node::rule_list("Tag", "in", &["A", "B", "C"]));
    assert_eq!(tree("Tag not in A / C"), Node::rule_list("Tag", "not in", &["A", "C"]));
}

#[test]
fn test_operator_without_value() {
    assert_eq!(tree("Name []"), Node::rule("Name", "[]", ""));
    assert_eq!(tree("Name not blank"), Node::rule("Name", "not blank", ""));
}

#[test]
fn test_incomplete_rule() {
    assert_eq!(tree("Age >"), Node::rule("Age", ">", ""));
    assert_eq!(tree("Age"), Node::rule("Age", "", ""));
}

#[test]
fn test_empty_text_gives_empty_rule() {
    assert_eq!(tree(""), Node::default());
    assert_eq!(tree("   "), Node::default());
}

// ============================================================================
// Unclassified text
// ============================================================================

#[test]
fn test_unclassified_text_fills_empty_slots() {
    // unknown operator word, then a value that is no longer admissible
    assert_eq!(tree("Age between 3"), Node::rule("Age", "between", "3"));

    // unknown field
    assert_eq!(tree("Height > 3"), Node::rule("Height", ">", "3"));
}

#[test]
fn test_unclassified_text_never_overwrites() {
    assert_eq!(tree("Age = 3 4"), Node::rule("Age", "=", "3"));
}

// ============================================================================
// Logic and groups
// ============================================================================

#[test]
fn test_two_rules() {
    assert_eq!(
        tree("Age > 30 and Age < 10"),
        Node::group("and", vec![Node::rule("Age", ">", "30"), Node::rule("Age", "<", "10")])
    );
}

#[test]
fn test_same_logic_is_flattened() {
    assert_eq!(
        tree("Age > 1 and Age < 9 and Name ~ bob"),
        Node::group(
            "and",
            vec![
                Node::rule("Age", ">", "1"),
                Node::rule("Age", "<", "9"),
                Node::rule("Name", "~", "bob"),
            ]
        )
    );
}

#[test]
fn test_mixed_logic_reads_left_to_right() {
    assert_eq!(
        tree("Age > 1 and Age < 9 or Name ~ bob"),
        Node::group(
            "or",
            vec![
                Node::group("and", vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "9")]),
                Node::rule("Name", "~", "bob"),
            ]
        )
    );

    assert_eq!(
        tree("Age > 1 or Age < 9 and Name ~ bob"),
        Node::group(
            "and",
            vec![
                Node::group("or", vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "9")]),
                Node::rule("Name", "~", "bob"),
            ]
        )
    );
}

#[test]
fn test_logic_word_spelling_is_kept() {
    assert_eq!(
        tree("Age > 1 && Age < 9 AND Name ~ bob"),
        Node::group(
            "&&",
            vec![
                Node::rule("Age", ">", "1"),
                Node::rule("Age", "<", "9"),
                Node::rule("Name", "~", "bob"),
            ]
        )
    );
}

#[test]
fn test_bracketed_group_on_the_right() {
    assert_eq!(
        tree("Age > 1 and (Age < 9 or Name ~ bob)"),
        Node::group(
            "and",
            vec![
                Node::rule("Age", ">", "1"),
                Node::group("or", vec![Node::rule("Age", "<", "9"), Node::rule("Name", "~", "bob")]),
            ]
        )
    );
}

#[test]
fn test_bracketed_group_is_not_flattened() {
    assert_eq!(
        tree("(Age > 1 and Age < 9) and Name ~ bob"),
        Node::group(
            "and",
            vec![
                Node::group("and", vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "9")]),
                Node::rule("Name", "~", "bob"),
            ]
        )
    );

    assert_eq!(
        tree("Age > 1 and (Age < 9 and Name ~ bob)"),
        Node::group(
            "and",
            vec![
                Node::rule("Age", ">", "1"),
                Node::group("and", vec![Node::rule("Age", "<", "9"), Node::rule("Name", "~", "bob")]),
            ]
        )
    );
}

#[test]
fn test_nested_groups() {
    assert_eq!(
        tree("((Age > 1 or Age < 0) and Verified = true) or Status in Active, Inactive"),
        Node::group(
            "or",
            vec![
                Node::group(
                    "and",
                    vec![
                        Node::group("or", vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "0")]),
                        Node::rule("Verified", "=", "true"),
                    ]
                ),
                Node::rule_list("Status", "in", &["Active", "Inactive"]),
            ]
        )
    );
}

#[test]
fn test_blank_operator_ends_an_operand() {
    assert_eq!(
        tree("Name [] or Age >= 18"),
        Node::group("or", vec![Node::rule("Name", "[]", ""), Node::rule("Age", ">=", "18")])
    );
}

#[test]
fn test_dangling_logic() {
    assert_eq!(
        tree("Age > 1 and"),
        Node::group("and", vec![Node::rule("Age", ">", "1"), Node::default()])
    );
}

// ============================================================================
// Converters and raw token input
// ============================================================================

#[test]
fn test_converter() {
    let converter = TextQueryConverter::new(schema());
    assert_eq!(converter.convert("Age > 30").unwrap(), Node::rule("Age", ">", "30"));
}

#[test]
fn test_parser_on_raw_tokens() {
    let tokens = vec![
        Token::none("Age"),
        Token::space(),
        Token::none("is"),
        Token::space(),
        Token::none("x"),
        Token::new(TokenKind::CloseBracket, ")"),
        Token::none("dropped"),
    ];

    // a close bracket ends the top level
    assert_eq!(Parser::new(tokens).parse(), Node::rule("Age", "is", "x"));
}

#[test]
fn test_list_after_logic() {
    assert_eq!(
        tree("Age > 30 and Tag in A, B"),
        Node::group(
            "and",
            vec![Node::rule("Age", ">", "30"), Node::rule_list("Tag", "in", &["A", "B"])]
        )
    );
}
