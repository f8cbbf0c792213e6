// tests/output_tests.rs

mod common;

use common::engine;
use serde_json::json;
use sieve_lang::{
    ast::{Group, Node},
    output::to_text,
};

// ============================================================================
// Tree to text
// ============================================================================

#[test]
fn test_root_rule_has_no_brackets() {
    assert_eq!(to_text(&Node::rule("Age", ">", "30")), "Age > 30");
}

#[test]
fn test_group() {
    let tree = Node::group("and", vec![Node::rule("Age", ">", "30"), Node::rule("Age", "<", "10")]);
    assert_eq!(to_text(&tree), "Age > 30 and Age < 10");
}

#[test]
fn test_nested_groups_are_bracketed() {
    let tree = Node::group(
        "and",
        vec![
            Node::group("or", vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "9")]),
            Node::rule("Name", "~", "bob"),
        ],
    );
    assert_eq!(to_text(&tree), "(Age > 1 or Age < 9) and Name ~ bob");
}

#[test]
fn test_values_are_quoted_when_needed() {
    assert_eq!(to_text(&Node::rule("Name", "=", "Jo Ann")), r#"Name = "Jo Ann""#);
    assert_eq!(
        to_text(&Node::rule("Name", "=", r#"say "hi" now"#)),
        r#"Name = 'say "hi" now'"#
    );
    assert_eq!(
        to_text(&Node::rule_list("Tag", "in", &["A", "New York"])),
        r#"Tag in A / "New York""#
    );
}

#[test]
fn test_empty_slots_are_skipped() {
    assert_eq!(to_text(&Node::default()), "");
    assert_eq!(to_text(&Node::rule("Age", "", "")), "Age");
    assert_eq!(to_text(&Node::rule("Name", "[]", "")), "Name []");
    assert_eq!(to_text(&Node::rule_list("Tag", "in", &["A", "", "B"])), "Tag in A / B");
}

#[test]
fn test_group_without_logic_word() {
    let tree = Node::Group(Group::new(
        "",
        vec![Node::rule("Age", ">", "1"), Node::rule("Age", "<", "9")],
    ));
    assert_eq!(to_text(&tree), "Age > 1 Age < 9");
}

#[test]
fn test_single_child_group() {
    let tree = Node::group("and", vec![Node::rule("Age", ">", "1")]);
    assert_eq!(to_text(&tree), "Age > 1");
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_text_round_trip() {
    let queries = [
        "Age > 30",
        "Age > 1 and Age < 9 and Name ~ bob",
        "(Age > 1 or Age < 9) and Status = Active",
        "Age > 1 and (Age < 9 or Name ~ bob)",
        "(Age > 1 and Age < 9) and Name ~ bob",
        "Tag in A / B / C",
        r#"Name = "Jo Ann""#,
        "Name [] or Age >= 18",
        "Created At > \"2024-01-31 13:45\" and Opens = 09:30",
    ];

    let engine = engine();
    for query in queries {
        let tree = engine.text_to_tree(query).unwrap();
        assert_eq!(engine.tree_to_text(&tree), query, "round trip of {:?}", query);
    }
}

#[test]
fn test_tree_round_trip() {
    let trees = [
        json!(["Age", ">", "30"]),
        json!(["or", [["and", [["Age", ">", "1"], ["Age", "<", "9"]]], ["Tag", "in", ["A", "B"]]]]),
        json!(["and", [["Name", "=", "Jo Ann"], ["or", [["Verified", "=", "true"], ["Name", "[]", ""]]]]]),
    ];

    let engine = engine();
    for json in trees {
        let tree = Node::from_json(&json);
        let text = engine.tree_to_text(&tree);
        assert_eq!(engine.text_to_tree(&text).unwrap(), tree, "round trip of {}", json);
        assert_eq!(tree.to_json(), json);
    }
}

#[test]
fn test_list_separators_are_normalized() {
    let engine = engine();
    let tree = engine.text_to_tree("Tag in A,B, C").unwrap();
    assert_eq!(engine.tree_to_text(&tree), "Tag in A / B / C");
}

#[test]
fn test_tree_round_trip_keeps_punctuated_values() {
    let values = [
        "john.doe@example.com",
        "a/b",
        "x, y",
        "3.5kg",
        "or",
        "'x'",
        r#""x""#,
        "O'Neil",
        r#"say "hi""#,
    ];

    let engine = engine();
    for value in values {
        let tree = Node::rule("Name", "=", value);
        let text = engine.tree_to_text(&tree);
        assert!(engine.is_valid_text(&text), "{:?} printed as invalid {:?}", value, text);
        assert_eq!(engine.text_to_tree(&text).unwrap(), tree, "round trip of {:?} via {:?}", value, text);
    }

    assert_eq!(
        to_text(&Node::rule_list("Tag", "in", &["A", "a/b"])),
        r#"Tag in A / "a/b""#
    );
}
