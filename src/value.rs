//! Lexical shape checks for literal values.
//!
//! These decide whether free-form input fits a field's declared type when the
//! field has no fixed lookup list.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::lexer;

/// Removes one layer of matching single or double quotes.
///
/// # Examples
///
/// ```
/// use sieve_lang::value::unquote;
///
/// assert_eq!(unquote("\"New York\""), "New York");
/// assert_eq!(unquote("'draft'"), "draft");
/// assert_eq!(unquote("\"unbalanced'"), "\"unbalanced'");
/// ```
pub fn unquote(literal: &str) -> &str {
    for quote in ['"', '\''] {
        if literal.len() >= 2
            && let Some(inner) = literal
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    literal
}

/// Any text is a string.
pub fn is_string(_literal: &str) -> bool {
    true
}

pub fn is_number(literal: &str) -> bool {
    Decimal::from_str(unquote(literal).trim()).is_ok()
}

pub fn is_boolean(literal: &str) -> bool {
    let s = unquote(literal);
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// `YYYY-MM-DD`, checked against the calendar.
pub fn is_date(literal: &str) -> bool {
    NaiveDate::parse_from_str(unquote(literal), "%Y-%m-%d").is_ok()
}

/// `HH:MM` or `HH:MM:SS`.
pub fn is_time(literal: &str) -> bool {
    let s = unquote(literal);
    NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok() || NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

/// `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
pub fn is_datetime(literal: &str) -> bool {
    let s = unquote(literal);
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").is_ok()
}

/// Quotes a literal for the text form when it would not survive as a single
/// bare token.
///
/// Double quotes are preferred; single quotes are used when the literal
/// contains a double quote and no single quote. A literal holding both quote
/// characters has no faithful text form and is wrapped in double quotes.
pub fn quote_if_needed(literal: &str) -> String {
    if !literal.chars().any(char::is_whitespace) && lexer::is_bare_literal(literal) {
        return literal.to_string();
    }
    if literal.contains('"') && !literal.contains('\'') {
        format!("'{}'", literal)
    } else {
        format!("\"{}\"", literal)
    }
}
