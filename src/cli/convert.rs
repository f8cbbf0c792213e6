//! Text <-> tree JSON conversion for the CLI

use super::CliError;
use crate::{Node, QueryEngine};

/// Convert query text to its tree, rendered as JSON
pub fn text_to_tree_json(engine: &QueryEngine, text: &str, pretty: bool) -> Result<String, CliError> {
    let tree = engine.text_to_tree(text)?.to_json();
    let json = if pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    Ok(json)
}

/// Convert a JSON tree back to query text
pub fn tree_json_to_text(engine: &QueryEngine, json: &str) -> Result<String, CliError> {
    let json = json.trim();
    if json.is_empty() {
        return Err(CliError::NoInput);
    }
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(engine.tree_to_text(&Node::from_json(&value)))
}
