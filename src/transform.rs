use crate::ast::{Group, Node, Rule, RuleValue, Slot};

/// Address of a node: child indices walked from the root group.
///
/// # Examples
///
/// For the tree
///
/// ```text
/// ["and", [["Age", ">", "30"], ["or", [["Tag", "=", "A"], ["Tag", "=", "B"]]]]]
/// ```
///
/// - `[]` is the root group
/// - `[0]` is `Age > 30`
/// - `[1, 1]` is `Tag = B`
pub type TreePath = [usize];

/// Errors raised by tree edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// No node exists at the path
    #[error("no node at path {0:?}")]
    InvalidPath(Vec<usize>),

    /// The edit needs a group but found a rule
    #[error("node at path {0:?} is not a group")]
    NotAGroup(Vec<usize>),

    /// The edit needs a rule but found a group
    #[error("node at path {0:?} is not a rule")]
    NotARule(Vec<usize>),
}

/// Resolves a path to a node.
pub fn node_at<'a>(root: &'a Node, path: &TreePath) -> Result<&'a Node, EditError> {
    let mut node = root;
    for &index in path {
        node = match node {
            Node::Group(group) => group
                .children
                .get(index)
                .ok_or_else(|| EditError::InvalidPath(path.to_vec()))?,
            Node::Rule(_) => return Err(EditError::InvalidPath(path.to_vec())),
        };
    }
    Ok(node)
}

fn node_at_mut<'a>(root: &'a mut Node, path: &TreePath) -> Result<&'a mut Node, EditError> {
    let mut node = root;
    for &index in path {
        node = match node {
            Node::Group(group) => group
                .children
                .get_mut(index)
                .ok_or_else(|| EditError::InvalidPath(path.to_vec()))?,
            Node::Rule(_) => return Err(EditError::InvalidPath(path.to_vec())),
        };
    }
    Ok(node)
}

fn rule_at_mut<'a>(root: &'a mut Node, path: &TreePath) -> Result<&'a mut Rule, EditError> {
    match node_at_mut(root, path)? {
        Node::Rule(rule) => Ok(rule),
        Node::Group(_) => Err(EditError::NotARule(path.to_vec())),
    }
}

/// A root rule becomes the single child of an unnamed group so that siblings
/// can be added next to it.
fn ensure_root_group(root: &mut Node) {
    if let Node::Rule(_) = root {
        let rule = std::mem::take(root);
        *root = Node::Group(Group::new("", vec![rule]));
    }
}

/// Adds `node` at `path`.
///
/// When `path` names a group the node is appended to its children; when it
/// names a rule the node is inserted right after that rule.
///
/// The tree is left untouched when the edit fails. A root rule is addressed
/// as the only child of the group it gets wrapped in, so `[]` and `[0]` are
/// its valid paths.
pub fn add_node(root: &mut Node, path: &TreePath, node: Node) -> Result<(), EditError> {
    if root.as_rule().is_some() {
        if !matches!(path, [] | [0]) {
            return Err(EditError::InvalidPath(path.to_vec()));
        }
    } else {
        node_at(root, path)?;
    }
    ensure_root_group(root);

    let target_is_group = node_at(root, path)?.is_group();
    let (parent_path, position) = if target_is_group {
        (path, None)
    } else {
        let (last, parent) = path
            .split_last()
            .ok_or_else(|| EditError::InvalidPath(path.to_vec()))?;
        (parent, Some(*last + 1))
    };

    match node_at_mut(root, parent_path)? {
        Node::Group(group) => {
            match position {
                Some(at) => group.children.insert(at, node),
                None => group.children.push(node),
            }
            Ok(())
        }
        Node::Rule(_) => Err(EditError::NotAGroup(parent_path.to_vec())),
    }
}

/// Adds an empty rule at `path`. See [`add_node`].
pub fn add_rule(root: &mut Node, path: &TreePath) -> Result<(), EditError> {
    add_node(root, path, Node::default())
}

/// Adds a group holding one empty rule at `path`. See [`add_node`].
pub fn add_group(root: &mut Node, path: &TreePath) -> Result<(), EditError> {
    add_node(root, path, Node::Group(Group::new("", vec![Node::default()])))
}

/// Removes and returns the node at `path`. Removing the root resets the tree
/// to an empty rule.
pub fn remove(root: &mut Node, path: &TreePath) -> Result<Node, EditError> {
    let Some((last, parent)) = path.split_last() else {
        return Ok(std::mem::take(root));
    };

    match node_at_mut(root, parent)? {
        Node::Group(group) if *last < group.children.len() => Ok(group.children.remove(*last)),
        Node::Group(_) => Err(EditError::InvalidPath(path.to_vec())),
        Node::Rule(_) => Err(EditError::NotAGroup(parent.to_vec())),
    }
}

/// Writes one slot of the rule at `path`.
pub fn set_slot(root: &mut Node, path: &TreePath, slot: Slot, value: &str) -> Result<(), EditError> {
    rule_at_mut(root, path)?.set_slot(slot, value);
    Ok(())
}

/// Writes the logic word of the group at `path`.
pub fn set_logic(root: &mut Node, path: &TreePath, logic: &str) -> Result<(), EditError> {
    match node_at_mut(root, path)? {
        Node::Group(group) => {
            group.logic = logic.to_string();
            Ok(())
        }
        Node::Rule(_) => Err(EditError::NotAGroup(path.to_vec())),
    }
}

/// Appends an empty entry to the value list of the rule at `path`, turning a
/// single value into a list first.
pub fn add_value(root: &mut Node, path: &TreePath) -> Result<(), EditError> {
    let rule = rule_at_mut(root, path)?;
    let mut values = match std::mem::take(&mut rule.value).into_list() {
        RuleValue::List(values) => values,
        RuleValue::Single(v) => vec![v],
    };
    values.push(String::new());
    rule.value = RuleValue::List(values);
    Ok(())
}
