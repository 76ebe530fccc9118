//! Treeviz formatter for parsed trees
//!
//! One line per node, children indented under their parent:
//!
//!     ├─ Element: div @id=header
//!     └─ Element: ul
//!       └─ Element: li @class=item$ *5

use crate::ennet::ast::{snapshot_from_tree, NodeKind, Tree, TreeSnapshot};
use crate::ennet::formats::registry::{FormatError, Formatter};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(node: &TreeSnapshot) -> String {
    let mut label = match node.kind {
        NodeKind::Text => format!("\"{}\"", truncate(&node.name, 30)),
        NodeKind::Group => "()".to_string(),
        _ => node.name.clone(),
    };
    for (name, value) in &node.attributes {
        label.push_str(&format!(" @{name}={value}"));
    }
    if node.repeat > 0 {
        label.push_str(&format!(" *{}", node.repeat));
    }
    label
}

pub fn to_treeviz_str(tree: &Tree) -> String {
    let snapshot = snapshot_from_tree(tree);
    let mut result = String::new();
    append_children(&mut result, &snapshot.children, "");
    result
}

fn append_node(result: &mut String, node: &TreeSnapshot, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.kind,
        display_label(node)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children, &new_prefix);
}

fn append_children(result: &mut String, children: &[TreeSnapshot], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

/// Formatter for the treeviz outline
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Indented outline of the parsed tree"
    }
}
