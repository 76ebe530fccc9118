//! Tree snapshot - a normalized, owned representation of a finished tree
//!
//! Arena indices and sibling links are an implementation detail of [Tree]. The
//! snapshot drops them in favor of nested children, which is the shape every
//! serializer (treeviz, json, yaml) wants to walk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ennet::ast::node::{NodeId, NodeKind, Tree};

/// A snapshot of a node and its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub kind: NodeKind,

    /// Tag name for elements, content for text runs
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub repeat: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl TreeSnapshot {
    /// Create a childless snapshot
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        TreeSnapshot {
            kind,
            name: name.into(),
            attributes: BTreeMap::new(),
            repeat: 0,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_child(mut self, child: TreeSnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Snapshot the whole tree, starting at the root
pub fn snapshot_from_tree(tree: &Tree) -> TreeSnapshot {
    snapshot_node(tree, tree.root())
}

fn snapshot_node(tree: &Tree, id: NodeId) -> TreeSnapshot {
    let node = tree.get(id);
    TreeSnapshot {
        kind: node.kind,
        name: node.name.clone(),
        attributes: node.attributes.clone(),
        repeat: node.repeat,
        children: tree
            .children(id)
            .map(|child| snapshot_node(tree, child))
            .collect(),
    }
}
