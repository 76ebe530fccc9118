//! Arena-backed node storage

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Root,
    InProgress,
    Element,
    Text,
    Group,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Root => "Root",
            NodeKind::InProgress => "InProgress",
            NodeKind::Element => "Element",
            NodeKind::Text => "Text",
            NodeKind::Group => "Group",
        };
        write!(f, "{name}")
    }
}

/// Stable index of a node inside its [Tree]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node. `name` holds the tag name of an element and the literal
/// content of a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub name: String,
    /// Attribute values by name. Iteration is sorted by name.
    pub attributes: BTreeMap<String, String>,
    /// 0 renders once, N > 0 renders the subtree N times
    pub repeat: usize,

    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            name: String::new(),
            attributes: BTreeMap::new(),
            repeat: 0,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
            prev_sibling: None,
        }
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

/// An order-preserving n-ary tree with a single root
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a tree holding only its root
    pub fn new() -> Self {
        Tree {
            nodes: vec![Node::new(NodeKind::Root)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root, so it is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Creates a node of `kind` and links it as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind);
        node.parent = Some(parent);
        node.prev_sibling = self.nodes[parent.0].last_child;
        self.nodes.push(node);

        match self.nodes[parent.0].last_child {
            Some(last) => self.nodes[last.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);

        id
    }

    /// Children of `id` in insertion order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).first_child,
        }
    }

    /// Parent of `id`, `None` for the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    /// Iterates over every node in the arena, in creation order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Follows a path of child indices from the root, e.g. `&[1, 0]` is the
    /// first child of the root's second child
    pub fn at_path(&self, path: &[usize]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root(), |id, &index| self.children(id).nth(index))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node, following sibling links
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).next_sibling;
        Some(current)
    }
}
