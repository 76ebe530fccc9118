//! Builder callbacks and the tree-building implementation
//!
//! The parser reports every production it recognizes through [Builder]. It
//! never looks at the tree, so anything implementing the trait can consume an
//! abbreviation (see the counting builder in the parser tests).
//!
//! [NodeBuilder] keeps a cursor on the node currently being described. Every
//! operator creates an [NodeKind::InProgress] placeholder at the right place
//! and moves the cursor onto it. The next production then decides what the
//! placeholder is: `element` makes it an Element, `text` a Text, `group_begin`
//! a Group.

use std::fmt;

use crate::ennet::ast::node::{NodeId, NodeKind, Tree};

/// Builder-contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An attribute was attached to a Text node
    AttributeOfText,
    /// An attribute was attached to a node that already has a Text child
    AttributeBeforeText,
    /// A child was attached to a Text node
    ChildOfText,
    /// A placeholder was never resolved into an Element, Text or Group
    Unresolved,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::AttributeOfText => write!(f, "attribute of Text"),
            BuildError::AttributeBeforeText => write!(f, "attribute must appear before Text"),
            BuildError::ChildOfText => write!(f, "text cannot have children"),
            BuildError::Unresolved => write!(f, "unresolved node in finished tree"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Callbacks invoked by the parser, one per recognized production
pub trait Builder {
    /// A tag name
    fn element(&mut self, name: &str) -> Result<(), BuildError>;
    /// `#name`
    fn id(&mut self, name: &str) -> Result<(), BuildError>;
    /// `.name`
    fn class(&mut self, name: &str) -> Result<(), BuildError>;
    /// `name` or `name=value` inside `[...]`, `value` is empty when missing
    fn attribute(&mut self, name: &str, value: &str) -> Result<(), BuildError>;
    /// `{text}`, appended to the current text run or starting a new one
    fn text(&mut self, text: &str) -> Result<(), BuildError>;
    /// `*count`
    fn mul(&mut self, count: usize) -> Result<(), BuildError>;

    /// `>`
    fn op_child(&mut self) -> Result<(), BuildError>;
    /// `+`
    fn op_sibling(&mut self) -> Result<(), BuildError>;
    /// `^` repeated `count` times
    fn op_climbup(&mut self, count: usize) -> Result<(), BuildError>;

    /// `(`
    fn group_begin(&mut self) -> Result<(), BuildError>;
    /// `)`
    fn group_end(&mut self) -> Result<(), BuildError>;
}

/// Builds a [Tree] from parser callbacks
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    tree: Tree,
    current: NodeId,
}

impl NodeBuilder {
    pub fn new() -> Self {
        let mut tree = Tree::new();
        let current = tree.append_child(tree.root(), NodeKind::InProgress);
        NodeBuilder { tree, current }
    }

    /// The tree as built so far
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The node the next production applies to
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Hands over the finished tree. Fails if a placeholder was left behind,
    /// which means the callbacks stopped right after an operator.
    pub fn finish(self) -> Result<Tree, BuildError> {
        if self
            .tree
            .nodes()
            .any(|(_, node)| node.kind == NodeKind::InProgress)
        {
            return Err(BuildError::Unresolved);
        }
        Ok(self.tree)
    }

    fn kind(&self, id: NodeId) -> NodeKind {
        self.tree.get(id).kind
    }

    fn is_boundary(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Root | NodeKind::Group)
    }

    // The current node is never the root, it always has a parent
    fn parent_of_current(&self) -> NodeId {
        self.tree
            .parent(self.current)
            .unwrap_or_else(|| self.tree.root())
    }

    fn open_placeholder(&mut self, parent: NodeId) {
        self.current = self.tree.append_child(parent, NodeKind::InProgress);
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for NodeBuilder {
    fn element(&mut self, name: &str) -> Result<(), BuildError> {
        let node = self.tree.get_mut(self.current);
        if node.kind == NodeKind::InProgress {
            node.kind = NodeKind::Element;
            node.name = name.to_string();
        }
        Ok(())
    }

    fn id(&mut self, name: &str) -> Result<(), BuildError> {
        self.attribute("id", name)
    }

    fn class(&mut self, name: &str) -> Result<(), BuildError> {
        self.attribute("class", name)
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
        let current = self.current;
        match self.kind(current) {
            NodeKind::Text => return Err(BuildError::AttributeOfText),
            NodeKind::InProgress => self.tree.get_mut(current).kind = NodeKind::Element,
            _ => {}
        }
        if let Some(first) = self.tree.get(current).first_child {
            if self.kind(first) == NodeKind::Text {
                return Err(BuildError::AttributeBeforeText);
            }
        }

        self.tree
            .get_mut(current)
            .attributes
            .entry(name.to_string())
            .and_modify(|existing| {
                existing.push(' ');
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), BuildError> {
        let current = self.current;
        match self.kind(current) {
            NodeKind::Text => self.tree.get_mut(current).name.push_str(text),
            NodeKind::InProgress => {
                let node = self.tree.get_mut(current);
                node.kind = NodeKind::Text;
                node.name.push_str(text);
            }
            _ => {
                let child = self.tree.append_child(current, NodeKind::Text);
                self.tree.get_mut(child).name = text.to_string();
            }
        }
        Ok(())
    }

    fn mul(&mut self, count: usize) -> Result<(), BuildError> {
        self.tree.get_mut(self.current).repeat = count;
        Ok(())
    }

    fn op_child(&mut self) -> Result<(), BuildError> {
        if self.kind(self.current) == NodeKind::Text {
            return Err(BuildError::ChildOfText);
        }
        self.open_placeholder(self.current);
        Ok(())
    }

    fn op_sibling(&mut self) -> Result<(), BuildError> {
        let parent = self.parent_of_current();
        self.open_placeholder(parent);
        Ok(())
    }

    fn op_climbup(&mut self, count: usize) -> Result<(), BuildError> {
        for _ in 0..count {
            match self.tree.parent(self.current) {
                Some(parent) if !self.is_boundary(parent) => self.current = parent,
                _ => break,
            }
        }
        self.op_sibling()
    }

    fn group_begin(&mut self) -> Result<(), BuildError> {
        let group = if self.kind(self.current) == NodeKind::InProgress {
            self.tree.get_mut(self.current).kind = NodeKind::Group;
            self.current
        } else {
            self.tree.append_child(self.current, NodeKind::Group)
        };
        self.open_placeholder(group);
        Ok(())
    }

    fn group_end(&mut self) -> Result<(), BuildError> {
        // Step out of the group's last item, then up to the group itself
        if let Some(parent) = self.tree.parent(self.current) {
            if self.kind(parent) != NodeKind::Root {
                self.current = parent;
            }
        }
        while self.kind(self.current) != NodeKind::Group {
            match self.tree.parent(self.current) {
                Some(parent) if self.kind(parent) != NodeKind::Root => self.current = parent,
                _ => break,
            }
        }
        Ok(())
    }
}
