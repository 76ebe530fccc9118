//! Fluent assertion API for parsed trees
//!
//! Checking a tree by walking arena indices by hand is noisy and hard to read
//! back. [assert_tree] lets a test state the whole expected shape in one
//! expression:
//!
//! ```rust-example
//! let tree = parse_tree("ul>li.item*3").unwrap();
//! assert_tree(&tree).child_count(1).child(0, |ul| {
//!     ul.element("ul").child_count(1).child(0, |li| {
//!         li.element("li").attribute("class", "item").repeat(3);
//!     });
//! });
//! ```
//!
//! Failures name the path of the offending node, e.g. `children[0][1]`.

use crate::ennet::ast::{Node, NodeId, NodeKind, Tree};

/// Create an assertion builder for a finished tree
pub fn assert_tree(tree: &Tree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'a> {
    tree: &'a Tree,
}

impl<'a> TreeAssertion<'a> {
    /// Assert the number of top-level nodes
    pub fn child_count(self, expected: usize) -> Self {
        let root = NodeAssertion::new(self.tree, self.tree.root(), "children".to_string());
        root.child_count(expected);
        self
    }

    /// Assert on a top-level node by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let root = NodeAssertion::new(self.tree, self.tree.root(), "children".to_string());
        root.child(index, assertion);
        self
    }
}

pub struct NodeAssertion<'a> {
    tree: &'a Tree,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn new(tree: &'a Tree, id: NodeId, context: String) -> Self {
        NodeAssertion { tree, id, context }
    }

    fn node(&self) -> &'a Node {
        self.tree.get(self.id)
    }

    fn kind(self, expected: NodeKind) -> Self {
        let actual = self.node().kind;
        assert_eq!(
            actual, expected,
            "{}: Expected {}, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert this node is an element with the given tag name
    pub fn element(self, name: &str) -> Self {
        let this = self.kind(NodeKind::Element);
        assert_eq!(
            this.node().name,
            name,
            "{}: Expected element <{}>, found <{}>",
            this.context,
            name,
            this.node().name
        );
        this
    }

    /// Assert this node is a text run with exactly this content
    pub fn text(self, content: &str) -> Self {
        let this = self.kind(NodeKind::Text);
        assert_eq!(
            this.node().name,
            content,
            "{}: Expected text {:?}, found {:?}",
            this.context,
            content,
            this.node().name
        );
        this
    }

    pub fn group(self) -> Self {
        self.kind(NodeKind::Group)
    }

    pub fn attribute(self, name: &str, value: &str) -> Self {
        match self.node().attributes.get(name) {
            Some(actual) => assert_eq!(
                actual, value,
                "{}: Expected {}={:?}, found {}={:?}",
                self.context, name, value, name, actual
            ),
            None => panic!(
                "{}: Expected attribute {}, found only [{}]",
                self.context,
                name,
                self.attribute_names()
            ),
        }
        self
    }

    pub fn attribute_count(self, expected: usize) -> Self {
        let actual = self.node().attributes.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} attributes, found {} [{}]",
            self.context,
            expected,
            actual,
            self.attribute_names()
        );
        self
    }

    /// Assert the multiplication count, 0 when the node is not multiplied
    pub fn repeat(self, expected: usize) -> Self {
        let actual = self.node().repeat;
        assert_eq!(
            actual, expected,
            "{}: Expected repeat {}, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.tree.children(self.id).count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} [{}]",
            self.context,
            expected,
            actual,
            self.summarize_children()
        );
        self
    }

    /// Assert on a child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.tree.children(self.id).nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Child index {} out of bounds (node has [{}])",
                self.context,
                index,
                self.summarize_children()
            )
        });
        assertion(NodeAssertion::new(
            self.tree,
            child,
            format!("{}[{}]", self.context, index),
        ));
        self
    }

    fn attribute_names(&self) -> String {
        self.node()
            .attributes
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn summarize_children(&self) -> String {
        self.tree
            .children(self.id)
            .map(|id| {
                let node = self.tree.get(id);
                format!("{}({})", node.kind, node.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
