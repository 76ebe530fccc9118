//! Abstract syntax tree for ennet abbreviations
//!
//!     The tree is an arena ([Tree]) of [Node]s addressed by [NodeId]. Parent and
//!     sibling links are plain indices, the arena owns every node, and the whole
//!     tree is dropped in one go once it has been rendered.
//!
//!     Node kinds:
//!         - Root: exactly one per tree, never rendered itself
//!         - Element: a tag with attributes and children
//!         - Text: a literal run, never has children or attributes
//!         - Group: a parenthesized sub-abbreviation, rendered as its children
//!         - InProgress: a placeholder that only exists while parsing
//!
//!     The tree is grown by [NodeBuilder], which implements the [Builder]
//!     callbacks the parser invokes. [snapshot] provides a normalized,
//!     serializable view of a finished tree for the output formats.

pub mod builder;
pub mod node;
pub mod snapshot;

pub use builder::{BuildError, Builder, NodeBuilder};
pub use node::{Children, Node, NodeId, NodeKind, Tree};
pub use snapshot::{snapshot_from_tree, TreeSnapshot};
