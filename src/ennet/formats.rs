//! Output formats for parsed abbreviations
//!
//! This module contains the formatters a finished tree can be written with:
//! - markup: the expansion itself
//! - treeviz: an indented outline of the tree, for debugging grammars
//! - json / yaml: the tree snapshot through serde

pub mod data;
pub mod markup;
pub mod registry;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use markup::MarkupFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
