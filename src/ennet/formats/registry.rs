//! Output formats a finished tree can be written in
//!
//! The command-line front end only knows format names. [FormatRegistry] maps a
//! name to its [Formatter] and, on a miss, reports what it would have accepted.

use crate::ennet::ast::Tree;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter with this name; carries the names that do exist
    UnknownFormat { name: String, available: Vec<String> },
    /// The formatter failed to serialize the tree
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat { name, available } => write!(
                f,
                "unknown format '{name}' (available: {})",
                available.join(", ")
            ),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Writes a finished tree in one output format
pub trait Formatter: Send + Sync {
    /// Name the format is selected by, e.g. `--format treeviz`
    fn name(&self) -> &str;

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError>;

    /// One-line summary for `--list-formats`
    fn description(&self) -> &str;
}

/// Formatters ordered by name
pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry holding no formatter at all
    pub fn empty() -> Self {
        FormatRegistry {
            formatters: Vec::new(),
        }
    }

    /// Markup, treeviz, json and yaml
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(super::MarkupFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Adds `formatter`, taking the place of one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        match self
            .formatters
            .binary_search_by(|f| f.name().cmp(formatter.name()))
        {
            Ok(at) => self.formatters[at] = Box::new(formatter),
            Err(at) => self.formatters.insert(at, Box::new(formatter)),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .binary_search_by(|f| f.name().cmp(name))
            .map(|at| self.formatters[at].as_ref())
            .map_err(|_| FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Every formatter, sorted by name
    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.iter().map(|f| f.as_ref())
    }

    pub fn names(&self) -> Vec<String> {
        self.formatters().map(|f| f.name().to_string()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
