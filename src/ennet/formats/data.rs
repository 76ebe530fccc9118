//! Structured data formats (json, yaml) over the tree snapshot

use crate::ennet::ast::{snapshot_from_tree, Tree};
use crate::ennet::formats::registry::{FormatError, Formatter};

/// Pretty-printed JSON of the tree snapshot
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_tree(tree))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree snapshot as JSON"
    }
}

/// YAML of the tree snapshot
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        serde_yaml::to_string(&snapshot_from_tree(tree))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tree snapshot as YAML"
    }
}
