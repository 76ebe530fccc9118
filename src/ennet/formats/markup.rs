//! Markup formatter, the regular expansion output

use crate::ennet::ast::Tree;
use crate::ennet::formats::registry::{FormatError, Formatter};
use crate::ennet::render::render;

/// Renders the tree as markup
pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn name(&self) -> &str {
        "markup"
    }

    fn serialize(&self, tree: &Tree) -> Result<String, FormatError> {
        Ok(render(tree))
    }

    fn description(&self) -> &str {
        "Expanded markup"
    }
}
