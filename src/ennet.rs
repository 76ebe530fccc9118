//! Main module for ennet library functionality
//!
//! An abbreviation goes through four stages:
//!
//!     1. [lexer]: logos tokenization behind a push-back scan log, plus the
//!        transactional cursor the parser speculates with.
//!     2. [parser]: recursive descent over the abbreviation grammar. It never
//!        builds anything itself, it only calls a [ast::Builder].
//!     3. [ast]: the arena tree that [ast::NodeBuilder] grows from those calls.
//!     4. [render]: the tree walk that produces markup, including the `$`
//!        numbering applied to every multiplied node.
//!
//! [formats] turns a finished tree into other shapes (treeviz, json, yaml),
//! [processor] ties parsing and formatting together, and [config] holds the
//! settings used by the command-line front end.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod render;
pub mod testing;

pub use parser::{parse, parse_tree, ParseError};
pub use processor::{process, ProcessingError};
pub use render::{apply_mul, render};

/// Expands the abbreviation in `source` into markup.
///
/// ```text
/// expand("a>b+c")  =>  Ok("<a><b /><c /></a>")
/// expand("a#")     =>  Err(id name is required ...)
/// ```
pub fn expand(source: &str) -> Result<String, ParseError> {
    tracing::debug!(abbreviation = source, "expanding");
    let tree = parse_tree(source)?;
    let markup = render(&tree);
    tracing::debug!(len = markup.len(), "expanded");
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_element() {
        assert_eq!(expand("a").unwrap(), "<a />");
    }

    #[test]
    fn test_expand_readme_example() {
        assert_eq!(
            expand("ul>li.item-${ITEM$}*3").unwrap(),
            r#"<ul><li class="item-1">ITEM1</li><li class="item-2">ITEM2</li><li class="item-3">ITEM3</li></ul>"#
        );
    }

    #[test]
    fn test_expand_reports_errors() {
        let err = expand("a#").unwrap_err();
        assert!(err.to_string().contains("id name is required"));
    }
}
