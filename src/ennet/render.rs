//! Tree-to-markup renderer
//!
//!     Rendering is a pure walk over a finished tree:
//!         - Root and Group render as the concatenation of their children.
//!         - Text renders as its literal content.
//!         - Element renders as `<name attr="value"...>children</name>`, or
//!           `<name ... />` when it has no children. Attributes come out sorted
//!           by name and every `"` in a value is written as `\"`.
//!
//!     A node with a repeat count is rendered once as a template, and the
//!     template goes through [apply_mul] to produce every numbered copy.
//!
//! Numbering
//!
//!     Inside a multiplied template, every run of `$` is a placeholder for the
//!     iteration number, zero-padded to the length of the run. An optional
//!     `@` suffix changes the numbering: `@N` starts counting at N, `@-` counts
//!     down, `@-N` counts down to N.
//!
//!         li{$}*3          <li>1</li><li>2</li><li>3</li>
//!         li{$$@-}*3       <li>03</li><li>02</li><li>01</li>
//!         li{$@10}*2       <li>10</li><li>11</li>

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::ennet::ast::{NodeId, NodeKind, Tree};

// Upper bound for the up-front allocation of a multiplied template
const MAX_PRESIZE: usize = 1 << 16;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\$+)(@(-)?(\d+)?)?").unwrap());

/// Renders a finished tree into markup
pub fn render(tree: &Tree) -> String {
    render_node(tree, tree.root())
}

fn render_node(tree: &Tree, id: NodeId) -> String {
    let node = tree.get(id);
    match node.kind {
        NodeKind::Text => apply_mul(&node.name, node.repeat),
        NodeKind::Root | NodeKind::Group => {
            let mut out = String::with_capacity(128);
            for child in tree.children(id) {
                out.push_str(&render_node(tree, child));
            }
            apply_mul(&out, node.repeat)
        }
        NodeKind::Element => {
            let mut out = String::with_capacity(128);
            out.push('<');
            out.push_str(&node.name);
            for (name, value) in &node.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&value.replace('"', "\\\""));
                out.push('"');
            }

            if node.has_children() {
                out.push('>');
                for child in tree.children(id) {
                    out.push_str(&render_node(tree, child));
                }
                out.push_str("</");
                out.push_str(&node.name);
                out.push('>');
            } else {
                out.push_str(" />");
            }
            apply_mul(&out, node.repeat)
        }
        // A finished tree holds no placeholders
        NodeKind::InProgress => String::new(),
    }
}

/// Repeats `template` `count` times, substituting `$` placeholders with the
/// iteration number. A `count` of zero returns the template unchanged.
pub fn apply_mul(template: &str, count: usize) -> String {
    if count == 0 {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len().saturating_mul(count).min(MAX_PRESIZE));
    for i in 0..count {
        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
            number(caps, i as i128, count as i128)
        });
        out.push_str(&rendered);
    }
    out
}

// i128 holds any i64 base plus any usize count
fn number(caps: &Captures, i: i128, count: i128) -> String {
    let pad = caps.get(1).map_or(1, |m| m.as_str().len());
    let descending = caps.get(3).is_some();
    let base = caps
        .get(4)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map_or(1, i128::from);

    let value = if descending {
        base + count - 1 - i
    } else {
        base + i
    };
    format!("{value:0pad$}")
}
