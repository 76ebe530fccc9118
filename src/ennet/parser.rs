//! Parser module for ennet abbreviations
//!
//!     A recursive-descent parser over the grammar below. Productions report
//!     what they recognize to a [Builder] and never touch a tree themselves,
//!     so the same grammar can drive any builder implementation.
//!
//!     attr-list        = "[", attr, {attr}, "]";
//!     attr             = WORD, ["=", (QTEXT | WORD)];
//!     id               = "#", WORD;
//!     class            = ".", WORD;
//!     tag-element      = WORD, {id | class | attr-list}, [TEXT];
//!     multiplication   = "*", NUMBER;
//!     element          = (tag-element | TEXT), [multiplication];
//!     group            = "(", abbreviation, ")", [multiplication];
//!     operator         = CHILD | SIBLING | repeatable-climb;
//!     repeatable-climb = CLIMB, {CLIMB};
//!     abbreviation     = (group | element), [operator, abbreviation];
//!
//!     Choices are made by peeking at the next token kind. The id / class /
//!     attr-list loop is the exception: each alternative runs inside a
//!     [crate::ennet::lexer::Transaction] and is rolled back when it does not
//!     match.

pub mod error;
pub mod grammar;

pub use error::ParseError;
pub use grammar::Parser;

use crate::ennet::ast::{Builder, NodeBuilder, Tree};
use crate::ennet::lexer::Lexer;

/// Parses `source`, reporting every production to `builder`
pub fn parse<B: Builder + ?Sized>(source: &str, builder: &mut B) -> Result<(), ParseError> {
    let mut lexer = Lexer::new(source);
    Parser::new(builder).parse(&mut lexer)
}

/// Parses `source` into a finished [Tree]
pub fn parse_tree(source: &str) -> Result<Tree, ParseError> {
    let mut builder = NodeBuilder::new();
    parse(source, &mut builder)?;
    Ok(builder.finish()?)
}
