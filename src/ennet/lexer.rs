//! Lexer module for ennet abbreviations
//!
//! Tokenization itself is a vanilla logos lexer (see [tokens]). On top of it sit
//! two layers the parser needs in order to try a production and give it up:
//!
//! - [Lexer] records every scanned token in a scan log, so any number of tokens
//!   can be pushed back with `back()` and read again.
//! - [Transaction] counts what it consumed from its parent cursor and can hand
//!   exactly that many tokens back with `rollback()`. Transactions nest: a
//!   transaction is itself a [TokenCursor] a child transaction can borrow.
//!
//! Lexical errors are never raised here. An unterminated `"..."` or `{...}` run
//! becomes a [TokenKind::Error] token and the parser decides what to do with it.

pub mod lexer_impl;
pub mod tokens;
pub mod transaction;

pub use lexer_impl::{tokenize, Lexer};
pub use tokens::{LexError, RawToken, Token, TokenKind};
pub use transaction::{TokenCursor, Transaction};
