//! Transactional cursor over the lexer
//!
//! A [Transaction] borrows its parent cursor (the [Lexer] or another
//! transaction) and forwards every `next()` and `back()` to it, counting how
//! many tokens it has consumed. Because the parent is itself counting, one
//! `next()` on the innermost transaction is recorded by every enclosing
//! transaction up to the lexer, and `rollback()` un-consumes through the same
//! chain. A nested rollback therefore leaves every ancestor's count exact.
//!
//! The parent is mutably borrowed for the transaction's lifetime, so only one
//! chain can be active at a time.

use crate::ennet::lexer::lexer_impl::Lexer;
use crate::ennet::lexer::tokens::Token;

/// Anything tokens can be consumed from and pushed back to
pub trait TokenCursor {
    /// Consumes and returns the next token
    fn next(&mut self) -> Token;

    /// Un-consumes the most recently consumed token
    fn back(&mut self);

    /// Returns the next token without consuming it
    fn peek(&mut self) -> Token {
        let token = self.next();
        self.back();
        token
    }
}

impl TokenCursor for Lexer<'_> {
    fn next(&mut self) -> Token {
        Lexer::next(self)
    }

    fn back(&mut self) {
        Lexer::back(self)
    }

    fn peek(&mut self) -> Token {
        Lexer::peek(self)
    }
}

/// A checkpoint that can un-consume everything read through it
pub struct Transaction<'a> {
    parent: &'a mut dyn TokenCursor,
    consumed: usize,
}

impl<'a> Transaction<'a> {
    /// Starts a transaction on top of `parent`
    pub fn begin(parent: &'a mut dyn TokenCursor) -> Self {
        Transaction {
            parent,
            consumed: 0,
        }
    }

    /// Tokens consumed through this transaction and not yet pushed back
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Pushes back every token consumed through this transaction
    pub fn rollback(&mut self) {
        while self.consumed > 0 {
            self.back();
        }
    }
}

impl TokenCursor for Transaction<'_> {
    fn next(&mut self) -> Token {
        self.consumed += 1;
        self.parent.next()
    }

    fn back(&mut self) {
        self.consumed = self.consumed.saturating_sub(1);
        self.parent.back();
    }
}
