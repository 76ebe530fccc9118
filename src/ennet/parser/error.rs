//! Parse errors
//!
//! Every error is fatal: an abbreviation either expands completely or not at
//! all. Messages name the offending token and its 1-based input offset.

use std::fmt;

use crate::ennet::ast::BuildError;
use crate::ennet::lexer::{Token, TokenKind};

/// Errors that abort an expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer produced an error token (e.g. an unterminated `{...}`)
    Lex { message: String, position: usize },
    /// A required token is missing after a marker
    Syntax { message: &'static str, found: Token },
    /// The builder rejected a production
    Build(BuildError),
    /// Nothing could be parsed at the start of the input
    Unexpected(Token),
    /// A complete abbreviation is followed by more tokens
    Trailing(Token),
}

impl ParseError {
    /// A grammar error for a missing token, unless the token in its place is a
    /// lexer error, which takes precedence
    pub(crate) fn syntax(message: &'static str, found: Token) -> Self {
        if found.is(TokenKind::Error) {
            return ParseError::lex(found);
        }
        ParseError::Syntax { message, found }
    }

    pub(crate) fn lex(token: Token) -> Self {
        ParseError::Lex {
            message: token.text,
            position: token.position,
        }
    }

    /// The fixed message of a grammar or builder error, without token details
    pub fn message(&self) -> String {
        match self {
            ParseError::Lex { message, .. } => message.clone(),
            ParseError::Syntax { message, .. } => message.to_string(),
            ParseError::Build(err) => err.to_string(),
            ParseError::Unexpected(_) => "parse error".to_string(),
            ParseError::Trailing(_) => "parsing failed".to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex { message, position } => {
                write!(f, "parsing failed because of {message} at {position}")
            }
            ParseError::Syntax { message, found } => {
                write!(f, "{message}, found {found} at {}", found.position)
            }
            ParseError::Build(err) => write!(f, "{err}"),
            ParseError::Unexpected(token) if token.is(TokenKind::Eof) => {
                write!(f, "parse error: unexpected end of input")
            }
            ParseError::Unexpected(token) => {
                write!(
                    f,
                    "parsing failed because of unexpected {token} at {}",
                    token.position
                )
            }
            ParseError::Trailing(token) => {
                write!(
                    f,
                    "parsing failed because of extra {token} at {}",
                    token.position
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Build(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BuildError> for ParseError {
    fn from(err: BuildError) -> Self {
        ParseError::Build(err)
    }
}
