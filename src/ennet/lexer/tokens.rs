//! Token definitions for ennet abbreviations
//!
//! [RawToken] is the logos view of the input: structural characters, words and
//! the two kinds of delimited text. [Token] is what the rest of the crate sees,
//! a kind, the token text and the 1-based offset it started at.
use logos::Logos;
use std::fmt;

/// Errors produced while scanning a single token
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// A character that cannot start any token
    #[default]
    UnexpectedCharacter,
    /// A quoted or braced run reached the end of input before its closing delimiter
    SuddenEof,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter => write!(f, "unexpected character"),
            LexError::SuddenEof => write!(f, "sudden EOF"),
        }
    }
}

impl std::error::Error for LexError {}

/// All tokens logos can produce from an abbreviation
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
#[logos(error = LexError)]
pub enum RawToken {
    // Operators
    #[token(">")]
    Child,
    #[token("+")]
    Sibling,
    #[token("^")]
    Climb,
    #[token("*")]
    Multiply,
    #[token("(")]
    GroupBegin,
    #[token(")")]
    GroupEnd,

    // Element decorations
    #[token("#")]
    Id,
    #[token(".")]
    Class,
    #[token("[")]
    AttrBegin,
    #[token("]")]
    AttrEnd,
    #[token("=")]
    Equals,

    // "..." or '...', a doubled quote stands for itself
    #[token("\"", |lex| delimited(lex, '"'))]
    #[token("'", |lex| delimited(lex, '\''))]
    QuotedText(String),

    // {...}, a doubled }} stands for }
    #[token("{", |lex| delimited(lex, '}'))]
    Text(String),

    // Anything up to the next structural character, quote, brace or whitespace
    #[regex(r#"[^>+^*()#.\[\]={}'"\s]+"#, |lex| lex.slice().to_owned())]
    Word(String),
}

/// Reads a delimited run from the remainder of the input, right after its
/// opening delimiter. `close` doubled inside the run is a literal `close`.
fn delimited(lex: &mut logos::Lexer<RawToken>, close: char) -> Result<String, LexError> {
    let rest = lex.remainder();
    let mut text = String::new();
    let mut chars = rest.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != close {
            text.push(c);
            continue;
        }
        if let Some(&(_, next)) = chars.peek() {
            if next == close {
                text.push(c);
                chars.next();
                continue;
            }
        }
        lex.bump(offset + c.len_utf8());
        return Ok(text);
    }

    lex.bump(rest.len());
    Err(LexError::SuddenEof)
}

/// Kind of a [Token]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Error,

    Child,
    Sibling,
    Climb,
    Multiply,
    GroupBegin,
    GroupEnd,

    Id,
    Class,
    AttrBegin,
    AttrEnd,
    Equals,

    Word,
    Text,
    QuotedText,
}

impl TokenKind {
    /// Check if this kind is one of the operators joining two abbreviations
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Child | TokenKind::Sibling | TokenKind::Climb)
    }

    /// Check if this kind can start an abbreviation (a group or an element)
    pub fn starts_abbreviation(&self) -> bool {
        matches!(
            self,
            TokenKind::GroupBegin | TokenKind::Word | TokenKind::Text
        )
    }
}

/// A scanned token. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Word or text content, or the message of an error token
    pub text: String,
    /// 1-based byte offset of the first character
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Token::new(TokenKind::Eof, "", position)
    }

    pub fn error(message: impl Into<String>, position: usize) -> Self {
        Token::new(TokenKind::Error, message, position)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Converts a logos token found at `position`
    pub fn from_raw(raw: RawToken, position: usize) -> Self {
        let (kind, text) = match raw {
            RawToken::Child => (TokenKind::Child, String::new()),
            RawToken::Sibling => (TokenKind::Sibling, String::new()),
            RawToken::Climb => (TokenKind::Climb, String::new()),
            RawToken::Multiply => (TokenKind::Multiply, String::new()),
            RawToken::GroupBegin => (TokenKind::GroupBegin, String::new()),
            RawToken::GroupEnd => (TokenKind::GroupEnd, String::new()),
            RawToken::Id => (TokenKind::Id, String::new()),
            RawToken::Class => (TokenKind::Class, String::new()),
            RawToken::AttrBegin => (TokenKind::AttrBegin, String::new()),
            RawToken::AttrEnd => (TokenKind::AttrEnd, String::new()),
            RawToken::Equals => (TokenKind::Equals, String::new()),
            RawToken::QuotedText(text) => (TokenKind::QuotedText, text),
            RawToken::Text(text) => (TokenKind::Text, text),
            RawToken::Word(text) => (TokenKind::Word, text),
        };
        Token::new(kind, text, position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Error => write!(f, "{}", self.text),
            TokenKind::Child => write!(f, ">"),
            TokenKind::Sibling => write!(f, "+"),
            TokenKind::Climb => write!(f, "^"),
            TokenKind::Multiply => write!(f, "*"),
            TokenKind::GroupBegin => write!(f, "("),
            TokenKind::GroupEnd => write!(f, ")"),
            TokenKind::Id => write!(f, "#"),
            TokenKind::Class => write!(f, "."),
            TokenKind::AttrBegin => write!(f, "["),
            TokenKind::AttrEnd => write!(f, "]"),
            TokenKind::Equals => write!(f, "="),
            TokenKind::Word => write!(f, "word({})", self.text),
            TokenKind::Text => write!(f, "{{{}}}", self.text),
            TokenKind::QuotedText => write!(f, "\"{}\"", self.text),
        }
    }
}
