//! Implementation of the push-back lexer
//!
//! Tokens are pulled from logos on demand and appended to a scan log. A cursor
//! into the log decides whether `next()` replays a logged token or scans a new
//! one, which is what makes unlimited `back()` possible.

use crate::ennet::lexer::tokens::{LexError, RawToken, Token, TokenKind};
use logos::Logos;

/// Lexer over a single abbreviation
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
    source_len: usize,
    // if cursor == scanned.len(): next() scans a new token
    // else: next() replays scanned[cursor]
    scanned: Vec<Token>,
    cursor: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            source_len: source.len(),
            scanned: Vec::with_capacity(16),
            cursor: 0,
        }
    }

    /// Consumes and returns the next token. Once the input is exhausted every
    /// call returns an end-of-input token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        if self.cursor == self.scanned.len() {
            let token = self.scan();
            self.scanned.push(token);
        }
        let token = self.scanned[self.cursor].clone();
        self.cursor += 1;
        token
    }

    /// Un-consumes the most recently returned token. No-op at the start of input.
    pub fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Returns the next token without consuming it
    pub fn peek(&mut self) -> Token {
        let token = self.next();
        self.back();
        token
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn scan(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::eof(self.source_len + 1);
        };
        let position = self.inner.span().start + 1;

        match result {
            Ok(raw) => Token::from_raw(raw, position),
            Err(LexError::UnexpectedCharacter) => Token::error(
                format!("unexpected character '{}'", self.inner.slice()),
                position,
            ),
            Err(err) => Token::error(err.to_string(), position),
        }
    }
}

/// Convenience function to tokenize a whole abbreviation, up to and including
/// the first end-of-input or error token
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next();
        let done = matches!(token.kind, TokenKind::Eof | TokenKind::Error);
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_word() {
        let mut lexer = Lexer::new("abc");
        let token = lexer.next();
        assert_eq!(token.kind, TokenKind::Word);
        assert_eq!(token.text, "abc");
        assert_eq!(token.position, 1);
        assert_eq!(lexer.next().kind, TokenKind::Eof);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" "), vec![TokenKind::Eof]);
        assert_eq!(kinds("  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::new("a");
        lexer.next();
        assert_eq!(lexer.next(), Token::eof(2));
        assert_eq!(lexer.next(), Token::eof(2));
        assert_eq!(lexer.next(), Token::eof(2));
    }

    #[test]
    fn test_operators_between_words() {
        assert_eq!(
            kinds("abc>def+ghi^jkl"),
            vec![
                TokenKind::Word,
                TokenKind::Child,
                TokenKind::Word,
                TokenKind::Sibling,
                TokenKind::Word,
                TokenKind::Climb,
                TokenKind::Word,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_group_and_multiplication() {
        let tokens = tokenize("abc>(def+ghi)*5");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Word,
                TokenKind::Child,
                TokenKind::GroupBegin,
                TokenKind::Word,
                TokenKind::Sibling,
                TokenKind::Word,
                TokenKind::GroupEnd,
                TokenKind::Multiply,
                TokenKind::Word,
                TokenKind::Eof,
            ]
        );
        assert_eq!(texts, vec!["abc", "", "", "def", "", "ghi", "", "", "5", ""]);
    }

    #[test]
    fn test_attributes_with_spaces() {
        let tokens = tokenize(r#"td[title="Hello world!" colspan=3]"#);
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Word, "td", 1),
                Token::new(TokenKind::AttrBegin, "", 3),
                Token::new(TokenKind::Word, "title", 4),
                Token::new(TokenKind::Equals, "", 9),
                Token::new(TokenKind::QuotedText, "Hello world!", 10),
                Token::new(TokenKind::Word, "colspan", 25),
                Token::new(TokenKind::Equals, "", 32),
                Token::new(TokenKind::Word, "3", 33),
                Token::new(TokenKind::AttrEnd, "", 34),
                Token::eof(35),
            ]
        );
    }

    #[test]
    fn test_unterminated_text_is_error_token() {
        let tokens = tokenize("a{abc");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].text, "sudden EOF");
        assert_eq!(tokens[1].position, 2);
    }

    #[test]
    fn test_unexpected_character_message() {
        let tokens = tokenize("a}");
        assert_eq!(tokens[1], Token::error("unexpected character '}'", 2));
    }

    #[test]
    fn test_back_has_unlimited_depth() {
        let mut lexer = Lexer::new("a>b+c");
        for _ in 0..5 {
            lexer.next();
        }
        assert_eq!(lexer.position(), 5);
        for _ in 0..5 {
            lexer.back();
        }
        assert_eq!(lexer.position(), 0);
        assert_eq!(lexer.next().text, "a");
        assert_eq!(lexer.next().kind, TokenKind::Child);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut lexer = Lexer::new("a");
        lexer.back();
        lexer.back();
        assert_eq!(lexer.next().text, "a");
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new("a+b");
        assert_eq!(lexer.peek().text, "a");
        assert_eq!(lexer.peek().text, "a");
        assert_eq!(lexer.next().text, "a");
        assert_eq!(lexer.peek().kind, TokenKind::Sibling);
    }
}
