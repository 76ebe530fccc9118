//! Grammar productions
//!
//! Each production returns `Ok(true)` when it matched, `Ok(false)` when the
//! input does not start with it (having consumed nothing, or inside a
//! transaction that will be rolled back), and `Err` for anything fatal.

use tracing::trace;

use crate::ennet::ast::Builder;
use crate::ennet::lexer::{TokenCursor, TokenKind, Transaction};
use crate::ennet::parser::error::ParseError;

type Parsed = Result<bool, ParseError>;

/// Largest count accepted after `*`
pub const MAX_MULTIPLICATION: usize = 10_000;

type Production<P> = fn(&mut P, &mut dyn TokenCursor) -> Parsed;

/// Recursive-descent parser driving a [Builder]
pub struct Parser<'b, B: Builder + ?Sized> {
    builder: &'b mut B,
}

impl<'b, B: Builder + ?Sized> Parser<'b, B> {
    pub fn new(builder: &'b mut B) -> Self {
        Parser { builder }
    }

    /// Parses a whole abbreviation. Fails unless every token is consumed.
    pub fn parse(&mut self, cursor: &mut dyn TokenCursor) -> Result<(), ParseError> {
        let parsed = cursor.peek().kind.starts_abbreviation() && self.abbreviation(cursor)?;

        let token = cursor.next();
        match token.kind {
            TokenKind::Error => Err(ParseError::lex(token)),
            TokenKind::Eof if parsed => Ok(()),
            _ if parsed => Err(ParseError::Trailing(token)),
            _ => Err(ParseError::Unexpected(token)),
        }
    }

    fn precheck(&mut self, cursor: &mut dyn TokenCursor, kinds: &[TokenKind]) -> bool {
        kinds.contains(&cursor.peek().kind)
    }

    /// Runs `production` in a transaction, rolling back if it does not match
    fn attempt(&mut self, cursor: &mut dyn TokenCursor, production: Production<Self>) -> Parsed {
        let mut tx = Transaction::begin(cursor);
        let matched = production(self, &mut tx)?;
        if !matched {
            tx.rollback();
        }
        Ok(matched)
    }

    fn abbreviation(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        trace!("abbreviation: try group");
        let group = self.precheck(cursor, &[TokenKind::GroupBegin]) && self.group(cursor)?;
        if !group {
            trace!("abbreviation: try element");
            let element =
                self.precheck(cursor, &[TokenKind::Word, TokenKind::Text]) && self.element(cursor)?;
            if !element {
                return Ok(false);
            }
        }

        trace!("abbreviation: try operator");
        if cursor.peek().kind.is_operator() && self.operator(cursor)? {
            return Ok(cursor.peek().kind.starts_abbreviation() && self.abbreviation(cursor)?);
        }

        Ok(true)
    }

    fn element(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        let tag = self.precheck(cursor, &[TokenKind::Word]) && self.tag_element(cursor)?;
        if !tag {
            let token = cursor.next();
            if !token.is(TokenKind::Text) {
                cursor.back();
                return Ok(false);
            }
            trace!(text = %token.text, "element: text");
            self.builder.text(&token.text)?;
        }

        if self.precheck(cursor, &[TokenKind::Multiply]) {
            self.multiplication(cursor)?;
        }

        Ok(true)
    }

    fn tag_element(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        let token = cursor.next();
        if !token.is(TokenKind::Word) {
            cursor.back();
            return Ok(false);
        }
        trace!(name = %token.text, "tag_element");
        self.builder.element(&token.text)?;

        loop {
            if self.attempt(cursor, Self::id)? {
                continue;
            }
            if self.attempt(cursor, Self::class)? {
                continue;
            }
            if self.attempt(cursor, Self::attr_list)? {
                continue;
            }
            break;
        }

        let token = cursor.next();
        if token.is(TokenKind::Text) {
            self.builder.text(&token.text)?;
        } else {
            cursor.back();
        }

        Ok(true)
    }

    fn id(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        if !cursor.next().is(TokenKind::Id) {
            return Ok(false);
        }
        let name = cursor.next();
        if !name.is(TokenKind::Word) {
            return Err(ParseError::syntax("id name is required", name));
        }
        self.builder.id(&name.text)?;
        Ok(true)
    }

    fn class(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        if !cursor.next().is(TokenKind::Class) {
            return Ok(false);
        }
        let name = cursor.next();
        if !name.is(TokenKind::Word) {
            return Err(ParseError::syntax("class name is required", name));
        }
        self.builder.class(&name.text)?;
        Ok(true)
    }

    fn attr_list(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        if !cursor.next().is(TokenKind::AttrBegin) {
            return Ok(false);
        }

        if !self.attempt(cursor, Self::attr)? {
            return Err(ParseError::syntax("attr name is required", cursor.peek()));
        }
        while self.attempt(cursor, Self::attr)? {}

        let end = cursor.next();
        if !end.is(TokenKind::AttrEnd) {
            return Err(ParseError::syntax("] is required in the end of attrs", end));
        }
        Ok(true)
    }

    fn attr(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        let name = cursor.next();
        if !name.is(TokenKind::Word) {
            return Ok(false);
        }

        if !cursor.next().is(TokenKind::Equals) {
            cursor.back();
            self.builder.attribute(&name.text, "")?;
            return Ok(true);
        }

        let value = cursor.next();
        if !matches!(value.kind, TokenKind::QuotedText | TokenKind::Word) {
            return Err(ParseError::syntax("attr value is required", value));
        }
        trace!(name = %name.text, value = %value.text, "attr");
        self.builder.attribute(&name.text, &value.text)?;
        Ok(true)
    }

    fn group(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        if !cursor.next().is(TokenKind::GroupBegin) {
            cursor.back();
            return Ok(false);
        }
        trace!("group: begin");
        self.builder.group_begin()?;

        let inner = cursor.peek().kind.starts_abbreviation() && self.abbreviation(cursor)?;
        if !inner {
            return Err(ParseError::syntax(
                "a group or element is required",
                cursor.peek(),
            ));
        }

        let end = cursor.next();
        if !end.is(TokenKind::GroupEnd) {
            return Err(ParseError::syntax(
                ") is required in the end of a group",
                end,
            ));
        }
        trace!("group: end");
        self.builder.group_end()?;

        if self.precheck(cursor, &[TokenKind::Multiply]) {
            self.multiplication(cursor)?;
        }

        Ok(true)
    }

    fn multiplication(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        if !cursor.next().is(TokenKind::Multiply) {
            cursor.back();
            return Ok(false);
        }

        let number = cursor.next();
        let count = match number.kind {
            TokenKind::Word if number.text.bytes().all(|b| b.is_ascii_digit()) => {
                number.text.parse::<usize>().ok()
            }
            _ => None,
        };
        let Some(count) = count else {
            return Err(ParseError::syntax(
                "a number following * is required",
                number,
            ));
        };

        if count > MAX_MULTIPLICATION {
            return Err(ParseError::syntax(
                "multiplication count is too large",
                number,
            ));
        }

        trace!(count, "multiplication");
        self.builder.mul(count)?;
        Ok(true)
    }

    fn operator(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        let token = cursor.next();
        match token.kind {
            TokenKind::Child => {
                trace!("operator: child");
                self.builder.op_child()?;
                Ok(true)
            }
            TokenKind::Sibling => {
                trace!("operator: sibling");
                self.builder.op_sibling()?;
                Ok(true)
            }
            TokenKind::Climb => {
                cursor.back();
                self.repeatable_climb(cursor)
            }
            _ => {
                cursor.back();
                Ok(false)
            }
        }
    }

    fn repeatable_climb(&mut self, cursor: &mut dyn TokenCursor) -> Parsed {
        let mut count = 0;
        while cursor.next().is(TokenKind::Climb) {
            count += 1;
        }
        cursor.back();

        if count == 0 {
            return Ok(false);
        }
        trace!(count, "operator: climb");
        self.builder.op_climbup(count)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ennet::ast::{BuildError, NodeKind};
    use crate::ennet::lexer::Lexer;
    use crate::ennet::parser::{parse, parse_tree};

    /// Records every callback as a line, to check the exact call sequence
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
    }

    impl Builder for RecordingBuilder {
        fn element(&mut self, name: &str) -> Result<(), BuildError> {
            self.calls.push(format!("element({name})"));
            Ok(())
        }
        fn id(&mut self, name: &str) -> Result<(), BuildError> {
            self.calls.push(format!("id({name})"));
            Ok(())
        }
        fn class(&mut self, name: &str) -> Result<(), BuildError> {
            self.calls.push(format!("class({name})"));
            Ok(())
        }
        fn attribute(&mut self, name: &str, value: &str) -> Result<(), BuildError> {
            self.calls.push(format!("attribute({name}={value})"));
            Ok(())
        }
        fn text(&mut self, text: &str) -> Result<(), BuildError> {
            self.calls.push(format!("text({text})"));
            Ok(())
        }
        fn mul(&mut self, count: usize) -> Result<(), BuildError> {
            self.calls.push(format!("mul({count})"));
            Ok(())
        }
        fn op_child(&mut self) -> Result<(), BuildError> {
            self.calls.push(">".to_string());
            Ok(())
        }
        fn op_sibling(&mut self) -> Result<(), BuildError> {
            self.calls.push("+".to_string());
            Ok(())
        }
        fn op_climbup(&mut self, count: usize) -> Result<(), BuildError> {
            self.calls.push(format!("^{count}"));
            Ok(())
        }
        fn group_begin(&mut self) -> Result<(), BuildError> {
            self.calls.push("(".to_string());
            Ok(())
        }
        fn group_end(&mut self) -> Result<(), BuildError> {
            self.calls.push(")".to_string());
            Ok(())
        }
    }

    fn calls(source: &str) -> Vec<String> {
        let mut builder = RecordingBuilder::default();
        parse(source, &mut builder).unwrap();
        builder.calls
    }

    #[test]
    fn test_callback_sequence_for_element() {
        assert_eq!(
            calls(r#"a#idid.cls.cls2[attr1 attr2="value2" attr3='value3']{text desu}"#),
            vec![
                "element(a)",
                "id(idid)",
                "class(cls)",
                "class(cls2)",
                "attribute(attr1=)",
                "attribute(attr2=value2)",
                "attribute(attr3=value3)",
                "text(text desu)",
            ]
        );
    }

    #[test]
    fn test_callback_sequence_for_operators() {
        assert_eq!(
            calls("a>b+c^^d"),
            vec!["element(a)", ">", "element(b)", "+", "element(c)", "^2", "element(d)"]
        );
    }

    #[test]
    fn test_callback_sequence_for_groups() {
        assert_eq!(
            calls("(dt+dd)*3+p"),
            vec!["(", "element(dt)", "+", "element(dd)", ")", "mul(3)", "+", "element(p)"]
        );
    }

    #[test]
    fn test_decorations_in_any_order() {
        assert_eq!(
            calls("a[x].b#c.d"),
            vec!["element(a)", "attribute(x=)", "class(b)", "id(c)", "class(d)"]
        );
    }

    #[test]
    fn test_parse_consumes_everything() {
        let mut lexer = Lexer::new("a>b");
        let mut builder = RecordingBuilder::default();
        Parser::new(&mut builder).parse(&mut lexer).unwrap();
        assert_eq!(lexer.peek().kind, TokenKind::Eof);
    }

    #[test]
    fn test_parse_tree_children() {
        let tree = parse_tree("a>b>c").unwrap();
        let c = tree.at_path(&[0, 0, 0]).unwrap();
        assert_eq!(tree.get(c).name, "c");
        assert_eq!(tree.get(c).kind, NodeKind::Element);
    }

    #[test]
    fn test_multiplication_rejects_signs() {
        let err = parse_tree("a*+3").unwrap_err();
        assert_eq!(err.message(), "a number following * is required");
        let err = parse_tree("a*-3").unwrap_err();
        assert_eq!(err.message(), "a number following * is required");
    }

    #[test]
    fn test_multiplication_count_is_bounded() {
        let tree = parse_tree("a*10000").unwrap();
        assert_eq!(tree.get(tree.at_path(&[0]).unwrap()).repeat, MAX_MULTIPLICATION);

        let err = parse_tree("a*10001").unwrap_err();
        assert_eq!(err.message(), "multiplication count is too large");
        let err = parse_tree("a*18446744073709551615").unwrap_err();
        assert_eq!(err.message(), "multiplication count is too large");
        let err = parse_tree("a*99999999999999999999999").unwrap_err();
        assert_eq!(err.message(), "a number following * is required");
    }

    #[test]
    fn test_multiplication_zero_is_allowed() {
        let tree = parse_tree("a*0").unwrap();
        assert_eq!(tree.get(tree.at_path(&[0]).unwrap()).repeat, 0);
    }

    #[test]
    fn test_empty_attr_list() {
        let err = parse_tree("a[]").unwrap_err();
        assert_eq!(err.message(), "attr name is required");
    }

    #[test]
    fn test_empty_group() {
        let err = parse_tree("()").unwrap_err();
        assert_eq!(err.message(), "a group or element is required");
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_tree("(a+b").unwrap_err();
        assert_eq!(err.message(), ") is required in the end of a group");
    }

    #[test]
    fn test_dangling_operator() {
        let err = parse_tree("a+").unwrap_err();
        assert_eq!(err, ParseError::Unexpected(crate::ennet::lexer::Token::eof(3)));
    }

    #[test]
    fn test_unterminated_quote_in_attr() {
        let err = parse_tree(r#"a[title="abc]"#).unwrap_err();
        assert!(matches!(err, ParseError::Lex { ref message, position: 9 } if message == "sudden EOF"));
    }

    #[test]
    fn test_child_of_text_is_rejected() {
        let err = parse_tree("{hoge}>a").unwrap_err();
        assert_eq!(err, ParseError::Build(BuildError::ChildOfText));
    }
}
