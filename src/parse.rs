//! Recursive descent parser building expression trees from tokens.
//!
//! Operator precedence, from the loosest to the tightest:
//! ```text
//! EQV < IMP < (OR, NOR) < XOR < AND < NAND < NOT < atom
//! ```
//! All binary levels are left-associative, NOT is right-recursive.

use crate::error::ParseError;
use crate::lexer::{tokenize, Token, TokenKind};
use crate::{BoolFnError, Node, Operator};
use log::trace;

/// Parse a complete token stream into an expression tree.
///
/// The stream must contain exactly one expression followed by the EOF sentinel.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens);
    let node = parser.expr()?;
    parser.expect_end()?;
    Ok(node)
}

/// Tokenize and parse an expression.
pub fn parse_expression(text: &str) -> Result<Node, BoolFnError> {
    let tokens = tokenize(text)?;
    trace!("parse({:?})", text);
    Ok(parse(&tokens)?)
}

type Level<'a> = fn(&mut Parser<'a>) -> Result<Node, ParseError>;

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// The kind of the current token. A missing sentinel is read as EOF.
    fn current(&self) -> TokenKind {
        self.tokens
            .get(self.position)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError {
            expected: expected.into(),
            actual: self.current().name().to_string(),
            position: self.position + 1,
        }
    }

    /// Consume the current token if it has the expected kind
    fn eat(&mut self, kind: TokenKind) -> Result<Option<&'a Token>, ParseError> {
        if self.current() != kind {
            return Err(self.error(kind.name()));
        }
        let token = self.tokens.get(self.position);
        self.position += 1;
        Ok(token)
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current() {
            TokenKind::Eof => Ok(()),
            _ => Err(self.error(TokenKind::Eof.name())),
        }
    }

    /// Parse a left-associative chain of operands separated by any of the given operators
    fn chain(
        &mut self,
        operators: &[(TokenKind, Operator)],
        operand: Level<'a>,
    ) -> Result<Node, ParseError> {
        let mut node = operand(self)?;
        while let Some((kind, op)) = operators.iter().find(|(k, _)| *k == self.current()) {
            self.eat(*kind)?;
            node = Node::operation(*op, node, operand(self)?);
        }
        Ok(node)
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        self.equiv()
    }

    fn equiv(&mut self) -> Result<Node, ParseError> {
        self.chain(&[(TokenKind::Eqv, Operator::Eqv)], Self::imp)
    }

    fn imp(&mut self) -> Result<Node, ParseError> {
        self.chain(&[(TokenKind::Imp, Operator::Imp)], Self::or)
    }

    fn or(&mut self) -> Result<Node, ParseError> {
        self.chain(
            &[(TokenKind::Or, Operator::Or), (TokenKind::Nor, Operator::Nor)],
            Self::xor,
        )
    }

    fn xor(&mut self) -> Result<Node, ParseError> {
        self.chain(&[(TokenKind::Xor, Operator::Xor)], Self::and)
    }

    fn and(&mut self) -> Result<Node, ParseError> {
        self.chain(&[(TokenKind::And, Operator::And)], Self::nand)
    }

    fn nand(&mut self) -> Result<Node, ParseError> {
        self.chain(&[(TokenKind::Nand, Operator::Nand)], Self::factor)
    }

    fn factor(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            TokenKind::Not => {
                self.eat(TokenKind::Not)?;
                Ok(Node::negation(self.factor()?))
            }
            TokenKind::Identifier => {
                let token = self.eat(TokenKind::Identifier)?;
                let name = token.and_then(|t| t.text.clone()).unwrap_or_default();
                Ok(Node::Variable(name))
            }
            TokenKind::Const => {
                let token = self.eat(TokenKind::Const)?;
                let text = token.and_then(|t| t.text.as_deref()).unwrap_or_default();
                Ok(Node::Const(matches!(
                    text.to_ascii_lowercase().as_str(),
                    "1" | "true"
                )))
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(self.error("NOT, IDENTIFIER, CONST or LPAREN")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::*;
    use test_log::test;

    fn var(name: &str) -> Node {
        Node::var(name)
    }

    #[test]
    fn simple_parse() -> Result<(), BoolFnError> {
        let node = parse_expression("(A AND B) OR NOT(C)")?;
        assert_eq!(node, (var("A") & var("B")) | !var("C"));
        Ok(())
    }

    #[test]
    fn synonyms_give_equal_trees() -> Result<(), BoolFnError> {
        let expected = parse_expression("A AND B")?;
        assert_eq!(parse_expression("A && B")?, expected);
        assert_eq!(parse_expression("A ∧ B")?, expected);
        assert_eq!(parse_expression("A & B")?, expected);
        assert_eq!(parse_expression("A and B")?, expected);

        assert_eq!(parse_expression("A ↑ B")?, parse_expression("A NAND B")?);
        assert_eq!(parse_expression("A <=> B")?, parse_expression("A EQV B")?);
        assert_eq!(parse_expression("¬A")?, parse_expression("NOT A")?);
        Ok(())
    }

    #[test]
    fn precedence() -> Result<(), BoolFnError> {
        let node = parse_expression("A OR B AND C")?;
        assert_eq!(node, var("A") | (var("B") & var("C")));

        let node = parse_expression("A AND B NAND C")?;
        assert_eq!(
            node,
            var("A") & Node::operation(Operator::Nand, var("B"), var("C"))
        );

        let node = parse_expression("A XOR B AND C")?;
        assert_eq!(node, var("A") ^ (var("B") & var("C")));

        let node = parse_expression("A OR B XOR C")?;
        assert_eq!(node, var("A") | (var("B") ^ var("C")));

        let node = parse_expression("A IMP B OR C")?;
        assert_eq!(
            node,
            Node::operation(Operator::Imp, var("A"), var("B") | var("C"))
        );

        let node = parse_expression("A EQV B IMP C")?;
        assert_eq!(
            node,
            Node::operation(
                Operator::Eqv,
                var("A"),
                Node::operation(Operator::Imp, var("B"), var("C"))
            )
        );

        let node = parse_expression("NOT A AND B")?;
        assert_eq!(node, !var("A") & var("B"));
        Ok(())
    }

    #[test]
    fn left_associative() -> Result<(), BoolFnError> {
        let node = parse_expression("A IMP B IMP C")?;
        assert_eq!(
            node,
            Node::operation(
                Operator::Imp,
                Node::operation(Operator::Imp, var("A"), var("B")),
                var("C")
            )
        );

        let node = parse_expression("A NOR B OR C")?;
        assert_eq!(
            node,
            Node::operation(Operator::Nor, var("A"), var("B")) | var("C")
        );
        Ok(())
    }

    #[test]
    fn constants() -> Result<(), BoolFnError> {
        assert_eq!(parse_expression("TRUE")?, Node::Const(true));
        assert_eq!(parse_expression("false")?, Node::Const(false));
        assert_eq!(
            parse_expression("1 OR 0")?,
            Node::Const(true) | Node::Const(false)
        );
        Ok(())
    }

    #[test]
    fn nested_parentheses() -> Result<(), BoolFnError> {
        let node = parse_expression("(A AND (B OR (C XOR D)))")?;
        assert_eq!(node.to_string(), "(A AND (B OR (C XOR D)))");
        Ok(())
    }

    #[test]
    fn parser_errors() {
        let tokens = tokenize("(A AND B").unwrap();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.expected, "RPAREN");
        assert_eq!(err.actual, "EOF");
        assert_eq!(err.position, 5);

        let tokens = tokenize("A B").unwrap();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.expected, "EOF");
        assert_eq!(err.actual, "IDENTIFIER");
        assert_eq!(err.position, 2);

        let tokens = tokenize("A AND").unwrap();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.actual, "EOF");
        assert_eq!(err.position, 3);

        assert!(parse(&tokenize("").unwrap()).is_err());
        assert!(parse(&tokenize(")").unwrap()).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn lexer_errors_surface() {
        match parse_expression("A # B") {
            Err(BoolFnError::Lex(e)) => assert_eq!(e.position, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
