//! Expression parsing implementation
//!
//! Grammar, one method per precedence level:
//!
//! ```text
//! expression := term   (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := digit+ | '(' expression ')'
//! ```
//!
//! The first character always selects the production, so no rule backtracks.
//! Operator chains fold to the left: `a*b/c` becomes `((a*b)/c)`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{BinOp, Node};
use crate::parser::parse::{ParseError, Parser};
use crate::parser::symbols::TokenKind;

impl Parser {
    /// Parse expression (top-level entry point): additive (+ -)
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.cursor.peek().and_then(BinOp::additive) {
            self.cursor.advance();
            let right = self.parse_term()?;
            left = self.fold(op, left, right);
        }

        Ok(left)
    }

    /// Parse term: multiplicative (* /)
    pub(crate) fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.cursor.peek().and_then(BinOp::multiplicative) {
            self.cursor.advance();
            let right = self.parse_factor()?;
            left = self.fold(op, left, right);
        }

        Ok(left)
    }

    /// Parse factor: number literal or parenthesized expression
    pub(crate) fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let position = self.cursor.position();

        match self.cursor.peek() {
            None => Err(ParseError::UnexpectedEndOfInput { position }),
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.cursor.eat_digits();
                self.symbols.insert(digits.as_str(), TokenKind::Number);
                Ok(Node::Number(digits))
            }
            Some('(') => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(found) => Err(ParseError::UnexpectedCharacter { found, position }),
        }
    }

    /// Combine the accumulated subtree with a new right operand
    fn fold(&mut self, op: BinOp, left: Node, right: Node) -> Node {
        tracing::trace!(op = op.symbol(), "fold");
        self.symbols.insert(op.symbol(), TokenKind::Operator);
        Node::binary(op, left, right)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{BinOp, Node};
    use crate::parser::parse::{parse, ParseError};

    fn num(s: &str) -> Node {
        Node::number(s)
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let tree = parse("1-2-3").unwrap().tree;
        assert_eq!(
            tree,
            Node::binary(
                BinOp::Sub,
                Node::binary(BinOp::Sub, num("1"), num("2")),
                num("3")
            )
        );
    }

    #[test]
    fn test_term_chain_is_left_associative() {
        let tree = parse("8/4*2").unwrap().tree;
        assert_eq!(tree.to_infix(), "((8 / 4) * 2)");
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        let tree = parse("2+3*4").unwrap().tree;
        assert_eq!(
            tree,
            Node::binary(
                BinOp::Add,
                num("2"),
                Node::binary(BinOp::Mul, num("3"), num("4"))
            )
        );
    }

    #[test]
    fn test_parentheses_group_without_node() {
        let tree = parse("(2+3)*4").unwrap().tree;
        assert_eq!(
            tree,
            Node::binary(
                BinOp::Mul,
                Node::binary(BinOp::Add, num("2"), num("3")),
                num("4")
            )
        );
        assert_eq!(parse("((7))").unwrap().tree, num("7"));
    }

    #[test]
    fn test_factor_errors() {
        assert_eq!(
            parse("1+").unwrap_err(),
            ParseError::UnexpectedEndOfInput { position: 2 }
        );
        assert_eq!(
            parse("1+ 2").unwrap_err(),
            ParseError::UnexpectedCharacter {
                found: ' ',
                position: 2
            }
        );
        assert_eq!(
            parse("()").unwrap_err(),
            ParseError::UnexpectedCharacter {
                found: ')',
                position: 1
            }
        );
        assert_eq!(
            parse("(((").unwrap_err(),
            ParseError::UnexpectedEndOfInput { position: 3 }
        );
    }

    #[test]
    fn test_space_after_operand_is_trailing() {
        assert_eq!(
            parse("1 2").unwrap_err(),
            ParseError::UnexpectedTrailingInput {
                found: ' ',
                position: 1
            }
        );
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(
            parse("(1+2").unwrap_err(),
            ParseError::ExpectedClosingParenthesis {
                found: None,
                position: 4
            }
        );
        assert_eq!(
            parse("(1x").unwrap_err(),
            ParseError::ExpectedClosingParenthesis {
                found: Some('x'),
                position: 2
            }
        );
    }

    #[test]
    fn test_unary_minus_is_rejected() {
        assert_eq!(
            parse("-1").unwrap_err(),
            ParseError::UnexpectedCharacter {
                found: '-',
                position: 0
            }
        );
    }
}
