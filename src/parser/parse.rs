//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseError`] type and the
//! top-level attempt driver [`parse`].
//!
//! # Parser Architecture
//!
//! - This module: Parser state (cursor + symbol table), error type, driver
//! - `expressions`: the three grammar rules (expression, term, factor)
//! - `validate`: structural self-check over the finished tree
//!
//! Each call to [`parse`] is an independent attempt: it starts from offset 0
//! with an empty symbol table, and on failure nothing from the attempt is
//! returned.

use crate::parser::ast::Node;
use crate::parser::cursor::Cursor;
use crate::parser::symbols::SymbolTable;
use crate::parser::validate::is_valid_input;
use thiserror::Error;

/// Parse failures. Positions are 0-based character offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A factor was required but the input ran out
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    /// A factor was required and the character is neither a digit nor `(`
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A group opened with `(` was not closed where expected
    #[error("expected closing parenthesis at position {position}, found {}", describe(.found))]
    ExpectedClosingParenthesis {
        found: Option<char>,
        position: usize,
    },

    /// Characters remain after a complete expression
    #[error("unexpected input '{found}' at position {position}")]
    UnexpectedTrailingInput { found: char, position: usize },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

impl ParseError {
    /// Offset at which the error was detected
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfInput { position }
            | ParseError::UnexpectedCharacter { position, .. }
            | ParseError::ExpectedClosingParenthesis { position, .. }
            | ParseError::UnexpectedTrailingInput { position, .. } => *position,
        }
    }

    /// Short name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ParseError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ParseError::ExpectedClosingParenthesis { .. } => "ExpectedClosingParenthesis",
            ParseError::UnexpectedTrailingInput { .. } => "UnexpectedTrailingInput",
        }
    }
}

/// Everything a successful attempt produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub tree: Node,
    pub symbols: SymbolTable,
    pub valid: bool,
}

/// Recursive descent parser for one line of input
pub struct Parser {
    pub(crate) cursor: Cursor,
    pub(crate) symbols: SymbolTable,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            symbols: SymbolTable::new(),
        }
    }

    /// Run the attempt: parse an expression and require all input consumed
    pub fn parse(mut self) -> Result<ParseOutcome, ParseError> {
        tracing::debug!(len = self.cursor.len(), "parse attempt started");

        let tree = match self.parse_expression().and_then(|tree| {
            self.expect_end()?;
            Ok(tree)
        }) {
            Ok(tree) => tree,
            Err(err) => {
                tracing::debug!(error = %err, "parse attempt failed");
                return Err(err);
            }
        };

        let valid = is_valid_input(&tree);
        tracing::debug!(
            symbols = self.symbols.len(),
            valid,
            "parse attempt finished"
        );

        Ok(ParseOutcome {
            tree,
            symbols: self.symbols,
            valid,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        match self.cursor.peek() {
            None => Ok(()),
            Some(found) => Err(ParseError::UnexpectedTrailingInput {
                found,
                position: self.cursor.position(),
            }),
        }
    }

    pub(crate) fn expect_rparen(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(')') {
            Ok(())
        } else {
            Err(ParseError::ExpectedClosingParenthesis {
                found: self.cursor.peek(),
                position: self.cursor.position(),
            })
        }
    }
}

/// Parse one line of input as an independent attempt
pub fn parse(input: &str) -> Result<ParseOutcome, ParseError> {
    Parser::new(input).parse()
}
