//! Arithmetic expression parser
//!
//! This module turns one line of text into a parse tree and a symbol table:
//! - [`cursor`]: Character cursor (no separate token stream)
//! - [`parse`](mod@parse): Parser state, errors and the attempt driver
//! - `expressions`: Grammar rules (expression, term, factor)
//! - [`ast`]: Parse tree definitions and rendering
//! - [`symbols`]: Symbol table of lexemes seen while parsing
//! - [`validate`]: Operator/number count check over the tree
//!
//! # Supported Grammar
//!
//! - Non-negative integer literals (ASCII digit runs)
//! - Binary `+ - * /` with the usual precedence, all left-associative
//! - Parenthesized grouping
//! - No whitespace, no unary operators, no evaluation
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one-character lookahead.

pub mod ast;
pub mod cursor;
mod expressions;
pub mod parse;
pub mod symbols;
pub mod validate;

pub use ast::{render_tree, BinOp, Node};
pub use parse::{parse, ParseError, ParseOutcome, Parser};
pub use symbols::{SymbolTable, TokenKind};
