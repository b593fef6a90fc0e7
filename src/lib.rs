//! # Introduction
//!
//! exprtree parses arithmetic expressions (integers, `+ - * /`, parentheses)
//! with a hand-written recursive-descent parser, producing a parse tree, a
//! symbol table of the lexemes it met, and a structural validity check.
//!
//! ## Pipeline
//!
//! ```text
//! Line → Cursor → expression/term/factor → Parse tree + Symbol table → Validator
//! ```
//!
//! 1. [`parser`] — the grammar, the tree, the symbol table and the validator.
//!    [`parser::parse()`] runs one independent attempt.
//! 2. [`repl`] — line-oriented prompt loop and plain-text reports.
//! 3. [`ui`] — ratatui-based TUI that re-parses as you type; not part of the
//!    stable library API.
//! 4. [`config`] — command-line options.
//!
//! Expressions are parsed, never evaluated.

pub mod config;
pub mod parser;
pub mod repl;
pub mod ui;
