//! # plotexpr
//!
//! plotexpr is a small arithmetic expression engine written in Rust.
//! It tokenizes, parses and evaluates single-line expressions such as
//! `2pi`, `sin(0)` or `|3-10|*2`, with implicit multiplication, function
//! application and a caller-supplied table of constants and functions.
//!
//! The pipeline has three stages that can also be driven separately:
//! [`interpreter::lexer::tokenize`], [`interpreter::parser::parse`] and
//! [`interpreter::evaluator::interpret`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::interpret,
        lexer::tokenize,
        parser::{ParseOptions, parse_with},
        symbols::SymbolTable,
        value::InterpretResult,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the binary [`ast::Node`] tree built by the parser and
/// walked by the evaluator, and its diagnostic tree rendering.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Every error carries the line and column it refers to, and renders as a
/// message ready to show to a user.
///
/// # Responsibilities
/// - Defines [`error::ParseError`] for malformed input.
/// - Defines [`error::RuntimeError`] for evaluation failures.
/// - Unifies both in [`error::Error`] for the full pipeline.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together tokens, the lexer, the parser, result values,
/// symbol tables and the evaluator.
pub mod interpreter;

/// Evaluates an expression with the default (strict) parser options.
///
/// Runs tokenize, parse and interpret in sequence against `symbols`.
///
/// # Errors
/// Returns [`Error::Parse`] if the input is not a well-formed expression and
/// [`Error::Runtime`] if it cannot be evaluated.
///
/// # Examples
/// ```
/// use plotexpr::{
///     evaluate,
///     interpreter::{symbols::SymbolTable, value::ResultType},
/// };
///
/// let symbols = SymbolTable::default();
///
/// let result = evaluate("(2+3)*4", &symbols).unwrap();
/// assert_eq!(result.value, 20.0);
/// assert_eq!(result.ty, ResultType::Integer);
///
/// // 'x' is not in the symbol table.
/// assert!(evaluate("x + 1", &symbols).is_err());
/// ```
pub fn evaluate(source: &str, symbols: &SymbolTable) -> Result<InterpretResult, Error> {
    evaluate_with(source, symbols, ParseOptions::default())
}

/// Evaluates an expression with explicit parser options.
///
/// # Errors
/// Same as [`evaluate`], with parse failures depending on `options`.
///
/// # Examples
/// ```
/// use plotexpr::{
///     evaluate_with,
///     interpreter::{parser::ParseOptions, symbols::SymbolTable},
/// };
///
/// let symbols = SymbolTable::default();
///
/// // The missing ')' is assumed.
/// let result = evaluate_with("2*(1+2", &symbols, ParseOptions::lenient()).unwrap();
/// assert_eq!(result.value, 6.0);
/// ```
pub fn evaluate_with(source: &str,
                     symbols: &SymbolTable,
                     options: ParseOptions)
                     -> Result<InterpretResult, Error> {
    let tree = parse_with(tokenize(source), options)?;
    Ok(interpret(&tree, symbols)?)
}
