/// Token types shared by every stage of the pipeline.
///
/// Declares the closed [`token::TokenKind`] enumeration, byte [`token::Span`]s
/// and the [`token::Token`] that borrows its text from the input buffer.
pub mod token;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a stream of tokens, each
/// carrying its kind, text, byte span and line/column. It never fails:
/// characters it does not recognize are skipped.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source location.
/// - Tracks line and column numbers across newlines.
/// - Exposes single-token lookahead through [`lexer::TokenStream`].
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one method per precedence level. It
/// synthesizes operators for implicit multiplication and function
/// application, and reports malformed input according to its
/// [`parser::Strictness`].
pub mod parser;
/// Evaluation results and their numeric kind.
pub mod value;
/// The read-only mapping from names to constants and functions.
///
/// Tables are assembled once with a builder and then only read, so a single
/// table can back any number of evaluations.
pub mod symbols;
/// The evaluator walks expression trees and computes results.
///
/// # Responsibilities
/// - Evaluates every node kind the parser produces.
/// - Resolves identifiers and ambiguous applications through the symbol
///   table.
/// - Reports unknown identifiers, malformed literals and missing arguments.
pub mod evaluator;
