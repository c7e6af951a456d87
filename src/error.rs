/// Parsing errors.
///
/// Defines the errors raised while building the syntax tree from a token
/// stream: unexpected tokens, a premature end of input, unmatched delimiters
/// and leftover tokens after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a syntax tree: identifiers the
/// symbol table does not know, literals that are not numbers, and functions
/// used without an argument.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure of the tokenize, parse, interpret pipeline.
///
/// Tokenizing never fails, so every error comes from one of the two later
/// stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token stream is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The syntax tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
