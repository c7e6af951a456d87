use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Positions are 1-based and point at the offending token, or at the opening
/// delimiter for [`ParseError::UnmatchedDelimiter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start an operand.
    #[error("Error on line {line}, column {column}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of input where an operand was required.
    #[error("Error on line {line}, column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A `(` or `|` was never closed.
    #[error("Error on line {line}, column {column}: Delimiter '{delimiter}' is never closed.")]
    UnmatchedDelimiter {
        /// The opening delimiter.
        delimiter: char,
        /// The source line of the opening delimiter.
        line:      usize,
        /// The source column of the opening delimiter.
        column:    usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error on line {line}, column {column}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The expression nests operands, or chains operators, deeper than the
    /// parser allows.
    #[error("Error on line {line}, column {column}: Expression is nested deeper than {limit} levels.")]
    TooDeeplyNested {
        /// The configured depth limit.
        limit:  usize,
        /// The source line where the limit was exceeded.
        line:   usize,
        /// The source column where the limit was exceeded.
        column: usize,
    },
}

impl ParseError {
    /// The `(line, column)` the error points at.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column }
            | Self::UnmatchedDelimiter { line, column, .. }
            | Self::UnexpectedTrailingTokens { line, column, .. }
            | Self::TooDeeplyNested { line, column, .. } => (*line, *column),
        }
    }
}
