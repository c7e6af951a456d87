use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An identifier is not in the symbol table.
    #[error("Error on line {line}, column {column}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The name of the identifier.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal could not be read as a number, e.g. `1.2.3`.
    #[error("Error on line {line}, column {column}: Invalid numeric literal '{literal}'.")]
    InvalidLiteral {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A function was named without anything to apply it to.
    #[error("Error on line {line}, column {column}: Function '{name}' is missing its argument.")]
    MissingArgument {
        /// The name of the function.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Encountered a node the evaluator has no rule for.
    #[error("Error on line {line}, column {column}: Expression is unknown: {token}.")]
    UnknownExpression {
        /// The node's token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}
