/// Evaluation entry points and node dispatch.
///
/// Contains the [`core::Interpreter`], the [`core::interpret`] function and
/// the shared child-access helpers.
pub mod core;

/// Binary operator evaluation.
///
/// Handles `+`, `-`, `*`, `/`, `^` and the resolution of ambiguous
/// identifier applications into calls or products.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles sign operators and absolute value.
pub mod unary;

/// Leaf evaluation.
///
/// Reads numeric literals and resolves identifiers against the symbol table.
pub mod identifier;

pub use self::core::{EvalResult, Interpreter, interpret};
