/// Parsing entry points, options and shared recovery helpers.
///
/// Holds the [`core::Parser`] state, the [`core::Strictness`] policy and the
/// [`core::parse`] / [`core::parse_with`] functions.
pub mod core;

/// Binary operator precedence levels.
///
/// Implements `expression` (`+`, `-`), `term` (`*`, `/` and implicit
/// multiplication) and `power` (`^`).
pub mod binary;

/// Operand-level parsing.
///
/// Implements function application, signed operands, grouping parentheses,
/// absolute value bars and literal/identifier leaves.
pub mod unary;

pub use self::core::{
    DEFAULT_MAX_DEPTH, ParseOptions, ParseResult, Parser, Strictness, parse, parse_with,
};
