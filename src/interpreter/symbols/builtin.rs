use std::f64::consts::{E, PI, TAU};

use crate::interpreter::{symbols::core::UnaryFn, value::InterpretResult};

/// Defines a named list of builtin functions.
///
/// Each entry is a string name and an expression coercible to [`UnaryFn`].
macro_rules! builtin_functions {
    (
        $(#[$meta:meta])*
        $table:ident {
            $( $name:literal => $func:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub const $table: &[(&str, UnaryFn)] = &[
            $( ($name, $func as UnaryFn), )*
        ];
    };
}

/// Constants of the standard table.
pub const STANDARD_CONSTANTS: &[(&str, InterpretResult)] =
    &[("pi", InterpretResult::float(PI)), ("e", InterpretResult::float(E))];

builtin_functions! {
    /// Functions of the standard table, in radians.
    STANDARD_FUNCTIONS {
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
    }
}

/// Constants added by the extended table.
pub const EXTENDED_CONSTANTS: &[(&str, InterpretResult)] = &[("tau", InterpretResult::float(TAU))];

builtin_functions! {
    /// Functions added by the extended table.
    EXTENDED_FUNCTIONS {
        "ln"      => f64::ln,
        "exp"     => f64::exp,
        "sqrt"    => f64::sqrt,
        "sinh"    => f64::sinh,
        "cosh"    => f64::cosh,
        "tanh"    => f64::tanh,
        "asin"    => f64::asin,
        "acos"    => f64::acos,
        "atan"    => f64::atan,
        "floor"   => f64::floor,
        "ceil"    => f64::ceil,
        "round"   => f64::round,
        "trunc"   => f64::trunc,
        "sign"    => sign,
        "radians" => f64::to_radians,
        "degrees" => f64::to_degrees,
    }
}

/// Returns `-1`, `0` or `1` according to the sign of `x`; NaN stays NaN.
///
/// Unlike [`f64::signum`], zero maps to zero.
///
/// # Example
/// ```
/// use plotexpr::interpreter::symbols::builtin::sign;
///
/// assert_eq!(sign(-4.2), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(7.0), 1.0);
/// ```
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x.signum() }
}
