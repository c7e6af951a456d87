use std::fmt;

/// The numeric kind reported alongside every evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// The value has no fractional part.
    Integer,
    /// The value has a fractional part, or is not finite.
    Float,
}

impl ResultType {
    /// Classifies a computed value.
    ///
    /// A value is `Float` when subtracting its truncation leaves something
    /// other than zero, otherwise it is `Integer`. Infinities and NaN leave
    /// NaN and are therefore `Float`.
    ///
    /// This looks only at the value, not at where it came from: `4.0 / 2.0`
    /// is an `Integer`.
    ///
    /// # Example
    /// ```
    /// use plotexpr::interpreter::value::ResultType;
    ///
    /// assert_eq!(ResultType::infer(2.0), ResultType::Integer);
    /// assert_eq!(ResultType::infer(-0.5), ResultType::Float);
    /// assert_eq!(ResultType::infer(f64::INFINITY), ResultType::Float);
    /// ```
    #[must_use]
    pub fn infer(value: f64) -> Self {
        if value - value.trunc() != 0.0 {
            Self::Float
        } else {
            Self::Integer
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
        }
    }
}

/// A number together with its [`ResultType`].
///
/// Produced by the interpreter and used for symbol table constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpretResult {
    /// The numeric value.
    pub value: f64,
    /// Its kind.
    pub ty:    ResultType,
}

impl InterpretResult {
    #[must_use]
    pub const fn new(value: f64, ty: ResultType) -> Self {
        Self { value, ty }
    }

    #[must_use]
    pub const fn integer(value: f64) -> Self {
        Self::new(value, ResultType::Integer)
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::new(value, ResultType::Float)
    }

    /// Wraps a computed value, inferring its kind with
    /// [`ResultType::infer`].
    #[must_use]
    pub fn computed(value: f64) -> Self {
        Self::new(value, ResultType::infer(value))
    }
}

impl fmt::Display for InterpretResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            // Integers never print a negative zero.
            ResultType::Integer if self.value == 0.0 => f.write_str("0"),
            ResultType::Integer | ResultType::Float => write!(f, "{}", self.value),
        }
    }
}
