use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, left_operand, right_operand,
                          unknown_expression},
        symbols::SymbolEntry,
        token::TokenKind,
        value::InterpretResult,
    },
};

impl Interpreter<'_> {
    /// Evaluates both operands of a binary node and combines them.
    pub(super) fn eval_binary_op(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        let left = self.eval(left_operand(node)?)?;
        let right = self.eval(right_operand(node)?)?;

        Self::eval_binary(node.kind(), left, right).ok_or_else(|| unknown_expression(node))
    }

    /// Combines two values with an arithmetic operator.
    ///
    /// `^` is exponentiation. Division follows IEEE-754: dividing by zero
    /// gives an infinity or NaN rather than an error. The result kind is
    /// inferred from the result value.
    ///
    /// Returns `None` if `op` is not an arithmetic operator. An implicit
    /// [`TokenKind::AmbiguousIdentifierApplication`] counts as multiplication
    /// here.
    ///
    /// # Example
    /// ```
    /// use plotexpr::interpreter::{
    ///     evaluator::Interpreter,
    ///     token::TokenKind,
    ///     value::{InterpretResult, ResultType},
    /// };
    ///
    /// let half = InterpretResult::float(0.5);
    /// let four = InterpretResult::integer(4.0);
    ///
    /// let product = Interpreter::eval_binary(TokenKind::Multiply, half, four).unwrap();
    /// assert_eq!(product, InterpretResult::integer(2.0));
    ///
    /// let quotient = Interpreter::eval_binary(TokenKind::Divide, four, InterpretResult::integer(0.0));
    /// assert_eq!(quotient.unwrap().ty, ResultType::Float);
    /// ```
    #[must_use]
    pub fn eval_binary(op: TokenKind,
                       left: InterpretResult,
                       right: InterpretResult)
                       -> Option<InterpretResult> {
        let (l, r) = (left.value, right.value);
        let value = match op {
            TokenKind::Plus => l + r,
            TokenKind::Minus => l - r,
            TokenKind::Multiply | TokenKind::AmbiguousIdentifierApplication => l * r,
            TokenKind::Divide => l / r,
            TokenKind::Power => l.powf(r),
            _ => return None,
        };
        Some(InterpretResult::computed(value))
    }

    /// Resolves two adjacent operands.
    ///
    /// If the left operand is a bare identifier naming a function, the right
    /// operand is its argument. In every other case the operands are
    /// multiplied.
    pub(super) fn eval_application(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        let callee = left_operand(node)?;
        let argument = right_operand(node)?;

        if callee.is_bare_identifier()
           && let Some(SymbolEntry::Function(function)) = self.symbols().get(callee.token.lexeme)
        {
            return self.apply_function(callee.token.lexeme, function, argument);
        }

        let left = self.eval(callee)?;
        let right = self.eval(argument)?;
        Self::eval_binary(TokenKind::Multiply, left, right).ok_or_else(|| unknown_expression(node))
    }
}
