use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter, left_operand, unknown_expression},
        token::TokenKind,
        value::InterpretResult,
    },
};

impl Interpreter<'_> {
    /// Evaluates a sign applied to a single operand.
    pub(super) fn eval_unary_op(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        let operand = self.eval(left_operand(node)?)?;
        Self::eval_unary(node.kind(), operand).ok_or_else(|| unknown_expression(node))
    }

    /// Evaluates the body of `|…|` and takes its absolute value.
    pub(super) fn eval_abs(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        let operand = self.eval(left_operand(node)?)?;
        Ok(InterpretResult::computed(operand.value.abs()))
    }

    /// Applies a prefix operator to a value.
    ///
    /// Supported operators:
    /// - `Plus`: the value itself.
    /// - `Minus`: negation.
    ///
    /// The result kind is inferred from the result value, so `-pi` is a
    /// `Float` and `-2` an `Integer`.
    ///
    /// # Returns
    /// `None` if `op` is not a prefix operator.
    ///
    /// # Example
    /// ```
    /// use plotexpr::interpreter::{
    ///     evaluator::Interpreter,
    ///     token::TokenKind,
    ///     value::InterpretResult,
    /// };
    ///
    /// let five = InterpretResult::integer(5.0);
    /// assert_eq!(Interpreter::eval_unary(TokenKind::Minus, five),
    ///            Some(InterpretResult::integer(-5.0)));
    /// assert_eq!(Interpreter::eval_unary(TokenKind::Divide, five), None);
    /// ```
    #[must_use]
    pub fn eval_unary(op: TokenKind, operand: InterpretResult) -> Option<InterpretResult> {
        match op {
            TokenKind::Plus => Some(InterpretResult::computed(operand.value)),
            TokenKind::Minus => Some(InterpretResult::computed(-operand.value)),
            _ => None,
        }
    }
}
