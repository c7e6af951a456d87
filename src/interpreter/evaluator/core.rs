use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{symbols::SymbolTable, token::TokenKind, value::InterpretResult},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees against a symbol table.
///
/// The interpreter only reads the table, so any number of interpreters may
/// share one table, including across threads.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'sym> {
    symbols: &'sym SymbolTable,
}

impl<'sym> Interpreter<'sym> {
    #[must_use]
    pub const fn new(symbols: &'sym SymbolTable) -> Self {
        Self { symbols }
    }

    #[must_use]
    pub const fn symbols(&self) -> &'sym SymbolTable {
        self.symbols
    }

    /// Evaluates a tree bottom-up.
    ///
    /// Dispatches on the node's token:
    /// - numeric literals are read from their text;
    /// - identifiers resolve through the symbol table;
    /// - `+`/`-` with one operand and `|…|` are unary;
    /// - `+ - * / ^` are binary;
    /// - an ambiguous identifier application becomes a call or a product;
    /// - the `EndOfInput` of an empty expression is `0`.
    ///
    /// Every computed value has its kind inferred from the value itself; only
    /// literals and constants keep a declared kind.
    ///
    /// # Errors
    /// - `UnknownIdentifier` for a name not in the symbol table.
    /// - `InvalidLiteral` for a literal that is not a number.
    /// - `MissingArgument` for a function used without an argument.
    /// - `UnknownExpression` for a node shape no parser produces.
    pub fn eval(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        match node.kind() {
            TokenKind::Integer | TokenKind::Float => Self::eval_literal(&node.token),
            TokenKind::Identifier => self.eval_identifier(node),
            TokenKind::EndOfInput => Ok(InterpretResult::integer(0.0)),
            TokenKind::Plus | TokenKind::Minus if node.is_unary() => self.eval_unary_op(node),
            TokenKind::Pipe => self.eval_abs(node),
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Power => self.eval_binary_op(node),
            TokenKind::AmbiguousIdentifierApplication => self.eval_application(node),
            TokenKind::Ampersand
            | TokenKind::Modulo
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::Unclassified => Err(unknown_expression(node)),
        }
    }
}

/// Evaluates an expression tree against a symbol table.
///
/// # Errors
/// Returns a `RuntimeError` for unknown identifiers, malformed literals and
/// functions used without an argument. Arithmetic itself never fails:
/// division by zero gives an infinite or NaN `Float`.
///
/// # Example
/// ```
/// use plotexpr::interpreter::{
///     evaluator::interpret,
///     lexer::tokenize,
///     parser::parse,
///     symbols::SymbolTable,
///     value::ResultType,
/// };
///
/// let symbols = SymbolTable::default();
/// let tree = parse(tokenize("4.0/2.0")).unwrap();
/// let result = interpret(&tree, &symbols).unwrap();
///
/// assert_eq!(result.value, 2.0);
/// assert_eq!(result.ty, ResultType::Integer);
/// ```
pub fn interpret(node: &Node<'_>, symbols: &SymbolTable) -> EvalResult<InterpretResult> {
    Interpreter::new(symbols).eval(node)
}

/// The first (or only) operand of `node`.
pub(super) fn left_operand<'n, 'src>(node: &'n Node<'src>) -> EvalResult<&'n Node<'src>> {
    node.left.as_deref().ok_or_else(|| unknown_expression(node))
}

/// The second operand of `node`.
pub(super) fn right_operand<'n, 'src>(node: &'n Node<'src>) -> EvalResult<&'n Node<'src>> {
    node.right.as_deref().ok_or_else(|| unknown_expression(node))
}

pub(super) fn unknown_expression(node: &Node<'_>) -> RuntimeError {
    RuntimeError::UnknownExpression { token:  node.token.to_string(),
                                      line:   node.token.line,
                                      column: node.token.column, }
}
