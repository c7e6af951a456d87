use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        symbols::{Function, SymbolEntry},
        token::{Token, TokenKind},
        value::InterpretResult,
    },
};

impl Interpreter<'_> {
    /// Reads a numeric literal.
    ///
    /// The literal keeps the kind the tokenizer gave it: `2.0` is a `Float`
    /// even though it has no fractional part.
    ///
    /// # Errors
    /// `InvalidLiteral` if the text is not a number, such as `1.2.3` or `.`.
    pub(super) fn eval_literal(token: &Token<'_>) -> EvalResult<InterpretResult> {
        let value = token.lexeme
                         .parse::<f64>()
                         .map_err(|_| RuntimeError::InvalidLiteral { literal: token.lexeme.to_string(),
                                                                     line:    token.line,
                                                                     column:  token.column, })?;
        Ok(match token.kind {
            TokenKind::Float => InterpretResult::float(value),
            _ => InterpretResult::integer(value),
        })
    }

    /// Resolves an identifier through the symbol table.
    ///
    /// A constant evaluates to its stored value and kind. A function is
    /// applied to the node's operand, if it has one.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the name is not in the table.
    /// - `MissingArgument` if the name is a function and there is no operand.
    pub(super) fn eval_identifier(&self, node: &Node<'_>) -> EvalResult<InterpretResult> {
        let token = &node.token;
        match self.symbols().get(token.lexeme) {
            Some(SymbolEntry::Constant(value)) => Ok(*value),
            Some(SymbolEntry::Function(function)) => match node.left.as_deref() {
                Some(argument) => self.apply_function(token.lexeme, function, argument),
                None => Err(RuntimeError::MissingArgument { name:   token.lexeme.to_string(),
                                                            line:   token.line,
                                                            column: token.column, }),
            },
            None => Err(RuntimeError::UnknownIdentifier { name:   token.lexeme.to_string(),
                                                          line:   token.line,
                                                          column: token.column, }),
        }
    }

    /// Evaluates `argument` and calls `function` on it.
    ///
    /// Function results are always `Float`.
    pub(super) fn apply_function(&self,
                                 name: &str,
                                 function: &Function,
                                 argument: &Node<'_>)
                                 -> EvalResult<InterpretResult> {
        let argument = self.eval(argument)?;
        let value = function.call(argument.value);
        trace!(function = name, argument = argument.value, value, "applied function");
        Ok(InterpretResult::float(value))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use pretty_assertions::assert_eq;

    use crate::{
        ast::Node,
        error::RuntimeError,
        interpreter::{
            evaluator::{EvalResult, interpret},
            lexer::tokenize,
            parser::parse,
            symbols::SymbolTable,
            token::{Span, Token, TokenKind},
            value::{InterpretResult, ResultType},
        },
    };

    fn eval_in(input: &str, symbols: &SymbolTable) -> EvalResult<InterpretResult> {
        interpret(&parse(tokenize(input)).unwrap(), symbols)
    }

    fn eval(input: &str) -> EvalResult<InterpretResult> {
        eval_in(input, &SymbolTable::default())
    }

    #[test]
    fn literals_keep_their_kind() {
        assert_eq!(eval("42"), Ok(InterpretResult::integer(42.0)));
        assert_eq!(eval("2.0"), Ok(InterpretResult::float(2.0)));
        assert_eq!(eval(".5"), Ok(InterpretResult::float(0.5)));
        assert_eq!(eval("3."), Ok(InterpretResult::float(3.0)));
    }

    #[test]
    fn malformed_literals() {
        assert_eq!(eval("1.2.3"),
                   Err(RuntimeError::InvalidLiteral { literal: "1.2.3".to_string(),
                                                      line:    1,
                                                      column:  1, }));
        assert!(matches!(eval("2 + ."), Err(RuntimeError::InvalidLiteral { column: 5, .. })));
    }

    #[test]
    fn constants() {
        assert_eq!(eval("pi"), Ok(InterpretResult::float(PI)));
        assert_eq!(eval("e").unwrap().ty, ResultType::Float);
    }

    #[test]
    fn unknown_identifiers() {
        assert_eq!(eval("x"),
                   Err(RuntimeError::UnknownIdentifier { name:   "x".to_string(),
                                                         line:   1,
                                                         column: 1, }));
        assert!(matches!(eval("PI"), Err(RuntimeError::UnknownIdentifier { .. })));
        assert!(matches!(eval_in("pi", &SymbolTable::empty()),
                         Err(RuntimeError::UnknownIdentifier { .. })));
    }

    #[test]
    fn function_without_argument() {
        assert_eq!(eval("1 + sin"),
                   Err(RuntimeError::MissingArgument { name:   "sin".to_string(),
                                                       line:   1,
                                                       column: 5, }));
    }

    #[test]
    fn function_results_are_floats() {
        let result = eval("cos(0)").unwrap();
        assert_eq!(result, InterpretResult::float(1.0));
        assert_eq!(result.to_string(), "1");
    }

    #[test]
    fn identifier_with_operand_child_is_applied() {
        let name = Token::new(TokenKind::Identifier, "cos", Span::new(0, 3), 1, 1);
        let zero = Token::new(TokenKind::Integer, "0", Span::new(4, 1), 1, 5);
        let tree = Node::unary(name, Node::leaf(zero));

        assert_eq!(interpret(&tree, &SymbolTable::default()),
                   Ok(InterpretResult::float(1.0)));
    }

    #[test]
    fn custom_symbols() {
        let symbols = SymbolTable::builder().constant("g", InterpretResult::float(9.81))
                                            .function("double", |x| 2.0 * x)
                                            .build();

        assert_eq!(eval_in("double(21)", &symbols), Ok(InterpretResult::float(42.0)));
        assert_eq!(eval_in("2g", &symbols).unwrap().value, 19.62);
    }

    #[test]
    fn extended_functions() {
        let symbols = SymbolTable::extended();
        assert_eq!(eval_in("sqrt(16)", &symbols), Ok(InterpretResult::float(4.0)));
        assert_eq!(eval_in("floor(2.7) + 1", &symbols), Ok(InterpretResult::integer(3.0)));
        assert!(matches!(eval("sqrt(16)"), Err(RuntimeError::UnknownIdentifier { .. })));
    }
}
