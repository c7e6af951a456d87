use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<'src> Parser<'src> {
    /// Parses a factor and, if it is a bare identifier directly followed by
    /// another operand, attaches that operand as its argument.
    ///
    /// The attachment is an [`TokenKind::AmbiguousIdentifierApplication`]
    /// node with the identifier on the left and the argument on the right.
    /// Whether it is a call (`sin(0)`) or a product (`pi(2)`) is decided by
    /// the interpreter from the symbol table. The argument is itself an
    /// application, so `sin cos 0` reads as `sin(cos(0))`.
    ///
    /// Grammar:
    /// ```text
    ///     application := identifier application
    ///                  | factor
    /// ```
    pub(crate) fn parse_application(&mut self) -> ParseResult<Node<'src>> {
        let callee = self.parse_factor()?;
        let next = self.tokens.peek();
        if !callee.is_bare_identifier() || !self.starts_adjacent_operand(next.kind) {
            return Ok(callee);
        }

        debug!(callee = callee.token.lexeme, line = next.line, column = next.column,
               "attaching argument to identifier");
        let op = Token::synthesized(TokenKind::AmbiguousIdentifierApplication, &next);
        let argument = self.nested(&next, Self::parse_application)?;
        self.bounded(Node::binary(op, callee, argument))
    }

    /// Parses a single operand.
    ///
    /// A leading `+` or `-` applies to the following application, so `-2^2`
    /// is `(-2)^2` and `-sin(0)` negates the call.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "(" expression ")"
    ///             | "|" expression "|"
    ///             | ("-" | "+") application
    ///             | identifier
    ///             | number
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` for a token that cannot start an operand.
    /// - `UnexpectedEndOfInput` in strict mode when the input ends here.
    /// - `TooDeeplyNested` when operands nest deeper than
    ///   [`ParseOptions::max_depth`](crate::interpreter::parser::ParseOptions::max_depth).
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Node<'src>> {
        let token = self.tokens.peek();
        self.nested(&token, |parser| parser.parse_operand(token))
    }

    fn parse_operand(&mut self, token: Token<'src>) -> ParseResult<Node<'src>> {
        match token.kind {
            TokenKind::LeftParen => self.parse_grouping(),
            TokenKind::Pipe => self.parse_abs(),
            TokenKind::Plus | TokenKind::Minus => {
                let op = self.tokens.next_token();
                let operand = self.parse_application()?;
                self.bounded(Node::unary(op, operand))
            },
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Float => {
                Ok(Node::leaf(self.tokens.next_token()))
            },
            TokenKind::EndOfInput => self.missing_operand(token),
            _ => Err(ParseError::UnexpectedToken { token:  token.lexeme.to_string(),
                                                   line:   token.line,
                                                   column: token.column, }),
        }
    }

    /// Parses `( expression )` and returns the inner expression unwrapped.
    ///
    /// Bars inside the parentheses are independent of any `|…|` the
    /// parentheses themselves sit in.
    fn parse_grouping(&mut self) -> ParseResult<Node<'src>> {
        let open = self.tokens.next_token();
        let enclosing_abs = std::mem::take(&mut self.abs_depth);
        let inner = self.parse_expression();
        self.abs_depth = enclosing_abs;

        let inner = inner?;
        self.close_delimiter(&open, TokenKind::RightParen)?;
        Ok(inner)
    }

    /// Parses `| expression |` into a unary `Pipe` node.
    fn parse_abs(&mut self) -> ParseResult<Node<'src>> {
        let open = self.tokens.next_token();
        self.abs_depth += 1;
        let inner = self.parse_expression();
        self.abs_depth -= 1;

        let inner = inner?;
        self.close_delimiter(&open, TokenKind::Pipe)?;
        self.bounded(Node::unary(open, inner))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::Node,
        error::ParseError,
        interpreter::{
            lexer::tokenize,
            parser::{DEFAULT_MAX_DEPTH, ParseOptions, parse, parse_with},
            token::TokenKind,
        },
    };

    fn tree(input: &str) -> Node<'_> {
        parse(tokenize(input)).unwrap()
    }

    #[test]
    fn function_application_attaches_the_argument() {
        let call = tree("sin(0)");

        assert_eq!(call.kind(), TokenKind::AmbiguousIdentifierApplication);
        assert_eq!(call.left.as_ref().unwrap().token.lexeme, "sin");
        assert_eq!(call.right.as_ref().unwrap().token.lexeme, "0");
    }

    #[test]
    fn applications_nest_to_the_right() {
        let call = tree("sin cos 0");
        let inner = call.right.unwrap();

        assert_eq!(inner.kind(), TokenKind::AmbiguousIdentifierApplication);
        assert_eq!(inner.left.unwrap().token.lexeme, "cos");
    }

    #[test]
    fn application_binds_tighter_than_power() {
        let node = tree("sin(0)^2");

        assert_eq!(node.kind(), TokenKind::Power);
        assert_eq!(node.left.unwrap().kind(), TokenKind::AmbiguousIdentifierApplication);
    }

    #[test]
    fn unary_signs() {
        let node = tree("-5+3");
        let negated = node.left.unwrap();
        assert_eq!(negated.kind(), TokenKind::Minus);
        assert!(negated.is_unary());

        let node = tree("-2^2");
        assert_eq!(node.kind(), TokenKind::Power);
        assert_eq!(node.left.unwrap().kind(), TokenKind::Minus);

        let node = tree("--+1");
        assert_eq!(node.kind(), TokenKind::Minus);
        assert_eq!(node.size(), 4);
    }

    #[test]
    fn unary_minus_applies_to_calls() {
        let node = tree("-sin(0)");
        assert_eq!(node.kind(), TokenKind::Minus);
        assert_eq!(node.left.unwrap().kind(), TokenKind::AmbiguousIdentifierApplication);
    }

    #[test]
    fn parentheses_leave_no_node_behind() {
        assert_eq!(tree("((7))").kind(), TokenKind::Integer);
    }

    #[test]
    fn absolute_value_bars() {
        let node = tree("|-5|");
        assert_eq!(node.kind(), TokenKind::Pipe);
        assert!(node.is_unary());

        let nested = tree("||x||");
        assert_eq!(nested.left.unwrap().kind(), TokenKind::Pipe);

        let product = tree("|2||3|");
        assert_eq!(product.kind(), TokenKind::Multiply);
        assert_eq!(product.right.unwrap().kind(), TokenKind::Pipe);
    }

    #[test]
    fn bars_inside_parentheses_start_new_operands() {
        let node = tree("|(2|3|)|");
        assert_eq!(node.kind(), TokenKind::Pipe);
        assert_eq!(node.left.unwrap().kind(), TokenKind::Multiply);
    }

    #[test]
    fn deep_nesting_is_rejected() {
        for (open, close) in [("(", ")"), ("|", "|"), ("-", ""), ("sin ", "")] {
            let input = format!("{}1{}", open.repeat(100_000), close.repeat(100_000));
            assert!(matches!(parse(tokenize(&input)),
                             Err(ParseError::TooDeeplyNested { limit: DEFAULT_MAX_DEPTH, .. })),
                    "{open}");
        }
    }

    #[test]
    fn nesting_within_the_limit_is_accepted() {
        let depth = DEFAULT_MAX_DEPTH / 2;
        let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(tree(&input).kind(), TokenKind::Integer);

        let input = format!("{}1", "-".repeat(depth));
        assert_eq!(tree(&input).height(), depth + 1);
    }

    #[test]
    fn lenient_unary_at_end_of_input() {
        let node = parse_with(tokenize("-"), ParseOptions::lenient()).unwrap();
        assert_eq!(node.kind(), TokenKind::Minus);
        assert_eq!(node.left.unwrap().kind(), TokenKind::EndOfInput);

        assert!(parse(tokenize("-")).is_err());
    }
}
