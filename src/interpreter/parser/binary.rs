use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<'src> Parser<'src> {
    /// Parses addition and subtraction.
    ///
    /// Left-associative: `1 - 2 - 3` is `(1 - 2) - 3`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node<'src>> {
        let mut left = self.parse_term()?;
        while matches!(self.tokens.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.tokens.next_token();
            let right = self.parse_term()?;
            left = self.bounded(Node::binary(op, left, right))?;
        }
        Ok(left)
    }

    /// Parses multiplication, division and implicit multiplication.
    ///
    /// When no `*` or `/` separates two operands (`2pi`, `(1)(2)`, `3|x|`),
    /// an operator is synthesized in between. It is tagged
    /// [`TokenKind::AmbiguousIdentifierApplication`] when the right operand
    /// starts with an identifier, leaving the interpreter to decide between a
    /// call and a product, and [`TokenKind::Multiply`] otherwise. If the next
    /// token cannot start an operand, the level ends.
    ///
    /// Left-associative.
    ///
    /// Grammar: `term := power (("*" | "/" | implicit) power)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Node<'src>> {
        let mut left = self.parse_power()?;
        loop {
            let next = self.tokens.peek();
            let op = match next.kind {
                TokenKind::Multiply | TokenKind::Divide => self.tokens.next_token(),
                kind if self.starts_adjacent_operand(kind) => implicit_operator(&next),
                _ => break,
            };
            let right = self.parse_power()?;
            left = self.bounded(Node::binary(op, left, right))?;
        }
        Ok(left)
    }

    /// Parses exponentiation.
    ///
    /// Right-associative through the recursive call on the right-hand side:
    /// `2^3^2` is `2^(3^2)`.
    ///
    /// Grammar: `power := application ("^" power)?`
    pub(crate) fn parse_power(&mut self) -> ParseResult<Node<'src>> {
        let base = self.parse_application()?;
        if self.tokens.peek().kind != TokenKind::Power {
            return Ok(base);
        }
        let op = self.tokens.next_token();
        let exponent = self.nested(&op, Self::parse_power)?;
        self.bounded(Node::binary(op, base, exponent))
    }
}

fn implicit_operator<'src>(operand: &Token<'src>) -> Token<'src> {
    let kind = if operand.kind == TokenKind::Identifier {
        TokenKind::AmbiguousIdentifierApplication
    } else {
        TokenKind::Multiply
    };
    debug!(%kind, before = %operand, line = operand.line, column = operand.column,
           "synthesizing implicit operator");
    Token::synthesized(kind, operand)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::Node,
        error::ParseError,
        interpreter::{
            lexer::tokenize,
            parser::{DEFAULT_MAX_DEPTH, parse},
            token::TokenKind,
        },
    };

    fn tree(input: &str) -> Node<'_> {
        parse(tokenize(input)).unwrap()
    }

    /// Fully parenthesized rendering of a tree, with implicit operators shown
    /// as `·` (multiply) and `?` (ambiguous).
    fn shape(node: &Node<'_>) -> String {
        let op = match node.kind() {
            TokenKind::Multiply if node.token.lexeme.is_empty() => "·",
            TokenKind::AmbiguousIdentifierApplication => "?",
            TokenKind::Pipe => "abs",
            _ => node.token.lexeme,
        };
        match (&node.left, &node.right) {
            (Some(l), Some(r)) => format!("({} {op} {})", shape(l), shape(r)),
            (Some(operand), None) => format!("({op} {})", shape(operand)),
            _ => op.to_string(),
        }
    }

    #[test]
    fn precedence() {
        assert_eq!(shape(&tree("2+3*4")), "(2 + (3 * 4))");
        assert_eq!(shape(&tree("(2+3)*4")), "((2 + 3) * 4)");
        assert_eq!(shape(&tree("2*3^2")), "(2 * (3 ^ 2))");
    }

    #[test]
    fn left_associativity() {
        assert_eq!(shape(&tree("1-2-3")), "((1 - 2) - 3)");
        assert_eq!(shape(&tree("8/4/2")), "((8 / 4) / 2)");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(shape(&tree("2^3^2")), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(shape(&tree("2pi")), "(2 ? pi)");
        assert_eq!(shape(&tree("(1)(2)")), "(1 · 2)");
        assert_eq!(shape(&tree("2 3")), "(2 · 3)");
        assert_eq!(shape(&tree("3|x|")), "(3 · (abs x))");
        assert_eq!(shape(&tree("2pi e")), "(2 ? (pi ? e))");
    }

    #[test]
    fn implicit_multiplication_binds_like_explicit() {
        assert_eq!(shape(&tree("1+2pi")), "(1 + (2 ? pi))");
        assert_eq!(shape(&tree("2pi^2")), "(2 ? (pi ^ 2))");
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let sum = vec!["1"; 200_000].join("+");
        assert!(matches!(parse(tokenize(&sum)),
                         Err(ParseError::TooDeeplyNested { limit: DEFAULT_MAX_DEPTH, .. })));

        let product = vec!["2"; 200_000].join(" ");
        assert!(matches!(parse(tokenize(&product)), Err(ParseError::TooDeeplyNested { .. })));

        let tower = vec!["2"; 200_000].join("^");
        assert!(matches!(parse(tokenize(&tower)), Err(ParseError::TooDeeplyNested { .. })));
    }

    #[test]
    fn chains_within_the_limit_are_accepted() {
        let sum = vec!["1"; DEFAULT_MAX_DEPTH].join("+");
        assert_eq!(tree(&sum).height(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn synthesized_operator_is_positioned_at_right_operand() {
        let node = tree("12pi");
        assert_eq!(node.token.span.start, 2);
        assert_eq!(node.token.column, 3);
        assert_eq!(node.token.lexeme, "");
    }
}
