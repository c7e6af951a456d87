use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::TokenStream,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How the parser reacts to input that is incomplete rather than wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// A missing `)` or `|`, a missing operand at the end of input and tokens
    /// left over after the expression are errors.
    #[default]
    Strict,
    /// Best-effort recovery: missing closing delimiters are assumed, a
    /// missing trailing operand becomes an `EndOfInput` leaf (which evaluates
    /// to zero) and leftover tokens are ignored.
    Lenient,
}

/// Default for [`ParseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Recovery policy for incomplete input.
    pub strictness: Strictness,
    /// Deepest operand nesting and tallest tree the parser accepts. Both
    /// `((((1))))` and a long `1+1+…` chain count against it.
    pub max_depth:  usize,
}

impl ParseOptions {
    #[must_use]
    pub const fn strict() -> Self {
        Self { strictness: Strictness::Strict,
               max_depth:  DEFAULT_MAX_DEPTH, }
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self { strictness: Strictness::Lenient,
               max_depth:  DEFAULT_MAX_DEPTH, }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn is_lenient(self) -> bool {
        matches!(self.strictness, Strictness::Lenient)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Recursive-descent parser over a [`TokenStream`].
///
/// Every grammar rule is a method; the rules live in the sibling `binary`
/// and `unary` modules. The parser looks at most one token ahead.
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) tokens:    TokenStream<'src>,
    pub(in crate::interpreter::parser) options:   ParseOptions,
    /// Number of `|…|` bodies currently open. Inside one, a `|` closes the
    /// innermost body instead of starting a new operand.
    pub(in crate::interpreter::parser) abs_depth: usize,
    /// Number of nested operands currently being parsed.
    pub(in crate::interpreter::parser) depth:     usize,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub const fn new(tokens: TokenStream<'src>, options: ParseOptions) -> Self {
        Self { tokens,
               options,
               abs_depth: 0,
               depth: 0 }
    }

    /// Parses the whole stream into a single tree.
    ///
    /// An empty stream (only `EndOfInput`) yields an `EndOfInput` leaf in
    /// every mode.
    ///
    /// # Errors
    /// Returns a `ParseError` if the tokens do not form an expression, or, in
    /// [`Strictness::Strict`] mode, if tokens remain after it.
    pub fn parse(mut self) -> ParseResult<Node<'src>> {
        if self.tokens.at_end() {
            return Ok(Node::leaf(self.tokens.next_token()));
        }

        let root = self.parse_expression()?;
        self.finish()?;
        Ok(root)
    }

    fn finish(&mut self) -> ParseResult<()> {
        let next = self.tokens.peek();
        if next.kind == TokenKind::EndOfInput {
            return Ok(());
        }
        if self.options.is_lenient() {
            debug!(token = %next, line = next.line, column = next.column, "ignoring trailing tokens");
            return Ok(());
        }
        Err(ParseError::UnexpectedTrailingTokens { token:  next.lexeme.to_string(),
                                                   line:   next.line,
                                                   column: next.column, })
    }

    /// Returns `true` if a token of `kind` directly after an operand begins
    /// another operand, making the two adjacent.
    pub(in crate::interpreter::parser) const fn starts_adjacent_operand(&self,
                                                                        kind: TokenKind)
                                                                        -> bool {
        match kind {
            TokenKind::Pipe => self.abs_depth == 0,
            _ => kind.starts_factor(),
        }
    }

    /// Passes `node` through if its tree is within
    /// [`ParseOptions::max_depth`].
    ///
    /// # Errors
    /// `TooDeeplyNested` otherwise, pointing at the node's token.
    pub(in crate::interpreter::parser) fn bounded(&self,
                                                  node: Node<'src>)
                                                  -> ParseResult<Node<'src>> {
        if node.height() <= self.options.max_depth {
            return Ok(node);
        }
        Err(self.too_deep(&node.token))
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// `TooDeeplyNested` at `at` if the parser is already
    /// [`ParseOptions::max_depth`] levels deep, otherwise whatever `parse`
    /// returns.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    at: &Token<'src>,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(self.too_deep(at));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(in crate::interpreter::parser) const fn too_deep(&self, at: &Token<'src>) -> ParseError {
        ParseError::TooDeeplyNested { limit:  self.options.max_depth,
                                      line:   at.line,
                                      column: at.column, }
    }

    /// Consumes the delimiter closing `opening`.
    ///
    /// In lenient mode a missing delimiter is assumed and nothing is
    /// consumed.
    ///
    /// # Errors
    /// `UnmatchedDelimiter` in strict mode when the next token is not
    /// `closing`.
    pub(in crate::interpreter::parser) fn close_delimiter(&mut self,
                                                          opening: &Token<'src>,
                                                          closing: TokenKind)
                                                          -> ParseResult<()> {
        let next = self.tokens.peek();
        if next.kind == closing {
            self.tokens.next_token();
            return Ok(());
        }
        if self.options.is_lenient() {
            debug!(opening = %opening, found = %next, "assuming missing closing delimiter");
            return Ok(());
        }
        Err(ParseError::UnmatchedDelimiter { delimiter: delimiter_char(opening.kind),
                                             line:      opening.line,
                                             column:    opening.column, })
    }

    /// Handles end of input where an operand is required.
    ///
    /// In lenient mode the `EndOfInput` token becomes a leaf.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` in strict mode.
    pub(in crate::interpreter::parser) fn missing_operand(&mut self,
                                                          end: Token<'src>)
                                                          -> ParseResult<Node<'src>> {
        if self.options.is_lenient() {
            return Ok(Node::leaf(end));
        }
        Err(ParseError::UnexpectedEndOfInput { line:   end.line,
                                               column: end.column, })
    }
}

const fn delimiter_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::Pipe => '|',
        _ => '(',
    }
}

/// Parses a token stream into an expression tree with the default (strict)
/// options.
///
/// Precedence from lowest to highest: `+ -`, then `* /` and implicit
/// multiplication, then right-associative `^`, then function application,
/// then signed operands, parentheses, `|…|`, identifiers and numbers.
///
/// # Errors
/// Returns a `ParseError` when the tokens do not form an expression.
///
/// # Example
/// ```
/// use plotexpr::interpreter::{lexer::tokenize, parser::parse, token::TokenKind};
///
/// let tree = parse(tokenize("2^3^2")).unwrap();
/// assert_eq!(tree.kind(), TokenKind::Power);
/// // Right-associative: the right operand is `3^2`.
/// assert_eq!(tree.right.unwrap().kind(), TokenKind::Power);
///
/// assert!(parse(tokenize("(1+2")).is_err());
/// ```
pub fn parse(tokens: TokenStream<'_>) -> ParseResult<Node<'_>> {
    parse_with(tokens, ParseOptions::default())
}

/// Parses a token stream into an expression tree with explicit options.
///
/// # Errors
/// Returns a `ParseError` when the tokens do not form an expression under the
/// given [`Strictness`].
///
/// # Example
/// ```
/// use plotexpr::interpreter::{
///     lexer::tokenize,
///     parser::{ParseOptions, parse_with},
/// };
///
/// // A missing closing parenthesis is assumed in lenient mode.
/// assert!(parse_with(tokenize("(1+2"), ParseOptions::lenient()).is_ok());
/// assert!(parse_with(tokenize("(1+2"), ParseOptions::strict()).is_err());
/// ```
pub fn parse_with(tokens: TokenStream<'_>, options: ParseOptions) -> ParseResult<Node<'_>> {
    Parser::new(tokens, options).parse()
}
