use std::fmt;

/// The closed set of token kinds produced by the tokenizer or synthesized by
/// the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`, or an implicit multiplication synthesized by the parser.
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `|`, which delimits an absolute value.
    Pipe,
    /// `&`, recognized but not consumed by any grammar rule.
    Ampersand,
    /// `%`, recognized but not consumed by any grammar rule.
    Modulo,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A run of digits, such as `42`.
    Integer,
    /// A run of digits and dots containing at least one dot, such as `3.5`.
    Float,
    /// A run of ASCII letters, such as `pi` or `sin`.
    Identifier,
    /// Sentinel closing every token stream.
    EndOfInput,
    /// Synthesized by the parser for two adjacent operands where one side
    /// is an identifier. Resolved by the interpreter to either a function
    /// application or a multiplication.
    AmbiguousIdentifierApplication,
    /// Kind that no scanned token carries.
    #[default]
    Unclassified,
}

impl TokenKind {
    /// Upper-case diagnostic name of the kind, as printed in token dumps.
    ///
    /// # Example
    /// ```
    /// use plotexpr::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
    /// assert_eq!(TokenKind::EndOfInput.name(), "EOF");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MIN",
            Self::Multiply => "MUL",
            Self::Divide => "SLASH",
            Self::Power => "POW",
            Self::Pipe => "PIPE",
            Self::Ampersand => "AMPERSAND",
            Self::Modulo => "MODULO",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Identifier => "IDENTIFIER",
            Self::EndOfInput => "EOF",
            Self::AmbiguousIdentifierApplication => "AMBIGUOUS_IDENTIFIER",
            Self::Unclassified => "NONE",
        }
    }

    /// Returns `true` for the kinds that can begin a factor: `(`, `|`, an
    /// identifier or a numeric literal.
    ///
    /// A factor-starting token directly after an operand is what triggers an
    /// implicit multiplication or a function application.
    #[must_use]
    pub const fn starts_factor(self) -> bool {
        matches!(self,
                 Self::LeftParen | Self::Pipe | Self::Identifier | Self::Integer | Self::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range of a token inside the input it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len:   usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.len
    }
}

/// A lexical token.
///
/// Tokens never own their text: `lexeme` borrows the matched slice of the
/// input buffer, and `span` records where that slice lives. Synthesized
/// tokens (implicit operators, the end sentinel) have an empty lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The matched text.
    pub lexeme: &'src str,
    /// Location of `lexeme` in the input.
    pub span:   Span,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl<'src> Token<'src> {
    #[must_use]
    pub const fn new(kind: TokenKind,
                     lexeme: &'src str,
                     span: Span,
                     line: usize,
                     column: usize)
                     -> Self {
        Self { kind,
               lexeme,
               span,
               line,
               column }
    }

    /// Builds a token the parser invents, positioned at `at` with an empty
    /// lexeme.
    #[must_use]
    pub const fn synthesized(kind: TokenKind, at: &Self) -> Self {
        Self { kind,
               lexeme: "",
               span: Span::new(at.span.start, 0),
               line: at.line,
               column: at.column }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "({})", self.kind)
        } else {
            write!(f, "({}: {})", self.kind, self.lexeme)
        }
    }
}
