use logos::{Lexer, Logos};
use tracing::debug;

use crate::interpreter::token::{Span, Token, TokenKind};

/// Raw lexemes recognized by the scanner.
///
/// This is the scanner's own vocabulary; every lexeme that reaches the token
/// stream is mapped onto a [`TokenKind`]. Spaces, tabs and newlines are
/// consumed here and never become tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
enum Lexeme {
    /// Digit and dot runs with at least one dot, such as `3.14`, `.5`, `2.`.
    /// More than one dot is accepted here and rejected when the literal is
    /// evaluated.
    #[regex(r"[0-9]*\.[0-9.]*")]
    Float,
    /// Digit runs, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Letter runs, such as `pi` or `sin`.
    #[regex(r"[a-zA-Z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `|`
    #[token("|")]
    Pipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Line break; skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Float => TokenKind::Float,
            Self::Integer => TokenKind::Integer,
            Self::Identifier => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Multiply,
            Self::Slash => TokenKind::Divide,
            Self::Caret => TokenKind::Power,
            Self::Pipe => TokenKind::Pipe,
            Self::Ampersand => TokenKind::Ampersand,
            Self::Percent => TokenKind::Modulo,
            Self::LParen => TokenKind::LeftParen,
            Self::RParen => TokenKind::RightParen,
            Self::NewLine => TokenKind::Unclassified,
        }
    }
}

/// Position bookkeeping carried by the scanner.
///
/// `line` is 1-based; `line_start` is the byte offset where the current line
/// begins and is used to derive columns.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// An ordered, one-directional sequence of tokens ending in
/// [`TokenKind::EndOfInput`].
///
/// Tokens are scanned lazily. The stream supports looking at the next token
/// ([`peek`](Self::peek)) and consuming it ([`next_token`](Self::next_token));
/// there is no rewind. Once the input is exhausted both keep returning the
/// `EndOfInput` sentinel.
///
/// As an [`Iterator`] the stream yields every token exactly once, including
/// the sentinel, and then stops.
pub struct TokenStream<'src> {
    lexer:    Lexer<'src, Lexeme>,
    peeked:   Option<Token<'src>>,
    finished: bool,
    cursor:   Cursor,
}

/// Position of the last token scanned. Columns advance from it.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    line:   usize,
    offset: usize,
    column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { line:   1,
               offset: 0,
               column: 1, }
    }
}

impl<'src> TokenStream<'src> {
    /// Starts scanning `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Lexeme::lexer_with_extras(source, LexerExtras::default()),
               peeked:   None,
               finished: false,
               cursor:   Cursor::default(), }
    }

    /// The input buffer every token's lexeme borrows from.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.lexer.source()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token<'src> {
        if let Some(token) = self.peeked {
            return token;
        }
        let token = self.scan();
        self.peeked = Some(token);
        token
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.peeked.take().unwrap_or_else(|| self.scan())
    }

    /// Returns `true` once the next token is the end sentinel.
    pub fn at_end(&mut self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    fn scan(&mut self) -> Token<'src> {
        loop {
            match self.lexer.next() {
                Some(Ok(lexeme)) => {
                    let (text, start) = (self.lexer.slice(), self.lexer.span().start);
                    return self.make_token(lexeme.kind(), text, start);
                },
                Some(Err(())) => {
                    let (text, start) = (self.lexer.slice(), self.lexer.span().start);
                    let (line, column) = self.line_column(start);
                    debug!(character = text, line, column, "skipping unrecognized character");
                },
                None => {
                    let end = self.source().len();
                    return self.make_token(TokenKind::EndOfInput, "", end);
                },
            }
        }
    }

    fn make_token(&mut self, kind: TokenKind, lexeme: &'src str, start: usize) -> Token<'src> {
        let (line, column) = self.line_column(start);
        Token::new(kind, lexeme, Span::new(start, lexeme.len()), line, column)
    }

    /// Line and column of `offset`. Offsets must be requested in increasing
    /// order within a line.
    fn line_column(&mut self, offset: usize) -> (usize, usize) {
        let LexerExtras { line, line_start } = self.lexer.extras;
        if self.cursor.line != line || offset < self.cursor.offset {
            self.cursor = Cursor { line,
                                   offset: line_start,
                                   column: 1 };
        }
        let advanced = self.source()
                           .get(self.cursor.offset..offset)
                           .map_or(0, |skipped| skipped.chars().count());
        self.cursor.offset = offset;
        self.cursor.column += advanced;
        (line, self.cursor.column)
    }
}

impl<'src> Iterator for TokenStream<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::EndOfInput;
        Some(token)
    }
}

/// Converts an expression string into a stream of tokens.
///
/// Tokenizing never fails. Whitespace separates tokens and is dropped,
/// newlines additionally advance the line counter, and characters that belong
/// to no token kind are skipped. Malformed input surfaces later as a parse or
/// evaluation error.
///
/// # Example
/// ```
/// use plotexpr::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("2pi + 1.5").map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Integer,
///             TokenKind::Identifier,
///             TokenKind::Plus,
///             TokenKind::Float,
///             TokenKind::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> TokenStream<'_> {
    TokenStream::new(input)
}
