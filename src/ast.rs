use std::fmt;

use crate::interpreter::token::{Token, TokenKind};

/// A node of the binary expression tree built by the parser.
///
/// The `token` is the operator or operand the node stands for. Children are
/// owned exclusively by their parent:
///
/// - a leaf (literal, identifier, or the `EndOfInput` of an empty expression)
///   has no children;
/// - a unary node (`-x`, `+x`, `|x|`) has only a `left` child;
/// - a binary node has both.
///
/// Nodes are never modified after the parser builds them, so one tree can be
/// evaluated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'src> {
    /// The operator or operand.
    pub token: Token<'src>,
    /// First operand, or the only operand of a unary node.
    pub left:  Option<Box<Self>>,
    /// Second operand of a binary node.
    pub right: Option<Box<Self>>,
    height:    usize,
}

impl<'src> Node<'src> {
    /// Creates a node without children.
    #[must_use]
    pub const fn leaf(token: Token<'src>) -> Self {
        Self { token,
               left: None,
               right: None,
               height: 1 }
    }

    /// Creates a node with a single operand.
    #[must_use]
    pub fn unary(token: Token<'src>, operand: Self) -> Self {
        Self { token,
               height: operand.height + 1,
               left: Some(Box::new(operand)),
               right: None }
    }

    /// Creates a node with two operands.
    #[must_use]
    pub fn binary(token: Token<'src>, left: Self, right: Self) -> Self {
        Self { token,
               height: left.height.max(right.height) + 1,
               left: Some(Box::new(left)),
               right: Some(Box::new(right)) }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[must_use]
    pub const fn is_unary(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }

    /// Returns `true` for an identifier with no children attached, the only
    /// shape that can name a function being applied.
    #[must_use]
    pub const fn is_bare_identifier(&self) -> bool {
        matches!(self.token.kind, TokenKind::Identifier) && self.is_leaf()
    }

    /// Number of nodes on the longest path from here down to a leaf. A leaf
    /// has height 1. Computed when the node is built.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes in the tree rooted here.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Self::size) + self.right.as_deref().map_or(0, Self::size)
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_left: bool) -> fmt::Result {
        let (branch, indent) = if is_left { ("├──", "│   ") } else { ("└──", "    ") };
        writeln!(f, "{prefix}{branch}{}", self.token)?;

        let child_prefix = format!("{prefix}{indent}");
        if let Some(left) = &self.left {
            left.write_tree(f, &child_prefix, true)?;
        }
        if let Some(right) = &self.right {
            right.write_tree(f, &child_prefix, false)?;
        }
        Ok(())
    }
}

/// Renders the tree one node per line, left child first.
///
/// # Example
/// ```
/// use plotexpr::interpreter::{lexer::tokenize, parser::parse};
///
/// let tree = parse(tokenize("1+2*3")).unwrap();
/// assert_eq!(tree.to_string(),
///            "└──(PLUS: +)\n    ├──(INTEGER: 1)\n    └──(MUL: *)\n        ├──(INTEGER: 2)\n        └──(INTEGER: 3)\n");
/// ```
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, "", false)
    }
}
