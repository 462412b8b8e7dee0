//! Token type definitions.
//!
//! A token is a classified, contiguous run of text within one source line.
//! The lexer does not decode literal values, so a token carries only its
//! [`TokenKind`] and the [`Span`] it covers.

use std::fmt;

/// The kind of a lexed token.
///
/// `NumberLiteral`, `StringLiteral` and `Identifier` are part of the
/// language's token set but are not produced yet: every run that is neither
/// a comment, a symbol nor a keyword comes back as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unclassified run of non-whitespace text.
    Unknown,
    /// `//` line comment, markers included.
    Comment,
    NumberLiteral,
    /// `true` or `false`.
    BoolLiteral,
    StringLiteral,
    Identifier,
    /// Operator or punctuation.
    Symbol,

    // Keywords
    If,
    Else,
    While,
    For,
    In,
    End,

    /// Input exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Returns true for the reserved-word kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use imc_lex::TokenKind;
    ///
    /// assert!(TokenKind::While.is_keyword());
    /// assert!(!TokenKind::BoolLiteral.is_keyword());
    /// assert!(!TokenKind::Symbol.is_keyword());
    /// ```
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::In
                | TokenKind::End
        )
    }

    /// Returns true for the literal kinds.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumberLiteral | TokenKind::BoolLiteral | TokenKind::StringLiteral
        )
    }

    /// Stable lower-case name, used by diagnostics and the token dump.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown",
            TokenKind::Comment => "comment",
            TokenKind::NumberLiteral => "number",
            TokenKind::BoolLiteral => "bool",
            TokenKind::StringLiteral => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::End => "end",
            TokenKind::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Byte range of a token within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last byte.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Borrowed view of the lexer's current token.
///
/// `text` points into the lexer's line buffer, so a `Token` cannot be kept
/// across a call to [`Lexer::advance`](crate::Lexer::advance). Use
/// [`Token::to_owned_token`] to retain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
    /// 0-based index of the line holding the token.
    pub line: usize,
}

impl Token<'_> {
    /// Copies the token text into an [`OwnedToken`].
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            kind: self.kind,
            text: self.text.to_string(),
            span: self.span,
            line: self.line,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A token whose text has been copied out of the line buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub line: usize,
}

impl OwnedToken {
    /// Borrows this token back as a [`Token`].
    pub fn as_token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: &self.text,
            span: self.span,
            line: self.line,
        }
    }
}

impl fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
