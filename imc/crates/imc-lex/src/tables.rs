//! Keyword and symbol tables.
//!
//! All three tables are static data matched by exact byte equality. They are
//! shared by every [`Lexer`](crate::Lexer) and never change at runtime.

use crate::token::TokenKind;

/// A reserved word and the kind it lexes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    /// Exact source text of the keyword.
    pub lexeme: &'static str,
    /// Kind produced when the keyword matches.
    pub kind: TokenKind,
}

const fn kw(lexeme: &'static str, kind: TokenKind) -> Keyword {
    Keyword { lexeme, kind }
}

/// Reserved words, tried in this order.
pub static KEYWORDS: &[Keyword] = &[
    kw("else", TokenKind::Else),
    kw("end", TokenKind::End),
    kw("false", TokenKind::BoolLiteral),
    kw("for", TokenKind::For),
    kw("if", TokenKind::If),
    kw("in", TokenKind::In),
    kw("true", TokenKind::BoolLiteral),
    kw("while", TokenKind::While),
];

/// Single-character operators and punctuation.
pub static SINGLE_SYMBOLS: &[&str] = &[
    "(", ")", "[", "]", "+", "-", "=", "*", "/", "^", "%", "!", "<", ">", ",",
];

/// Two-character operators.
pub static DOUBLE_SYMBOLS: &[&str] = &[
    "+=", "-=", "*=", "/=", "^=", "!=", "==", "<=", ">=", "&&", "||",
];

/// Returns true if `text` is exactly a single-character symbol.
///
/// # Example
///
/// ```
/// use imc_lex::tables::is_single_symbol;
///
/// assert!(is_single_symbol(b"("));
/// assert!(!is_single_symbol(b"&"));
/// assert!(!is_single_symbol(b"(("));
/// ```
pub fn is_single_symbol(text: &[u8]) -> bool {
    SINGLE_SYMBOLS.iter().any(|s| s.as_bytes() == text)
}

/// Returns true if `text` is exactly a two-character symbol.
///
/// # Example
///
/// ```
/// use imc_lex::tables::is_double_symbol;
///
/// assert!(is_double_symbol(b"&&"));
/// assert!(!is_double_symbol(b"&"));
/// assert!(!is_double_symbol(b"=>"));
/// ```
pub fn is_double_symbol(text: &[u8]) -> bool {
    DOUBLE_SYMBOLS.iter().any(|s| s.as_bytes() == text)
}
