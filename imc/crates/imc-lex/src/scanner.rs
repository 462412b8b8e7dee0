//! Token scanner.
//!
//! Decides the boundaries and kind of the next token in the untokenized
//! remainder of a line. The scanner is a pure function of that remainder;
//! line handling and position tracking belong to [`Lexer`](crate::Lexer).
//!
//! Rules are tried in a fixed order and the first one that matches wins:
//!
//! 1. leading whitespace is skipped
//! 2. an empty remainder has no token
//! 3. `//` starts a comment running to the end of the line
//! 4. two-character symbols
//! 5. single-character symbols
//! 6. keywords, when not followed by an identifier character
//! 7. anything else runs up to the next whitespace as `Unknown`

use crate::tables::{is_double_symbol, is_single_symbol, KEYWORDS};
use crate::token::TokenKind;
use crate::unicode::{decode_at, is_ident_continue, is_space, leading_space_len};

/// Marker that opens a line comment.
pub const COMMENT_MARKER: &str = "//";

/// Result of scanning one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// Bytes of whitespace before the token.
    pub skip: usize,
    /// Length of the token in bytes.
    pub len: usize,
    pub kind: TokenKind,
}

/// Scans the next token from `rest`.
///
/// Returns `None` when `rest` holds nothing but whitespace.
///
/// # Example
///
/// ```
/// use imc_lex::scanner::{scan, Scan};
/// use imc_lex::TokenKind;
///
/// let found = scan("  == 1").unwrap();
/// assert_eq!(found, Scan { skip: 2, len: 2, kind: TokenKind::Symbol });
/// assert_eq!(scan(" \t "), None);
/// ```
pub fn scan(rest: &str) -> Option<Scan> {
    let skip = leading_space_len(rest);
    let text = &rest[skip..];
    if text.is_empty() {
        return None;
    }

    let (len, kind) = scan_token(text);
    Some(Scan { skip, len, kind })
}

/// Classifies the token at the start of `text`, which must be non-empty and
/// start with a non-whitespace codepoint.
fn scan_token(text: &str) -> (usize, TokenKind) {
    if text.starts_with(COMMENT_MARKER) {
        return (text.len(), TokenKind::Comment);
    }

    let bytes = text.as_bytes();
    if bytes.len() >= 2 && is_double_symbol(&bytes[..2]) {
        return (2, TokenKind::Symbol);
    }
    if is_single_symbol(&bytes[..1]) {
        return (1, TokenKind::Symbol);
    }

    if let Some((len, kind)) = scan_keyword(text) {
        return (len, kind);
    }

    (scan_fallback(text), TokenKind::Unknown)
}

fn scan_keyword(text: &str) -> Option<(usize, TokenKind)> {
    KEYWORDS.iter().find_map(|keyword| {
        let len = keyword.lexeme.len();
        let bounded = text.starts_with(keyword.lexeme)
            && !decode_at(text, len).is_some_and(is_ident_continue);
        bounded.then_some((len, keyword.kind))
    })
}

/// Length of the run of non-whitespace codepoints at the start of `text`.
fn scan_fallback(text: &str) -> usize {
    text.char_indices()
        .find(|&(_, c)| is_space(c))
        .map_or(text.len(), |(offset, _)| offset)
}
