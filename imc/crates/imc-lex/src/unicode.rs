//! Codepoint classification for the imc lexer.
//!
//! Thin wrappers over the standard library's Unicode tables. The scanner
//! only ever asks these questions about decoded codepoints, never about raw
//! bytes, so multi-byte sequences are never split.

/// Checks if a character has case (upper- or lower-case letter).
///
/// # Example
///
/// ```
/// use imc_lex::unicode::is_cased;
///
/// assert!(is_cased('a'));
/// assert!(is_cased('Ω'));
/// assert!(!is_cased('1'));
/// assert!(!is_cased('字'));
/// ```
pub fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// Checks if a character is a word character: alphanumeric or `_`.
///
/// # Example
///
/// ```
/// use imc_lex::unicode::is_word;
///
/// assert!(is_word('a'));
/// assert!(is_word('_'));
/// assert!(is_word('٣'));  // Arabic-Indic digit three
/// assert!(!is_word('-'));
/// ```
pub fn is_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character is blank: whitespace that does not end a line.
///
/// # Example
///
/// ```
/// use imc_lex::unicode::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\t'));
/// assert!(is_blank('\u{3000}'));  // ideographic space
/// assert!(!is_blank('\n'));
/// ```
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

/// Checks if a character is any Unicode whitespace, line breaks included.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character continues an identifier.
///
/// A keyword only matches when the codepoint after it does not continue an
/// identifier, so `iffy` is not `if` followed by `fy`. `_` does not
/// continue one.
///
/// # Example
///
/// ```
/// use imc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('f'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('é'));
/// assert!(!is_ident_continue('('));
/// assert!(!is_ident_continue(' '));
/// assert!(!is_ident_continue('_'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Decodes the codepoint starting at byte `offset` of `text`.
///
/// Returns `None` at the end of the text or when `offset` does not fall on
/// a character boundary.
pub fn decode_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..)?.chars().next()
}

/// Byte length of the leading run of whitespace in `text`.
pub fn leading_space_len(text: &str) -> usize {
    text.len() - text.trim_start_matches(is_space).len()
}
