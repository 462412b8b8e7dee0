//! imc-lex - Lexical Analyzer for the imc scripting language
//!
//! This crate turns imc source text into a stream of classified tokens. It
//! works one line at a time: only the current line of source is held in
//! memory, and only the current token is ever computed.
//!
//! # Example Usage
//!
//! ```
//! use imc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_source("if x == 1 // check\nend").unwrap();
//!
//! while !lexer.is_at_end() {
//!     println!("{:02}: {}", lexer.line_number(), lexer.text());
//!     lexer.advance();
//! }
//!
//! // Or take owned copies through the Iterator impl
//! let lexer = Lexer::from_source("if x == 1 // check\nend").unwrap();
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
//! assert_eq!(kinds.first(), Some(&TokenKind::If));
//! assert_eq!(kinds.last(), Some(&TokenKind::End));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and spans
//! - [`tables`] - Keyword and symbol tables
//! - [`unicode`] - Codepoint classification
//! - [`scanner`] - Boundaries and kind of a single token
//! - [`source`] - Line buffer over files and memory
//! - [`lexer`] - The lexer iterator
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `while`, `for`, `in`, `end`, plus the boolean literals
//! `true` and `false`. A keyword only matches when it is not followed by a
//! letter or digit.
//!
//! ## Symbols
//!
//! - **Single**: `(` `)` `[` `]` `+` `-` `=` `*` `/` `^` `%` `!` `<` `>` `,`
//! - **Double**: `+=` `-=` `*=` `/=` `^=` `!=` `==` `<=` `>=` `&&` `||`
//!
//! ## Comments
//!
//! `//` to end of line. Comments are returned as tokens, not skipped.
//!
//! ## Everything else
//!
//! Any other run of non-whitespace text is an `Unknown` token. Numbers,
//! strings and identifiers are not told apart yet.

pub mod error;
pub mod lexer;
pub mod scanner;
pub mod source;
pub mod tables;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use source::{LineBuffer, Refill};
pub use token::{OwnedToken, Span, Token, TokenKind};
