//! Lexer iterator.
//!
//! The [`Lexer`] is a cursor over the token stream of one source. It owns a
//! [`LineBuffer`] holding the current line, keeps the position of the
//! current token in that line, and reads further lines only when the
//! current one runs out of tokens.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{LexError, LexResult};
use crate::scanner::scan;
use crate::source::{LineBuffer, Refill};
use crate::token::{OwnedToken, Span, Token, TokenKind};

/// Pull-based lexer for imc source.
///
/// A new lexer is already positioned on the first token. Read it with
/// [`token`](Lexer::token) (or [`kind`](Lexer::kind) and
/// [`text`](Lexer::text)), then call [`advance`](Lexer::advance) to move to
/// the next one. Once the input is exhausted [`is_at_end`](Lexer::is_at_end)
/// returns true and the kind is [`TokenKind::EndOfInput`].
///
/// # Example
///
/// ```
/// use imc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_source("while x >= 10\nend").unwrap();
///
/// assert_eq!(lexer.kind(), TokenKind::While);
/// lexer.advance();
/// assert_eq!(lexer.text(), "x");
/// lexer.advance();
/// assert_eq!(lexer.text(), ">=");
/// lexer.advance();
/// lexer.advance();
/// assert_eq!(lexer.kind(), TokenKind::End);
/// assert_eq!(lexer.line_number(), 1);
/// lexer.advance();
/// assert!(lexer.is_at_end());
/// ```
pub struct Lexer<R> {
    /// Current line of source.
    lines: LineBuffer<R>,

    /// 0-based index of the current line.
    line_index: usize,

    /// Byte offset of the current token in the current line.
    column: usize,

    /// Byte length of the current token.
    len: usize,

    kind: TokenKind,

    at_end: bool,

    /// Read error that ended the input early, if any.
    fault: Option<LexError>,
}

impl Lexer<BufReader<File>> {
    /// Creates a lexer over the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Open`] if the file cannot be opened and
    /// [`LexError::Init`] if its first line cannot be read or the file is
    /// empty.
    pub fn from_path(path: impl AsRef<Path>) -> LexResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening source file");
        Self::begin(LineBuffer::open(path)?)
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over a block of memory.
    pub fn from_bytes(bytes: &'a [u8]) -> LexResult<Self> {
        Self::begin(LineBuffer::from_bytes(bytes))
    }

    /// Creates a lexer over source text.
    pub fn from_source(source: &'a str) -> LexResult<Self> {
        Self::from_bytes(source.as_bytes())
    }
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer over any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Init`] if the first line cannot be read, which
    /// includes a reader with no lines at all. A source holding only
    /// whitespace is not an error: the lexer starts at end of input.
    pub fn new(reader: R) -> LexResult<Self> {
        Self::begin(LineBuffer::new(reader))
    }

    fn begin(mut lines: LineBuffer<R>) -> LexResult<Self> {
        let first = lines.refill().map_err(|source| LexError::Init { source })?;
        if first == Refill::Exhausted {
            return Err(LexError::Init {
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "source is empty"),
            });
        }

        let mut lexer = Self {
            lines,
            line_index: 0,
            column: 0,
            len: 0,
            kind: TokenKind::Unknown,
            at_end: false,
            fault: None,
        };

        lexer.seek_token();

        debug!(at_end = lexer.at_end, "lexer ready");
        Ok(lexer)
    }

    /// Moves to the next token, reading further lines as needed.
    ///
    /// Does nothing once the lexer is at end of input.
    pub fn advance(&mut self) {
        if self.at_end {
            return;
        }

        self.column += self.len;
        self.len = 0;
        self.seek_token();
    }

    /// Scans from the current column, refilling until a token is found or
    /// the source runs dry.
    fn seek_token(&mut self) {
        loop {
            if let Some(found) = scan(&self.lines.text()[self.column..]) {
                self.column += found.skip;
                self.len = found.len;
                self.kind = found.kind;
                trace!(
                    line = self.line_index,
                    column = self.column,
                    kind = %self.kind,
                    "token"
                );
                return;
            }

            match self.lines.refill() {
                Ok(Refill::Line) => {
                    self.line_index += 1;
                    self.column = 0;
                },
                Ok(Refill::Exhausted) => {
                    self.finish();
                    return;
                },
                Err(source) => {
                    let line = self.line_index + 1;
                    warn!(line, error = %source, "read failed, treating as end of input");
                    self.fault = Some(LexError::Read { line, source });
                    self.finish();
                    return;
                },
            }
        }
    }

    fn finish(&mut self) {
        self.at_end = true;
        self.kind = TokenKind::EndOfInput;
        self.column = 0;
        self.len = 0;
        self.lines.clear();
        trace!(lines = self.lines.lines_read(), "end of input");
    }
}

impl<R> Lexer<R> {
    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Kind of the current token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Position of the current token within [`line_text`](Lexer::line_text).
    pub fn span(&self) -> Span {
        Span::new(self.column, self.len)
    }

    /// Text of the current token. Empty at end of input.
    pub fn text(&self) -> &str {
        &self.lines.text()[self.column..self.column + self.len]
    }

    /// 0-based index of the line holding the current token.
    pub fn line_number(&self) -> usize {
        self.line_index
    }

    /// Byte offset of the current token within its line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Full text of the line holding the current token.
    pub fn line_text(&self) -> &str {
        self.lines.text()
    }

    /// Borrowed view of the current token.
    pub fn token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: self.text(),
            span: self.span(),
            line: self.line_index,
        }
    }

    /// The read error that ended the input, if the input did not end
    /// normally.
    pub fn fault(&self) -> Option<&LexError> {
        self.fault.as_ref()
    }

    /// Takes the read error out of the lexer.
    pub fn take_fault(&mut self) -> Option<LexError> {
        self.fault.take()
    }
}

/// Yields owned copies of the remaining tokens, current token first.
impl<R: BufRead> Iterator for Lexer<R> {
    type Item = OwnedToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_end {
            return None;
        }
        let token = self.token().to_owned_token();
        self.advance();
        Some(token)
    }
}

impl<R: BufRead> FusedIterator for Lexer<R> {}

impl<R> fmt::Debug for Lexer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("line", &self.line_index)
            .field("column", &self.column)
            .field("kind", &self.kind)
            .field("text", &self.text())
            .field("at_end", &self.at_end)
            .finish()
    }
}
