//! Token dump session.
//!
//! A [`Session`] walks a [`Lexer`] and writes each token to an output
//! stream, either as `LL: text` lines or as one JSON object per token.

use std::io::{BufRead, Write};
use std::path::Path;

use imc_lex::{Lexer, Token, TokenKind};
use serde::Serialize;
use tracing::debug;

use crate::config::{DumpConfig, OutputFormat};
use crate::error::Result;

/// Counters reported after a dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Tokens written to the output.
    pub written: usize,
    /// Comment tokens dropped by `comments = false`.
    pub skipped: usize,
    /// True if the limit stopped the dump before end of input.
    pub truncated: bool,
}

/// One line of JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    line: usize,
    column: usize,
    kind: &'static str,
    text: &'a str,
}

impl<'a> From<Token<'a>> for TokenRecord<'a> {
    fn from(token: Token<'a>) -> Self {
        Self {
            line: token.line,
            column: token.span.start,
            kind: token.kind.as_str(),
            text: token.text,
        }
    }
}

/// Writes lexer output according to a [`DumpConfig`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: DumpConfig,
}

impl Session {
    pub fn new(config: DumpConfig) -> Self {
        Self { config }
    }

    /// Lexes the file at `path` and dumps its tokens.
    pub fn dump_path<W: Write>(&self, path: &Path, out: &mut W) -> Result<DumpStats> {
        debug!(path = %path.display(), "dumping tokens");
        let mut lexer = Lexer::from_path(path)?;
        self.dump(&mut lexer, out)
    }

    /// Lexes in-memory source text and dumps its tokens.
    pub fn dump_source<W: Write>(&self, source: &str, out: &mut W) -> Result<DumpStats> {
        let mut lexer = Lexer::from_source(source)?;
        self.dump(&mut lexer, out)
    }

    /// Dumps every remaining token of `lexer`.
    ///
    /// # Errors
    ///
    /// Fails if writing to `out` fails, or if the lexer stopped on a read
    /// error instead of reaching the end of its source.
    pub fn dump<R: BufRead, W: Write>(
        &self,
        lexer: &mut Lexer<R>,
        out: &mut W,
    ) -> Result<DumpStats> {
        let mut stats = DumpStats::default();

        while !lexer.is_at_end() {
            if self.config.limit.is_some_and(|limit| stats.written >= limit) {
                stats.truncated = true;
                break;
            }

            if !self.config.comments && lexer.kind() == TokenKind::Comment {
                stats.skipped += 1;
            } else {
                self.write_token(lexer.token(), out)?;
                stats.written += 1;
            }

            lexer.advance();
        }

        out.flush()?;
        debug!(
            written = stats.written,
            skipped = stats.skipped,
            truncated = stats.truncated,
            "dump finished"
        );

        match lexer.take_fault() {
            Some(fault) => Err(fault.into()),
            None => Ok(stats),
        }
    }

    fn write_token<W: Write>(&self, token: Token<'_>, out: &mut W) -> Result<()> {
        match self.config.format {
            OutputFormat::Text if self.config.show_kind => {
                writeln!(out, "{:02}: {:<12} {}", token.line, token.kind, token.text)?
            },
            OutputFormat::Text => writeln!(out, "{:02}: {}", token.line, token.text)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &TokenRecord::from(token))?;
                writeln!(out)?;
            },
        }
        Ok(())
    }
}
