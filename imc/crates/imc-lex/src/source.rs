//! Line buffer over a lexer source.
//!
//! The lexer never holds more than one physical line of source text. A
//! [`LineBuffer`] owns that line and pulls the next one from its reader on
//! [`refill`](LineBuffer::refill). Files and memory blocks share the same
//! interface through [`BufRead`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::error::{LexError, LexResult};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Outcome of a [`LineBuffer::refill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refill {
    /// A new line is available.
    Line,
    /// The source has no more lines.
    Exhausted,
}

/// Holds the current line of a source and reads the next one on demand.
pub struct LineBuffer<R> {
    reader: R,
    /// Current line, terminator removed.
    line: String,
    /// Scratch space for the raw bytes of the line being read.
    raw: Vec<u8>,
    lines_read: usize,
}

impl<R: BufRead> LineBuffer<R> {
    /// Wraps a buffered reader. Nothing is read until the first refill.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            raw: Vec::new(),
            lines_read: 0,
        }
    }

    /// Replaces the current line with the next line of the source.
    ///
    /// The line terminator (`\n` or `\r\n`) is not kept, nor is a UTF-8
    /// byte order mark at the start of the first line. Bytes that are not
    /// valid UTF-8 are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if the read fails. The current line is
    /// empty afterwards.
    pub fn refill(&mut self) -> io::Result<Refill> {
        self.line.clear();
        self.raw.clear();

        if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
            return Ok(Refill::Exhausted);
        }

        if self.raw.last() == Some(&b'\n') {
            self.raw.pop();
            if self.raw.last() == Some(&b'\r') {
                self.raw.pop();
            }
        }

        let bytes = if self.lines_read == 0 {
            self.raw.strip_prefix(BOM).unwrap_or(&self.raw[..])
        } else {
            &self.raw[..]
        };
        match std::str::from_utf8(bytes) {
            Ok(text) => self.line.push_str(text),
            Err(_) => self.line.push_str(&String::from_utf8_lossy(bytes)),
        }

        self.lines_read += 1;
        trace!(line = self.lines_read - 1, bytes = self.line.len(), "refilled line buffer");
        Ok(Refill::Line)
    }
}

impl<R> LineBuffer<R> {
    /// Text of the current line.
    pub fn text(&self) -> &str {
        &self.line
    }

    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Drops the current line's text.
    pub fn clear(&mut self) {
        self.line.clear();
    }
}

impl LineBuffer<BufReader<File>> {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Open`] if the file cannot be opened.
    pub fn open(path: &Path) -> LexResult<Self> {
        let file = File::open(path).map_err(|source| LexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'a> LineBuffer<&'a [u8]> {
    /// Reads lines from a fixed block of memory.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}
