//! Error types for the imc lexer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening or reading a lexer source.
///
/// Unrecognized text is never an error: it lexes as
/// [`TokenKind::Unknown`](crate::TokenKind::Unknown).
#[derive(Debug, Error)]
pub enum LexError {
    /// The source file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        source: io::Error,
    },

    /// The first line of the source could not be read.
    #[error("failed to read first line: {source}")]
    Init { source: io::Error },

    /// A later line could not be read.
    ///
    /// The lexer stops at this point exactly as if the input had ended.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 0-based index of the line that failed.
        line: usize,
        source: io::Error,
    },
}

impl LexError {
    /// True for errors that prevented a lexer from being constructed.
    pub fn is_init(&self) -> bool {
        matches!(self, LexError::Open { .. } | LexError::Init { .. })
    }

    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            LexError::Open { source, .. }
            | LexError::Init { source }
            | LexError::Read { source, .. } => source,
        }
    }
}

/// Result type alias for lexer construction.
pub type LexResult<T> = std::result::Result<T, LexError>;
