//! imc-drv - Token dump driver
//!
//! Runs the imc lexer over a file or the built-in sample program and prints
//! every token with the 0-based number of the line it sits on.
//!
//! # Example Usage
//!
//! ```
//! use imc_drv::{DumpConfig, Session};
//!
//! let mut out = Vec::new();
//! let stats = Session::new(DumpConfig::default())
//!     .dump_source("if x\nend", &mut out)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "00: if\n00: x\n01: end\n");
//! assert_eq!(stats.written, 3);
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, DumpConfig, OutputFormat, CONFIG_FILE_NAME};
pub use error::{DrvError, Result};
pub use session::{DumpStats, Session};

/// Program lexed by `imc tokens` when no file is given.
pub const SAMPLE: &str = "   // this is a test\n\
                          // another test!!\n\
                          \x20     //// and again!\n\
                          ++++ && +-/*()===\n";
