//! Configuration for the imc driver.
//!
//! Settings live in an optional TOML file. Command-line flags override
//! whatever the file says.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::Deserialize;

use crate::error::{DrvError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "imc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Token dump settings.
    #[serde(default)]
    pub dump: DumpConfig,
}

/// How tokens are printed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DumpConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print each token's kind next to its text.
    #[serde(default)]
    pub show_kind: bool,

    /// Print comment tokens.
    #[serde(default = "default_true")]
    pub comments: bool,

    /// Stop after this many tokens.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Token dump output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `LL: text` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_kind: false,
            comments: true,
            limit: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/imc/`, then the
    /// platform configuration directory. Returns the default configuration
    /// if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DrvError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("imc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("imc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    pub fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
