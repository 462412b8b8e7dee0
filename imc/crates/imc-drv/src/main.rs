//! imc CLI - token dump tool for the imc lexer.
//!
//! Parses command-line arguments with clap, loads the optional `imc.toml`,
//! sets up logging and runs the selected command.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use imc_drv::{Config, DrvError, OutputFormat, Result, Session, SAMPLE};

/// imc - lexer tools for the imc scripting language
#[derive(Parser, Debug)]
#[command(name = "imc")]
#[command(author = "imc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Token dump tool for the imc lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "IMC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "IMC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "IMC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the imc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Each token is printed on its own line, prefixed with the 0-based
    /// number of the source line it was found on. Without FILE the
    /// built-in sample program is lexed.
    Tokens(TokensCommand),

    /// Print the built-in sample program
    Sample,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to lex (default: built-in sample)
    input: Option<PathBuf>,

    /// Print each token's kind
    #[arg(short, long)]
    kinds: bool,

    /// Leave comment tokens out
    #[arg(long)]
    no_comments: bool,

    /// Stop after N tokens
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so they never mix with the token dump. `RUST_LOG`
/// takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Sample => execute_sample(),
    }
}

/// Execute the tokens command. Flags override the config file.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let mut dump = config.dump;
    if args.kinds {
        dump.show_kind = true;
    }
    if args.no_comments {
        dump.comments = false;
    }
    if let Some(limit) = args.limit {
        dump.limit = Some(limit);
    }
    if let Some(format) = args.format {
        dump.format = format;
    }
    debug!(?dump, "dump settings");

    let session = Session::new(dump);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match &args.input {
        Some(path) => session.dump_path(path, &mut out)?,
        None => session.dump_source(SAMPLE, &mut out)?,
    };

    if stats.truncated {
        debug!(written = stats.written, "stopped at token limit");
    }
    Ok(())
}

fn execute_sample() -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(SAMPLE.as_bytes())?;
    out.flush()?;
    Ok(())
}
