//! Library interface for the `toklint` CLI.
//!
//! Exposes the argument parser as a library for documentation generation and
//! testing; the entry point is in `main.rs`.

use camino::Utf8PathBuf;
use clap::{CommandFactory, Parser};

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG    Log filter (e.g., debug, toklint=trace)
";

/// Command-line interface definition for toklint.
#[derive(Parser)]
#[command(name = "toklint")]
#[command(about = "Analyze tokenized UTF-8 text for encoding and tokenization anomalies")]
#[command(version)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Input file (default: STDIN)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<Utf8PathBuf>,

    /// Output file (default: STDOUT)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// ISO 639-3 language code, e.g. 'ara' for Arabic
    #[arg(long = "lc", value_name = "LANGUAGE-CODE")]
    pub language_code: Option<String>,

    /// Maximum distinct example tokens kept per category
    #[arg(short = 'x', long, default_value_t = 20, value_name = "N")]
    pub max_examples: usize,

    /// Maximum locations kept per example
    #[arg(short = 'n', long, default_value_t = 10, value_name = "N")]
    pub max_locations: usize,

    /// Print every category, including those with zero hits
    #[arg(long)]
    pub show_all: bool,

    /// Treat the first whitespace-delimited field of each line as its ID
    #[arg(short = 'r', long)]
    pub ref_ids: bool,

    /// Token length threshold for the long-token check
    #[arg(long, default_value_t = 20, value_name = "N")]
    pub long_token_min: usize,

    /// Emit the structured JSON dump instead of the report
    #[arg(short, long)]
    pub json: bool,

    /// Emit a single summary line instead of the report
    #[arg(short, long)]
    pub summary: bool,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, value_enum, default_value_t)]
    pub color: ColorChoice,
}

/// Returns the clap command for documentation generation.
pub fn command() -> clap::Command {
    Cli::command()
}
