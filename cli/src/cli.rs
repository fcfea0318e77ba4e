//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for deliberation results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with every provider's testimony
    Full,
    /// Only the final verdict
    Verdict,
    /// JSON output
    Json,
}

/// CLI arguments for council
#[derive(Parser, Debug)]
#[command(name = "council")]
#[command(author, version, about = "Council - a roster of personas deliberates your question")]
#[command(long_about = r#"
Council dispatches your prompt to every persona on the roster at once,
collects their testimony as they finish, and streams back a single
synthesized verdict.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/council/config.toml   Global config

Example:
  council "Should we rewrite it in Rust?"
  council --output json "Ship it?"
"#)]
pub struct Cli {
    /// The prompt to put before the council
    pub prompt: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and live streaming
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
