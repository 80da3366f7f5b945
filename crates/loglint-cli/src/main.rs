//! loglint CLI tool.
//!
//! Usage:
//! ```bash
//! loglint check [OPTIONS] [PATH]
//! loglint list-rules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Lints log statements in Rust projects
#[derive(Parser)]
#[command(name = "loglint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Check that messages start with a lowercase letter
        #[arg(long, value_name = "BOOL")]
        lowercase: Option<bool>,

        /// Check that messages contain only English letters
        #[arg(long, value_name = "BOOL")]
        english: Option<bool>,

        /// Check that messages avoid special characters
        #[arg(long, value_name = "BOOL")]
        special: Option<bool>,

        /// Check arguments for potentially sensitive data
        #[arg(long, value_name = "BOOL")]
        sensitive: Option<bool>,

        /// Additional sensitive words, comma-separated
        #[arg(long, value_name = "WORDS")]
        sensitive_words: Option<String>,
    },

    /// List available rules
    ListRules,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
            lowercase,
            english,
            special,
            sensitive,
            sensitive_words,
        } => {
            let flags = commands::check::CheckFlags {
                lowercase,
                english,
                special,
                sensitive,
                sensitive_words,
            };
            commands::check::run(&path, format, exclude, cli.config.as_deref(), flags)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
    }
}
