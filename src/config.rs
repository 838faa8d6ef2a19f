//! CLI configuration and runtime settings for the config merge.

use clap::Parser;
use std::path::PathBuf;

use crate::theme::THEME_ROOT_MARKER;
use crate::writer::Escape;

/// Merge a split Publii theme configuration into config.json
#[derive(Parser, Debug)]
#[command(name = "publii-config-merge")]
#[command(version)]
#[command(about = "Merge a split Publii theme configuration into config.json")]
pub struct Cli {
    /// Directory to start searching for the theme root from [default: current directory]
    #[arg(short = 'C', long, value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Marker file that identifies the theme root
    #[arg(long, default_value = THEME_ROOT_MARKER)]
    pub marker: String,

    /// Write non-ASCII characters verbatim instead of \uXXXX escapes
    #[arg(long)]
    pub unicode: bool,

    /// Compute the merge and report it without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Also write log records to this file (truncated on each run)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runtime configuration parsed from CLI
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the theme root search starts from
    pub start_dir: PathBuf,
    /// Marker file name
    pub marker: String,
    /// Output escaping for config.json
    pub escape: Escape,
    /// Skip all writes
    pub dry_run: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Suppress info output and the summary line
    pub quiet: bool,
    /// Optional log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Create Config from CLI arguments
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let start_dir = match cli.start_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        if !start_dir.is_dir() {
            anyhow::bail!("start directory not found: {}", start_dir.display());
        }
        let start_dir = start_dir.canonicalize().unwrap_or(start_dir);

        let marker = cli.marker.trim().to_string();
        if marker.is_empty() || marker.contains(['/', '\\']) {
            anyhow::bail!("invalid marker name '{}': expected a plain file name", cli.marker);
        }

        Ok(Config {
            start_dir,
            marker,
            escape: if cli.unicode {
                Escape::Unicode
            } else {
                Escape::Ascii
            },
            dry_run: cli.dry_run,
            verbose: cli.verbose,
            quiet: cli.quiet,
            log_file: cli.log_file,
        })
    }
}
