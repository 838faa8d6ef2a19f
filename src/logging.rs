//! Tracing subscriber setup for the CLI.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "publii_config_merge=debug,info"
    } else if quiet {
        "warn"
    } else {
        "publii_config_merge=info,warn"
    }
}

/// Install the global subscriber: stderr always, plus an optional log file.
/// `RUST_LOG` overrides the verbosity flags.
pub fn init(verbose: bool, quiet: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert!(default_directive(true, false).contains("debug"));
        assert_eq!(default_directive(false, true), "warn");
        assert!(default_directive(false, false).contains("info"));
    }

    #[test]
    fn test_init_twice_reports_error() {
        let _ = init(false, true, None);
        let second = init(false, true, None);
        assert!(second.is_err());
    }
}
