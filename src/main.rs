use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use publii_config_merge::compiler::compile;
use publii_config_merge::config::{Cli, Config};
use publii_config_merge::logging;
use publii_config_merge::theme::join_names;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;

    logging::init(config.verbose, config.quiet, config.log_file.as_deref())?;

    let report = compile(&config).context("Failed to merge theme config")?;

    if config.quiet {
        return Ok(ExitCode::SUCCESS);
    }

    match report.written {
        Some(bytes) => println!(
            "Merged {} group(s) into {} ({} bytes)",
            report.groups.len(),
            report.output_path.display(),
            bytes
        ),
        None => println!(
            "Dry run: would merge {} group(s) into {}",
            report.groups.len(),
            report.output_path.display()
        ),
    }

    if config.verbose {
        println!("  order: [{}]", join_names(&report.groups));
        if !report.added.is_empty() {
            println!("  new: {}", join_names(&report.added));
        }
        if !report.removed.is_empty() {
            println!("  removed: {}", join_names(&report.removed));
        }
    }

    if let Some(ref path) = config.log_file {
        println!("Logs are saved in {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
