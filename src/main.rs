//! depsync - Release pipeline helper CLI
//!
//! Two subcommands cover the release chores of an npm project:
//! - `changes`: report dependency changes between two lockfile snapshots
//! - `sync`: align @types requirements with their parent packages

use clap::Parser;
use colored::Colorize;
use depsync::changelog::{self, ChangesConfig};
use depsync::cli::{CliArgs, Command};
use depsync::report::{CHANGES_REPORT_FILE, SYNC_REPORT_FILE};
use depsync::sync::{self, SyncConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    match args.command {
        Command::Changes { output_dir, root } => {
            let log = changelog::run(&ChangesConfig {
                project_root: root,
                output_dir: output_dir.clone(),
            })?;

            let report = output_dir.join(CHANGES_REPORT_FILE);
            if log.is_empty() {
                println!(
                    "{} — {}",
                    report.display().to_string().bold(),
                    "no dependency changes".dimmed()
                );
            } else {
                println!(
                    "{} — {} change(s)",
                    report.display().to_string().bold(),
                    log.len().to_string().green()
                );
            }
        }

        Command::Sync { output_dir, root } => {
            let outcome = sync::run(&SyncConfig {
                project_root: root,
                output_dir: output_dir.clone(),
            })?;

            let report = output_dir.join(SYNC_REPORT_FILE);
            if !outcome.manifest_written {
                println!(
                    "{} — {}",
                    report.display().to_string().bold(),
                    "no dev dependencies found".dimmed()
                );
            } else if outcome.events.is_empty() {
                println!(
                    "{} — {}",
                    report.display().to_string().bold(),
                    "no requirements changed".dimmed()
                );
            } else {
                println!(
                    "{} — {} requirement(s) touched",
                    report.display().to_string().bold(),
                    outcome.events.len().to_string().green()
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
