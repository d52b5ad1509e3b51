//! CLI argument parsing module for depsync

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release pipeline helper for npm projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depsync",
    version,
    about = "Lockfile change reports and @types requirement sync"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// The operation to run
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report dependency changes between the previous and current lockfile
    Changes {
        /// Directory the changes.md report is written into
        output_dir: PathBuf,

        /// Project root containing the lockfile snapshots and installed tree
        root: PathBuf,
    },

    /// Align @types requirements with their parent packages
    Sync {
        /// Directory the sync.md report is written into
        output_dir: PathBuf,

        /// Project root containing package.json
        root: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_changes_subcommand() {
        let args = CliArgs::parse_from(["depsync", "changes", "/tmp/out", "/repo"]);
        match args.command {
            Command::Changes { output_dir, root } => {
                assert_eq!(output_dir, PathBuf::from("/tmp/out"));
                assert_eq!(root, PathBuf::from("/repo"));
            }
            _ => panic!("expected changes subcommand"),
        }
    }

    #[test]
    fn test_sync_subcommand() {
        let args = CliArgs::parse_from(["depsync", "sync", "/tmp/out", "/repo"]);
        match args.command {
            Command::Sync { output_dir, root } => {
                assert_eq!(output_dir, PathBuf::from("/tmp/out"));
                assert_eq!(root, PathBuf::from("/repo"));
            }
            _ => panic!("expected sync subcommand"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        let result = CliArgs::try_parse_from(["depsync"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_paths_are_rejected() {
        let result = CliArgs::try_parse_from(["depsync", "sync", "/tmp/out"]);
        assert!(result.is_err());
    }
}
