//! CLI module - Command-line interface for Marquee
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Marquee - media catalogue schema and demo seed loader
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the demo catalogue into the database
    #[command(alias = "seed")]
    Up {
        /// Roll back everything if any insert fails
        #[arg(long)]
        transactional: bool,
        /// Skip the offline integrity check
        #[arg(long)]
        skip_check: bool,
    },

    /// Delete the catalogue content
    #[command(alias = "teardown")]
    Down,

    /// Clear the catalogue and seed it again
    Reset {
        /// Roll back everything if any insert fails
        #[arg(long)]
        transactional: bool,
        /// Skip the offline integrity check
        #[arg(long)]
        skip_check: bool,
    },

    /// Show row counts next to the embedded dataset
    #[command(alias = "st")]
    Status,

    /// Validate the embedded dataset without touching the database
    Check,

    /// Create default config file
    Init,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn up_accepts_flags_and_alias() {
        let cli = Cli::try_parse_from(["marquee", "seed", "--transactional"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Up {
                transactional: true,
                skip_check: false
            }
        ));
    }

    #[test]
    fn reset_accepts_skip_check() {
        let cli = Cli::try_parse_from(["marquee", "reset", "--skip-check"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Reset {
                transactional: false,
                skip_check: true
            }
        ));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["marquee", "status", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Status));
    }
}
