//! Command-line interface definitions.
//!
//! Defines the CLI structure for the wildcard application using `clap`.
//! Subcommands run the optimizer, inspect the current squad, list the legal
//! formations and validate configuration files.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Fantasy football squad optimizer
#[derive(Parser, Debug)]
#[command(name = "wildcard")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wildcard CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick the best squad for the coming gameweeks
    Optimize(OptimizeArgs),

    /// Show the squad currently owned
    Squad(TableArgs),

    /// List the legal starting formations
    Formations,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Commands {
    /// Explicit config path given to this command, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Optimize(args) => args.config.as_deref(),
            Self::Config(ConfigCommand::Validate(args)) => args.config.as_deref(),
            Self::Squad(_) | Self::Formations => None,
        }
    }
}

/// Subcommands for `wildcard config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Arguments for `wildcard optimize`.
///
/// Every flag left out falls back to the `[optimizer]` config section.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Player table (.csv or .json)
    pub table: PathBuf,

    /// Funds in bank beyond the current squad value
    #[arg(long)]
    pub funds: Option<Decimal>,

    /// Transfers without a point penalty
    #[arg(long)]
    pub free_transfers: Option<u32>,

    /// Extra points charged per paid transfer
    #[arg(long)]
    pub margin: Option<Decimal>,

    /// Bench slots filled with non-playing fillers (0-4)
    #[arg(long)]
    pub fillers: Option<u32>,

    /// Per-formation solver time limit in seconds
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Configuration file (default: wildcard.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments naming a player table.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Player table (.csv or .json)
    pub table: PathBuf,
}

/// Argument for commands that take a config file path.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Configuration file (default: wildcard.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_optimize_overrides() {
        let cli = Cli::try_parse_from([
            "wildcard",
            "optimize",
            "players.csv",
            "--funds",
            "1.5",
            "--free-transfers",
            "2",
            "--fillers",
            "0",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Optimize(args) = cli.command else {
            panic!("expected optimize");
        };
        assert_eq!(args.table, PathBuf::from("players.csv"));
        assert_eq!(args.funds, Some(dec!(1.5)));
        assert_eq!(args.free_transfers, Some(2));
        assert_eq!(args.fillers, Some(0));
        assert_eq!(args.margin, None);
    }

    #[test]
    fn config_path_is_found_per_command() {
        let cli =
            Cli::try_parse_from(["wildcard", "config", "validate", "--config", "a.toml"]).unwrap();
        assert_eq!(cli.command.config_path(), Some(Path::new("a.toml")));

        let cli = Cli::try_parse_from(["wildcard", "formations"]).unwrap();
        assert_eq!(cli.command.config_path(), None);
    }

    #[test]
    fn optimize_requires_a_table() {
        assert!(Cli::try_parse_from(["wildcard", "optimize"]).is_err());
    }
}
