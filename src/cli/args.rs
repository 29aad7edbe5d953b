//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Hysteretic GPU/CPU fan governor for IPMI-managed chassis fans
///
/// Samples GPU and CPU telemetry and steps the chassis fans through four
/// fixed levels, restoring automatic control on exit.
#[derive(Parser, Debug)]
#[command(name = "fangov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for one-shot commands
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FANGOV_CONFIG")]
    pub config: Option<String>,

    /// Dry run mode - log hardware commands without issuing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the governor loop (foreground daemon)
    Run(RunArgs),

    /// Show one telemetry snapshot and the decision it produces
    Status,

    /// Return fan control to the firmware and exit
    Restore,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Seconds between control cycles (overrides config)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Run one cycle and exit (single-use mode)
    #[arg(long)]
    pub single_use: bool,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<String>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let args = Cli::try_parse_from(["fangov", "run"]).unwrap();
        assert!(matches!(args.command, Commands::Run(_)));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_cli_parse_run_with_overrides() {
        let args =
            Cli::try_parse_from(["fangov", "run", "--interval", "10", "--single-use"]).unwrap();
        match args.command {
            Commands::Run(run) => {
                assert_eq!(run.interval, Some(10));
                assert!(run.single_use);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parse_status() {
        let args = Cli::try_parse_from(["fangov", "status"]).unwrap();
        assert!(matches!(args.command, Commands::Status));
    }

    #[test]
    fn test_cli_global_dry_run() {
        let args = Cli::try_parse_from(["fangov", "restore", "--dry-run"]).unwrap();
        assert!(args.dry_run);
        assert!(matches!(args.command, Commands::Restore));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["fangov"]).is_err());
    }
}
