//! fangov - hysteretic GPU/CPU fan governor
//!
//! A foreground daemon that samples GPU and CPU telemetry and steps
//! IPMI-managed chassis fans through four fixed levels, restoring automatic
//! fan control on exit.

use clap::Parser;
use fangov::cli::args::{generate_completions, Cli, Commands};
use fangov::commands::{run_governor, run_restore, run_status};
use fangov::config::{Config, ConfigFile};
use fangov::error::AppError;

use std::path::PathBuf;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let (config, config_source) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Only the daemon tees its log to a file
    let log_file: Option<PathBuf> = match &cli.command {
        Commands::Run(args) => Some(
            args.log_file
                .clone()
                .map(PathBuf::from)
                .unwrap_or_else(|| config.general.log_file.clone()),
        ),
        _ => None,
    };

    let verbosity = if cli.verbose { 1 } else { 0 };
    if let Err(e) = fangov::logging::init(verbosity, log_file.as_deref()) {
        eprintln!("Error: {}", AppError::Logging(e.to_string()));
        std::process::exit(1);
    }

    if let Some(path) = &config_source {
        log::info!("Loaded config from {}", path.display());
    }

    let dry_run = cli.dry_run || config.general.dry_run;

    // Run the appropriate command
    let result = run(&cli, &config, dry_run);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config, dry_run: bool) -> Result<(), AppError> {
    match &cli.command {
        Commands::Run(args) => run_governor(args, config, dry_run),

        Commands::Status => run_status(config, cli.format),

        Commands::Restore => run_restore(config, cli.format, dry_run),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<(Config, Option<PathBuf>), AppError> {
    if let Some(path) = &cli.config {
        let config = ConfigFile::load(path)?;
        return Ok((config, Some(PathBuf::from(path))));
    }

    match ConfigFile::load_default() {
        Some((config, path)) => Ok((config, Some(path))),
        None => Ok((Config::default(), None)),
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::MissingDependency(tool) => match tool.as_str() {
            "ipmitool" => {
                eprintln!();
                eprintln!("Hint: Install with: sudo apt-get install ipmitool");
            }
            "nvidia-smi" => {
                eprintln!();
                eprintln!("Hint: Install the NVIDIA drivers.");
            }
            _ => {}
        },
        AppError::InsufficientPrivileges => {
            eprintln!();
            eprintln!("Hint: Try running with sudo or as root.");
        }
        _ => {}
    }
}
