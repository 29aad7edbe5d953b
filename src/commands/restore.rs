//! Restore command implementation
//!
//! Forces fan control back to the firmware. Useful after a crash that left
//! the chassis in manual mode.

use crate::actuator::{FanActuator, IpmiActuator};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, Message};
use crate::commands::run::ensure_privileges;
use crate::config::Config;
use crate::error::{AppError, Result};

/// Execute the restore command
pub fn run_restore(config: &Config, format: OutputFormat, dry_run: bool) -> Result<()> {
    ensure_privileges(dry_run)?;
    if !IpmiActuator::available() {
        return Err(AppError::MissingDependency("ipmitool".to_string()));
    }

    let mut actuator = IpmiActuator::new(config.fan.to_duty_table()?, dry_run);
    actuator.restore_automatic()?;

    let msg = Message {
        message: "Restored automatic fan control".to_string(),
        success: true,
    };
    print_output(&msg, format)?;

    Ok(())
}
