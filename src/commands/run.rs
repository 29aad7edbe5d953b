//! Run command implementation
//!
//! Bootstraps and runs the governor loop.

use crate::actuator::IpmiActuator;
use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sensors::{NvidiaSmiSource, SystemSensorReader};
use crate::services::{Governor, GovernorConfig, ThresholdPolicy};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Execute the run command
pub fn run_governor(args: &RunArgs, config: &Config, dry_run: bool) -> Result<()> {
    ensure_privileges(dry_run)?;
    ensure_dependencies()?;

    let thresholds = config.thresholds.to_thresholds()?;
    let duty_table = config.fan.to_duty_table()?;
    let interval = Duration::from_secs(args.interval.unwrap_or(config.general.interval_seconds));

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        log::info!("Caught termination signal, restoring automatic fan control...");
        flag.store(true, Ordering::SeqCst);
    })
    .map_err(|e| AppError::SignalHandler(e.to_string()))?;

    let reader = SystemSensorReader::new();
    let actuator = IpmiActuator::new(duty_table, dry_run);
    let policy = ThresholdPolicy::new(thresholds);
    let governor_config = GovernorConfig {
        interval,
        single_use: args.single_use,
    };

    let mut governor = Governor::new(reader, actuator, policy, governor_config, shutdown);
    governor.run()
}

/// Verify the process can reach the actuator
///
/// IPMI raw access requires root. Dry runs never touch hardware and are
/// allowed for any user.
pub(crate) fn ensure_privileges(dry_run: bool) -> Result<()> {
    if dry_run {
        return Ok(());
    }
    if unsafe { libc::geteuid() } != 0 {
        return Err(AppError::InsufficientPrivileges);
    }
    Ok(())
}

/// Verify the required external tools are installed
pub(crate) fn ensure_dependencies() -> Result<()> {
    if !IpmiActuator::available() {
        return Err(AppError::MissingDependency("ipmitool".to_string()));
    }
    if !NvidiaSmiSource::available() {
        return Err(AppError::MissingDependency("nvidia-smi".to_string()));
    }
    Ok(())
}
