//! Status command implementation
//!
//! Reads one telemetry snapshot and shows the decision the policy would make
//! starting from the Default level. Read-only, so it works unprivileged.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, StatusOutput};
use crate::config::Config;
use crate::domain::FanLevel;
use crate::error::Result;
use crate::sensors::{SensorReader, SystemSensorReader};
use crate::services::ThresholdPolicy;

/// Execute the status command
pub fn run_status(config: &Config, format: OutputFormat) -> Result<()> {
    let thresholds = config.thresholds.to_thresholds()?;
    let duty_table = config.fan.to_duty_table()?;

    let reader = SystemSensorReader::new();
    let snapshot = reader.read();

    let policy = ThresholdPolicy::new(thresholds);
    let decision = policy.decide(&snapshot, FanLevel::default());
    let duty = duty_table.duty_for(decision.level);

    let output = StatusOutput {
        gpu_temp_c: snapshot.gpu_temp_c,
        cpu_temp_c: snapshot.cpu_temp_c,
        gpu_util_pct: snapshot.gpu_util_pct,
        level: decision.level.to_string(),
        duty_percent: duty.as_percent(),
        reason: decision.reason,
    };
    print_output(&output, format)?;

    Ok(())
}
