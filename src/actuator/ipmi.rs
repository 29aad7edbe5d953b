//! IPMI fan actuator
//!
//! Drives the chassis fans through `ipmitool raw` commands. The 0x30 0x30
//! netfn/command pair selects the OEM fan interface: subcommand 0x01 toggles
//! manual control, subcommand 0x02 sets the duty byte on all fans (0xff).

use crate::actuator::FanActuator;
use crate::domain::{DutyCycle, DutyTable, FanLevel};
use crate::error::ActuatorError;
use crate::shell;

const IPMITOOL: &str = "ipmitool";

/// Fan actuator backed by `ipmitool`
#[derive(Debug, Clone)]
pub struct IpmiActuator {
    table: DutyTable,
    dry_run: bool,
    manual_enabled: bool,
}

impl IpmiActuator {
    /// Create a new actuator with the given duty table
    pub fn new(table: DutyTable, dry_run: bool) -> Self {
        Self {
            table,
            dry_run,
            manual_enabled: false,
        }
    }

    /// Whether ipmitool is installed
    pub fn available() -> bool {
        shell::command_exists(IPMITOOL)
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn run_raw(&self, args: &[String]) -> Result<(), ActuatorError> {
        if self.dry_run {
            log::info!("DRY RUN: would run {} {}", IPMITOOL, args.join(" "));
            return Ok(());
        }

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        shell::run(IPMITOOL, &arg_refs)?;
        Ok(())
    }
}

/// Raw arguments toggling manual fan control
///
/// 0x00 enables manual control, 0x01 returns control to the firmware.
pub fn mode_args(manual: bool) -> Vec<String> {
    let mode = if manual { "0x00" } else { "0x01" };
    ["raw", "0x30", "0x30", "0x01", mode]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Raw arguments setting the duty byte on all fans
pub fn duty_args(duty: DutyCycle) -> Vec<String> {
    vec![
        "raw".to_string(),
        "0x30".to_string(),
        "0x30".to_string(),
        "0x02".to_string(),
        "0xff".to_string(),
        format!("{:#04x}", duty.as_raw()),
    ]
}

impl FanActuator for IpmiActuator {
    fn commit(&mut self, level: FanLevel) -> Result<(), ActuatorError> {
        if !self.manual_enabled {
            self.run_raw(&mode_args(true))?;
            self.manual_enabled = true;
        }

        let duty = self.table.duty_for(level);
        self.run_raw(&duty_args(duty))?;
        log::debug!("Applied duty cycle {} for level {}", duty, level);
        Ok(())
    }

    fn restore_automatic(&mut self) -> Result<(), ActuatorError> {
        self.run_raw(&mode_args(false))?;
        self.manual_enabled = false;
        log::debug!("Returned fan control to firmware");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_args() {
        assert_eq!(mode_args(true), ["raw", "0x30", "0x30", "0x01", "0x00"]);
        assert_eq!(mode_args(false), ["raw", "0x30", "0x30", "0x01", "0x01"]);
    }

    #[test]
    fn test_duty_args_formats_hex_byte() {
        let duty = DutyCycle::new(0x48).unwrap();
        assert_eq!(
            duty_args(duty),
            ["raw", "0x30", "0x30", "0x02", "0xff", "0x48"]
        );

        let low = DutyCycle::new(0x05).unwrap();
        assert_eq!(duty_args(low)[5], "0x05");
    }

    #[test]
    fn test_dry_run_commits_without_hardware() {
        let mut actuator = IpmiActuator::new(DutyTable::default(), true);
        actuator.commit(FanLevel::High).unwrap();
        actuator.commit(FanLevel::Max).unwrap();
        actuator.restore_automatic().unwrap();
    }

    #[test]
    fn test_manual_mode_tracked_across_commits() {
        let mut actuator = IpmiActuator::new(DutyTable::default(), true);
        assert!(!actuator.manual_enabled);

        actuator.commit(FanLevel::Medium).unwrap();
        assert!(actuator.manual_enabled);

        actuator.restore_automatic().unwrap();
        assert!(!actuator.manual_enabled);
    }
}
