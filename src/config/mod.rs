//! Configuration system
//!
//! Handles TOML config file parsing and conversion into validated domain
//! types. Defaults reproduce the shipped tuning, so the governor runs with no
//! config file at all.

pub mod file;

pub use file::ConfigFile;

use crate::domain::{DutyCycle, DutyTable, TempBreakpoints, Thresholds, UtilBand};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Decision thresholds
    pub thresholds: ThresholdsConfig,
    /// Fan level to duty cycle mapping
    pub fan: FanTableConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Control cycle interval in seconds
    pub interval_seconds: u64,
    /// Dry run mode
    pub dry_run: bool,
    /// Log file written alongside console output
    pub log_file: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 5,
            dry_run: false,
            log_file: PathBuf::from("/var/log/fangov.log"),
        }
    }
}

/// Threshold configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub gpu: TempBreakpointsConfig,
    pub cpu: TempBreakpointsConfig,
    pub util: UtilBandConfig,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            gpu: TempBreakpointsConfig {
                low: 50,
                medium: 60,
                high: 70,
                critical: 80,
            },
            cpu: TempBreakpointsConfig {
                low: 35,
                medium: 45,
                high: 60,
                critical: 75,
            },
            util: UtilBandConfig { low: 30, high: 70 },
        }
    }
}

impl ThresholdsConfig {
    /// Convert to validated domain thresholds
    pub fn to_thresholds(&self) -> Result<Thresholds, DomainError> {
        let gpu = TempBreakpoints::new(
            "gpu",
            self.gpu.low,
            self.gpu.medium,
            self.gpu.high,
            self.gpu.critical,
        )?;
        let cpu = TempBreakpoints::new(
            "cpu",
            self.cpu.low,
            self.cpu.medium,
            self.cpu.high,
            self.cpu.critical,
        )?;
        let util = UtilBand::new(self.util.low, self.util.high)?;

        Ok(Thresholds::new(gpu, cpu, util))
    }
}

/// Temperature breakpoints for one component, in degrees Celsius
///
/// All four keys are required when the section is present; partial
/// breakpoint sets are rejected rather than silently mixed with defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempBreakpointsConfig {
    pub low: i32,
    pub medium: i32,
    pub high: i32,
    pub critical: i32,
}

/// GPU utilization band in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilBandConfig {
    pub low: u8,
    pub high: u8,
}

/// Fan duty table configuration (raw duty bytes, 0-100)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FanTableConfig {
    pub default: u8,
    pub medium: u8,
    pub high: u8,
    pub max: u8,
}

impl Default for FanTableConfig {
    fn default() -> Self {
        Self {
            default: 0x20,
            medium: 0x32,
            high: 0x48,
            max: 0x64,
        }
    }
}

impl FanTableConfig {
    /// Convert to a validated duty table
    pub fn to_duty_table(&self) -> Result<DutyTable, DomainError> {
        DutyTable::new(
            DutyCycle::new(self.default)?,
            DutyCycle::new(self.medium)?,
            DutyCycle::new(self.high)?,
            DutyCycle::new(self.max)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FanLevel;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.interval_seconds, 5);
        assert!(!config.general.dry_run);
        assert_eq!(config.thresholds.gpu.critical, 80);
        assert_eq!(config.thresholds.cpu.low, 35);
        assert_eq!(config.fan.max, 0x64);
    }

    #[test]
    fn test_default_config_converts_cleanly() {
        let config = Config::default();
        assert!(config.thresholds.to_thresholds().is_ok());
        assert!(config.fan.to_duty_table().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let toml = r#"
            [general]
            interval_seconds = 10

            [thresholds.gpu]
            low = 55
            medium = 65
            high = 75
            critical = 85
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.general.interval_seconds, 10);
        assert_eq!(config.thresholds.gpu.high, 75);
        // Untouched sections fall back to defaults
        assert_eq!(config.thresholds.cpu.critical, 75);
        assert_eq!(config.fan.default, 0x20);
    }

    #[test]
    fn test_parse_fan_table() {
        let toml = r#"
            [fan]
            default = 25
            medium = 45
            high = 70
            max = 100
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let table = config.fan.to_duty_table().unwrap();
        assert_eq!(table.duty_for(FanLevel::Default).as_raw(), 25);
        assert_eq!(table.duty_for(FanLevel::Max).as_raw(), 100);
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let toml = r#"
            [thresholds.cpu]
            low = 45
            medium = 35
            high = 60
            critical = 75
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.thresholds.to_thresholds().is_err());
    }

    #[test]
    fn test_non_monotonic_fan_table_rejected() {
        let toml = r#"
            [fan]
            default = 50
            medium = 40
            high = 72
            max = 100
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.fan.to_duty_table().is_err());
    }
}
