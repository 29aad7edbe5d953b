//! Fan-related domain types
//!
//! Provides the enumerated fan level and its validated duty-cycle mapping.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cooling level committed to the hardware
///
/// The governor only ever commands one of these four levels; arbitrary duty
/// cycles are not representable. Ordering follows cooling strength.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum FanLevel {
    /// Baseline speed, used when the system is cool and idle
    #[default]
    Default,
    /// Raised speed for warm temperatures or a busy GPU
    Medium,
    /// High speed for hot temperatures
    High,
    /// Full speed, reserved for critical temperatures
    Max,
}

impl FanLevel {
    /// All levels in ascending order
    pub const ALL: [FanLevel; 4] = [
        FanLevel::Default,
        FanLevel::Medium,
        FanLevel::High,
        FanLevel::Max,
    ];
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FanLevel::Default => write!(f, "Default"),
            FanLevel::Medium => write!(f, "Medium"),
            FanLevel::High => write!(f, "High"),
            FanLevel::Max => write!(f, "Max"),
        }
    }
}

/// Raw duty-cycle byte sent to the hardware (0-100)
///
/// The firmware interprets the byte as a percentage of maximum speed,
/// so 0x64 (100) is full speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DutyCycle(u8);

impl DutyCycle {
    /// Maximum valid raw value
    pub const MAX: u8 = 0x64;

    /// Create a new DutyCycle with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidDutyCycle` if value > 100
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidDutyCycle(value));
        }
        Ok(Self(value))
    }

    /// Create a DutyCycle without validation (for internal constants)
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw byte value (equal to percent of maximum)
    #[inline]
    pub const fn as_raw(&self) -> u8 {
        self.0
    }

    /// Get the duty cycle as a percentage (0-100)
    #[inline]
    pub const fn as_percent(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DutyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for DutyCycle {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DutyCycle> for u8 {
    fn from(duty: DutyCycle) -> Self {
        duty.0
    }
}

/// Mapping from fan level to duty cycle
///
/// Validated on construction: duty must increase strictly with level, which
/// is what makes the level ordering meaningful to the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyTable {
    default: DutyCycle,
    medium: DutyCycle,
    high: DutyCycle,
    max: DutyCycle,
}

impl DutyTable {
    /// Create a new duty table
    ///
    /// # Errors
    /// Returns `DomainError::NonMonotonicDutyTable` unless
    /// default < medium < high < max.
    pub fn new(
        default: DutyCycle,
        medium: DutyCycle,
        high: DutyCycle,
        max: DutyCycle,
    ) -> Result<Self, DomainError> {
        if !(default < medium && medium < high && high < max) {
            return Err(DomainError::NonMonotonicDutyTable);
        }
        Ok(Self {
            default,
            medium,
            high,
            max,
        })
    }

    /// Get the duty cycle for a fan level
    pub fn duty_for(&self, level: FanLevel) -> DutyCycle {
        match level {
            FanLevel::Default => self.default,
            FanLevel::Medium => self.medium,
            FanLevel::High => self.high,
            FanLevel::Max => self.max,
        }
    }
}

impl Default for DutyTable {
    fn default() -> Self {
        Self {
            default: DutyCycle::new_unchecked(0x20),
            medium: DutyCycle::new_unchecked(0x32),
            high: DutyCycle::new_unchecked(0x48),
            max: DutyCycle::new_unchecked(0x64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_cycle_valid() {
        assert!(DutyCycle::new(0).is_ok());
        assert!(DutyCycle::new(50).is_ok());
        assert!(DutyCycle::new(100).is_ok());
    }

    #[test]
    fn test_duty_cycle_invalid() {
        assert!(DutyCycle::new(101).is_err());
        assert!(DutyCycle::new(255).is_err());
    }

    #[test]
    fn test_duty_cycle_display() {
        let duty = DutyCycle::new(72).unwrap();
        assert_eq!(duty.to_string(), "72%");
    }

    #[test]
    fn test_fan_level_ordering() {
        assert!(FanLevel::Default < FanLevel::Medium);
        assert!(FanLevel::Medium < FanLevel::High);
        assert!(FanLevel::High < FanLevel::Max);
    }

    #[test]
    fn test_fan_level_display() {
        assert_eq!(FanLevel::Max.to_string(), "Max");
        assert_eq!(FanLevel::Default.to_string(), "Default");
    }

    #[test]
    fn test_duty_table_default_is_monotonic() {
        let table = DutyTable::default();
        let duties: Vec<u8> = FanLevel::ALL
            .iter()
            .map(|&l| table.duty_for(l).as_raw())
            .collect();

        for pair in duties.windows(2) {
            assert!(pair[0] < pair[1], "duty table must increase: {:?}", duties);
        }
    }

    #[test]
    fn test_duty_table_default_values() {
        let table = DutyTable::default();
        assert_eq!(table.duty_for(FanLevel::Default).as_raw(), 0x20);
        assert_eq!(table.duty_for(FanLevel::Medium).as_raw(), 0x32);
        assert_eq!(table.duty_for(FanLevel::High).as_raw(), 0x48);
        assert_eq!(table.duty_for(FanLevel::Max).as_raw(), 0x64);
    }

    #[test]
    fn test_duty_table_rejects_non_monotonic() {
        let result = DutyTable::new(
            DutyCycle::new(50).unwrap(),
            DutyCycle::new(50).unwrap(),
            DutyCycle::new(72).unwrap(),
            DutyCycle::new(100).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::NonMonotonicDutyTable)));
    }
}
