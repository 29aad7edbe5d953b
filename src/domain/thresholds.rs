//! Threshold domain types
//!
//! Breakpoints driving the decision policy, validated on construction.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Temperature breakpoints for one component, in degrees Celsius
///
/// `low` bounds the quiet rule from above; `medium`, `high` and `critical`
/// each activate the corresponding escalation rule. The gap between `low`
/// and `medium` is the hysteresis band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempBreakpoints {
    pub low: i32,
    pub medium: i32,
    pub high: i32,
    pub critical: i32,
}

impl TempBreakpoints {
    /// Create breakpoints with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidThresholds` unless
    /// low < medium < high < critical.
    pub fn new(
        kind: &'static str,
        low: i32,
        medium: i32,
        high: i32,
        critical: i32,
    ) -> Result<Self, DomainError> {
        if !(low < medium && medium < high && high < critical) {
            return Err(DomainError::InvalidThresholds {
                kind,
                message: format!(
                    "breakpoints must ascend strictly, got {}/{}/{}/{}",
                    low, medium, high, critical
                ),
            });
        }
        Ok(Self {
            low,
            medium,
            high,
            critical,
        })
    }
}

/// Utilization band in percent
///
/// Readings at or above `high` escalate to Medium; readings below `low` allow
/// the quiet rule. The range between is part of the hysteresis dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilBand {
    pub low: u8,
    pub high: u8,
}

impl UtilBand {
    /// Create a utilization band with validation
    ///
    /// # Errors
    /// Returns `DomainError` if either bound exceeds 100 or low >= high.
    pub fn new(low: u8, high: u8) -> Result<Self, DomainError> {
        if low > 100 {
            return Err(DomainError::InvalidUtilization(low));
        }
        if high > 100 {
            return Err(DomainError::InvalidUtilization(high));
        }
        if low >= high {
            return Err(DomainError::InvalidThresholds {
                kind: "utilization",
                message: format!("low ({}) must be below high ({})", low, high),
            });
        }
        Ok(Self { low, high })
    }
}

/// Complete set of decision breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub gpu: TempBreakpoints,
    pub cpu: TempBreakpoints,
    pub util: UtilBand,
}

impl Thresholds {
    /// Create a threshold set
    pub fn new(gpu: TempBreakpoints, cpu: TempBreakpoints, util: UtilBand) -> Self {
        Self { gpu, cpu, util }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            gpu: TempBreakpoints {
                low: 50,
                medium: 60,
                high: 70,
                critical: 80,
            },
            cpu: TempBreakpoints {
                low: 35,
                medium: 45,
                high: 60,
                critical: 75,
            },
            util: UtilBand { low: 30, high: 70 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_valid() {
        let bp = TempBreakpoints::new("gpu", 50, 60, 70, 80).unwrap();
        assert_eq!(bp.low, 50);
        assert_eq!(bp.critical, 80);
    }

    #[test]
    fn test_breakpoints_rejects_unordered() {
        assert!(TempBreakpoints::new("gpu", 60, 50, 70, 80).is_err());
        assert!(TempBreakpoints::new("cpu", 35, 45, 45, 75).is_err());
    }

    #[test]
    fn test_util_band_valid() {
        let band = UtilBand::new(30, 70).unwrap();
        assert_eq!(band.low, 30);
        assert_eq!(band.high, 70);
    }

    #[test]
    fn test_util_band_rejects_out_of_range() {
        assert!(UtilBand::new(30, 101).is_err());
        assert!(UtilBand::new(101, 110).is_err());
        assert!(UtilBand::new(70, 30).is_err());
        assert!(UtilBand::new(50, 50).is_err());
    }

    #[test]
    fn test_default_thresholds_match_shipped_tuning() {
        let t = Thresholds::default();
        assert_eq!(
            (t.gpu.low, t.gpu.medium, t.gpu.high, t.gpu.critical),
            (50, 60, 70, 80)
        );
        assert_eq!(
            (t.cpu.low, t.cpu.medium, t.cpu.high, t.cpu.critical),
            (35, 45, 60, 75)
        );
        assert_eq!((t.util.low, t.util.high), (30, 70));
    }
}
