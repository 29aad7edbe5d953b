//! Threshold decision policy
//!
//! Maps a telemetry snapshot plus the previously committed fan level to a new
//! level. Rules are evaluated in strict descending severity and the first
//! match wins. Readings between the low and medium breakpoints (or between
//! the utilization bounds) match no rule and hold the current level; that
//! dead zone is what keeps the fans from hunting across a single boundary.

use crate::domain::{FanLevel, TelemetrySnapshot, Thresholds};

/// Outcome of one policy evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub level: FanLevel,
    pub reason: String,
}

impl Decision {
    pub fn new(level: FanLevel, reason: impl Into<String>) -> Self {
        Self {
            level,
            reason: reason.into(),
        }
    }
}

/// Stateless decision policy over a fixed threshold set
#[derive(Debug, Clone)]
pub struct ThresholdPolicy {
    thresholds: Thresholds,
}

impl ThresholdPolicy {
    /// Create a policy from validated thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Get the configured thresholds
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Decide the fan level for a snapshot
    ///
    /// Purely a function of its inputs; `current` is returned unchanged when
    /// the snapshot falls in the hysteresis dead zone.
    pub fn decide(&self, snapshot: &TelemetrySnapshot, current: FanLevel) -> Decision {
        let t = &self.thresholds;
        let gpu = snapshot.gpu_temp_c;
        let cpu = snapshot.cpu_temp_c;
        let util = snapshot.gpu_util_pct;

        if gpu >= t.gpu.critical || cpu >= t.cpu.critical {
            return Decision::new(
                FanLevel::Max,
                format!("CRITICAL temperature (GPU: {}°C, CPU: {}°C)", gpu, cpu),
            );
        }

        if gpu >= t.gpu.high || cpu >= t.cpu.high {
            return Decision::new(
                FanLevel::High,
                format!("HIGH temperature (GPU: {}°C, CPU: {}°C)", gpu, cpu),
            );
        }

        if gpu >= t.gpu.medium || cpu >= t.cpu.medium || util >= t.util.high {
            return Decision::new(FanLevel::Medium, "MEDIUM temperature or HIGH utilization");
        }

        if gpu < t.gpu.low && cpu < t.cpu.low && util < t.util.low {
            return Decision::new(FanLevel::Default, "LOW temperatures and utilization");
        }

        Decision::new(current, "maintaining current level")
    }
}
