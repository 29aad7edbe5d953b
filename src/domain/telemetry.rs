//! Telemetry snapshot type

use serde::Serialize;
use std::fmt;

/// One cycle's worth of sensor readings
///
/// Values are best-effort maxima across the available sensors. A value of 0
/// means "unavailable", not "cold"; readings are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    /// Hottest CPU reading in degrees Celsius
    pub cpu_temp_c: i32,
    /// Hottest GPU reading in degrees Celsius
    pub gpu_temp_c: i32,
    /// Busiest GPU utilization in percent
    pub gpu_util_pct: u8,
}

impl TelemetrySnapshot {
    /// Create a snapshot, clamping negative temperatures to zero
    pub fn new(cpu_temp_c: i32, gpu_temp_c: i32, gpu_util_pct: u8) -> Self {
        Self {
            cpu_temp_c: cpu_temp_c.max(0),
            gpu_temp_c: gpu_temp_c.max(0),
            gpu_util_pct,
        }
    }
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GPU={}°C, CPU={}°C, GPU util={}%",
            self.gpu_temp_c, self.cpu_temp_c, self.gpu_util_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_display() {
        let snapshot = TelemetrySnapshot::new(40, 85, 10);
        assert_eq!(snapshot.to_string(), "GPU=85°C, CPU=40°C, GPU util=10%");
    }

    #[test]
    fn test_snapshot_clamps_negative_temps() {
        let snapshot = TelemetrySnapshot::new(-5, -1, 0);
        assert_eq!(snapshot.cpu_temp_c, 0);
        assert_eq!(snapshot.gpu_temp_c, 0);
    }
}
