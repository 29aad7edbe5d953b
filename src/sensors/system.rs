//! Production sensor reader
//!
//! Composes the thermal-zone, `sensors` and `nvidia-smi` sources into one
//! never-failing `SensorReader`. Degraded sources are logged as warnings and
//! contribute zero readings.

use crate::domain::TelemetrySnapshot;
use crate::sensors::{NvidiaSmiSource, SensorReader, SensorsCliSource, ThermalZoneSource};

/// Sensor reader backed by sysfs and the vendor CLI tools
#[derive(Debug, Clone, Default)]
pub struct SystemSensorReader {
    thermal: ThermalZoneSource,
    sensors_cli: SensorsCliSource,
    nvidia: NvidiaSmiSource,
}

impl SystemSensorReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader with an alternate thermal zone root (used by tests)
    pub fn with_thermal_source(thermal: ThermalZoneSource) -> Self {
        Self {
            thermal,
            ..Self::default()
        }
    }

    fn cpu_temp(&self) -> i32 {
        // Thermal zones are the primary source; fall back to `sensors` when
        // they yield nothing usable.
        if let Some(temp) = self.thermal.max_temp().filter(|&t| t > 0) {
            return temp;
        }

        match self.sensors_cli.max_temp() {
            Ok(Some(temp)) => temp,
            Ok(None) => {
                log::warn!("No CPU temperature available from thermal zones or sensors");
                0
            }
            Err(e) => {
                log::warn!("Failed to get CPU temperature from sensors: {}", e);
                0
            }
        }
    }

    fn gpu_data(&self) -> (i32, u8) {
        match self.nvidia.query() {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::warn!("nvidia-smi reported no parseable GPU devices");
                (0, 0)
            }
            Err(e) => {
                log::warn!("Failed to get GPU data: {}", e);
                (0, 0)
            }
        }
    }
}

impl SensorReader for SystemSensorReader {
    fn read(&self) -> TelemetrySnapshot {
        let cpu_temp = self.cpu_temp();
        let (gpu_temp, gpu_util) = self.gpu_data();
        TelemetrySnapshot::new(cpu_temp, gpu_temp, gpu_util)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_uses_thermal_zone_maximum() {
        let dir = tempfile::tempdir().unwrap();
        for (zone, temp) in [("thermal_zone0", "42000"), ("thermal_zone1", "57000")] {
            let path = dir.path().join(zone);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("temp"), temp).unwrap();
        }

        let reader =
            SystemSensorReader::with_thermal_source(ThermalZoneSource::with_base(dir.path()));
        let snapshot = reader.read();
        assert_eq!(snapshot.cpu_temp_c, 57);
    }
}
