//! CPU temperature sources
//!
//! Primary source: the kernel thermal zone files, each holding millidegrees
//! Celsius. Fallback: the `sensors` diagnostic tool, whose per-package lines
//! are parsed textually. Both aggregate by maximum so the governor reacts to
//! the hottest reading.

use crate::error::SensorError;
use crate::shell;
use std::fs;
use std::path::PathBuf;

/// Reads `/sys/class/thermal/thermal_zone*/temp`
#[derive(Debug, Clone)]
pub struct ThermalZoneSource {
    base: PathBuf,
}

impl ThermalZoneSource {
    /// Source rooted at the standard sysfs location
    pub fn new() -> Self {
        Self {
            base: PathBuf::from("/sys/class/thermal"),
        }
    }

    /// Source rooted at an alternate directory (used by tests)
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Maximum temperature across all readable zones, in degrees Celsius
    ///
    /// Unreadable or malformed zones are skipped; returns `None` when no zone
    /// yielded a value.
    pub fn max_temp(&self) -> Option<i32> {
        let entries = fs::read_dir(&self.base).ok()?;

        let mut max: Option<i32> = None;
        for entry in entries.flatten() {
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with("thermal_zone") {
                continue;
            }

            let temp_path = entry.path().join("temp");
            let Ok(raw) = fs::read_to_string(&temp_path) else {
                continue;
            };
            let Ok(millidegrees) = raw.trim().parse::<i64>() else {
                continue;
            };

            let celsius = (millidegrees / 1000) as i32;
            max = Some(max.map_or(celsius, |m| m.max(celsius)));
        }

        max
    }
}

impl Default for ThermalZoneSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the `sensors` tool and parses its package temperature lines
#[derive(Debug, Clone, Default)]
pub struct SensorsCliSource;

impl SensorsCliSource {
    /// Maximum package temperature reported by `sensors`
    ///
    /// # Errors
    /// Returns `SensorError` when the tool cannot be run; `Ok(None)` when it
    /// ran but printed no package lines.
    pub fn max_temp(&self) -> Result<Option<i32>, SensorError> {
        let output = shell::run("sensors", &[])?;
        Ok(parse_package_temps(&output))
    }
}

/// Extract the maximum `Package id` temperature from `sensors` output
///
/// Lines look like `Package id 0:  +48.0°C  (high = +84.0°C, ...)`; the value
/// between the first `+` and the degree marker is taken. Lines that do not
/// fit the shape are skipped.
pub fn parse_package_temps(output: &str) -> Option<i32> {
    let mut max: Option<i32> = None;

    for line in output.lines() {
        if !line.contains("Package id") || !line.contains("°C") {
            continue;
        }
        let Some(after_plus) = line.split('+').nth(1) else {
            continue;
        };
        let Some(temp_str) = after_plus.split("°C").next() else {
            continue;
        };
        let Ok(temp) = temp_str.trim().parse::<f64>() else {
            continue;
        };

        let temp = temp as i32;
        max = Some(max.map_or(temp, |m| m.max(temp)));
    }

    max
}
