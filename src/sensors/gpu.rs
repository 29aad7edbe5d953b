//! GPU telemetry source
//!
//! Queries `nvidia-smi` for per-device temperature and utilization and takes
//! the column maxima, so multi-GPU systems are governed by the hottest and
//! busiest device.

use crate::error::SensorError;
use crate::shell;

/// Query arguments producing one `temperature, utilization` row per device
const QUERY_ARGS: [&str; 2] = [
    "--query-gpu=temperature.gpu,utilization.gpu",
    "--format=csv,noheader,nounits",
];

/// Runs `nvidia-smi` and parses its CSV query output
#[derive(Debug, Clone, Default)]
pub struct NvidiaSmiSource;

impl NvidiaSmiSource {
    /// Whether nvidia-smi is installed
    pub fn available() -> bool {
        shell::command_exists("nvidia-smi")
    }

    /// Maximum temperature and utilization across all devices
    ///
    /// # Errors
    /// Returns `SensorError` when nvidia-smi cannot be run; `Ok(None)` when
    /// it ran but reported no parseable devices.
    pub fn query(&self) -> Result<Option<(i32, u8)>, SensorError> {
        let output = shell::run("nvidia-smi", &QUERY_ARGS)?;
        Ok(parse_query_output(&output))
    }
}

/// Parse `temperature, utilization` CSV rows, aggregating each column by max
///
/// Rows that do not contain two integer fields are skipped. Returns `None`
/// when no row parsed.
pub fn parse_query_output(output: &str) -> Option<(i32, u8)> {
    let mut max: Option<(i32, i32)> = None;

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let mut parts = line.split(',');
        let (Some(temp_str), Some(util_str)) = (parts.next(), parts.next()) else {
            continue;
        };
        let (Ok(temp), Ok(util)) = (
            temp_str.trim().parse::<i32>(),
            util_str.trim().parse::<i32>(),
        ) else {
            continue;
        };

        max = Some(match max {
            Some((t, u)) => (t.max(temp), u.max(util)),
            None => (temp, util),
        });
    }

    max.map(|(temp, util)| (temp, util.clamp(0, 100) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_gpu() {
        assert_eq!(parse_query_output("55, 30"), Some((55, 30)));
    }

    #[test]
    fn test_parse_multi_gpu_takes_column_maxima() {
        // Hottest device and busiest device are different rows
        let output = "55, 90\n72, 10\n";
        assert_eq!(parse_query_output(output), Some((72, 90)));
    }

    #[test]
    fn test_parse_skips_malformed_rows() {
        let output = "not, numbers\n61, 45\n80\n";
        assert_eq!(parse_query_output(output), Some((61, 45)));
    }

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(parse_query_output(""), None);
        assert_eq!(parse_query_output("\n\n"), None);
    }

    #[test]
    fn test_parse_clamps_utilization() {
        assert_eq!(parse_query_output("60, 130"), Some((60, 100)));
        assert_eq!(parse_query_output("60, -3"), Some((60, 0)));
    }
}
