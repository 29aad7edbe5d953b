//! Trait definition for telemetry sources
//!
//! Abstracts over the concrete sensor backends to enable testing with mocks
//! and substitution of alternate backends (driver APIs, other vendor tools)
//! without touching the decision logic.

use crate::domain::TelemetrySnapshot;

/// A source of CPU and GPU telemetry
///
/// `read` never fails outwardly: backends recover from missing files, absent
/// tools and malformed output by reporting zero for the affected values.
pub trait SensorReader {
    /// Take a fresh telemetry snapshot
    fn read(&self) -> TelemetrySnapshot;
}
