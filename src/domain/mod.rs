//! Domain models for fangov
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod fan;
pub mod telemetry;
pub mod thresholds;

pub use fan::{DutyCycle, DutyTable, FanLevel};
pub use telemetry::TelemetrySnapshot;
pub use thresholds::{TempBreakpoints, Thresholds, UtilBand};
