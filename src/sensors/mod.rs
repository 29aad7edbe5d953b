//! Sensor abstraction layer
//!
//! Provides the `SensorReader` trait plus the CPU and GPU backends that feed
//! the governor. Backends are best-effort: a failed source contributes a zero
//! reading and a warning, never an aborted cycle.

pub mod cpu;
pub mod gpu;
pub mod system;
pub mod traits;

pub use cpu::{SensorsCliSource, ThermalZoneSource};
pub use gpu::NvidiaSmiSource;
pub use system::SystemSensorReader;
pub use traits::SensorReader;
