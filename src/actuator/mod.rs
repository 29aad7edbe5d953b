//! Fan actuator abstraction layer
//!
//! Provides the `FanActuator` trait and the IPMI raw-command backend.

pub mod ipmi;
pub mod traits;

pub use ipmi::IpmiActuator;
pub use traits::FanActuator;
