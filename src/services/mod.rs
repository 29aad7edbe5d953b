//! Service layer for the fan governor
//!
//! Services encapsulate the decision policy and the control loop that drives
//! sensing, decisions and actuation.

pub mod governor;
pub mod policy;

pub use governor::{Governor, GovernorConfig, GovernorState};
pub use policy::{Decision, ThresholdPolicy};
