//! Trait definition for fan actuation
//!
//! Abstracts the hardware backend so alternate vendors can be substituted and
//! tests can observe commands without touching hardware.

use crate::domain::FanLevel;
use crate::error::ActuatorError;

/// A component that can drive the chassis fans
pub trait FanActuator {
    /// Put the hardware under manual control (if not already) and apply the
    /// duty cycle mapped from `level`
    ///
    /// A failure leaves the hardware in its previous state; callers must not
    /// advance their tracked level.
    fn commit(&mut self, level: FanLevel) -> Result<(), ActuatorError>;

    /// Return fan control to the firmware
    fn restore_automatic(&mut self) -> Result<(), ActuatorError>;
}
