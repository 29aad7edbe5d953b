//! Mock implementations for testing
//!
//! Provides a scripted sensor reader and an event-recording actuator for unit
//! testing the governor without hardware.

use crate::actuator::FanActuator;
use crate::domain::{FanLevel, TelemetrySnapshot};
use crate::error::{ActuatorError, ShellError};
use crate::sensors::SensorReader;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Sensor reader returning pre-scripted snapshots
///
/// Once the script is exhausted the final snapshot repeats, so loops can run
/// past the scripted cycles without panicking.
pub struct MockSensorReader {
    script: Mutex<VecDeque<TelemetrySnapshot>>,
    fallback: TelemetrySnapshot,
}

impl MockSensorReader {
    /// Reader that always returns the same snapshot
    pub fn fixed(snapshot: TelemetrySnapshot) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: snapshot,
        }
    }

    /// Reader that plays the given snapshots in order, then repeats the last
    ///
    /// # Panics
    /// Panics if `snapshots` is empty.
    pub fn scripted(snapshots: Vec<TelemetrySnapshot>) -> Self {
        let fallback = *snapshots.last().expect("script must not be empty");
        Self {
            script: Mutex::new(snapshots.into()),
            fallback,
        }
    }
}

impl SensorReader for MockSensorReader {
    fn read(&self) -> TelemetrySnapshot {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.fallback)
    }
}

/// Externally observable actuator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorEvent {
    Commit(FanLevel),
    Restore,
}

/// Actuator recording successful operations into a shared log
///
/// Clones share the log, so tests keep a clone and hand the original to the
/// governor.
#[derive(Clone, Default)]
pub struct MockActuator {
    events: Arc<Mutex<Vec<ActuatorEvent>>>,
    fail_commits: bool,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actuator whose commits always fail (restore still succeeds)
    pub fn failing() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            fail_commits: true,
        }
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<ActuatorEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl FanActuator for MockActuator {
    fn commit(&mut self, level: FanLevel) -> Result<(), ActuatorError> {
        if self.fail_commits {
            return Err(ActuatorError::Shell(ShellError::Failed {
                command: "mock commit".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "mock failure".to_string(),
            }));
        }
        self.events
            .lock()
            .unwrap()
            .push(ActuatorEvent::Commit(level));
        Ok(())
    }

    fn restore_automatic(&mut self) -> Result<(), ActuatorError> {
        self.events.lock().unwrap().push(ActuatorEvent::Restore);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_reader_repeats() {
        let reader = MockSensorReader::fixed(TelemetrySnapshot::new(30, 50, 10));
        assert_eq!(reader.read(), reader.read());
    }

    #[test]
    fn test_scripted_reader_plays_in_order_then_repeats_last() {
        let reader = MockSensorReader::scripted(vec![
            TelemetrySnapshot::new(10, 20, 0),
            TelemetrySnapshot::new(30, 40, 5),
        ]);
        assert_eq!(reader.read().cpu_temp_c, 10);
        assert_eq!(reader.read().cpu_temp_c, 30);
        assert_eq!(reader.read().cpu_temp_c, 30);
    }

    #[test]
    fn test_mock_actuator_records_events() {
        let mut actuator = MockActuator::new();
        let observer = actuator.clone();

        actuator.commit(FanLevel::Medium).unwrap();
        actuator.restore_automatic().unwrap();

        assert_eq!(
            observer.events(),
            vec![
                ActuatorEvent::Commit(FanLevel::Medium),
                ActuatorEvent::Restore,
            ]
        );
    }

    #[test]
    fn test_failing_actuator_rejects_commits() {
        let mut actuator = MockActuator::failing();
        assert!(actuator.commit(FanLevel::Max).is_err());
        assert!(actuator.events().is_empty());
    }
}
