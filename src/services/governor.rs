//! Control loop governor
//!
//! Owns the sense, decide, actuate cycle and the committed fan level.
//! Shutdown is cooperative: a shared flag set by the signal handler is
//! observed at loop suspension points, and the hardware is returned to
//! automatic control exactly once on the way out, whatever path got us there.

use crate::actuator::FanActuator;
use crate::domain::FanLevel;
use crate::error::AppError;
use crate::sensors::SensorReader;
use crate::services::policy::{Decision, ThresholdPolicy};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Configuration for the governor loop
#[derive(Debug, Clone)]
pub struct GovernorConfig {
    /// Interval between control cycles
    pub interval: Duration,
    /// Whether to exit after one cycle
    pub single_use: bool,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            single_use: false,
        }
    }
}

/// Lifecycle states of the governor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernorState {
    Starting,
    Running,
    Stopping,
    Stopped,
}

/// The control loop
pub struct Governor<R: SensorReader, A: FanActuator> {
    reader: R,
    actuator: A,
    policy: ThresholdPolicy,
    config: GovernorConfig,
    shutdown: Arc<AtomicBool>,
    current: FanLevel,
    state: GovernorState,
}

impl<R: SensorReader, A: FanActuator> Governor<R, A> {
    /// Create a governor in the Starting state
    ///
    /// `shutdown` is the flag flipped by the signal handler; the loop checks
    /// it between cycles and inside the interval sleep.
    pub fn new(
        reader: R,
        actuator: A,
        policy: ThresholdPolicy,
        config: GovernorConfig,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            reader,
            actuator,
            policy,
            config,
            shutdown,
            current: FanLevel::Default,
            state: GovernorState::Starting,
        }
    }

    /// Last fan level committed to hardware
    pub fn current_level(&self) -> FanLevel {
        self.current
    }

    /// Current lifecycle state
    pub fn state(&self) -> GovernorState {
        self.state
    }

    /// Run the governor to completion
    ///
    /// Blocks until the shutdown flag is set (or one cycle completes in
    /// single-use mode), then restores automatic fan control before
    /// returning. An error escaping the loop body takes the same restore
    /// path.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.startup();
        let result = self.run_loop();
        self.stop();
        result
    }

    fn startup(&mut self) {
        log::info!("Starting GPU/CPU fan governor");

        let initial = Decision::new(self.current, "initial setting");
        self.apply(&initial);

        self.state = GovernorState::Running;
    }

    fn run_loop(&mut self) -> Result<(), AppError> {
        while !self.shutdown.load(Ordering::SeqCst) {
            self.tick()?;

            if self.config.single_use {
                log::info!("Single-use mode: exiting after one cycle");
                break;
            }

            self.sleep_interval();
        }
        Ok(())
    }

    /// One control cycle: read, log, decide, commit on change
    fn tick(&mut self) -> Result<(), AppError> {
        let snapshot = self.reader.read();
        log::info!("System temperatures: {}", snapshot);

        let decision = self.policy.decide(&snapshot, self.current);
        if decision.level != self.current {
            self.apply(&decision);
        }

        Ok(())
    }

    /// Commit a decision; the tracked level advances only on success so a
    /// failed commit is retried on the next differing decision.
    fn apply(&mut self, decision: &Decision) {
        match self.actuator.commit(decision.level) {
            Ok(()) => {
                self.current = decision.level;
                log::info!("Fan level set to {} ({})", decision.level, decision.reason);
            }
            Err(e) => {
                log::error!("Failed to set fan level {}: {}", decision.level, e);
            }
        }
    }

    fn stop(&mut self) {
        if self.state == GovernorState::Stopped {
            return;
        }
        self.state = GovernorState::Stopping;

        log::info!("Stopping: restoring automatic fan control");
        match self.actuator.restore_automatic() {
            Ok(()) => log::info!("Restored automatic fan control"),
            Err(e) => log::error!("Failed to restore automatic fan control: {}", e),
        }

        self.state = GovernorState::Stopped;
    }

    /// Sleep for the configured interval in short slices so a termination
    /// signal interrupts promptly
    fn sleep_interval(&self) {
        let slice = Duration::from_millis(100);
        let mut remaining = self.config.interval;

        while !self.shutdown.load(Ordering::SeqCst) && !remaining.is_zero() {
            let step = remaining.min(slice);
            thread::sleep(step);
            remaining = remaining.saturating_sub(step);
        }
    }
}
