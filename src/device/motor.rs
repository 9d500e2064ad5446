
//! motor.rs
//! Mock motor controller. There is no encoder on the rig, so its "sensor"
//! reading is the RPM it was last commanded to hold.

use std::sync::Arc;

use crate::device::controller::{Controller, SampleQueue, SensorSample};
use crate::sync::blocking_queue::BlockingQueue;

/// Commanded speed before any `write`, in RPM.
pub const DEFAULT_RPM: i32 = 2000;

pub struct MotorController {
    rpm: i32,
    samples: SampleQueue,
}

impl MotorController {
    pub fn new() -> Self {
        Self {
            rpm: DEFAULT_RPM,
            samples: Arc::new(BlockingQueue::new()),
        }
    }

    pub fn samples(&self) -> SampleQueue {
        self.samples.clone()
    }

    /// Convenience wrapper over `write` for callers thinking in RPM.
    pub fn set_speed(&mut self, rpm: i32) {
        self.write(rpm);
    }

    pub fn speed(&self) -> i32 {
        self.rpm
    }
}

impl Controller for MotorController {
    fn init(&mut self) {
        self.rpm = DEFAULT_RPM;
        println!("Motor Controller initialized.");
    }

    fn read(&mut self) -> f64 {
        let value = f64::from(self.rpm);
        self.samples.push(SensorSample::capture(value));
        value
    }

    fn write(&mut self, rpm: i32) {
        self.rpm = rpm;
    }

    fn reset(&mut self) {
        self.rpm = DEFAULT_RPM;
        println!("Motor Controller reset.");
    }
}

impl Default for MotorController {
    fn default() -> Self {
        Self::new()
    }
}
