
//! temperature.rs
//! Mock temperature probe: uniform noise over a plausible process range,
//! independent per call, no smoothing.

use rand::random_range;
use std::sync::Arc;

use crate::device::controller::{Controller, SampleQueue, SensorSample};
use crate::sync::blocking_queue::BlockingQueue;

/// Stock sampling range in °C.
pub const DEFAULT_RANGE: (f64, f64) = (35.0, 45.0);

pub struct TemperatureController {
    range: (f64, f64),
    last_reading: f64,
    samples: SampleQueue,
}

impl TemperatureController {
    pub fn new() -> Self {
        Self::with_range(DEFAULT_RANGE)
    }

    /// Custom sampling range, e.g. a rig section running hotter than the
    /// stock probe.
    pub fn with_range(range: (f64, f64)) -> Self {
        Self {
            range,
            last_reading: 0.0,
            samples: Arc::new(BlockingQueue::new()),
        }
    }

    /// Handle to the outbound reading queue, for the consumer side.
    pub fn samples(&self) -> SampleQueue {
        self.samples.clone()
    }
}

impl Controller for TemperatureController {
    fn init(&mut self) {
        // Hardware bring-up is mocked; only local state is cleared.
        self.last_reading = 0.0;
        println!("Temperature Sensor Controller initialized.");
    }

    fn read(&mut self) -> f64 {
        let (lo, hi) = self.range;
        self.last_reading = random_range(lo..hi);
        self.samples.push(SensorSample::capture(self.last_reading));
        self.last_reading
    }

    fn write(&mut self, _command: i32) {
        // The probe has no actuation path; commands are accepted and dropped.
    }

    fn reset(&mut self) {
        self.last_reading = 0.0;
        println!("Temperature Sensor Controller reset.");
    }
}

impl Default for TemperatureController {
    fn default() -> Self {
        Self::new()
    }
}
