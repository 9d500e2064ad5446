
//! controller.rs
//! Capability contract shared by every simulated controller on the rig.
//! - init/read/write/reset mirror the entry points of a real device driver
//! - each controller owns exactly one outbound sample queue: its worker is the
//!   only producer, the display loop the only consumer

use chrono::{DateTime, Local};
use std::sync::Arc;

use crate::sync::blocking_queue::BlockingQueue;

/// One timestamped reading. Immutable once captured; consumed exactly once by
/// the display loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    pub value: f64,
    pub captured_at: DateTime<Local>,
}

impl SensorSample {
    /// Stamp `value` with the current wall-clock time.
    pub fn capture(value: f64) -> Self {
        Self {
            value,
            captured_at: Local::now(),
        }
    }
}

/// Shared handle to a controller's outbound readings.
pub type SampleQueue = Arc<BlockingQueue<SensorSample>>;

/// Driver-style capability set implemented by each controller variant.
///
/// Lifecycle: construct, `init` exactly once before the worker loop starts,
/// then `read`/`write` from the owning worker thread only. There is no shared
/// base state; concrete types carry their own queue and expose it through an
/// inherent `samples()` accessor.
pub trait Controller: Send {
    /// One-time bring-up. Emits an "initialized" notice on the console.
    fn init(&mut self);

    /// Sample the current value, enqueue it with a wall-clock timestamp and
    /// return it. Mock sampling cannot fail.
    fn read(&mut self) -> f64;

    /// Apply an actuation command. No read-back; range checking is the
    /// caller's responsibility.
    fn write(&mut self, command: i32);

    /// Restore the controller to its post-init state and emit a notice.
    /// Not driven by the stock run loop.
    fn reset(&mut self);
}
