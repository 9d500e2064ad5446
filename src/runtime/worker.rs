
//! worker.rs
//! Drives one controller's periodic sampling until the stop flag flips.
//! - SpinSleeper keeps the fixed per-controller cadence
//! - the stop flag is re-checked once per iteration, so shutdown latency is
//!   bounded by one period rather than being immediate

use log::debug;
use spin_sleep::{SpinSleeper, SpinStrategy};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};
use thread_priority::{ThreadBuilderExt, ThreadPriority};

use crate::device::controller::Controller;

/// Fixed sampling periods for the stock rig.
pub const TEMPERATURE_PERIOD: Duration = Duration::from_millis(200);
pub const MOTOR_PERIOD: Duration = Duration::from_millis(500);

/// Spawn the sampling thread for one controller.
///
/// The controller moves into the thread: its state is mutated by this worker
/// only. `read` cannot fail, so there is no retry path.
pub fn spawn_worker(
    name: &'static str,
    mut controller: Box<dyn Controller>,
    period: Duration,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name(name.to_string())
        .spawn_with_priority(ThreadPriority::Max, move |_| {
            let sleeper = SpinSleeper::new(100_000)
                .with_spin_strategy(SpinStrategy::YieldThread);

            while !stop.load(Ordering::Acquire) {
                let value = controller.read();
                debug!("[{}] sampled {:.2}", name, value);
                sleeper.sleep(period);
            }

            debug!("[{}] worker stopped.", name);
        })
        .expect("Failed to spawn worker thread")
}
