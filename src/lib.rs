pub mod device;
pub mod runtime;
pub mod sync;

pub use device::controller::{Controller, SensorSample};
pub use sync::blocking_queue::BlockingQueue;
