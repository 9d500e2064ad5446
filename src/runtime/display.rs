
//! display.rs
//! Consumer half of the rig: renders one reading from each controller per
//! tick and multiplexes operator commands on the same loop.
//! - commands are waited on with a bounded timeout (1 s), so a quiet console
//!   settles into a steady render cadence
//! - a render tick blocks on each queue in a fixed order; a stalled worker
//!   therefore also stalls command handling until its next sample lands
//!   (kept from the original rig wiring, see DESIGN.md)

use crossbeam::channel::{Receiver, RecvTimeoutError};
use log::{debug, info};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use crate::device::controller::{SampleQueue, SensorSample};
use crate::runtime::command::Command;

/// How long one iteration waits for operator input before rendering.
pub const COMMAND_POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// Single consumer for both controller queues plus the operator console.
pub struct DisplayLoop {
    commands: Receiver<String>,
    temperature: SampleQueue,
    motor: SampleQueue,
    stop: Arc<AtomicBool>,
}

impl DisplayLoop {
    pub fn new(
        commands: Receiver<String>,
        temperature: SampleQueue,
        motor: SampleQueue,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            commands,
            temperature,
            motor,
            stop,
        }
    }

    /// Run until the shutdown token arrives or the command source closes.
    /// Sets the shared stop flag exactly once, on the way out.
    pub fn run(&self) {
        println!("Sensor display started. Enter 'x' and enter to quit whole program:");

        loop {
            match self.commands.recv_timeout(COMMAND_POLL_TIMEOUT) {
                Ok(line) => match Command::parse(&line) {
                    Some(Command::Shutdown) => {
                        info!("shutdown requested by operator");
                        self.stop.store(true, Ordering::Release);
                        break;
                    }
                    Some(Command::Info) => self.print_status(),
                    None => {
                        debug!("ignoring unrecognized command {:?}", line);
                    }
                },
                Err(RecvTimeoutError::Timeout) => self.render_tick(),
                Err(RecvTimeoutError::Disconnected) => {
                    // Command source is gone (stdin EOF); shut down rather
                    // than leave the workers running headless.
                    info!("command channel closed, shutting down");
                    self.stop.store(true, Ordering::Release);
                    break;
                }
            }
        }
    }

    /// Pull one sample from each controller, temperature first, and render
    /// both on a single line. Blocks until each queue has data.
    fn render_tick(&self) {
        let temperature = self.temperature.pop();
        let motor = self.motor.pop();
        println!("{}", render_line(&temperature, &motor));
    }

    fn print_status(&self) {
        println!(
            "CLI is active. Type 'x' and enter to terminate. (queued samples: temperature={}, motor={})",
            self.temperature.len(),
            self.motor.len()
        );
    }
}

/// `[Time: hh:mm:ss] Temperature 38.2C | [Time: hh:mm:ss] Motor Speed: 2000 RPM`
pub fn render_line(temperature: &SensorSample, motor: &SensorSample) -> String {
    format!(
        "[Time: {}] Temperature {:.1}C | [Time: {}] Motor Speed: {:.0} RPM",
        temperature.captured_at.format("%H:%M:%S"),
        temperature.value,
        motor.captured_at.format("%H:%M:%S"),
        motor.value
    )
}
