
//! input.rs
//! Detached stdin pump: forwards operator lines into a bounded channel so the
//! display loop can wait on commands with a timeout instead of polling a fd.

use crossbeam::channel::{Receiver, bounded};
use log::debug;
use std::io::{self, BufRead};
use std::thread;

const COMMAND_CHANNEL_CAPACITY: usize = 8;

/// Spawn the stdin reader thread and hand back the command receiver.
///
/// The thread exits on EOF, on a read error, or once the display loop drops
/// the receiver. It is deliberately never joined: `read_line` may be parked
/// on the terminal until the operator presses enter, and the process exits
/// underneath it.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = bounded(COMMAND_CHANNEL_CAPACITY);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            // Display loop is gone.
                            break;
                        }
                    }
                    Err(e) => {
                        debug!("stdin read failed: {}", e);
                        break;
                    }
                }
            }
            debug!("[stdin-reader] exiting");
        })
        .expect("Failed to spawn stdin reader thread");

    rx
}
