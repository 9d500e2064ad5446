
//! Entry point: wires the mock control rig together.
//! Two sampling workers feed per-controller queues; the display loop consumes
//! both and owns the operator console until shutdown.

use log::info;
use std::sync::{Arc, atomic::AtomicBool};

use rig_simulation::device::{
    controller::Controller, motor::MotorController, temperature::TemperatureController,
};
use rig_simulation::runtime::{
    display::DisplayLoop,
    input::spawn_stdin_reader,
    worker::{MOTOR_PERIOD, TEMPERATURE_PERIOD, spawn_worker},
};

fn main() {
    env_logger::init();
    info!("=== CONTROL RIG SIMULATION START ===");

    let mut temperature = TemperatureController::new();
    let mut motor = MotorController::new();

    temperature.init();
    motor.init();

    // Queue handles stay behind for the consumer; the controllers themselves
    // move into their worker threads.
    let temperature_samples = temperature.samples();
    let motor_samples = motor.samples();

    let stop = Arc::new(AtomicBool::new(false));

    let workers = vec![
        spawn_worker(
            "temperature",
            Box::new(temperature),
            TEMPERATURE_PERIOD,
            stop.clone(),
        ),
        spawn_worker("motor", Box::new(motor), MOTOR_PERIOD, stop.clone()),
    ];

    let commands = spawn_stdin_reader();
    let display = DisplayLoop::new(commands, temperature_samples, motor_samples, stop.clone());
    display.run();

    // The display loop only returns with the stop flag set; each worker
    // notices within one sampling period.
    for handle in workers {
        let _ = handle.join();
    }

    println!("Program terminated.");
    info!("=== CONTROL RIG SIMULATION FINISHED ===");
}
