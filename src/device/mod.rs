pub mod controller;
pub mod motor;
pub mod temperature;
