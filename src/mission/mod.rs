//! Mission execution: commands queued on a `DroneContext` and flown by a
//! `FlightStrategy` against a simulated `DroneController`.

pub mod command;
pub mod context;
pub mod controller;
pub mod log;
pub mod plan;
pub mod strategy;

pub use command::{Command, MoveForward, Takeoff, Turn};
pub use context::DroneContext;
pub use controller::{DroneAction, DroneController, FlightState};
pub use log::MissionLog;
pub use strategy::{FlightStrategy, PatrolStrategy, ReconStrategy};
