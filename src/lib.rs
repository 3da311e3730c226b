pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod mission;
pub mod version;

pub use config::Config;
pub use db::{Drone, DroneRecord, DroneRepository, SqliteDroneRepository};
pub use error::{Error, Result};
pub use mission::{DroneContext, DroneController, MissionLog};
pub use version::VERSION;
