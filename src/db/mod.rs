pub mod connection;
pub mod models;
pub mod query;
pub mod store;

pub use connection::{ConnectionFactory, ConnectionManager, SqliteFile, SqliteMemory};
pub use models::{Drone, DroneRecord};
pub use store::{DroneRepository, SqliteDroneRepository};
