//! Error types shared by the repository and mission layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `DroneContext::execute` was called before a flight strategy was set.
    #[error("No flight strategy set for mission")]
    MissingStrategy,

    #[error("Drone not found: {id}")]
    NotFound { id: i64 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
