use std::path::PathBuf;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::Result;

/// Produces a fresh database connection for a `ConnectionManager`.
pub trait ConnectionFactory {
    fn connect(&self) -> Result<Connection>;

    fn backend_name(&self) -> &'static str;
}

/// SQLite database stored in a file.
#[derive(Debug, Clone)]
pub struct SqliteFile {
    path: PathBuf,
}

impl SqliteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteFile { path: path.into() }
    }
}

impl ConnectionFactory for SqliteFile {
    fn connect(&self) -> Result<Connection> {
        info!(path = %self.path.display(), "opening sqlite database");
        Ok(Connection::open(&self.path)?)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

/// In-memory SQLite database. Contents vanish when the connection is closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteMemory;

impl ConnectionFactory for SqliteMemory {
    fn connect(&self) -> Result<Connection> {
        info!("opening in-memory sqlite database");
        Ok(Connection::open_in_memory()?)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite-memory"
    }
}

/// Owns at most one open connection, opened on first use.
///
/// Not shared across threads: `rusqlite::Connection` is `!Sync`, so each
/// caller that needs concurrent access has to own its own manager.
pub struct ConnectionManager {
    factory: Box<dyn ConnectionFactory>,
    connection: Option<Connection>,
}

impl ConnectionManager {
    pub fn new(factory: Box<dyn ConnectionFactory>) -> Self {
        ConnectionManager {
            factory,
            connection: None,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.factory.backend_name()
    }

    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }

    /// Returns the cached connection, opening it through the factory if needed.
    pub fn get_connection(&mut self) -> Result<&mut Connection> {
        let conn = match self.connection.take() {
            Some(conn) => conn,
            None => {
                debug!(backend = self.factory.backend_name(), "connection not open, connecting");
                self.factory.connect()?
            }
        };
        Ok(self.connection.insert(conn))
    }

    /// Closes the cached connection. Calling it with nothing open is a no-op.
    pub fn close_connection(&mut self) -> Result<()> {
        if let Some(conn) = self.connection.take() {
            debug!(backend = self.factory.backend_name(), "closing connection");
            conn.close().map_err(|(_, err)| err)?;
        }
        Ok(())
    }
}
