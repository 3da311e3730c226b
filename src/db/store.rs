use std::path::Path;

use rusqlite::params_from_iter;
use tracing::{debug, info};

use super::connection::{ConnectionFactory, ConnectionManager, SqliteFile, SqliteMemory};
use super::models::{Drone, DroneRecord, DRONES_TABLE, DRONE_COLUMNS};
use super::query::{DeleteQuery, Direction, InsertQuery, Query, SelectQuery, UpdateQuery};
use crate::error::{Error, Result};

/// CRUD operations over the drone registry.
pub trait DroneRepository {
    /// All drones ordered by id.
    fn get_all_drones(&mut self) -> Result<Vec<DroneRecord>>;

    fn get_drone_by_id(&mut self, id: i64) -> Result<Option<DroneRecord>>;

    fn get_drone_by_serial(&mut self, serial_number: &str) -> Result<Option<DroneRecord>>;

    /// Stores a new drone and returns the id assigned to it.
    fn add_drone(&mut self, drone: &Drone) -> Result<i64>;

    /// Replaces every attribute of an existing drone.
    fn update_drone(&mut self, id: i64, drone: &Drone) -> Result<()>;

    fn remove_drone(&mut self, id: i64) -> Result<()>;
}

pub struct SqliteDroneRepository {
    manager: ConnectionManager,
}

impl SqliteDroneRepository {
    pub fn new(factory: Box<dyn ConnectionFactory>) -> Result<Self> {
        let mut repo = SqliteDroneRepository {
            manager: ConnectionManager::new(factory),
        };
        repo.init()?;
        Ok(repo)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(Box::new(SqliteFile::new(path.as_ref())))
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::new(Box::new(SqliteMemory))
    }

    fn init(&mut self) -> Result<()> {
        let conn = self.manager.get_connection()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tbl_drones (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                max_altitude INTEGER NOT NULL,
                max_speed INTEGER NOT NULL,
                max_flight_time INTEGER NOT NULL,
                serial_number TEXT NOT NULL,
                model TEXT NOT NULL,
                manufacturer TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_drones_serial ON tbl_drones(serial_number)",
            [],
        )?;
        Ok(())
    }

    /// Releases the underlying connection. The next call reopens it.
    pub fn close(&mut self) -> Result<()> {
        self.manager.close_connection()
    }

    /// Base query selecting every drone column, id first.
    pub fn select_drones() -> SelectQuery {
        let columns = std::iter::once("id")
            .chain(DRONE_COLUMNS)
            .collect::<Vec<_>>()
            .join(", ");
        SelectQuery::select(DRONES_TABLE, &columns)
    }

    /// Runs a query built from `select_drones` and maps every row.
    pub fn find_drones(&mut self, query: &SelectQuery) -> Result<Vec<DroneRecord>> {
        let sql = query.sql();
        debug!(%sql, params = query.params().len(), "running select");

        let conn = self.manager.get_connection()?;
        let mut stmt = conn.prepare(&sql)?;
        let drones = stmt
            .query_map(params_from_iter(query.params()), DroneRecord::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(drones)
    }

    fn execute(&mut self, query: &impl Query) -> Result<usize> {
        let sql = query.sql();
        debug!(%sql, params = query.params().len(), "running statement");

        let conn = self.manager.get_connection()?;
        Ok(conn.execute(&sql, params_from_iter(query.params()))?)
    }
}

impl DroneRepository for SqliteDroneRepository {
    fn get_all_drones(&mut self) -> Result<Vec<DroneRecord>> {
        let query = Self::select_drones().order_by("id", Direction::Asc);
        self.find_drones(&query)
    }

    fn get_drone_by_id(&mut self, id: i64) -> Result<Option<DroneRecord>> {
        let query = Self::select_drones().filter("id = ?").add_params([id]);
        Ok(self.find_drones(&query)?.into_iter().next())
    }

    fn get_drone_by_serial(&mut self, serial_number: &str) -> Result<Option<DroneRecord>> {
        let query = Self::select_drones()
            .filter("serial_number = ?")
            .order_by("id", Direction::Asc)
            .add_params([serial_number.to_string()]);
        Ok(self.find_drones(&query)?.into_iter().next())
    }

    fn add_drone(&mut self, drone: &Drone) -> Result<i64> {
        let query = InsertQuery::insert_into(DRONES_TABLE, &DRONE_COLUMNS).values(drone.column_values());
        let sql = query.sql();
        debug!(%sql, "inserting drone");

        let conn = self.manager.get_connection()?;
        let tx = conn.transaction()?;
        tx.execute(&sql, params_from_iter(query.params()))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(id, serial_number = %drone.serial_number, "drone added");
        Ok(id)
    }

    fn update_drone(&mut self, id: i64, drone: &Drone) -> Result<()> {
        let query = UpdateQuery::update(DRONES_TABLE, &DRONE_COLUMNS)
            .filter("id = ?")
            .add_params(drone.column_values())
            .add_params([id]);

        if self.execute(&query)? == 0 {
            return Err(Error::NotFound { id });
        }
        info!(id, "drone updated");
        Ok(())
    }

    fn remove_drone(&mut self, id: i64) -> Result<()> {
        let query = DeleteQuery::delete_from(DRONES_TABLE)
            .filter("id = ?")
            .add_params([id]);

        if self.execute(&query)? == 0 {
            return Err(Error::NotFound { id });
        }
        info!(id, "drone removed");
        Ok(())
    }
}
