use serde::{Deserialize, Serialize};

/// Drone attributes as entered by an operator. The database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    pub max_altitude: i64,
    pub max_speed: i64,
    pub max_flight_time: i64,
    pub serial_number: String,
    pub model: String,
    pub manufacturer: String,
}

/// A stored drone row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroneRecord {
    pub id: i64,
    #[serde(flatten)]
    pub drone: Drone,
}

pub const DRONES_TABLE: &str = "tbl_drones";

/// Column order used for inserts, updates and row mapping.
pub const DRONE_COLUMNS: [&str; 6] = [
    "max_altitude",
    "max_speed",
    "max_flight_time",
    "serial_number",
    "model",
    "manufacturer",
];

impl Drone {
    pub(crate) fn column_values(&self) -> Vec<rusqlite::types::Value> {
        vec![
            self.max_altitude.into(),
            self.max_speed.into(),
            self.max_flight_time.into(),
            self.serial_number.clone().into(),
            self.model.clone().into(),
            self.manufacturer.clone().into(),
        ]
    }
}

impl DroneRecord {
    /// Maps a `SELECT id, <DRONE_COLUMNS>` row.
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(DroneRecord {
            id: row.get(0)?,
            drone: Drone {
                max_altitude: row.get(1)?,
                max_speed: row.get(2)?,
                max_flight_time: row.get(3)?,
                serial_number: row.get(4)?,
                model: row.get(5)?,
                manufacturer: row.get(6)?,
            },
        })
    }
}
