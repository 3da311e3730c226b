use anyhow::Result;
use drone_mission::db::{Drone, SqliteDroneRepository};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn create_test_repo() -> Result<(SqliteDroneRepository, TempDir)> {
    let dir = tempfile::tempdir()?;
    let repo = SqliteDroneRepository::open(dir.path().join("test.db"))?;
    Ok((repo, dir))
}

#[allow(dead_code)]
pub fn create_test_drone(serial_number: &str) -> Drone {
    Drone {
        max_altitude: 500,
        max_speed: 80,
        max_flight_time: 35,
        serial_number: serial_number.to_string(),
        model: "Mavic 3".to_string(),
        manufacturer: "DJI".to_string(),
    }
}
