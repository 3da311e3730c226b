use anyhow::Result;
use drone_mission::db::query::Query;
use drone_mission::db::{DroneRepository, SqliteDroneRepository};
use drone_mission::Error;

mod test_utils;
use test_utils::{create_test_drone, create_test_repo};

#[test]
fn test_empty_registry() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    assert!(repo.get_all_drones()?.is_empty());
    assert!(repo.get_drone_by_id(1)?.is_none());
    Ok(())
}

#[test]
fn test_add_then_list() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;

    let drone = create_test_drone("SN-001");
    let id = repo.add_drone(&drone)?;
    assert!(id > 0);

    let drones = repo.get_all_drones()?;
    assert_eq!(drones.len(), 1);
    assert_eq!(drones[0].id, id);
    assert_eq!(drones[0].drone, drone);
    Ok(())
}

#[test]
fn test_list_ordered_by_id() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    for serial in ["SN-C", "SN-A", "SN-B"] {
        repo.add_drone(&create_test_drone(serial))?;
    }

    let serials: Vec<_> = repo
        .get_all_drones()?
        .into_iter()
        .map(|record| record.drone.serial_number)
        .collect();
    assert_eq!(serials, vec!["SN-C", "SN-A", "SN-B"]);
    Ok(())
}

#[test]
fn test_get_by_id_and_serial() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    let first = repo.add_drone(&create_test_drone("SN-001"))?;
    let second = repo.add_drone(&create_test_drone("SN-002"))?;

    let record = repo.get_drone_by_id(second)?.unwrap();
    assert_eq!(record.drone.serial_number, "SN-002");

    let record = repo.get_drone_by_serial("SN-001")?.unwrap();
    assert_eq!(record.id, first);

    assert!(repo.get_drone_by_serial("SN-404")?.is_none());
    Ok(())
}

#[test]
fn test_lookup_values_are_bound() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    repo.add_drone(&create_test_drone("SN-001"))?;
    repo.add_drone(&create_test_drone("SN-002"))?;

    // The hostile value is a bound parameter, so it only ever compares as a literal.
    let query = SqliteDroneRepository::select_drones()
        .filter("id = ?")
        .add_params(["1 OR 1=1".to_string()]);
    assert_eq!(query.sql().matches('?').count(), 1);
    assert!(repo.find_drones(&query)?.is_empty());

    assert!(repo.get_drone_by_serial("' OR '1'='1")?.is_none());
    Ok(())
}

#[test]
fn test_update_drone() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    let id = repo.add_drone(&create_test_drone("SN-001"))?;

    let mut updated = create_test_drone("SN-001");
    updated.max_speed = 120;
    updated.model = "Mavic 3 Pro".to_string();
    repo.update_drone(id, &updated)?;

    assert_eq!(repo.get_drone_by_id(id)?.unwrap().drone, updated);
    Ok(())
}

#[test]
fn test_remove_drone() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;
    let id = repo.add_drone(&create_test_drone("SN-001"))?;
    let kept = repo.add_drone(&create_test_drone("SN-002"))?;

    repo.remove_drone(id)?;
    assert!(repo.get_drone_by_id(id)?.is_none());
    assert_eq!(repo.get_all_drones()?.len(), 1);
    assert!(repo.get_drone_by_id(kept)?.is_some());
    Ok(())
}

#[test]
fn test_missing_drone_errors() -> Result<()> {
    let (mut repo, _dir) = create_test_repo()?;

    let err = repo.remove_drone(42).unwrap_err();
    assert!(matches!(err, Error::NotFound { id: 42 }));

    let err = repo.update_drone(7, &create_test_drone("SN-007")).unwrap_err();
    assert!(matches!(err, Error::NotFound { id: 7 }));
    Ok(())
}

#[test]
fn test_data_survives_reconnect() -> Result<()> {
    let (mut repo, dir) = create_test_repo()?;
    let id = repo.add_drone(&create_test_drone("SN-001"))?;
    repo.close()?;
    repo.close()?;

    // Reopens lazily on the next call.
    assert!(repo.get_drone_by_id(id)?.is_some());

    let mut reopened = SqliteDroneRepository::open(dir.path().join("test.db"))?;
    assert_eq!(reopened.get_all_drones()?.len(), 1);
    Ok(())
}

#[test]
fn test_in_memory_repository() -> Result<()> {
    let mut repo = SqliteDroneRepository::open_in_memory()?;
    repo.add_drone(&create_test_drone("SN-MEM"))?;
    assert_eq!(repo.get_all_drones()?.len(), 1);
    Ok(())
}
