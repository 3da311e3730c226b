use drone_mission::config::{Config, DEFAULT_HOME_URL, DEFAULT_MISSION_LOG, DEFAULT_PATROLS};
use drone_mission::Error;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 5] = [
    "DRONE_DB_PATH",
    "DRONE_MISSION_LOG",
    "DRONE_HOME_URL",
    "DRONE_PATROLS",
    "DRONE_LOG_LEVEL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = Config::from_env().unwrap();

    assert_eq!(config.mission_log, PathBuf::from(DEFAULT_MISSION_LOG));
    assert_eq!(config.home_url, DEFAULT_HOME_URL);
    assert_eq!(config.patrols, DEFAULT_PATROLS);
    assert_eq!(config.log_level, "info");
    assert!(config.db_path.ends_with("bpla.db"));
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var("DRONE_DB_PATH", "/tmp/drones.db");
    env::set_var("DRONE_MISSION_LOG", "/tmp/mission.html");
    env::set_var("DRONE_HOME_URL", "http://example.com/");
    env::set_var("DRONE_PATROLS", "7");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.db_path, PathBuf::from("/tmp/drones.db"));
    assert_eq!(config.mission_log, PathBuf::from("/tmp/mission.html"));
    assert_eq!(config.home_url, "http://example.com/");
    assert_eq!(config.patrols, 7);
}

#[test]
#[serial]
fn test_invalid_patrols() {
    clear_env();
    env::set_var("DRONE_PATROLS", "-1");

    let result = Config::from_env();
    clear_env();

    assert!(matches!(result, Err(Error::Config(_))));
}
