//! Environment-based configuration.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_MISSION_LOG: &str = "templates/mission.html";
pub const DEFAULT_HOME_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_PATROLS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file
    pub db_path: PathBuf,

    /// HTML page rewritten on every mission run
    pub mission_log: PathBuf,

    /// Target of the "back to home" link closing each mission log
    pub home_url: String,

    /// Patrol cycles when none is given on the command line
    pub patrols: u32,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .map(|mut path| {
            path.push(".drone-mission");
            path.push("bpla.db");
            path
        })
        .unwrap_or_else(|| PathBuf::from("bpla.db"))
}

impl Config {
    /// Reads `DRONE_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        let patrols = match env::var("DRONE_PATROLS") {
            Ok(value) => value
                .parse()
                .map_err(|_| Error::Config(format!("DRONE_PATROLS must be a non-negative integer, got {:?}", value)))?,
            Err(_) => DEFAULT_PATROLS,
        };

        Ok(Config {
            db_path: env::var_os("DRONE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            mission_log: env::var_os("DRONE_MISSION_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MISSION_LOG)),
            home_url: env::var("DRONE_HOME_URL").unwrap_or_else(|_| DEFAULT_HOME_URL.to_string()),
            patrols,
            log_level: env::var("DRONE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
