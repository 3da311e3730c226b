use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::db::Drone;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (overrides DRONE_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered drones
    Ls {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single drone
    Show {
        /// Drone ID
        id: i64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Register a new drone
    Add {
        #[command(flatten)]
        drone: DroneArgs,
    },
    /// Replace the attributes of a registered drone
    Update {
        /// Drone ID
        id: i64,

        #[command(flatten)]
        drone: DroneArgs,
    },
    /// Remove a drone from the registry
    Rm {
        /// Drone ID
        id: i64,
    },
    /// Fly the reconnaissance mission
    Recon {
        /// HTML mission log to write (overrides DRONE_MISSION_LOG)
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Fly the patrol mission
    Patrol {
        /// Number of patrol cycles (overrides DRONE_PATROLS)
        #[arg(short, long)]
        patrols: Option<u32>,

        /// HTML mission log to write (overrides DRONE_MISSION_LOG)
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DroneArgs {
    /// Maximum altitude in metres
    #[arg(long)]
    pub max_altitude: i64,

    /// Maximum speed in km/h
    #[arg(long)]
    pub max_speed: i64,

    /// Maximum flight time in minutes
    #[arg(long)]
    pub max_flight_time: i64,

    #[arg(long)]
    pub serial_number: String,

    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub manufacturer: String,
}

impl From<DroneArgs> for Drone {
    fn from(args: DroneArgs) -> Self {
        Drone {
            max_altitude: args.max_altitude,
            max_speed: args.max_speed,
            max_flight_time: args.max_flight_time,
            serial_number: args.serial_number,
            model: args.model,
            manufacturer: args.manufacturer,
        }
    }
}
