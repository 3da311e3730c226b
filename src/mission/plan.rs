//! Canned missions flown from the command line.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use super::command::{MoveForward, Takeoff, Turn};
use super::context::DroneContext;
use super::controller::{DroneAction, DroneController, FlightState};
use super::log::MissionLog;
use super::strategy::{PatrolStrategy, ReconStrategy};
use crate::error::{Error, Result};

pub const RECON_TITLE: &str = "Reconnaissance";
pub const PATROL_TITLE: &str = "Patrol";

/// Take off, then fly forward 100 m and 20 m, once.
pub fn recon_mission() -> DroneContext {
    let mut context = DroneContext::with_strategy(ReconStrategy);
    context.add_command(Takeoff);
    context.add_command(MoveForward::new(100.0));
    context.add_command(MoveForward::new(20.0));
    context
}

/// Take off, then three legs of 50 m each followed by a 90 degree turn.
/// The whole queue is flown `patrols` times.
pub fn patrol_mission(patrols: u32) -> DroneContext {
    let mut context = DroneContext::with_strategy(PatrolStrategy::new(patrols));
    context.add_command(Takeoff);
    for _ in 0..3 {
        context.add_command(MoveForward::new(50.0));
        context.add_command(Turn::new(90.0));
    }
    context
}

/// Outcome of one mission run.
#[derive(Debug, Clone, Serialize)]
pub struct MissionReport {
    pub strategy: String,
    pub state: FlightState,
    pub actions: Vec<DroneAction>,
}

/// Flies `context` and writes the complete HTML page to `log_path`.
///
/// The page is rewritten from scratch: header, strategy and command
/// entries, then the link back to `home_url`.
pub fn fly(mut context: DroneContext, title: &str, log_path: &Path, home_url: &str) -> Result<MissionReport> {
    let strategy = context
        .strategy_name()
        .ok_or(Error::MissingStrategy)?
        .to_string();
    let mut drone = DroneController::new(MissionLog::create(log_path, title)?);

    context.execute(&mut drone)?;

    let report = MissionReport {
        strategy,
        state: drone.state(),
        actions: drone.actions().to_vec(),
    };
    drone.into_log().finish(home_url)?;
    info!(log = %log_path.display(), actions = report.actions.len(), "mission log written");
    Ok(report)
}
