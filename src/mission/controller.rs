use serde::Serialize;
use tracing::info;

use super::log::MissionLog;
use crate::error::Result;

/// One primitive action performed by the drone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DroneAction {
    Takeoff,
    MoveForward { distance: f64 },
    Turn { degrees: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FlightState {
    pub airborne: bool,
    /// Total metres flown forward.
    pub distance: f64,
    /// Heading in degrees, kept in `[0, 360)`.
    pub heading: f64,
}

/// Simulated drone. Every action is traced, appended to the mission log and
/// kept in the flight record. Arguments are not validated.
pub struct DroneController {
    log: MissionLog,
    state: FlightState,
    actions: Vec<DroneAction>,
}

impl DroneController {
    pub fn new(log: MissionLog) -> Self {
        DroneController {
            log,
            state: FlightState::default(),
            actions: Vec::new(),
        }
    }

    pub fn takeoff(&mut self) -> Result<()> {
        info!("drone taking off");
        self.log.entry("Drone taking off...")?;
        self.state.airborne = true;
        self.actions.push(DroneAction::Takeoff);
        Ok(())
    }

    pub fn move_forward(&mut self, distance: f64) -> Result<()> {
        info!(distance, "moving forward");
        self.log
            .entry(&format!("Moving forward {} meters", distance))?;
        self.state.distance += distance;
        self.actions.push(DroneAction::MoveForward { distance });
        Ok(())
    }

    pub fn turn(&mut self, degrees: f64) -> Result<()> {
        info!(degrees, "turning");
        self.log.entry(&format!("Turning {} degrees", degrees))?;
        self.state.heading = (self.state.heading + degrees).rem_euclid(360.0);
        self.actions.push(DroneAction::Turn { degrees });
        Ok(())
    }

    /// Writes a free-form line to the mission log, e.g. a strategy marker.
    pub fn note(&mut self, text: &str) -> Result<()> {
        info!("{}", text);
        self.log.entry(text)
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn actions(&self) -> &[DroneAction] {
        &self.actions
    }

    /// Hands the mission log back so the caller can finish the page.
    pub fn into_log(self) -> MissionLog {
        self.log
    }
}
