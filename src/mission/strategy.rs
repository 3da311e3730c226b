use std::fmt::Debug;

use tracing::info;

use super::command::Command;
use super::controller::DroneController;
use crate::error::Result;

/// Policy for how a queued command list is flown.
pub trait FlightStrategy: Debug {
    fn name(&self) -> &str;

    /// Runs `commands` against `drone`, bracketed by start and end markers
    /// in the mission log. Stops at the first failing command.
    fn execute(&self, commands: &[Box<dyn Command>], drone: &mut DroneController) -> Result<()>;
}

/// Flies the command list once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconStrategy;

impl FlightStrategy for ReconStrategy {
    fn name(&self) -> &str {
        "recon"
    }

    fn execute(&self, commands: &[Box<dyn Command>], drone: &mut DroneController) -> Result<()> {
        drone.note("Reconnaissance mission started")?;
        for command in commands {
            command.execute(drone)?;
        }
        drone.note("Mission complete")
    }
}

/// Flies the whole command list `patrols` times, same order each cycle.
#[derive(Debug, Clone, Copy)]
pub struct PatrolStrategy {
    patrols: u32,
}

impl PatrolStrategy {
    pub fn new(patrols: u32) -> Self {
        PatrolStrategy { patrols }
    }

    pub fn patrols(&self) -> u32 {
        self.patrols
    }
}

impl FlightStrategy for PatrolStrategy {
    fn name(&self) -> &str {
        "patrol"
    }

    fn execute(&self, commands: &[Box<dyn Command>], drone: &mut DroneController) -> Result<()> {
        drone.note("Patrol mission started")?;
        for cycle in 1..=self.patrols {
            for command in commands {
                command.execute(drone)?;
            }
            info!(cycle, total = self.patrols, "patrol cycle complete");
        }
        drone.note("Patrol mission complete")
    }
}
