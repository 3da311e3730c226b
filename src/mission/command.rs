use std::fmt::Debug;

use super::controller::DroneController;
use crate::error::Result;

/// A single queued drone action with its arguments captured at construction.
pub trait Command: Debug {
    fn execute(&self, drone: &mut DroneController) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Takeoff;

impl Command for Takeoff {
    fn execute(&self, drone: &mut DroneController) -> Result<()> {
        drone.takeoff()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoveForward {
    distance: f64,
}

impl MoveForward {
    pub fn new(distance: f64) -> Self {
        MoveForward { distance }
    }
}

impl Command for MoveForward {
    fn execute(&self, drone: &mut DroneController) -> Result<()> {
        drone.move_forward(self.distance)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Turn {
    degrees: f64,
}

impl Turn {
    pub fn new(degrees: f64) -> Self {
        Turn { degrees }
    }
}

impl Command for Turn {
    fn execute(&self, drone: &mut DroneController) -> Result<()> {
        drone.turn(self.degrees)
    }
}
