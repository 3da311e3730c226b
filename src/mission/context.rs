use tracing::info;

use super::command::Command;
use super::controller::DroneController;
use super::strategy::FlightStrategy;
use crate::error::{Error, Result};

/// Holds the active flight strategy and the queue of pending commands.
#[derive(Debug, Default)]
pub struct DroneContext {
    strategy: Option<Box<dyn FlightStrategy>>,
    commands: Vec<Box<dyn Command>>,
}

impl DroneContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: impl FlightStrategy + 'static) -> Self {
        let mut context = Self::new();
        context.set_strategy(strategy);
        context
    }

    /// Replaces the active strategy. Pending commands are kept.
    pub fn set_strategy(&mut self, strategy: impl FlightStrategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|strategy| strategy.name())
    }

    pub fn add_command(&mut self, command: impl Command + 'static) {
        self.commands.push(Box::new(command));
    }

    pub fn pending(&self) -> usize {
        self.commands.len()
    }

    /// Flies the queued commands with the active strategy.
    ///
    /// The queue is empty afterwards whether or not the strategy succeeded.
    /// Without a strategy this fails with `Error::MissingStrategy` and the
    /// queue is left untouched.
    pub fn execute(&mut self, drone: &mut DroneController) -> Result<()> {
        let strategy = self.strategy.as_deref().ok_or(Error::MissingStrategy)?;
        let commands = std::mem::take(&mut self.commands);

        info!(
            strategy = strategy.name(),
            commands = commands.len(),
            "executing mission"
        );
        strategy.execute(&commands, drone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::command::{MoveForward, Takeoff, Turn};
    use crate::mission::log::MissionLog;
    use crate::mission::strategy::{PatrolStrategy, ReconStrategy};

    #[test]
    fn test_execute_without_strategy() {
        let mut context = DroneContext::new();
        context.add_command(Takeoff);
        let mut drone = DroneController::new(MissionLog::discard());

        let err = context.execute(&mut drone).unwrap_err();
        assert!(matches!(err, Error::MissingStrategy));
        assert_eq!(context.pending(), 1);
        assert!(drone.actions().is_empty());
    }

    #[test]
    fn test_queue_cleared_after_execute() {
        for patrols in 0..4 {
            let mut context = DroneContext::with_strategy(PatrolStrategy::new(patrols));
            context.add_command(MoveForward::new(10.0));
            context.add_command(Turn::new(45.0));
            let mut drone = DroneController::new(MissionLog::discard());

            context.execute(&mut drone).unwrap();
            assert_eq!(context.pending(), 0);
            assert_eq!(drone.actions().len(), 2 * patrols as usize);
        }
    }

    #[test]
    fn test_set_strategy_keeps_queue() {
        let mut context = DroneContext::with_strategy(PatrolStrategy::new(2));
        context.add_command(Takeoff);
        context.set_strategy(ReconStrategy);

        assert_eq!(context.pending(), 1);
        assert_eq!(context.strategy_name(), Some("recon"));

        let mut drone = DroneController::new(MissionLog::discard());
        context.execute(&mut drone).unwrap();
        assert_eq!(drone.actions().len(), 1);
    }

    #[test]
    fn test_context_reusable_after_execute() {
        let mut context = DroneContext::with_strategy(ReconStrategy);
        let mut drone = DroneController::new(MissionLog::discard());

        context.add_command(Takeoff);
        context.execute(&mut drone).unwrap();
        context.add_command(MoveForward::new(5.0));
        context.execute(&mut drone).unwrap();

        assert_eq!(drone.actions().len(), 2);
    }
}
