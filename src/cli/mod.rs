pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DroneArgs};
pub use commands::handle_command;
