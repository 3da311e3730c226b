use anyhow::Result;
use colored::*;
use tracing::error;

use super::args::Commands;
use crate::config::Config;
use crate::db::{Drone, DroneRecord, DroneRepository};
use crate::mission::plan::{self, MissionReport, PATROL_TITLE, RECON_TITLE};
use crate::mission::DroneAction;

pub fn handle_command(command: Commands, repo: &mut dyn DroneRepository, config: &Config) -> Result<()> {
    match command {
        Commands::Ls { json } => {
            let drones = repo.get_all_drones()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&drones)?);
            } else {
                print_drones(&drones);
            }
        }
        Commands::Show { id, json } => match repo.get_drone_by_id(id)? {
            Some(record) if json => println!("{}", serde_json::to_string_pretty(&record)?),
            Some(record) => print_drones(std::slice::from_ref(&record)),
            None => println!("Drone {} not found", id),
        },
        Commands::Add { drone } => {
            let drone = Drone::from(drone);
            // A failed insert is reported but does not fail the command.
            match repo.add_drone(&drone) {
                Ok(id) => println!("Drone added with ID: {}", id),
                Err(e) => {
                    error!(error = %e, serial_number = %drone.serial_number, "failed to add drone");
                    eprintln!("{} could not add drone: {}", "Error:".red().bold(), e);
                }
            }
        }
        Commands::Update { id, drone } => {
            repo.update_drone(id, &Drone::from(drone))?;
            println!("Drone {} updated", id);
        }
        Commands::Rm { id } => {
            repo.remove_drone(id)?;
            println!("Drone {} removed", id);
        }
        Commands::Recon { log } => {
            let log_path = log.unwrap_or_else(|| config.mission_log.clone());
            let report = plan::fly(plan::recon_mission(), RECON_TITLE, &log_path, &config.home_url)?;
            print_report(&report);
            println!("Mission log: {}", log_path.display());
        }
        Commands::Patrol { patrols, log } => {
            let log_path = log.unwrap_or_else(|| config.mission_log.clone());
            let patrols = patrols.unwrap_or(config.patrols);
            let report = plan::fly(plan::patrol_mission(patrols), PATROL_TITLE, &log_path, &config.home_url)?;
            print_report(&report);
            println!("Mission log: {}", log_path.display());
        }
    }
    Ok(())
}

fn print_drones(drones: &[DroneRecord]) {
    if drones.is_empty() {
        println!("No drones registered.");
        return;
    }

    println!("\n{} drone{}:", drones.len(), if drones.len() == 1 { "" } else { "s" });
    println!("─────────────────────────────────────────────");

    for record in drones {
        let drone = &record.drone;
        println!(
            "({}) {} {} [{}]",
            record.id,
            drone.manufacturer.bold(),
            drone.model,
            drone.serial_number.cyan()
        );
        println!(
            "    Altitude: {} m  Speed: {} km/h  Flight time: {} min",
            drone.max_altitude, drone.max_speed, drone.max_flight_time
        );
        println!("─────────────────────────────────────────────");
    }
}

fn print_report(report: &MissionReport) {
    println!("\n{} mission", report.strategy.to_uppercase().green().bold());
    println!("─────────────────────────────────────────────");
    for action in &report.actions {
        match action {
            DroneAction::Takeoff => println!("  Drone taking off..."),
            DroneAction::MoveForward { distance } => println!("  Moving forward {} meters", distance),
            DroneAction::Turn { degrees } => println!("  Turning {} degrees", degrees),
        }
    }
    println!("─────────────────────────────────────────────");
    println!(
        "{} actions, {} m flown, heading {}°",
        report.actions.len(),
        report.state.distance,
        report.state.heading
    );
}
