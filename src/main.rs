use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drone_mission::{cli, Config, SqliteDroneRepository};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        app = drone_mission::version::APP_NAME,
        version = drone_mission::VERSION,
        db = %config.db_path.display(),
        "starting"
    );

    // Create parent directory if it doesn't exist
    if let Some(parent) = config.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut repo = SqliteDroneRepository::open(&config.db_path)?;
    cli::handle_command(cli.command, &mut repo, &config)?;
    repo.close()?;

    Ok(())
}
