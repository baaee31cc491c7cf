use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod config;
mod policy;
mod runner;

use crate::config::Config;
use crate::runner::Runner;

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .init();

    let mut runner = Runner::new(&config)?;
    info!("Starting simulation run {}", runner.run_id());

    match runner.run() {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!("Simulation failed: {}", e);
            Err(e)
        }
    }
}
