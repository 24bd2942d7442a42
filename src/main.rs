//! Car Model - Main entry point
//!
//! Builds a car from the environment and prints it to stdout.

use anyhow::Result;
use car_model::Config;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration is loaded before logging so LOG_LEVEL can act as the fallback filter
    let config = Config::from_env();

    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let car = config.build_car()?;
    info!(
        registered_color = car.has_registered_color(),
        "Built {}", car
    );

    println!("{}", config.output.render(&car)?);
    Ok(())
}
