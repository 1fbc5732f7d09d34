use anyhow::Result;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs;

use squad_collector::{Collector, Config};

fn setup_logging() -> Result<()> {
    let log_dir = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("Failed to get base directories"))?
        .data_local_dir()
        .join("squad-collector")
        .join("logs");

    fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "collect_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Debug)
        .build();

    WriteLogger::init(LevelFilter::Info, config, fs::File::create(log_file)?)?;

    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = setup_logging() {
        eprintln!("logging disabled: {}", e);
    }

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => error!("Failed to load .env: {}", e),
    }

    let config = Config::from_env();
    info!("Output path: {:?}", config.output_path);

    Collector::new(config).run()?;
    Ok(())
}
