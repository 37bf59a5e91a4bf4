// File: crates/hospital-charts/src/main.rs
// Summary: CLI entry; sets up logging and runs the generate-and-chart pipeline.

use anyhow::Result;
use clap::Parser;
use hospital_charts::{run, AppConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = AppConfig::parse();
    run(&config)?;
    Ok(())
}
