// File: crates/hospital-charts/src/lib.rs
// Summary: Generate, persist, reload and chart the synthetic hospital dataset.

pub mod charts;
pub mod config;
pub mod display;

use anyhow::{Context, Result};
use hospital_data::{generate, write_records, Dataset};
use log::{info, warn};

pub use charts::build_charts;
pub use config::{AppConfig, DisplayMode};

/// Violations printed before the rest are summarised.
const MAX_REPORTED_VIOLATIONS: usize = 10;

/// Whole pipeline: generate, write, reload, validate, chart.
pub fn run(config: &AppConfig) -> Result<Dataset> {
    let gen_config = config.generator_config();
    let records = generate(&gen_config);
    write_records(&config.data, &records)
        .with_context(|| format!("writing dataset to {}", config.data.display()))?;
    println!(
        "{} file with {} records created successfully!",
        config.data.display(),
        records.len()
    );
    drop(records);

    let ds = Dataset::load(&config.data)
        .with_context(|| format!("loading dataset from {}", config.data.display()))?;
    info!("reloaded {} rows from {}", ds.len(), config.data.display());

    let violations = ds.validate(&gen_config);
    for v in violations.iter().take(MAX_REPORTED_VIOLATIONS) {
        warn!("{v}");
    }
    if violations.len() > MAX_REPORTED_VIOLATIONS {
        warn!("... and {} more violations", violations.len() - MAX_REPORTED_VIOLATIONS);
    }

    display::present(charts::charts(&ds), config.display, config.chart_theme(), &config.out_dir)?;
    Ok(ds)
}
