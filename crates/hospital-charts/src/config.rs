// File: crates/hospital-charts/src/config.rs
// Summary: Command-line configuration; defaults reproduce the plain generate-and-show run.

use std::path::PathBuf;

use chart_core::Theme;
use clap::{Parser, ValueEnum};
use hospital_data::generator::DEFAULT_COUNT;
use hospital_data::GeneratorConfig;

/// Where the charts go once they are built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DisplayMode {
    /// One blocking native window per chart.
    Window,
    /// PNG files under `--out-dir`.
    Png,
    /// Build the charts but do not render them.
    None,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hospital-charts",
    version,
    about = "Generate a synthetic hospital patient dataset and chart it"
)]
pub struct AppConfig {
    /// CSV file written by the generator and read back for charting
    #[arg(long, default_value = "hospital_database.csv")]
    pub data: PathBuf,

    /// Number of patient records to generate (at least 1)
    #[arg(
        long,
        default_value_t = DEFAULT_COUNT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: usize,

    /// Seed for reproducible datasets; unseeded when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = DisplayMode::Window)]
    pub display: DisplayMode,

    /// Output directory for `--display png`
    #[arg(long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Chart theme: light, dark, solarized-dark, solarized-light, high-contrast-dark
    #[arg(long, default_value = "light")]
    pub theme: String,
}

impl AppConfig {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_count(self.count)
            .with_seed(self.seed)
    }

    pub fn chart_theme(&self) -> Theme {
        chart_core::theme::find(&self.theme)
    }
}
