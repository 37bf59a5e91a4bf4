// File: crates/hospital-charts/src/display.rs
// Summary: Sends charts to native windows, PNG files, or nowhere, one chart at a time.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions, Theme};
use chart_window::Viewer;
use log::info;

use crate::config::DisplayMode;

/// Present `charts` in order, pulling the next chart only after the previous one is done.
/// In window mode each chart blocks until its window closes.
pub fn present(
    charts: impl IntoIterator<Item = Chart>,
    mode: DisplayMode,
    theme: Theme,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    match mode {
        DisplayMode::Window => {
            let mut viewer = Viewer::new();
            for chart in charts {
                viewer
                    .show_blocking(&chart, &options(&chart, theme))
                    .with_context(|| format!("showing chart '{}'", chart.title))?;
            }
            Ok(Vec::new())
        }
        DisplayMode::Png => write_pngs(charts, theme, out_dir),
        DisplayMode::None => {
            let n = charts.into_iter().count();
            info!("display disabled; {n} charts built, none rendered");
            Ok(Vec::new())
        }
    }
}

/// Render every chart to `out_dir/NN_<slug>.png`, returning the written paths.
pub fn write_pngs(charts: impl IntoIterator<Item = Chart>, theme: Theme, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (i, chart) in charts.into_iter().enumerate() {
        let path = out_dir.join(png_name(i, &chart.title));
        chart
            .render_to_png(&options(&chart, theme), &path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// `02_top_10_diseases.png` for the second chart titled "Top 10 Diseases".
pub fn png_name(index: usize, title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        format!("{:02}_chart.png", index + 1)
    } else {
        format!("{:02}_{}.png", index + 1, slug)
    }
}

fn options(chart: &Chart, theme: Theme) -> RenderOptions {
    RenderOptions { theme, ..RenderOptions::for_chart(chart) }
}
