// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests for every series type.

use chart_core::{Bin, Chart, RenderOptions, Series, SeriesType};

fn all_kinds() -> Vec<Chart> {
    let cats = vec![("Pneumonia", 160.0), ("Malaria", 148.0), ("Cancer", 151.0)];

    let mut bar = Chart::new().with_title("Bars");
    bar.add_series(Series::categorical(SeriesType::Bar, cats.clone()));

    let mut hbar = Chart::new().with_title("Horizontal");
    hbar.add_series(Series::categorical(SeriesType::HorizontalBar, cats.clone()));

    let mut hist = Chart::new().with_title("Histogram");
    hist.add_series(Series::histogram(vec![
        Bin { lo: 0.0, hi: 1.0, count: 3.0 },
        Bin { lo: 1.0, hi: 2.0, count: 5.0 },
        Bin { lo: 2.0, hi: 3.0, count: 1.0 },
    ]));

    let mut line = Chart::new().with_title("Line");
    line.add_series(Series::categorical(SeriesType::Line, cats.clone()).with_markers());

    let mut pie = Chart::new().with_title("Pie").with_size(500, 500);
    pie.add_series(Series::categorical(SeriesType::Pie, cats).with_percent_labels().with_start_angle(140.0));

    let mut out = vec![bar, hbar, hist, line, pie];
    for c in &mut out {
        c.autoscale_axes(0.05);
    }
    out
}

#[test]
fn render_smoke_png() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    for (i, chart) in all_kinds().iter().enumerate() {
        let opts = RenderOptions::for_chart(chart);
        let out = out_dir.path().join(format!("smoke_{i}.png"));
        chart.render_to_png(&opts, &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");
    }
}

#[test]
fn render_png_bytes_decode() {
    for chart in all_kinds() {
        let mut opts = RenderOptions::for_chart(&chart);
        opts.draw_labels = false;
        let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!((img.width() as i32, img.height() as i32), (opts.width, opts.height));
    }
}

#[test]
fn empty_chart_still_renders() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    assert!(chart.render_to_png_bytes(&opts).is_ok());
}
