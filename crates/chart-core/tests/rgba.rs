// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Chart, RenderOptions, Rgba, Series, SeriesType};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::categorical(SeriesType::Bar, vec![("a", 1.0), ("b", 4.0)]));
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque theme background
    let bg = opts.theme.background;
    assert_eq!(bg, Rgba::WHITE);
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn bar_fill_color_reaches_the_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::categorical(SeriesType::Bar, vec![("only", 10.0)]).with_color(Rgba::GOLD));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // A single full-height bar is centered in the plot area.
    let ins = opts.insets;
    let cx = (ins.left as i32 + (w - ins.right as i32)) / 2;
    let cy = (ins.top as i32 + (h - ins.bottom as i32)) / 2;
    let at = cy as usize * stride + cx as usize * 4;
    assert_eq!(&px[at..at + 3], &[Rgba::GOLD.r, Rgba::GOLD.g, Rgba::GOLD.b]);
}

#[test]
fn custom_size_is_respected() {
    let chart = Chart::new().with_size(600, 400);
    let mut opts = RenderOptions::for_chart(&chart);
    opts.draw_labels = false;
    let (_, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (600, 400));
}
