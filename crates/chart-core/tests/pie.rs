// File: crates/chart-core/tests/pie.rs
// Purpose: Pie wedges start at the configured angle, sweep counter-clockwise, and carry percent labels.

use chart_core::{Chart, RenderOptions, Rgba, Series, SeriesType};

/// Render a labels-off pie and return a sampler for the pixel at `degrees`
/// (counter-clockwise from +x) halfway out along the radius.
fn render_pie(series: Series) -> impl Fn(f64) -> [u8; 3] {
    let mut chart = Chart::new().with_size(400, 400);
    chart.add_series(series);
    let mut opts = RenderOptions::for_chart(&chart);
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    let ins = opts.insets;
    let (l, t) = (ins.left as f64, ins.top as f64);
    let (r, b) = ((w - ins.right as i32) as f64, (h - ins.bottom as i32) as f64);
    let (cx, cy) = ((l + r) * 0.5, (t + b) * 0.5);
    let radius = (r - l).min(b - t) * 0.5 * 0.78;

    move |degrees: f64| {
        let a = degrees.to_radians();
        let x = (cx + a.cos() * radius * 0.5).round() as usize;
        let y = (cy - a.sin() * radius * 0.5).round() as usize;
        let at = y * stride + x * 4;
        [px[at], px[at + 1], px[at + 2]]
    }
}

fn rgb(c: Rgba) -> [u8; 3] {
    [c.r, c.g, c.b]
}

#[test]
fn first_wedge_starts_at_140_and_runs_counter_clockwise() {
    // 25% red covers 140..230 degrees, 75% blue covers the rest.
    let pie = Series::categorical(SeriesType::Pie, vec![("a", 1.0), ("b", 3.0)])
        .with_colors(vec![Rgba::RED, Rgba::BLUE])
        .with_start_angle(140.0);
    let at = render_pie(pie);

    assert_eq!(at(185.0), rgb(Rgba::RED));
    assert_eq!(at(220.0), rgb(Rgba::RED));
    assert_eq!(at(100.0), rgb(Rgba::BLUE));
    assert_eq!(at(250.0), rgb(Rgba::BLUE));
    assert_eq!(at(0.0), rgb(Rgba::BLUE));
}

#[test]
fn zero_start_angle_begins_on_positive_x() {
    let pie = Series::categorical(SeriesType::Pie, vec![("a", 1.0), ("b", 3.0)])
        .with_colors(vec![Rgba::RED, Rgba::BLUE]);
    let at = render_pie(pie);

    assert_eq!(at(45.0), rgb(Rgba::RED));
    assert_eq!(at(135.0), rgb(Rgba::BLUE));
    assert_eq!(at(315.0), rgb(Rgba::BLUE));
}

#[test]
fn percent_texts_use_one_decimal() {
    let pie = Series::categorical(SeriesType::Pie, vec![("a", 1.0), ("b", 3.0)]);
    assert_eq!(pie.percent_texts(), ["25.0%", "75.0%"]);

    let thirds = Series::categorical(SeriesType::Pie, vec![("a", 1.0), ("b", 2.0)]);
    assert_eq!(thirds.percent_texts(), ["33.3%", "66.7%"]);
}

#[test]
fn empty_or_zero_pie_has_no_labels() {
    let pie = Series::categorical(SeriesType::Pie, vec![("a", 0.0), ("b", 0.0)]);
    assert!(pie.percent_texts().is_empty());
}
