// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::{Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, WIDTH};
use crate::Axis;

const FONT_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 15.0;
const BAR_FILL: f32 = 0.6;
const MARKER_RADIUS: f32 = 4.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels and tick labels. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Default options sized for `chart` (its preferred size when set).
    pub fn for_chart(chart: &Chart) -> Self {
        let mut opts = Self::default();
        if let Some((w, h)) = chart.size {
            opts.width = w;
            opts.height = h;
        }
        opts
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Preferred surface size in pixels.
    pub size: Option<(i32, i32)>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            size: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    fn is_pie(&self) -> bool {
        self.series.iter().any(|s| s.series_type == SeriesType::Pie)
    }

    fn is_horizontal(&self) -> bool {
        self.series.iter().any(|s| s.series_type == SeriesType::HorizontalBar)
    }

    /// Categories of the first categorical series; these label the category axis.
    fn categories(&self) -> &[String] {
        self.series
            .iter()
            .find(|s| s.series_type.is_categorical() && s.series_type != SeriesType::Pie)
            .map(|s| s.labels.as_slice())
            .unwrap_or(&[])
    }

    /// Fit axis ranges to the data. Bars and histograms keep zero on the value axis;
    /// `margin` is the fraction of the span added as headroom.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut v_min = f64::INFINITY;
        let mut v_max = f64::NEG_INFINITY;
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut zero_based = false;

        for s in &self.series {
            if let Some((lo, hi)) = s.value_extent() {
                match s.series_type {
                    SeriesType::Pie => continue,
                    SeriesType::Bar | SeriesType::HorizontalBar | SeriesType::Histogram => zero_based = true,
                    SeriesType::Line => {}
                }
                v_min = v_min.min(lo);
                v_max = v_max.max(hi);
            }
            if let Some((lo, hi)) = s.bin_extent() {
                x_min = x_min.min(lo);
                x_max = x_max.max(hi);
            }
        }
        if !v_min.is_finite() || !v_max.is_finite() {
            return;
        }
        if zero_based {
            v_min = v_min.min(0.0);
            v_max = v_max.max(0.0);
        }
        if (v_max - v_min).abs() < 1e-9 { v_max = v_min + 1.0; }
        let pad = (v_max - v_min) * margin;
        let lo = if zero_based && v_min >= 0.0 { v_min } else { v_min - pad };
        let hi = v_max + pad;

        let n = self.categories().len() as f64;
        let value_axis = if self.is_horizontal() { &mut self.x_axis } else { &mut self.y_axis };
        value_axis.min = lo;
        value_axis.max = hi;

        if x_min.is_finite() && x_max.is_finite() {
            let pad = (x_max - x_min) * margin;
            self.x_axis.min = x_min - pad;
            self.x_axis.max = x_max + pad;
        } else if n > 0.0 {
            let cat_axis = if self.is_horizontal() { &mut self.y_axis } else { &mut self.x_axis };
            cat_axis.min = -0.5;
            cat_axis.max = n - 0.5;
        }
    }

    /// Render into a fresh RGBA8 (unpremultiplied) buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(RenderError::Surface { width: w, height: h })?;
        self.paint(surface.canvas(), &RenderOptions { width: w, height: h, ..*opts });

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(RenderError::ReadPixels.into());
        }
        Ok((pixels, w, h, row_bytes))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let (w, h) = (w as u32, h as u32);
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or(RenderError::BufferSize { width: w, height: h })?;
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(RenderError::from)?;
        Ok(out)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Paint the whole chart onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(color(theme.background));

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let layout = Layout::compute(self, opts, shaper.as_ref());
        let plot = layout.plot;

        if let Some(sh) = &shaper {
            if !self.title.is_empty() {
                let (cx, _) = plot.center();
                let y = (opts.insets.top as f32 * 0.5 + TITLE_SIZE * 0.5).max(TITLE_SIZE + 2.0);
                sh.draw_title(canvas, &self.title, cx, y, TITLE_SIZE, color(theme.title));
            }
        }

        if self.is_pie() {
            for s in self.series.iter().filter(|s| s.series_type == SeriesType::Pie) {
                draw_pie_series(canvas, plot, theme, shaper.as_ref(), s);
            }
            return;
        }

        draw_grid(canvas, plot, theme, self);
        draw_axes(canvas, plot, theme, self, &layout, shaper.as_ref(), opts);

        for s in &self.series {
            match s.series_type {
                SeriesType::Bar => draw_bar_series(canvas, plot, theme, &self.y_axis, s),
                SeriesType::HorizontalBar => draw_hbar_series(canvas, plot, theme, &self.x_axis, s),
                SeriesType::Histogram => draw_histogram_series(canvas, plot, theme, &self.x_axis, &self.y_axis, s),
                SeriesType::Line => draw_line_series(canvas, plot, theme, &self.y_axis, s),
                SeriesType::Pie => {}
            }
        }
    }
}

// ---- layout -----------------------------------------------------------------

/// Resolved plot rectangle and category-label placement.
struct Layout {
    plot: RectI32,
    rotate_labels: bool,
    label_stride: usize,
}

impl Layout {
    fn compute(chart: &Chart, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Self {
        let ins = opts.insets;
        let mut left = ins.left as i32;
        let mut bottom = ins.bottom as i32;
        let mut rotate_labels = false;
        let mut label_stride = 1usize;

        let cats = chart.categories();
        if let (Some(sh), false) = (shaper, cats.is_empty() || chart.is_pie()) {
            let widest = cats.iter().map(|c| sh.measure_width(c, FONT_SIZE)).fold(0.0f32, f32::max);
            if chart.is_horizontal() {
                left = left.max((widest + 44.0).ceil() as i32);
            } else {
                let band = (opts.width - left - ins.right as i32).max(1) as f32 / cats.len() as f32;
                if widest + 6.0 > band {
                    rotate_labels = true;
                    // 45 degree labels: vertical extent is about width * sin(45)
                    bottom = bottom.max((widest * 0.72 + 44.0).ceil() as i32);
                    label_stride = ((FONT_SIZE * 1.3) / band).ceil().max(1.0) as usize;
                }
            }
        }

        let plot = RectI32::from_ltrb(
            left,
            ins.top as i32,
            (opts.width - ins.right as i32).max(left + 1),
            (opts.height - bottom).max(ins.top as i32 + 1),
        );
        Self { plot, rotate_labels, label_stride }
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color(c));
    p
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color(c));
    p
}

/// Center of category `i` of `n` along a span of pixels.
fn band_center(start: f32, len: f32, i: usize, n: usize) -> f32 {
    let band = len / n.max(1) as f32;
    start + band * (i as f32 + 0.5)
}

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, theme: &Theme, chart: &Chart) {
    let paint = stroke_paint(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    if chart.is_horizontal() {
        for v in nice_ticks(chart.x_axis.min, chart.x_axis.max, 6) {
            let x = plot.map_x(v, chart.x_axis.min, chart.x_axis.max);
            canvas.draw_line((x, t), (x, b), &paint);
        }
    } else {
        for v in nice_ticks(chart.y_axis.min, chart.y_axis.max, 6) {
            let y = plot.map_y(v, chart.y_axis.min, chart.y_axis.max);
            canvas.draw_line((l, y), (r, y), &paint);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    theme: &Theme,
    chart: &Chart,
    layout: &Layout,
    shaper: Option<&TextShaper>,
    opts: &RenderOptions,
) {
    let axis_paint = stroke_paint(theme.axis_line, 1.5);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let Some(sh) = shaper else { return };
    let tick_color = color(theme.tick);
    let tick_paint = stroke_paint(theme.tick, 1.0);

    // Numeric ticks on the value axis (and on x for histograms).
    let numeric_x = chart.is_horizontal() || chart.series.iter().any(|s| s.series_type == SeriesType::Histogram);
    if !chart.is_horizontal() {
        let (lo, hi) = (chart.y_axis.min, chart.y_axis.max);
        let step = nice_step(hi - lo, 6);
        for v in nice_ticks(lo, hi, 6) {
            let y = plot.map_y(v, lo, hi);
            canvas.draw_line((l - 4.0, y), (l, y), &tick_paint);
            sh.draw(canvas, &format_tick(v, step), l - 7.0, y + FONT_SIZE * 0.35, FONT_SIZE, tick_color, Anchor::Right);
        }
    }
    if numeric_x {
        let (lo, hi) = (chart.x_axis.min, chart.x_axis.max);
        let target = if chart.is_horizontal() { 6 } else { 8 };
        let step = nice_step(hi - lo, target);
        for v in nice_ticks(lo, hi, target) {
            let x = plot.map_x(v, lo, hi);
            canvas.draw_line((x, b), (x, b + 4.0), &tick_paint);
            sh.draw(canvas, &format_tick(v, step), x, b + 6.0 + FONT_SIZE, FONT_SIZE, tick_color, Anchor::Center);
        }
    }

    // Category labels.
    let cats = chart.categories();
    if chart.is_horizontal() {
        for (i, c) in cats.iter().enumerate() {
            let y = b - (band_center(0.0, b - t, i, cats.len()));
            canvas.draw_line((l - 4.0, y), (l, y), &tick_paint);
            sh.draw(canvas, c, l - 7.0, y + FONT_SIZE * 0.35, FONT_SIZE, tick_color, Anchor::Right);
        }
    } else if !numeric_x {
        for (i, c) in cats.iter().enumerate() {
            let x = band_center(l, r - l, i, cats.len());
            canvas.draw_line((x, b), (x, b + 4.0), &tick_paint);
            if i % layout.label_stride != 0 {
                continue;
            }
            if layout.rotate_labels {
                sh.draw_rotated(canvas, c, x + 4.0, b + 10.0, -45.0, FONT_SIZE, tick_color, Anchor::Right);
            } else {
                sh.draw(canvas, c, x, b + 6.0 + FONT_SIZE, FONT_SIZE, tick_color, Anchor::Center);
            }
        }
    }

    // Axis titles
    let label_color = color(theme.axis_label);
    if !chart.x_axis.label.is_empty() {
        let y = opts.height as f32 - 12.0;
        sh.draw(canvas, &chart.x_axis.label, (l + r) * 0.5, y, FONT_SIZE + 1.0, label_color, Anchor::Center);
    }
    if !chart.y_axis.label.is_empty() {
        sh.draw_rotated(canvas, &chart.y_axis.label, 18.0, (t + b) * 0.5, -90.0, FONT_SIZE + 1.0, label_color, Anchor::Center);
    }
}

fn draw_bar_series(canvas: &skia::Canvas, plot: RectI32, theme: &Theme, y_axis: &Axis, series: &Series) {
    let n = series.len();
    if n == 0 { return; }
    let (l, r) = (plot.left as f32, plot.right as f32);
    let half = (r - l) / n as f32 * BAR_FILL * 0.5;
    let base = plot.map_y(y_axis.min.max(0.0), y_axis.min, y_axis.max);

    for (i, &v) in series.values.iter().enumerate() {
        let x = band_center(l, r - l, i, n);
        let y = plot.map_y(v, y_axis.min, y_axis.max);
        let rect = skia::Rect::from_ltrb(x - half, y.min(base), x + half, y.max(base));
        canvas.draw_rect(rect, &fill_paint(series.color_at(i, theme.bar)));
        if let Some(edge) = series.edge_color {
            canvas.draw_rect(rect, &stroke_paint(edge, 1.0));
        }
    }
}

fn draw_hbar_series(canvas: &skia::Canvas, plot: RectI32, theme: &Theme, x_axis: &Axis, series: &Series) {
    let n = series.len();
    if n == 0 { return; }
    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let half = (b - t) / n as f32 * BAR_FILL * 0.5;
    let base = plot.map_x(x_axis.min.max(0.0), x_axis.min, x_axis.max);

    for (i, &v) in series.values.iter().enumerate() {
        // first category sits at the bottom
        let y = b - band_center(0.0, b - t, i, n);
        let x = plot.map_x(v, x_axis.min, x_axis.max);
        let rect = skia::Rect::from_ltrb(x.min(base), y - half, x.max(base), y + half);
        canvas.draw_rect(rect, &fill_paint(series.color_at(i, theme.bar)));
        if let Some(edge) = series.edge_color {
            canvas.draw_rect(rect, &stroke_paint(edge, 1.0));
        }
    }
}

fn draw_histogram_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    theme: &Theme,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
) {
    let base = plot.map_y(y_axis.min.max(0.0), y_axis.min, y_axis.max);
    for (i, bin) in series.bins.iter().enumerate() {
        let x0 = plot.map_x(bin.lo, x_axis.min, x_axis.max);
        let x1 = plot.map_x(bin.hi, x_axis.min, x_axis.max);
        let y = plot.map_y(bin.count, y_axis.min, y_axis.max);
        let rect = skia::Rect::from_ltrb(x0, y.min(base), x1, y.max(base));
        canvas.draw_rect(rect, &fill_paint(series.color_at(i, theme.histogram)));
        canvas.draw_rect(rect, &stroke_paint(series.edge_color.unwrap_or(theme.edge), 1.0));
    }
}

fn draw_line_series(canvas: &skia::Canvas, plot: RectI32, theme: &Theme, y_axis: &Axis, series: &Series) {
    let n = series.len();
    if n == 0 { return; }
    let (l, r) = (plot.left as f32, plot.right as f32);
    let stroke_color = series.color_at(0, theme.line_stroke);
    let points: Vec<(f32, f32)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (band_center(l, r - l, i, n), plot.map_y(v, y_axis.min, y_axis.max)))
        .collect();

    if points.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in points.iter().skip(1) {
            path.line_to(p);
        }
        canvas.draw_path(&path, &stroke_paint(stroke_color, 2.0));
    }

    if series.markers || points.len() == 1 {
        let dot = fill_paint(stroke_color);
        for &p in &points {
            canvas.draw_circle(p, MARKER_RADIUS, &dot);
        }
    }
}

fn draw_pie_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    theme: &Theme,
    shaper: Option<&TextShaper>,
    series: &Series,
) {
    let fractions = series.fractions();
    if fractions.is_empty() { return; }
    let percents = if series.percent_labels { series.percent_texts() } else { Vec::new() };
    let (cx, cy) = plot.center();
    let radius = (plot.width().min(plot.height()) as f32 * 0.5 * 0.78).max(1.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    // Angles run counter-clockwise in chart space; Skia sweeps clockwise, so negate.
    let mut start = series.start_angle;
    for (i, &f) in fractions.iter().enumerate() {
        let sweep = f * 360.0;
        let fill = series.color_at(i, theme.palette[i % theme.palette.len()]);
        canvas.draw_arc(oval, -start as f32, -sweep as f32, true, &fill_paint(fill));

        if let Some(sh) = shaper {
            let mid = (start + sweep * 0.5).to_radians();
            let (dx, dy) = (mid.cos() as f32, -mid.sin() as f32);
            let label_color = color(theme.pie_label);
            if let Some(label) = series.labels.get(i) {
                let (lx, ly) = (cx + dx * radius * 1.1, cy + dy * radius * 1.1);
                let anchor = if dx < -0.05 { Anchor::Right } else if dx > 0.05 { Anchor::Left } else { Anchor::Center };
                sh.draw(canvas, label, lx, ly + FONT_SIZE * 0.35, FONT_SIZE, label_color, anchor);
            }
            if let Some(text) = percents.get(i) {
                let (px, py) = (cx + dx * radius * 0.6, cy + dy * radius * 0.6);
                sh.draw(canvas, text, px, py + FONT_SIZE * 0.35, FONT_SIZE, label_color, Anchor::Center);
            }
        }
        start += sweep;
    }
}
