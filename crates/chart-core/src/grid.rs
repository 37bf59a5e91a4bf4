// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Round `span` to a 1/2/5 x 10^k step.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at "nice" values inside `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    // small epsilon keeps the upper bound when it lands exactly on a step
    while v <= max + step * 1e-9 {
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    if step >= 1.0 || step <= 0.0 {
        format!("{:.0}", v)
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{:.*}", decimals, v)
    }
}
