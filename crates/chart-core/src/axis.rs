// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis with a label only; the range is filled in by `Chart::autoscale_axes`.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, 0.0, 1.0)
    }

    pub fn default_x() -> Self {
        Self::labeled("")
    }

    pub fn default_y() -> Self {
        Self::labeled("")
    }
}
