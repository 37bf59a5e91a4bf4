// File: crates/chart-core/src/series.rs
// Summary: Series model for categorical bars, histograms, lines and pies.
// Notes:
// - Categorical kinds (Bar, HorizontalBar, Line, Pie) use `labels` + `values`
//   of equal length; Histogram uses `bins`.
// - Colors cycle over items; an empty list falls back to the theme.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Bar,           // vertical bars, one per category
    HorizontalBar, // horizontal bars, first category at the bottom
    Histogram,     // contiguous bars over numeric bins
    Line,          // one point per category, joined in order
    Pie,           // wedges proportional to values
}

impl SeriesType {
    pub fn is_categorical(self) -> bool {
        !matches!(self, SeriesType::Histogram)
    }
}

/// One histogram bin: `[lo, hi)` holding `count` observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: f64,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub bins: Vec<Bin>,
    pub colors: Vec<Rgba>,
    pub edge_color: Option<Rgba>,
    pub markers: bool,
    pub percent_labels: bool,
    /// Pie only: degrees counter-clockwise from the positive x axis.
    pub start_angle: f64,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            labels: Vec::new(),
            values: Vec::new(),
            bins: Vec::new(),
            colors: Vec::new(),
            edge_color: None,
            markers: false,
            percent_labels: false,
            start_angle: 0.0,
        }
    }

    /// Categorical series from `(label, value)` pairs, kept in the given order.
    pub fn categorical<L: Into<String>>(series_type: SeriesType, data: impl IntoIterator<Item = (L, f64)>) -> Self {
        let mut s = Self::new(series_type);
        for (label, value) in data {
            s.labels.push(label.into());
            s.values.push(value);
        }
        s
    }

    pub fn histogram(bins: Vec<Bin>) -> Self {
        let mut s = Self::new(SeriesType::Histogram);
        s.bins = bins;
        s
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.colors = vec![color];
        self
    }

    pub fn with_colors(mut self, colors: Vec<Rgba>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_edge_color(mut self, color: Rgba) -> Self {
        self.edge_color = Some(color);
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_percent_labels(mut self) -> Self {
        self.percent_labels = true;
        self
    }

    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Number of drawable items (categories or bins).
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Histogram => self.bins.len(),
            _ => self.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Color for item `i`, cycling through `colors`, or `fallback` if none are set.
    pub fn color_at(&self, i: usize, fallback: Rgba) -> Rgba {
        if self.colors.is_empty() { fallback } else { self.colors[i % self.colors.len()] }
    }

    /// (min, max) over plotted values; histogram uses bin counts.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let it: Box<dyn Iterator<Item = f64> + '_> = match self.series_type {
            SeriesType::Histogram => Box::new(self.bins.iter().map(|b| b.count)),
            _ => Box::new(self.values.iter().copied()),
        };
        it.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// (first lower edge, last upper edge) of a histogram.
    pub fn bin_extent(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.lo, self.bins.last()?.hi))
    }

    /// Pie fractions: each value divided by the total; empty when the total is not positive.
    pub fn fractions(&self) -> Vec<f64> {
        let total: f64 = self.values.iter().filter(|v| **v > 0.0).sum();
        if total <= 0.0 { return Vec::new(); }
        self.values.iter().map(|v| v.max(0.0) / total).collect()
    }

    /// Inline wedge labels, one decimal: `25.0%`.
    pub fn percent_texts(&self) -> Vec<String> {
        self.fractions().iter().map(|f| format!("{:.1}%", f * 100.0)).collect()
    }
}
