// File: crates/hospital-data/src/aggregate.rs
// Summary: Chart-ready aggregations over a dataset (counts, means, histograms, monthly totals).
// Notes:
// - Counts are ordered by descending count; ties keep first-appearance order.
// - Monthly results only contain months present in the data, oldest first.

use std::collections::{BTreeMap, HashMap};

use crate::dataset::Dataset;
use crate::month::YearMonth;

pub const TOP_DISEASES: usize = 10;
pub const AGE_BINS: usize = 20;
pub const STAY_BINS: usize = 15;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

/// Equal-width bin `[lo, hi)`; the last bin of a histogram also holds `hi`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyValue {
    pub month: YearMonth,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: YearMonth,
    pub count: usize,
}

/// Count occurrences of each value.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<CategoryCount> = Vec::new();
    for v in values {
        match index.get(v) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(v, out.len());
                out.push(CategoryCount { label: v.to_string(), count: 1 });
            }
        }
    }
    // stable: equal counts stay in first-appearance order
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Split `[min, max]` of `values` into `bins` equal-width bins and count members.
/// A constant input is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if bins == 0 || finite.is_empty() {
        return Vec::new();
    }
    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lo: lo + width * i as f64,
            hi: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

pub fn gender_counts(ds: &Dataset) -> Vec<CategoryCount> {
    value_counts(ds.records().map(|r| r.gender.as_str()))
}

pub fn top_diseases(ds: &Dataset, n: usize) -> Vec<CategoryCount> {
    let mut counts = value_counts(ds.records().map(|r| r.disease.as_str()));
    counts.truncate(n);
    counts
}

pub fn age_histogram(ds: &Dataset, bins: usize) -> Vec<HistogramBin> {
    let ages: Vec<f64> = ds.records().map(|r| f64::from(r.age)).collect();
    histogram(&ages, bins)
}

/// Mean bill per disease, lowest mean first.
pub fn mean_bill_by_disease(ds: &Dataset) -> Vec<CategoryValue> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for r in ds.records() {
        let g = groups.entry(r.disease.as_str()).or_insert((0.0, 0));
        g.0 += r.bill_amount;
        g.1 += 1;
    }
    let mut out: Vec<CategoryValue> = groups
        .into_iter()
        .map(|(label, (sum, n))| CategoryValue { label: label.to_string(), value: sum / n as f64 })
        .collect();
    out.sort_by(|a, b| a.value.total_cmp(&b.value));
    out
}

pub fn patients_per_doctor(ds: &Dataset) -> Vec<CategoryCount> {
    value_counts(ds.records().map(|r| r.doctor.as_str()))
}

pub fn monthly_admissions(ds: &Dataset) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for row in ds.rows() {
        *months.entry(row.admission_month).or_default() += 1;
    }
    months.into_iter().map(|(month, count)| MonthlyCount { month, count }).collect()
}

pub fn length_of_stay_histogram(ds: &Dataset, bins: usize) -> Vec<HistogramBin> {
    let stays: Vec<f64> = ds.rows().iter().map(|r| r.length_of_stay as f64).collect();
    histogram(&stays, bins)
}

pub fn monthly_bill_totals(ds: &Dataset) -> Vec<MonthlyValue> {
    let mut months: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for row in ds.rows() {
        *months.entry(row.admission_month).or_default() += row.record.bill_amount;
    }
    months.into_iter().map(|(month, value)| MonthlyValue { month, value }).collect()
}

/// Percentage share of each disease, in value-count order.
pub fn disease_shares(ds: &Dataset) -> Vec<CategoryValue> {
    let total = ds.len();
    if total == 0 {
        return Vec::new();
    }
    value_counts(ds.records().map(|r| r.disease.as_str()))
        .into_iter()
        .map(|c| CategoryValue { label: c.label, value: c.count as f64 * 100.0 / total as f64 })
        .collect()
}
