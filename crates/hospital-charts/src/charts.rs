// File: crates/hospital-charts/src/charts.rs
// Summary: Turns dataset aggregations into the nine chart-core charts, in display order.

use chart_core::{Axis, Bin, Chart, Rgba, Series, SeriesType};
use hospital_data::aggregate::{self, CategoryCount, HistogramBin, AGE_BINS, STAY_BINS, TOP_DISEASES};
use hospital_data::Dataset;
use log::debug;

/// Headroom added above the tallest bar or point.
const AXIS_MARGIN: f64 = 0.05;
const PIE_START_ANGLE: f64 = 140.0;

pub type ChartBuilder = fn(&Dataset) -> Chart;

/// Builders for the nine charts, in the order they are shown.
pub static CHART_BUILDERS: [ChartBuilder; 9] = [
    gender_distribution,
    top_diseases,
    age_distribution,
    average_bill_by_disease,
    patients_per_doctor,
    monthly_admissions,
    length_of_stay,
    monthly_bill_totals,
    disease_proportions,
];

/// Charts in display order; each one is built only when the iterator reaches it.
pub fn charts(ds: &Dataset) -> impl ExactSizeIterator<Item = Chart> + '_ {
    CHART_BUILDERS.iter().enumerate().map(move |(i, build)| {
        let chart = build(ds);
        debug!("built chart {} \"{}\" from {} rows", i + 1, chart.title, ds.len());
        chart
    })
}

/// All nine charts at once.
pub fn build_charts(ds: &Dataset) -> Vec<Chart> {
    charts(ds).collect()
}

pub fn gender_distribution(ds: &Dataset) -> Chart {
    let series = count_series(SeriesType::Bar, &aggregate::gender_counts(ds))
        .with_colors(vec![Rgba::SKYBLUE, Rgba::PINK]);
    finish(
        Chart::new().with_title("Gender Distribution").with_size(600, 400),
        "Gender",
        "Number of Patients",
        series,
    )
}

pub fn top_diseases(ds: &Dataset) -> Chart {
    let series = count_series(SeriesType::Bar, &aggregate::top_diseases(ds, TOP_DISEASES)).with_color(Rgba::ORANGE);
    finish(
        Chart::new().with_title("Top 10 Diseases").with_size(800, 500),
        "Disease",
        "Number of Cases",
        series,
    )
}

pub fn age_distribution(ds: &Dataset) -> Chart {
    let series = histogram_series(&aggregate::age_histogram(ds, AGE_BINS))
        .with_color(Rgba::GREEN)
        .with_edge_color(Rgba::BLACK);
    finish(
        Chart::new().with_title("Age Distribution of Patients").with_size(800, 500),
        "Age",
        "Number of Patients",
        series,
    )
}

/// Horizontal bars, cheapest disease at the bottom.
pub fn average_bill_by_disease(ds: &Dataset) -> Chart {
    let means = aggregate::mean_bill_by_disease(ds);
    let series = Series::categorical(SeriesType::HorizontalBar, means.into_iter().map(|m| (m.label, m.value)))
        .with_color(Rgba::PURPLE);
    finish(
        Chart::new().with_title("Average Bill Amount by Disease").with_size(800, 500),
        "Average Bill (₦)",
        "Disease",
        series,
    )
}

pub fn patients_per_doctor(ds: &Dataset) -> Chart {
    let series = count_series(SeriesType::Bar, &aggregate::patients_per_doctor(ds)).with_color(Rgba::TEAL);
    finish(
        Chart::new().with_title("Patients per Doctor").with_size(800, 500),
        "Doctor",
        "Number of Patients",
        series,
    )
}

pub fn monthly_admissions(ds: &Dataset) -> Chart {
    let months = aggregate::monthly_admissions(ds);
    let series = Series::categorical(
        SeriesType::Line,
        months.into_iter().map(|m| (m.month.to_string(), m.count as f64)),
    )
    .with_color(Rgba::BLUE)
    .with_markers();
    finish(
        Chart::new().with_title("Monthly Admissions Trend").with_size(1000, 500),
        "Month",
        "Number of Admissions",
        series,
    )
}

pub fn length_of_stay(ds: &Dataset) -> Chart {
    let series = histogram_series(&aggregate::length_of_stay_histogram(ds, STAY_BINS))
        .with_color(Rgba::RED)
        .with_edge_color(Rgba::BLACK);
    finish(
        Chart::new().with_title("Length of Stay Distribution").with_size(800, 500),
        "Days",
        "Number of Patients",
        series,
    )
}

pub fn monthly_bill_totals(ds: &Dataset) -> Chart {
    let totals = aggregate::monthly_bill_totals(ds);
    let series = Series::categorical(SeriesType::Bar, totals.into_iter().map(|m| (m.month.to_string(), m.value)))
        .with_color(Rgba::GOLD);
    finish(
        Chart::new().with_title("Total Bill Amount Collected per Month").with_size(1000, 500),
        "Month",
        "Total Bill (₦)",
        series,
    )
}

/// Pie of disease shares with inline `xx.x%` labels; no axis labels.
pub fn disease_proportions(ds: &Dataset) -> Chart {
    let shares = aggregate::disease_shares(ds);
    let series = Series::categorical(SeriesType::Pie, shares.into_iter().map(|s| (s.label, s.value)))
        .with_percent_labels()
        .with_start_angle(PIE_START_ANGLE);
    finish(
        Chart::new().with_title("Proportion of Diseases").with_size(800, 800),
        "",
        "",
        series,
    )
}

fn count_series(kind: SeriesType, counts: &[CategoryCount]) -> Series {
    Series::categorical(kind, counts.iter().map(|c| (c.label.clone(), c.count as f64)))
}

fn histogram_series(bins: &[HistogramBin]) -> Series {
    Series::histogram(
        bins.iter()
            .map(|b| Bin { lo: b.lo, hi: b.hi, count: b.count as f64 })
            .collect(),
    )
}

fn finish(mut chart: Chart, x_label: &str, y_label: &str, series: Series) -> Chart {
    chart.x_axis = Axis::labeled(x_label);
    chart.y_axis = Axis::labeled(y_label);
    chart.add_series(series);
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}
