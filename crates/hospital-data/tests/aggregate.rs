// File: crates/hospital-data/tests/aggregate.rs
// Purpose: Aggregations feeding the nine charts.

use chrono::NaiveDate;
use hospital_data::aggregate::{self, histogram, value_counts, AGE_BINS, STAY_BINS, TOP_DISEASES};
use hospital_data::{generate, Dataset, GeneratorConfig, PatientRecord, YearMonth};

fn seeded() -> Dataset {
    Dataset::from_records(generate(&GeneratorConfig::default().with_seed(Some(2024))))
}

fn record(id: &str, gender: &str, disease: &str, admit: (i32, u32, u32), stay: i64, bill: f64) -> PatientRecord {
    let admission_date = NaiveDate::from_ymd_opt(admit.0, admit.1, admit.2).unwrap();
    PatientRecord {
        patient_id: id.to_string(),
        name: "John Smith".to_string(),
        age: 30,
        gender: gender.to_string(),
        disease: disease.to_string(),
        doctor: "Dr. Lee".to_string(),
        admission_date,
        discharge_date: admission_date + chrono::TimeDelta::days(stay),
        bill_amount: bill,
    }
}

#[test]
fn gender_counts_sum_to_row_count() {
    let ds = seeded();
    let counts = aggregate::gender_counts(&ds);
    assert!(counts.len() <= 2);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 1500);
    assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn monthly_bill_totals_sum_to_overall_total() {
    let ds = seeded();
    let monthly = aggregate::monthly_bill_totals(&ds);
    let sum: f64 = monthly.iter().map(|m| m.value).sum();
    assert!((sum - ds.total_bill()).abs() < 1e-6 * ds.total_bill());
    assert!(monthly.windows(2).all(|w| w[0].month < w[1].month));
    assert!(monthly.len() <= 32);
    assert_eq!(monthly.first().map(|m| m.month.year), Some(2023));
}

#[test]
fn monthly_admissions_are_chronological_and_complete() {
    let ds = seeded();
    let monthly = aggregate::monthly_admissions(&ds);
    assert_eq!(monthly.iter().map(|m| m.count).sum::<usize>(), ds.len());
    assert!(monthly.windows(2).all(|w| w[0].month < w[1].month));
    assert!(monthly.last().unwrap().month <= YearMonth::new(2025, 8));
}

#[test]
fn histograms_cover_every_row() {
    let ds = seeded();
    let ages = aggregate::age_histogram(&ds, AGE_BINS);
    assert_eq!(ages.len(), 20);
    assert_eq!(ages.iter().map(|b| b.count).sum::<usize>(), 1500);

    let stays = aggregate::length_of_stay_histogram(&ds, STAY_BINS);
    assert_eq!(stays.len(), 15);
    assert_eq!(stays.iter().map(|b| b.count).sum::<usize>(), 1500);
    assert!(stays.first().unwrap().lo >= 1.0);
    assert!(stays.last().unwrap().hi <= 21.0);
}

#[test]
fn top_diseases_and_shares() {
    let ds = seeded();
    let top = aggregate::top_diseases(&ds, TOP_DISEASES);
    assert!(top.len() <= 10);
    assert!(top.windows(2).all(|w| w[0].count >= w[1].count));

    let shares = aggregate::disease_shares(&ds);
    let total: f64 = shares.iter().map(|s| s.value).sum();
    assert!((total - 100.0).abs() < 1e-9);
    let labels: Vec<&str> = shares.iter().map(|s| s.label.as_str()).collect();
    let top_labels: Vec<&str> = top.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, top_labels);
}

#[test]
fn mean_bill_by_disease_ascending() {
    let ds = Dataset::from_records(vec![
        record("P0001", "Male", "Asthma", (2023, 1, 1), 2, 1000.0),
        record("P0002", "Female", "Asthma", (2023, 1, 9), 3, 3000.0),
        record("P0003", "Female", "Cancer", (2023, 2, 1), 1, 1500.0),
        record("P0004", "Male", "Malaria", (2023, 3, 1), 5, 4000.0),
    ]);
    let means = aggregate::mean_bill_by_disease(&ds);
    let got: Vec<(&str, f64)> = means.iter().map(|m| (m.label.as_str(), m.value)).collect();
    assert_eq!(got, vec![("Cancer", 1500.0), ("Asthma", 2000.0), ("Malaria", 4000.0)]);
}

#[test]
fn small_dataset_monthly_grouping() {
    let ds = Dataset::from_records(vec![
        record("P0001", "Male", "Asthma", (2023, 1, 31), 1, 100.0),
        record("P0002", "Female", "Asthma", (2023, 1, 1), 21, 200.5),
        record("P0003", "Female", "Cancer", (2024, 12, 15), 4, 300.25),
    ]);
    let months = aggregate::monthly_bill_totals(&ds);
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month.to_string(), "2023-01");
    assert!((months[0].value - 300.5).abs() < 1e-9);
    assert_eq!(months[1].month, "2024-12".parse::<YearMonth>().unwrap());

    let counts = aggregate::monthly_admissions(&ds);
    assert_eq!(counts.iter().map(|c| c.count).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn value_counts_ties_keep_first_appearance() {
    let counts = value_counts(["b", "a", "a", "c", "b", "d"]);
    let got: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
    assert_eq!(got, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
}

#[test]
fn histogram_edges_and_degenerate_input() {
    let bins = histogram(&[1.0, 2.0, 3.0, 4.0, 5.0], 4);
    assert_eq!(bins.len(), 4);
    assert_eq!(bins.iter().map(|b| b.count).collect::<Vec<_>>(), vec![1, 1, 1, 2]);
    assert_eq!(bins[0].lo, 1.0);
    assert_eq!(bins[3].hi, 5.0);

    let flat = histogram(&[7.0, 7.0], 3);
    assert_eq!(flat.iter().map(|b| b.count).sum::<usize>(), 2);
    assert!((flat[0].lo - 6.5).abs() < 1e-12);
    assert!((flat[2].hi - 7.5).abs() < 1e-12);

    assert!(histogram(&[], 5).is_empty());
    assert!(histogram(&[1.0], 0).is_empty());
}

#[test]
fn year_month_parsing() {
    assert_eq!("2025-08".parse::<YearMonth>().unwrap(), YearMonth::new(2025, 8));
    assert!("2025-13".parse::<YearMonth>().is_err());
    assert!("August".parse::<YearMonth>().is_err());
}
