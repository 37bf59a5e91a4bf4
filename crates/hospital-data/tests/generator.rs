// File: crates/hospital-data/tests/generator.rs
// Purpose: Structural invariants of generated patient records.

use std::collections::HashSet;

use chrono::NaiveDate;
use hospital_data::generator::{patient_id, random_date, ADMISSION_END, ADMISSION_START};
use hospital_data::pools::{is_pool_name, DISEASES, DOCTORS, GENDERS};
use hospital_data::{generate, Dataset, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn default_run_has_1500_sequential_ids() {
    let records = generate(&GeneratorConfig::default());
    assert_eq!(records.len(), 1500);

    let ids: Vec<&str> = records.iter().map(|r| r.patient_id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"P0001"));
    assert_eq!(ids.last(), Some(&"P1500"));
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id, patient_id(i + 1));
    }
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 1500);
}

#[test]
fn every_row_respects_field_bounds() {
    let records = generate(&GeneratorConfig::default().with_seed(Some(7)));
    for r in &records {
        assert!(r.discharge_date > r.admission_date, "{}", r.patient_id);
        let stay = (r.discharge_date - r.admission_date).num_days();
        assert!((1..=21).contains(&stay), "{} stay {stay}", r.patient_id);
        assert!(r.admission_date >= ADMISSION_START && r.admission_date <= ADMISSION_END);
        assert!((1..=90).contains(&r.age));
        assert!((500.0..=5000.0).contains(&r.bill_amount));
        let cents = r.bill_amount * 100.0;
        assert!((cents - cents.round()).abs() < 1e-6, "{} has sub-cent bill", r.patient_id);
        assert!(GENDERS.contains(&r.gender.as_str()));
        assert!(DISEASES.contains(&r.disease.as_str()));
        assert!(DOCTORS.contains(&r.doctor.as_str()));
        assert!(is_pool_name(&r.name), "{}", r.name);
    }
}

#[test]
fn generated_dataset_validates_clean() {
    let config = GeneratorConfig::default().with_seed(Some(99));
    let ds = Dataset::from_records(generate(&config));
    assert!(ds.validate(&config).is_empty());
}

#[test]
fn same_seed_same_records() {
    let config = GeneratorConfig::default().with_count(200).with_seed(Some(42));
    assert_eq!(generate(&config), generate(&config));
}

#[test]
fn unseeded_runs_share_shape() {
    let a = generate(&GeneratorConfig::default());
    let b = generate(&GeneratorConfig::default());
    assert_eq!(a.len(), b.len());
    let ids_a: Vec<_> = a.iter().map(|r| &r.patient_id).collect();
    let ids_b: Vec<_> = b.iter().map(|r| &r.patient_id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn random_date_stays_in_window() {
    let mut rng = StdRng::seed_from_u64(1);
    let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let d = random_date(&mut rng, start, end);
        assert!(d >= start && d <= end);
        seen.insert(d);
    }
    // five inclusive days including the leap day
    assert_eq!(seen.len(), 5);
    assert_eq!(random_date(&mut rng, start, start), start);
}

#[test]
fn custom_count_and_wide_ids() {
    let records = generate(&GeneratorConfig::default().with_count(3).with_seed(Some(3)));
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].patient_id, "P0003");
    assert_eq!(patient_id(12345), "P12345");
    assert!(generate(&GeneratorConfig::default().with_count(0)).is_empty());
}
