// File: crates/hospital-data/src/generator.rs
// Summary: Uniform random generation of patient records from the fixed pools.

use chrono::{NaiveDate, TimeDelta};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pools::{DISEASES, DOCTORS, FIRST_NAMES, GENDERS, LAST_NAMES};
use crate::record::{round_cents, PatientRecord};

pub const DEFAULT_COUNT: usize = 1500;

pub const ADMISSION_START: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(d) => d,
    None => panic!("invalid admission start"),
};

pub const ADMISSION_END: NaiveDate = match NaiveDate::from_ymd_opt(2025, 8, 1) {
    Some(d) => d,
    None => panic!("invalid admission end"),
};

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of records; IDs run 1..=count.
    pub count: usize,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub admission_start: NaiveDate,
    pub admission_end: NaiveDate,
    pub min_stay_days: i64,
    pub max_stay_days: i64,
    pub min_age: u32,
    pub max_age: u32,
    pub min_bill: f64,
    pub max_bill: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            admission_start: ADMISSION_START,
            admission_end: ADMISSION_END,
            min_stay_days: 1,
            max_stay_days: 21,
            min_age: 1,
            max_age: 90,
            min_bill: 500.0,
            max_bill: 5000.0,
        }
    }
}

impl GeneratorConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate `config.count` records, seeded from `config.seed` when present.
pub fn generate(config: &GeneratorConfig) -> Vec<PatientRecord> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with_rng(&mut rng, config)
}

/// Generate records drawing from a caller-supplied RNG.
pub fn generate_with_rng<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> Vec<PatientRecord> {
    let records: Vec<PatientRecord> = (1..=config.count).map(|i| generate_one(rng, i, config)).collect();
    debug!("generated {} patient records", records.len());
    records
}

fn generate_one<R: Rng>(rng: &mut R, seq: usize, config: &GeneratorConfig) -> PatientRecord {
    let name = format!("{} {}", pick(rng, &FIRST_NAMES), pick(rng, &LAST_NAMES));
    let age = rng.random_range(config.min_age..=config.max_age);
    let gender = pick(rng, &GENDERS);
    let disease = pick(rng, &DISEASES);
    let doctor = pick(rng, &DOCTORS);
    let admission_date = random_date(rng, config.admission_start, config.admission_end);
    let stay = rng.random_range(config.min_stay_days..=config.max_stay_days);
    let discharge_date = admission_date + TimeDelta::days(stay);
    let bill_amount = round_cents(rng.random_range(config.min_bill..=config.max_bill));

    PatientRecord {
        patient_id: patient_id(seq),
        name,
        age,
        gender: gender.to_string(),
        disease: disease.to_string(),
        doctor: doctor.to_string(),
        admission_date,
        discharge_date,
        bill_amount,
    }
}

/// `P` followed by the zero-padded sequence number.
pub fn patient_id(seq: usize) -> String {
    format!("P{seq:04}")
}

/// Uniform date in `[start, end]`, both inclusive.
pub fn random_date<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + TimeDelta::days(rng.random_range(0..=span))
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}
