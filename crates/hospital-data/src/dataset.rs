// File: crates/hospital-data/src/dataset.rs
// Summary: Tabular in-memory dataset with derived Length_of_Stay and admission month.

use std::fmt;
use std::path::Path;

use log::info;

use crate::error::{DatasetError, Result};
use crate::generator::{patient_id, GeneratorConfig};
use crate::month::YearMonth;
use crate::pools::{is_pool_name, DISEASES, DOCTORS, GENDERS};
use crate::record::{round_cents, PatientRecord};
use crate::store::read_records;

/// One loaded record plus the columns derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientRow {
    pub record: PatientRecord,
    pub length_of_stay: i64,
    pub admission_month: YearMonth,
}

impl From<PatientRecord> for PatientRow {
    fn from(record: PatientRecord) -> Self {
        Self {
            length_of_stay: record.length_of_stay(),
            admission_month: YearMonth::of(record.admission_date),
            record,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<PatientRow>,
}

impl Dataset {
    pub fn from_records(records: Vec<PatientRecord>) -> Self {
        Self { rows: records.into_iter().map(PatientRow::from).collect() }
    }

    /// Load the CSV at `path` and derive the computed columns. An empty file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let records = read_records(path)?;
        if records.is_empty() {
            return Err(DatasetError::Empty(path.to_path_buf()));
        }
        info!("loaded {} rows from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    pub fn rows(&self) -> &[PatientRow] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = &PatientRecord> + '_ {
        self.rows.iter().map(|r| &r.record)
    }

    pub fn total_bill(&self) -> f64 {
        self.records().map(|r| r.bill_amount).sum()
    }

    /// Check every row against the generation rules in `config`.
    pub fn validate(&self, config: &GeneratorConfig) -> Vec<Violation> {
        let mut out = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            let r = &row.record;
            let mut flag = |problem: String| out.push(Violation { patient_id: r.patient_id.clone(), problem });

            let want_id = patient_id(i + 1);
            if r.patient_id != want_id {
                flag(format!("expected id {want_id}"));
            }
            if !is_pool_name(&r.name) {
                flag(format!("name `{}` not drawn from the name pools", r.name));
            }
            if !(config.min_age..=config.max_age).contains(&r.age) {
                flag(format!("age {} outside {}..={}", r.age, config.min_age, config.max_age));
            }
            if !GENDERS.contains(&r.gender.as_str()) {
                flag(format!("unknown gender `{}`", r.gender));
            }
            if !DISEASES.contains(&r.disease.as_str()) {
                flag(format!("unknown disease `{}`", r.disease));
            }
            if !DOCTORS.contains(&r.doctor.as_str()) {
                flag(format!("unknown doctor `{}`", r.doctor));
            }
            if r.admission_date < config.admission_start || r.admission_date > config.admission_end {
                flag(format!("admission {} outside window", r.admission_date));
            }
            if !(config.min_stay_days..=config.max_stay_days).contains(&row.length_of_stay) {
                flag(format!("length of stay {} days", row.length_of_stay));
            }
            if r.bill_amount < config.min_bill || r.bill_amount > config.max_bill {
                flag(format!("bill {:.2} outside range", r.bill_amount));
            }
            if (round_cents(r.bill_amount) - r.bill_amount).abs() > 1e-9 {
                flag(format!("bill {} has more than two decimals", r.bill_amount));
            }
        }
        out
    }
}

/// A row that breaks one of the generation rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub patient_id: String,
    pub problem: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.patient_id, self.problem)
    }
}
