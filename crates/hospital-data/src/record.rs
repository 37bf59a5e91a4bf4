// File: crates/hospital-data/src/record.rs
// Summary: One synthetic patient row and its CSV field encoding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for both date columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Disease")]
    pub disease: String,
    #[serde(rename = "Doctor")]
    pub doctor: String,
    #[serde(rename = "Admission_Date", with = "date_format")]
    pub admission_date: NaiveDate,
    #[serde(rename = "Discharge_Date", with = "date_format")]
    pub discharge_date: NaiveDate,
    #[serde(rename = "Bill_Amount", serialize_with = "money::serialize")]
    pub bill_amount: f64,
}

impl PatientRecord {
    /// Discharge minus admission, in whole days.
    pub fn length_of_stay(&self) -> i64 {
        (self.discharge_date - self.admission_date).num_days()
    }
}

/// Round to cents.
pub fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod money {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{amount:.2}"))
    }
}
