// File: crates/hospital-data/src/lib.rs
// Summary: Library entry point; synthetic patient records, CSV store, dataset and aggregations.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod month;
pub mod pools;
pub mod record;
pub mod store;

pub use dataset::{Dataset, PatientRow, Violation};
pub use error::{DatasetError, Result};
pub use generator::{generate, generate_with_rng, GeneratorConfig};
pub use month::YearMonth;
pub use record::PatientRecord;
pub use store::{read_records, write_records, HEADER};
