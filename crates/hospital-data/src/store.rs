// File: crates/hospital-data/src/store.rs
// Summary: Flat CSV file store for patient records (header + one row per record).

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{DatasetError, Result};
use crate::record::PatientRecord;

/// Column header, in file order.
pub const HEADER: [&str; 9] = [
    "Patient_ID",
    "Name",
    "Age",
    "Gender",
    "Disease",
    "Doctor",
    "Admission_Date",
    "Discharge_Date",
    "Bill_Amount",
];

/// Create or overwrite `path` with the header and all `records`.
pub fn write_records(path: impl AsRef<Path>, records: &[PatientRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
    let mut out = write_to(BufWriter::new(file), records)?;
    out.flush().map_err(|e| DatasetError::io(path, e))?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Write the header and rows to `writer`, returning it once the CSV layer is flushed.
pub fn write_to<W: Write>(writer: W, records: &[PatientRecord]) -> Result<W> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    wtr.into_inner().map_err(|e| DatasetError::Csv(csv::Error::from(e.into_error())))
}

/// Read every record from `path`. The header must match [`HEADER`] exactly.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<PatientRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    let records = read_from(BufReader::new(file))?;
    debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_from<R: Read>(reader: R) -> Result<Vec<PatientRecord>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?;
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(DatasetError::HeaderMismatch {
            expected: HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut out = Vec::new();
    for rec in rdr.deserialize::<PatientRecord>() {
        out.push(rec?);
    }
    Ok(out)
}
