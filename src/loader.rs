//! CSV loading of inflammation tables.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::table::InflammationTable;

/// Loads an [`InflammationTable`] from a comma-delimited CSV file.
///
/// Expects one row per patient and one column per day, with no header row.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a field does not parse as
/// a number, or the rows are not all the same length.
pub fn load_csv(path: impl AsRef<Path>) -> Result<InflammationTable> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;

        let mut values = Vec::with_capacity(record.len());
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.trim().parse().with_context(|| {
                format!("row {row}, column {col}: invalid numeric value {field:?}")
            })?;
            values.push(value);
        }

        rows.push(values);
    }

    let table = InflammationTable::from_rows(rows)?;
    debug!(
        path = %path.display(),
        patients = table.num_patients(),
        days = table.num_days(),
        "Loaded inflammation table"
    );

    Ok(table)
}
