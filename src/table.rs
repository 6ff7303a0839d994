//! The 2D inflammation table and its rectangularity invariant.

use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("row {row} has {len} values, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A rectangular table of inflammation measurements.
///
/// Rows are patients, columns are days. Every row has the same length;
/// [`InflammationTable::from_rows`] rejects ragged input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InflammationTable {
    rows: Vec<Vec<f64>>,
}

impl InflammationTable {
    /// Builds a table from per-patient rows.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RaggedRow`] if any row's length differs from
    /// the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TableError> {
        if let Some(expected) = rows.first().map(Vec::len) {
            for (row, values) in rows.iter().enumerate() {
                if values.len() != expected {
                    return Err(TableError::RaggedRow {
                        row,
                        len: values.len(),
                        expected,
                    });
                }
            }
        }

        Ok(InflammationTable { rows })
    }

    /// Builds a table from rows already known to be rectangular.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Self {
        InflammationTable { rows }
    }

    /// Number of patients (rows).
    pub fn num_patients(&self) -> usize {
        self.rows.len()
    }

    /// Number of days (columns).
    pub fn num_days(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over per-patient rows, in patient order.
    pub fn patient_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over a single day's values across all patients.
    ///
    /// # Panics
    ///
    /// Panics if `day` is out of range for the table.
    pub fn day_values(&self, day: usize) -> impl Iterator<Item = f64> {
        self.rows.iter().map(move |row| row[day])
    }
}
