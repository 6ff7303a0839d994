//! Output formatting and persistence for inflammation statistics.
//!
//! Supports pretty-printing, JSON serialization, and CSV report writing.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::stats::daily_summary;
use crate::table::InflammationTable;
use csv::Writer;
use std::path::Path;

/// Logs a table using Rust's debug pretty-print format.
pub fn print_pretty(table: &InflammationTable) {
    debug!("{:#?}", table);
}

/// Serializes a reportable value (table, summary, or clinical-model value)
/// as pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes the per-day summary report to a CSV file.
///
/// Produces a `day,mean,max,min,std_dev` header followed by one row per day
/// of the table. An existing file at `path` is overwritten.
pub fn write_daily_summary(path: impl AsRef<Path>, table: &InflammationTable) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Writing daily summary");

    let mut writer = Writer::from_path(path)?;
    for row in daily_summary(table) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), days = table.num_days(), "Daily summary written");
    Ok(())
}
