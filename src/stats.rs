//! Daily statistics over an inflammation table.
//!
//! Each daily reduction collapses the patient axis, producing one value per
//! day (column) of the table.

use serde::Serialize;

use crate::table::InflammationTable;

#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// Inflammation values are non-negative by definition; normalisation
    /// rejects tables that violate this.
    #[error("negative inflammation value {value} for patient {patient} on day {day}")]
    NegativeValue {
        patient: usize,
        day: usize,
        value: f64,
    },
}

/// One row of the per-day summary report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub day: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std_dev: f64,
}

/// Mean inflammation for each day across all patients.
pub fn daily_mean(table: &InflammationTable) -> Vec<f64> {
    reduce_days(table, mean)
}

/// Maximum inflammation for each day across all patients.
pub fn daily_max(table: &InflammationTable) -> Vec<f64> {
    reduce_days(table, |values| {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Minimum inflammation for each day across all patients.
pub fn daily_min(table: &InflammationTable) -> Vec<f64> {
    reduce_days(table, |values| {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Population standard deviation of inflammation for each day across all
/// patients.
pub fn daily_std(table: &InflammationTable) -> Vec<f64> {
    reduce_days(table, |values| stddev(values, mean(values)))
}

/// Combines the daily reductions into one [`DailySummary`] row per day.
pub fn daily_summary(table: &InflammationTable) -> Vec<DailySummary> {
    let means = daily_mean(table);
    let maxes = daily_max(table);
    let mins = daily_min(table);
    let stds = daily_std(table);

    means
        .into_iter()
        .zip(maxes)
        .zip(mins)
        .zip(stds)
        .enumerate()
        .map(|(day, (((mean, max), min), std_dev))| DailySummary {
            day,
            mean,
            max,
            min,
            std_dev,
        })
        .collect()
}

/// Normalises each patient row against that patient's own maximum.
///
/// Non-finite entries are ignored when computing the row maximum. Entries
/// whose division yields NaN come out as 0, which also covers rows whose
/// maximum is 0; negative quotients are clamped to 0.
///
/// # Errors
///
/// Returns [`StatsError::NegativeValue`] if any input value is negative.
pub fn patient_normalise(table: &InflammationTable) -> Result<InflammationTable, StatsError> {
    for (patient, row) in table.patient_rows().enumerate() {
        for (day, &value) in row.iter().enumerate() {
            if value < 0.0 {
                return Err(StatsError::NegativeValue {
                    patient,
                    day,
                    value,
                });
            }
        }
    }

    let rows = table
        .patient_rows()
        .map(|row| {
            let max = row
                .iter()
                .copied()
                .filter(|v| v.is_finite())
                .fold(f64::NEG_INFINITY, f64::max);

            row.iter()
                .map(|&value| {
                    let scaled = value / max;
                    if scaled.is_nan() || scaled < 0.0 {
                        0.0
                    } else {
                        scaled
                    }
                })
                .collect()
        })
        .collect();

    // Normalisation preserves the input shape, so the result stays rectangular.
    Ok(InflammationTable::from_rows_unchecked(rows))
}

fn reduce_days(table: &InflammationTable, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    (0..table.num_days())
        .map(|day| {
            let values: Vec<f64> = table.day_values(day).collect();
            f(&values)
        })
        .collect()
}

/// Arithmetic mean of a slice of values. Returns 0.0 for empty input.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<f64>>) -> InflammationTable {
        InflammationTable::from_rows(rows).unwrap()
    }

    #[test]
    fn test_daily_mean_integers() {
        let data = table(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert_eq!(daily_mean(&data), vec![3.0, 4.0]);
    }

    #[test]
    fn test_daily_mean_zeros() {
        let data = table(vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert_eq!(daily_mean(&data), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_max_zeros() {
        let data = table(vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ]);
        assert_eq!(daily_max(&data), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_daily_max_and_min() {
        let data = table(vec![
            vec![4.0, 2.0, 5.0],
            vec![1.0, 6.0, 2.0],
            vec![4.0, 1.0, 9.0],
        ]);
        assert_eq!(daily_max(&data), vec![4.0, 6.0, 9.0]);
        assert_eq!(daily_min(&data), vec![1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_daily_std_constant_columns() {
        let data = table(vec![vec![3.0, 7.0], vec![3.0, 7.0]]);
        assert_eq!(daily_std(&data), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_std_known_values() {
        // Column values 1 and 3: mean 2, population variance 1, std 1.
        let data = table(vec![vec![1.0], vec![3.0]]);
        assert_eq!(daily_std(&data), vec![1.0]);
    }

    #[test]
    fn test_reductions_length_matches_days() {
        let data = table(vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]]);
        assert_eq!(daily_mean(&data).len(), 4);
        assert_eq!(daily_max(&data).len(), 4);
        assert_eq!(daily_min(&data).len(), 4);
        assert_eq!(daily_std(&data).len(), 4);
    }

    #[test]
    fn test_reductions_on_empty_table() {
        let data = table(vec![]);
        assert!(daily_mean(&data).is_empty());
        assert!(daily_max(&data).is_empty());
        assert!(daily_min(&data).is_empty());
        assert!(daily_std(&data).is_empty());
    }

    #[test]
    fn test_daily_summary_rows() {
        let data = table(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let summary = daily_summary(&data);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0], DailySummary {
            day: 0,
            mean: 2.0,
            max: 3.0,
            min: 1.0,
            std_dev: 1.0,
        });
        assert_eq!(summary[1].day, 1);
        assert_eq!(summary[1].mean, 3.0);
    }

    #[test]
    fn test_patient_normalise_scales_rows() {
        let data = table(vec![vec![1.0, 1.0, 1.0], vec![1.0, 2.0, 4.0]]);
        let normalised = patient_normalise(&data).unwrap();

        let rows: Vec<Vec<f64>> = normalised.patient_rows().map(<[f64]>::to_vec).collect();
        assert_eq!(rows, vec![vec![1.0, 1.0, 1.0], vec![0.25, 0.5, 1.0]]);
    }

    #[test]
    fn test_patient_normalise_output_in_unit_interval() {
        let data = table(vec![vec![3.0, 0.0, 7.0], vec![2.0, 5.0, 1.0]]);
        let normalised = patient_normalise(&data).unwrap();

        for row in normalised.patient_rows() {
            for &value in row {
                assert!((0.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_patient_normalise_zero_row() {
        let data = table(vec![vec![0.0, 0.0, 0.0], vec![1.0, 2.0, 4.0]]);
        let normalised = patient_normalise(&data).unwrap();

        let rows: Vec<Vec<f64>> = normalised.patient_rows().map(<[f64]>::to_vec).collect();
        assert_eq!(rows[0], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_patient_normalise_ignores_nan_in_max() {
        let data = InflammationTable::from_rows(vec![vec![f64::NAN, 2.0, 4.0]]).unwrap();
        let normalised = patient_normalise(&data).unwrap();

        let row: Vec<f64> = normalised.patient_rows().next().unwrap().to_vec();
        assert_eq!(row, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_patient_normalise_rejects_negative() {
        let data = table(vec![vec![1.0, 2.0], vec![3.0, -4.0]]);
        let err = patient_normalise(&data).unwrap_err();

        assert!(matches!(err, StatsError::NegativeValue {
            patient: 1,
            day: 1,
            ..
        }));
        assert!(err.to_string().contains("negative inflammation value"));
    }
}
