use crate::error::StructuralError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percentile keys are matched with this absolute tolerance
pub const PERCENTILE_TOLERANCE: f64 = 1e-9;

/// The three bootstrap rows aggregation depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Percentile {
    P25,
    P50,
    P75,
}

impl Percentile {
    pub fn as_f64(self) -> f64 {
        match self {
            Percentile::P25 => 0.25,
            Percentile::P50 => 0.50,
            Percentile::P75 => 0.75,
        }
    }

    pub fn matches(self, value: f64) -> bool {
        (value - self.as_f64()).abs() <= PERCENTILE_TOLERANCE
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileRow {
    pub percentile: f64,
    pub values: Vec<f64>,
}

/// Bootstrap resample summary: one column per lineage code, one row per
/// percentile.
///
/// Freyja writes more percentiles than the three needed here; extra rows are
/// kept and ignored. Every row must have exactly one value per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BootstrapTable {
    columns: Vec<String>,
    rows: Vec<PercentileRow>,
}

impl BootstrapTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, percentile: f64, values: Vec<f64>) -> Result<(), StructuralError> {
        if values.len() != self.columns.len() {
            return Err(StructuralError::RowWidthMismatch {
                percentile,
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        self.rows.push(PercentileRow { percentile, values });
        Ok(())
    }

    /// Builder form of [`push_row`](Self::push_row)
    pub fn with_row(mut self, percentile: f64, values: Vec<f64>) -> Result<Self, StructuralError> {
        self.push_row(percentile, values)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PercentileRow] {
        &self.rows
    }

    pub fn percentiles(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.percentile)
    }

    /// Values of a required percentile row; the first matching row wins
    pub fn row(&self, percentile: Percentile) -> Result<&[f64], StructuralError> {
        self.rows
            .iter()
            .find(|r| percentile.matches(r.percentile))
            .map(|r| r.values.as_slice())
            .ok_or(StructuralError::MissingPercentile {
                percentile: percentile.as_f64(),
            })
    }

    /// `bootstrap[percentile][column]`; `Ok(None)` if the column is absent
    pub fn value(&self, percentile: Percentile, column: &str) -> Result<Option<f64>, StructuralError> {
        let row = self.row(percentile)?;
        Ok(self
            .columns
            .iter()
            .position(|c| c == column)
            .map(|idx| row[idx]))
    }
}
