//! Structural errors raised when the upstream tables break their contract

use thiserror::Error;

/// The shape of the input tables is not what aggregation requires.
///
/// These are fatal: aggregation aborts without producing partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("bootstrap table has no {percentile} percentile row")]
    MissingPercentile { percentile: f64 },

    #[error("point estimates have {lineages} lineages but {abundances} abundances")]
    LengthMismatch { lineages: usize, abundances: usize },

    #[error("bootstrap row {percentile} has {found} values, expected {expected}")]
    RowWidthMismatch {
        percentile: f64,
        expected: usize,
        found: usize,
    },
}
