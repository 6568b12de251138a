//! Shared data types for lineage abundance analysis

pub mod abundance;
pub mod aggregate;
pub mod bootstrap;

pub use abundance::{AbundanceRecord, PointEstimates};
pub use aggregate::AggregateResult;
pub use bootstrap::{BootstrapTable, Percentile, PercentileRow, PERCENTILE_TOLERANCE};
