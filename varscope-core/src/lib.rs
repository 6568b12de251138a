//! Core utilities and types shared across all varscope crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, Config};
pub use error::{StructuralError, VarscopeError, VarscopeResult};

// Re-export core types
pub use types::{
    AbundanceRecord, AggregateResult, BootstrapTable, Percentile, PointEstimates,
};

// Re-export system utilities
pub use system::{default_config_path, varscope_home};
