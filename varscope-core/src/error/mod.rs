//! Core error types for varscope

pub mod structural;

use thiserror::Error;
pub use structural::StructuralError;

/// Main error type for varscope operations
#[derive(Error, Debug)]
pub enum VarscopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for varscope operations
pub type VarscopeResult<T> = Result<T, VarscopeError>;

impl From<serde_json::Error> for VarscopeError {
    fn from(err: serde_json::Error) -> Self {
        VarscopeError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for VarscopeError {
    fn from(err: anyhow::Error) -> Self {
        VarscopeError::Other(err.to_string())
    }
}
