//! Lineage naming and abundance aggregation for varscope

pub mod aggregate;
pub mod color;
pub mod formats;
pub mod taxonomy;

// Re-export commonly used types
pub use aggregate::GroupAggregator;
pub use color::{fnv1a_64, ColorAssigner, Palette};
pub use formats::freyja::{parse_bootstrap, parse_demix};
pub use taxonomy::{NameResolver, TaxonomyTable};
