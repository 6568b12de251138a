pub mod resolver;
pub mod table;

// Re-export commonly used types
pub use resolver::NameResolver;
pub use table::TaxonomyTable;
