pub mod freyja;

pub use freyja::{parse_bootstrap, parse_bootstrap_reader, parse_demix, parse_demix_str};
