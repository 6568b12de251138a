pub mod paths;

pub use paths::{default_config_path, varscope_home};
