use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the path to avoid repeated environment lookups
static VARSCOPE_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the varscope home directory
/// Checks VARSCOPE_HOME environment variable, falls back to ${HOME}/.varscope
pub fn varscope_home() -> PathBuf {
    VARSCOPE_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("VARSCOPE_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".varscope")
            }
        })
        .clone()
}

/// Config file read when no `--config` is given
pub fn default_config_path() -> PathBuf {
    varscope_home().join("config.toml")
}
