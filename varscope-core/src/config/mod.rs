//! Configuration types for varscope

use crate::VarscopeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxonomyConfig {
    /// Use only `mappings`, dropping the built-in WHO table
    #[serde(default)]
    pub replace_defaults: bool,
    /// Extra lineage code to display name mappings; these win over built-ins
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_other_color")]
    pub other_color: String,
    /// Empty means the built-in 36 color palette
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Error bars span median +/- scale * spread
    #[serde(default = "default_error_bar_scale")]
    pub error_bar_scale: f64,
    #[serde(default = "default_label_jitter")]
    pub label_jitter: bool,
    #[serde(default)]
    pub jitter_seed: u64,
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_report_format")]
    pub report_format: String,
}

// Default value functions
fn default_other_color() -> String { "#BBBBBB".to_string() }
fn default_width() -> u32 { 1600 }
fn default_height() -> u32 { 1200 }
fn default_font_size() -> u32 { 28 }
fn default_error_bar_scale() -> f64 { 3.0 }
fn default_label_jitter() -> bool { true }
fn default_title() -> String { "Freyja bootstrapping".to_string() }
fn default_report_format() -> String { "text".to_string() }

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            other_color: default_other_color(),
            colors: Vec::new(),
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            font_size: default_font_size(),
            error_bar_scale: default_error_bar_scale(),
            label_jitter: default_label_jitter(),
            jitter_seed: 0,
            title: default_title(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_format: default_report_format(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, VarscopeError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| VarscopeError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load `path` if given, otherwise the default config file if it exists,
/// otherwise built-in defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, VarscopeError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let default_path = crate::system::default_config_path();
    if default_path.exists() {
        tracing::debug!("Loading config from {}", default_path.display());
        load_config(default_path)
    } else {
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), VarscopeError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| VarscopeError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
