/// Lineage code to display name mapping
use std::collections::{BTreeMap, HashSet};
use varscope_core::config::TaxonomyConfig;

/// WHO labels for the Pango lineages Freyja reports
const WHO_NAMES: &[(&str, &str)] = &[
    ("B.1.1.7", "Alpha"),
    ("B.1.351", "Beta"),
    ("P.1", "Gamma"),
    ("B.1.427", "Epsilon"),
    ("B.1.429", "Epsilon"),
    ("B.1.525", "Eta"),
    ("B.1.526", "Iota"),
    ("B.1.617.1", "Kappa"),
    ("B.1.621", "Mu"),
    ("B.1.621.1", "Mu"),
    ("P.2", "Zeta"),
    ("B.1.617.3", "B.1.617.3"),
    ("B.1.617.2", "Delta"),
    ("AY", "Delta"),
    ("B.1.1.529", "Omicron"),
    ("BA.1", "BA.1"),
    ("BA.2", "BA.2"),
    ("BA.2.12", "BA.2.12"),
    ("BA.3", "BA.3"),
    ("wt", "wt"),
    ("wt-wuhan", "wt"),
    ("A.21", "Bat"),
    ("other", "Other"),
    ("A", "wt"),
    ("Error", "Error"),
];

/// Immutable taxonomy table.
///
/// Built once at startup and shared by reference. Every value is also a valid
/// resolution target on its own, so the set of display names is indexed next
/// to the code map.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyTable {
    names: BTreeMap<String, String>,
    display_names: HashSet<String>,
}

impl TaxonomyTable {
    /// The built-in WHO table
    pub fn who_default() -> Self {
        Self::from_pairs(WHO_NAMES.iter().copied())
    }

    /// Later pairs overwrite earlier ones with the same code
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let names: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let display_names = names.values().cloned().collect();

        Self {
            names,
            display_names,
        }
    }

    /// Built-in table extended by configured mappings, or the configured
    /// mappings alone when `replace_defaults` is set
    pub fn from_config(config: &TaxonomyConfig) -> Self {
        let configured = config
            .mappings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()));

        let table = if config.replace_defaults {
            Self::from_pairs(configured)
        } else {
            Self::from_pairs(
                WHO_NAMES
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .chain(configured),
            )
        };

        tracing::debug!(
            "Taxonomy table: {} codes, {} display names",
            table.len(),
            table.display_names.len()
        );
        table
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    /// True if `name` appears as a value anywhere in the table
    pub fn is_display_name(&self, name: &str) -> bool {
        self.display_names.contains(name)
    }

    /// Entries sorted by lineage code
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.display_names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
