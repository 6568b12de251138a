/// Deterministic display colors for lineage groups
use varscope_core::config::PaletteConfig;
use varscope_core::{VarscopeError, VarscopeResult};

/// matplotlib `tab20b`
const TAB20B: [&str; 20] = [
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252", "#b5cf6b", "#cedb9c",
    "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b", "#e7969c",
    "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];

/// First 16 colors of matplotlib `tab20c`; the trailing greys are left out
const TAB20C_HEAD: [&str; 16] = [
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
];

pub const OTHER_COLOR: &str = "#BBBBBB";

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64-bit hash; identical across runs, processes and platforms
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Ordered, non-empty color list plus the color reserved for "Other"
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
    other: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: TAB20B
                .iter()
                .chain(TAB20C_HEAD.iter())
                .map(|c| c.to_string())
                .collect(),
            other: OTHER_COLOR.to_string(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<String>, other: impl Into<String>) -> VarscopeResult<Self> {
        let other = other.into();

        if colors.is_empty() {
            return Err(VarscopeError::Configuration(
                "palette must contain at least one color".to_string(),
            ));
        }
        for color in colors.iter().chain(std::iter::once(&other)) {
            if !is_hex_color(color) {
                return Err(VarscopeError::Configuration(format!(
                    "invalid color '{}', expected #rrggbb",
                    color
                )));
            }
        }

        Ok(Self { colors, other })
    }

    /// Built-in colors unless the config lists its own
    pub fn from_config(config: &PaletteConfig) -> VarscopeResult<Self> {
        let colors = if config.colors.is_empty() {
            Self::default().colors
        } else {
            config.colors.clone()
        };
        Self::new(colors, config.other_color.clone())
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Maps display names to palette colors
#[derive(Debug, Clone, Copy)]
pub struct ColorAssigner<'a> {
    palette: &'a Palette,
}

impl<'a> ColorAssigner<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// "Other" in any case gets the reserved color; everything else is
    /// hashed into the palette. Different names may share a color.
    pub fn color_for(&self, name: &str) -> &'a str {
        if name.eq_ignore_ascii_case("other") {
            return self.palette.other();
        }

        let idx = (fnv1a_64(name.as_bytes()) % self.palette.len() as u64) as usize;
        &self.palette.colors[idx]
    }
}
