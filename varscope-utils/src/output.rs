//! Console output helpers

use colored::*;
use comfy_table::{Cell, CellAlignment, Table};

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg.red());
}

/// Create a standard table with consistent styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Create a header cell with center alignment
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .set_alignment(CellAlignment::Center)
        .add_attribute(comfy_table::Attribute::Bold)
}

/// Format a percentage with two decimals. NaN and infinities are printed
/// as-is so missing bootstrap data stays visible.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        value.to_string()
    }
}

/// Parse a `#rrggbb` color string
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A colored block followed by the hex code, for terminal listings
pub fn color_swatch(hex: &str) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => format!("{} {}", "■".truecolor(r, g, b), hex),
        None => hex.to_string(),
    }
}
