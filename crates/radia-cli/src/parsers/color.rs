//! Color and variant parsing functions.

use radia_core::color::Rgb;
use radia_core::models::Variant;

/// Parse a hex color in "#RRGGBB" format
///
/// The leading '#' may be omitted so the value does not need shell quoting.
pub fn parse_hex_color(color_str: &str) -> Result<Rgb, String> {
    let trimmed = color_str.trim();
    if trimmed.starts_with('#') {
        Rgb::from_hex(trimmed)
    } else {
        Rgb::from_hex(&format!("#{}", trimmed))
    }
}

/// Parse a layout variant name: "swoosh", "sunrise", or "move"
pub fn parse_variant(variant_str: &str) -> Result<Variant, String> {
    variant_str.parse()
}
