//! Palette document import and export
//!
//! Palettes travel as small JSON documents carrying exactly the four
//! user-settable colors as hex strings. A document missing a field or
//! carrying a malformed color fails to parse, so callers keep their current
//! palette on error.

use std::fs;
use std::path::Path;

use crate::palette::Palette;

/// Default file name offered when saving a palette document
pub const PALETTE_FILE_NAME: &str = "colors.json";

/// Serialize a palette to its JSON document form
pub fn to_json(palette: &Palette) -> Result<String, String> {
    serde_json::to_string_pretty(palette)
        .map_err(|e| format!("Failed to serialize palette: {}", e))
}

/// Parse a palette from its JSON document form
pub fn from_json(json: &str) -> Result<Palette, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse palette: {}", e))
}

/// Write a palette document to disk
pub fn save_palette(palette: &Palette, path: &Path) -> Result<(), String> {
    let json = to_json(palette)?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Read a palette document from disk
pub fn load_palette(path: &Path) -> Result<Palette, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    from_json(&json)
}
