//! Canvas size parsing functions.

use radia_core::models::CanvasSize;

/// Parse a canvas size in "WIDTHxHEIGHT" format (e.g. "1350x1350")
pub fn parse_canvas_size(size_str: &str) -> Result<CanvasSize, String> {
    CanvasSize::parse(size_str)
}
