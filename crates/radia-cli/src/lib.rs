//! Shared utilities for radia-cli
//!
//! Parsing helpers used by the command-line frontend.

pub mod parsers;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{parse_canvas_size, parse_hex_color, parse_variant};
