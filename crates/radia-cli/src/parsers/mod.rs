//! Parsing functions for CLI arguments.

mod color;
mod size;

pub use color::{parse_hex_color, parse_variant};
pub use size::parse_canvas_size;
