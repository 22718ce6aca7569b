//! Color types and color space conversions
//!
//! The palette model works in 24-bit RGB; HSL is the working space for
//! deriving harmonious palettes by hue rotation.

mod hsl;
mod rgb;

#[cfg(test)]
mod tests;

// Core color type
pub use rgb::Rgb;

// HSL conversions and hue rotation
pub use hsl::{hsl_to_rgb, rgb_to_hsl, rotate_color, Hsl};
