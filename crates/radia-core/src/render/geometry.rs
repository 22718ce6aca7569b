//! Per-variant gradient placement
//!
//! Every composition splits the target region into an upper and a lower
//! half, each painted by one radial gradient. A variant chooses the gradient
//! centers and whether the lower ramp runs reversed; the radius is always
//! three quarters of the region width.

use crate::models::Variant;

/// Placement of one half-canvas radial gradient in region pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    /// Whether the color ramp runs white-first instead of color1-first
    pub reversed: bool,
}

/// The upper- and lower-half gradient placements for a variant
///
/// `width` and `height` are the dimensions of the target region, so the
/// same geometry scales from full-size canvases down to thumbnails.
pub fn variant_halves(variant: Variant, width: u32, height: u32) -> [GradientSpec; 2] {
    let w = width as f32;
    let h = height as f32;
    let radius = 0.75 * w;
    match variant {
        Variant::Swoosh => [
            GradientSpec {
                center_x: 0.0,
                center_y: h / 4.0,
                radius,
                reversed: false,
            },
            GradientSpec {
                center_x: w,
                center_y: 3.0 * h / 4.0,
                radius,
                reversed: false,
            },
        ],
        Variant::Sunrise => [
            GradientSpec {
                center_x: w / 2.0,
                center_y: h / 2.0,
                radius,
                reversed: false,
            },
            GradientSpec {
                center_x: w / 2.0,
                center_y: h / 2.0,
                radius,
                reversed: true,
            },
        ],
        Variant::Move => [
            GradientSpec {
                center_x: w / 2.0,
                center_y: h / 2.0,
                radius,
                reversed: false,
            },
            GradientSpec {
                center_x: w / 2.0,
                center_y: h,
                radius,
                reversed: true,
            },
        ],
    }
}
