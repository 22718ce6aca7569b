//! Composition renderer
//!
//! Turns a palette, a layout variant, and a canvas size into pixels. The
//! target region is split at its vertical midpoint; each half is painted by
//! one radial gradient whose placement comes from the variant geometry. A
//! full frame is the main canvas plus one preview thumbnail per variant,
//! all rendered from the same palette snapshot.

mod geometry;
mod gradient;
mod surface;


pub use geometry::{variant_halves, GradientSpec};
pub use gradient::{stop_positions, ColorStop, RadialGradient};
pub use surface::Surface;

use std::ops::Range;

use crate::models::{CanvasSize, Variant};
use crate::palette::Palette;

/// Edge length of preview thumbnails, in pixels
pub const THUMBNAIL_SIZE: u32 = 100;

/// One complete render pass: the main canvas plus a thumbnail per variant
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub main: Surface,
    /// Previews in `Variant::ALL` order
    pub thumbnails: [Surface; 3],
}

/// Render one variant into a fresh surface of the given dimensions
pub fn render_surface(
    palette: &Palette,
    variant: Variant,
    width: u32,
    height: u32,
    stop_position: f32,
) -> Surface {
    let mut surface = Surface::new(width, height);
    let halves = variant_halves(variant, width, height);
    let mid = height / 2;
    paint_rows(&mut surface, 0..mid, palette, stop_position, &halves[0]);
    paint_rows(&mut surface, mid..height, palette, stop_position, &halves[1]);
    surface
}

/// Render the main canvas and all three variant previews from one palette
/// snapshot
pub fn render_frame(
    palette: &Palette,
    variant: Variant,
    size: CanvasSize,
    stop_position: f32,
) -> Frame {
    let main = render_surface(palette, variant, size.width, size.height, stop_position);
    let thumbnails = Variant::ALL
        .map(|v| render_surface(palette, v, THUMBNAIL_SIZE, THUMBNAIL_SIZE, stop_position));
    Frame { main, thumbnails }
}

/// Paint a row band of the surface with one radial gradient
///
/// Every pixel samples the ramp at its center point, so a pixel at (x, y)
/// measures its distance from the gradient center at (x + 0.5, y + 0.5).
fn paint_rows(
    surface: &mut Surface,
    rows: Range<u32>,
    palette: &Palette,
    stop_position: f32,
    spec: &GradientSpec,
) {
    let ramp = RadialGradient::new(palette, stop_position, spec.reversed);
    for y in rows {
        let dy = y as f32 + 0.5 - spec.center_y;
        for x in 0..surface.width() {
            let dx = x as f32 + 0.5 - spec.center_x;
            let t = (dx * dx + dy * dy).sqrt() / spec.radius;
            surface.set_pixel(x, y, ramp.sample(t));
        }
    }
}
