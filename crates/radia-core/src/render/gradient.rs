//! Radial gradient color ramps
//!
//! A ramp is the 1-D color function of a radial gradient: six positioned
//! stops sampled by normalized distance from the gradient center. Stop
//! positions derive from the shared stop-position offset and are
//! intentionally not clamped, so a large offset pushes interior stops past
//! the outer edge and the final stop takes over the remaining span.

use crate::color::Rgb;
use crate::palette::Palette;

/// One color stop along a gradient ramp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the ramp, 0.0 at the center and 1.0 at the radius
    pub position: f32,
    pub color: Rgb,
}

/// The six stop positions for a stop-position offset given in percent
///
/// The first and last stops are pinned; the four interior stops slide
/// together with the offset.
pub fn stop_positions(stop_position: f32) -> [f32; 6] {
    let shift = stop_position / 100.0;
    [
        0.01,
        0.15 + shift,
        0.23 + shift,
        0.325 + shift,
        0.60 + shift,
        1.0,
    ]
}

/// A resolved radial color ramp: six positioned stops ready for sampling
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    stops: [ColorStop; 6],
}

impl RadialGradient {
    /// Build the ramp for a palette, optionally reversing the stop colors
    ///
    /// Reversal flips the color order only; stop positions stay as computed.
    pub fn new(palette: &Palette, stop_position: f32, reversed: bool) -> Self {
        let positions = stop_positions(stop_position);
        let mut colors = palette.stop_colors();
        if reversed {
            colors.reverse();
        }
        let stops = std::array::from_fn(|i| ColorStop {
            position: positions[i],
            color: colors[i],
        });
        RadialGradient { stops }
    }

    pub fn stops(&self) -> &[ColorStop; 6] {
        &self.stops
    }

    /// Sample the ramp at fraction `t` of the gradient radius
    ///
    /// Before the first stop the first color holds; at or past the last stop
    /// the last color holds. Between stops, each channel interpolates
    /// linearly over the stop span.
    pub fn sample(&self, t: f32) -> Rgb {
        let stops = &self.stops;
        let last = stops.len() - 1;
        if t <= stops[0].position {
            return stops[0].color;
        }
        if t >= stops[last].position {
            return stops[last].color;
        }
        for pair in stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.position {
                let span = hi.position - lo.position;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                let frac = (t - lo.position) / span;
                return lerp(lo.color, hi.color, frac);
            }
        }
        stops[last].color
    }
}

/// Linear per-channel interpolation between two colors
#[inline]
fn lerp(a: Rgb, b: Rgb, frac: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * frac).round() as u8;
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}
