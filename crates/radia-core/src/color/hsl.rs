//! HSL (Hue-Saturation-Lightness) color space conversions and hue rotation

use super::rgb::Rgb;

/// HSL color representation
/// - H (hue): 0-359 whole degrees
/// - S (saturation): 0-100 whole percent
/// - L (lightness): 0-100 whole percent
///
/// Components are quantized to integers: palette derivation rotates hues in
/// whole degrees, and the quantization keeps RGB round trips within ±1 per
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

/// Convert RGB to HSL
///
/// When the max channel equals the min channel the color is achromatic and
/// both hue and saturation are forced to 0.
#[inline]
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Lightness
    let l = (max + min) / 2.0;

    // Achromatic case
    if delta < 1e-9 {
        return Hsl {
            h: 0,
            s: 0,
            l: (l * 100.0).round() as i32,
        };
    }

    // Saturation
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Hue, as a fraction of a full turn
    let h = if (max - r).abs() < 1e-9 {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < 1e-9 {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let h = h / 6.0;

    // Rounding can land on a full 360 for hues just under the wrap point;
    // reduce so the stored hue stays in 0-359.
    Hsl {
        h: ((h * 360.0).round() as i32).rem_euclid(360),
        s: (s * 100.0).round() as i32,
        l: (l * 100.0).round() as i32,
    }
}

/// Convert HSL to RGB with each channel rounded to the nearest integer
///
/// Algebraic inverse of [`rgb_to_hsl`] up to rounding: round-tripping a
/// color reproduces each channel within ±1.
#[inline]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h as f64 / 360.0;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    // Achromatic case
    if hsl.s == 0 {
        let v = (l * 255.0).round() as u8;
        return Rgb { r: v, g: v, b: v };
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Helper function for HSL to RGB conversion
#[inline]
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Rotate a color's hue by `degrees` on the 360° color wheel
///
/// The offset may be any sign or size; it wraps so the resulting hue is
/// always in 0-359 (a -30 rotation lands on 330, never on a negative hue).
pub fn rotate_color(color: Rgb, degrees: i32) -> Rgb {
    let hsl = rgb_to_hsl(color);
    let rotated = Hsl {
        h: (hsl.h + degrees).rem_euclid(360),
        ..hsl
    };
    hsl_to_rgb(rotated)
}
