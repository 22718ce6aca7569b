//! Palette model and palette generators
//!
//! A palette is fully determined by four user-chosen colors. Two derived
//! colors complete every gradient: color4 always mirrors color1, and color6
//! is a fixed pure white.

use crate::color::{rotate_color, Rgb};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The four independent colors driving a gradient render
///
/// Serialized palette documents carry exactly these four fields as hex
/// strings; a document missing any of them fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub color1: Rgb,
    pub color2: Rgb,
    pub color3: Rgb,
    pub color5: Rgb,
}

/// Identifies one of the four user-settable palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Color1,
    Color2,
    Color3,
    Color5,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 4] = [
        ColorSlot::Color1,
        ColorSlot::Color2,
        ColorSlot::Color3,
        ColorSlot::Color5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::Color1 => "color1",
            ColorSlot::Color2 => "color2",
            ColorSlot::Color3 => "color3",
            ColorSlot::Color5 => "color5",
        }
    }
}

impl Palette {
    pub fn new(color1: Rgb, color2: Rgb, color3: Rgb, color5: Rgb) -> Self {
        Palette {
            color1,
            color2,
            color3,
            color5,
        }
    }

    /// The fourth gradient color, always equal to color1
    pub fn color4(&self) -> Rgb {
        self.color1
    }

    /// The sixth gradient color, a fixed pure white
    pub fn color6(&self) -> Rgb {
        Rgb::WHITE
    }

    /// The six gradient colors in their forward stop order c1..c6
    pub fn stop_colors(&self) -> [Rgb; 6] {
        [
            self.color1,
            self.color2,
            self.color3,
            self.color4(),
            self.color5,
            self.color6(),
        ]
    }

    pub fn get(&self, slot: ColorSlot) -> Rgb {
        match slot {
            ColorSlot::Color1 => self.color1,
            ColorSlot::Color2 => self.color2,
            ColorSlot::Color3 => self.color3,
            ColorSlot::Color5 => self.color5,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, color: Rgb) {
        match slot {
            ColorSlot::Color1 => self.color1 = color,
            ColorSlot::Color2 => self.color2 = color,
            ColorSlot::Color3 => self.color3 = color,
            ColorSlot::Color5 => self.color5 = color,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            color1: Rgb::new(0xff, 0x6f, 0x61),
            color2: Rgb::new(0x6b, 0x5b, 0x95),
            color3: Rgb::new(0x88, 0xb0, 0x4b),
            color5: Rgb::new(0xf7, 0xca, 0xc9),
        }
    }
}

// =============================================================================
// Palette generators
// =============================================================================

/// Derive a complementary scheme from `base`: the base itself, its 180°
/// complement, and the 90° split
pub fn complementary_colors(base: Rgb) -> [Rgb; 3] {
    [base, rotate_color(base, 180), rotate_color(base, 90)]
}

/// Derive an analogous scheme: 30° either side of the base, base in the middle
pub fn analogous_colors(base: Rgb) -> [Rgb; 3] {
    [
        rotate_color(base, -30),
        rotate_color(base, 0),
        rotate_color(base, 30),
    ]
}

/// Four independent uniformly random colors, one draw per channel
pub fn random_colors<R: Rng>(rng: &mut R) -> [Rgb; 4] {
    std::array::from_fn(|_| Rgb::new(rng.gen(), rng.gen(), rng.gen()))
}

/// A full random palette, filling the four user-settable slots
pub fn random_palette<R: Rng>(rng: &mut R) -> Palette {
    let [color1, color2, color3, color5] = random_colors(rng);
    Palette::new(color1, color2, color3, color5)
}
