//! Shared data models for layout variants and canvas sizing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout variant selecting the gradient geometry of a composition
///
/// Each variant fixes the centers, radii, and stop ordering of the two
/// radial gradients painted into the upper and lower halves of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Off-center arcs anchored to the left and right canvas edges
    #[default]
    Swoosh,
    /// Concentric bloom radiating from the canvas center in both halves
    Sunrise,
    /// Centered upper bloom with the lower gradient dropped to the bottom edge
    Move,
}

impl Variant {
    /// All variants, in thumbnail display order
    pub const ALL: [Variant; 3] = [Variant::Swoosh, Variant::Sunrise, Variant::Move];

    /// Lowercase name as used in documents and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Swoosh => "swoosh",
            Variant::Sunrise => "sunrise",
            Variant::Move => "move",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swoosh" => Ok(Variant::Swoosh),
            "sunrise" => Ok(Variant::Sunrise),
            "move" => Ok(Variant::Move),
            _ => Err(format!(
                "Unknown variant '{}': expected swoosh, sunrise, or move",
                s
            )),
        }
    }
}

/// Canvas dimensions in pixels
///
/// Construction goes through [`CanvasSize::new`] or [`CanvasSize::parse`],
/// both of which reject zero dimensions. The main render uses the full
/// canvas size; thumbnails are always 100×100 regardless of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Named size presets offered by the interactive surfaces
    pub const PRESETS: [CanvasSize; 4] = [
        CanvasSize {
            width: 1080,
            height: 1080,
        },
        CanvasSize {
            width: 1350,
            height: 1350,
        },
        CanvasSize {
            width: 1080,
            height: 1920,
        },
        CanvasSize {
            width: 1920,
            height: 1080,
        },
    ];

    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "Invalid canvas size {}x{}: dimensions must be positive",
                width, height
            ));
        }
        Ok(CanvasSize { width, height })
    }

    /// Parse a `WIDTHxHEIGHT` spec such as `1350x1350`
    pub fn parse(spec: &str) -> Result<Self, String> {
        let parts: Vec<&str> = spec.trim().split('x').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid size '{}': expected WIDTHxHEIGHT (e.g. 1350x1350)",
                spec
            ));
        }

        let width = parts[0]
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid width in '{}': {}", spec, e))?;
        let height = parts[1]
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid height in '{}': {}", spec, e))?;

        CanvasSize::new(width, height)
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl Default for CanvasSize {
    /// The canvas starts out square at 1350×1350
    fn default() -> Self {
        CanvasSize {
            width: 1350,
            height: 1350,
        }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
