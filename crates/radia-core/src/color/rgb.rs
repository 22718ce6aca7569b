//! RGB color type and hex string parsing/formatting

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 24-bit RGB color
///
/// Each channel is an integer in 0-255. The canonical text form is a
/// 6-hex-digit string with a leading `#` marker, e.g. `#3366cc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fixed anchor color used as the final gradient stop of every palette
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string (digits are case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color '{}': missing '#' prefix", hex))?;

        if digits.len() != 6 {
            return Err(format!(
                "Invalid color '{}': expected 6 hex digits, got {}",
                hex,
                digits.len()
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!(
                "Invalid color '{}': contains non-hexadecimal characters",
                hex
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| format!("Invalid color '{}': {}", hex, e))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as a lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// Palettes serialize colors as their hex string form, so documents read as
// {"color1": "#3366cc", ...} rather than nested channel maps.

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
