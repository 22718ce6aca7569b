//! Tests for color parsing and color space conversions

use super::*;

// =============================================================================
// Hex parsing and formatting
// =============================================================================

#[test]
fn test_from_hex_basic() {
    let color = Rgb::from_hex("#3366CC").expect("valid hex should parse");
    assert_eq!(color, Rgb::new(51, 102, 204));

    // Lowercase digits are equivalent
    let lower = Rgb::from_hex("#3366cc").expect("lowercase hex should parse");
    assert_eq!(lower, color);
}

#[test]
fn test_from_hex_rejects_malformed_input() {
    assert!(Rgb::from_hex("3366CC").is_err(), "missing # must fail");
    assert!(Rgb::from_hex("#336").is_err(), "short string must fail");
    assert!(Rgb::from_hex("#3366CC00").is_err(), "long string must fail");
    assert!(Rgb::from_hex("#GGGGGG").is_err(), "non-hex digits must fail");
    assert!(Rgb::from_hex("").is_err(), "empty string must fail");
    assert!(Rgb::from_hex("#ééé").is_err(), "non-ascii input must fail");
}

#[test]
fn test_to_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb::new(51, 102, 204).to_hex(), "#3366cc");
    assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
    assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    assert_eq!(format!("{}", Rgb::new(255, 128, 0)), "#ff8000");
}

#[test]
fn test_serde_hex_string_representation() {
    let json = serde_json::to_string(&Rgb::new(51, 102, 204)).unwrap();
    assert_eq!(json, "\"#3366cc\"");

    let back: Rgb = serde_json::from_str("\"#3366CC\"").unwrap();
    assert_eq!(back, Rgb::new(51, 102, 204));

    let bad: Result<Rgb, _> = serde_json::from_str("\"not-a-color\"");
    assert!(bad.is_err(), "malformed hex must fail to deserialize");
}

// =============================================================================
// RGB -> HSL
// =============================================================================

#[test]
fn test_rgb_to_hsl_known_values() {
    let cases = [
        ("#ff0000", (0, 100, 50)),   // Red
        ("#00ff00", (120, 100, 50)), // Green
        ("#0000ff", (240, 100, 50)), // Blue
        ("#ffffff", (0, 0, 100)),    // White
        ("#000000", (0, 0, 0)),      // Black
        ("#3366cc", (220, 60, 50)),  // Mid blue
        ("#ff8000", (30, 100, 50)),  // Orange
    ];

    for (hex, (h, s, l)) in cases {
        let hsl = rgb_to_hsl(Rgb::from_hex(hex).unwrap());
        assert_eq!(
            (hsl.h, hsl.s, hsl.l),
            (h, s, l),
            "unexpected HSL for {}",
            hex
        );
    }
}

#[test]
fn test_rgb_to_hsl_achromatic_forces_zero_hue_and_saturation() {
    for hex in ["#000000", "#404040", "#808080", "#c0c0c0", "#ffffff"] {
        let hsl = rgb_to_hsl(Rgb::from_hex(hex).unwrap());
        assert_eq!(hsl.h, 0, "{} should have zero hue", hex);
        assert_eq!(hsl.s, 0, "{} should have zero saturation", hex);
    }
}

// =============================================================================
// HSL -> RGB
// =============================================================================

#[test]
fn test_hsl_to_rgb_known_values() {
    let cases = [
        ((0, 100, 50), "#ff0000"),
        ((120, 100, 50), "#00ff00"),
        ((240, 100, 50), "#0000ff"),
        ((0, 0, 100), "#ffffff"),
        ((0, 0, 0), "#000000"),
        ((0, 0, 50), "#808080"),
        ((220, 60, 50), "#3366cc"),
        ((180, 100, 50), "#00ffff"),
        ((90, 100, 50), "#80ff00"),
    ];

    for ((h, s, l), hex) in cases {
        let rgb = hsl_to_rgb(Hsl { h, s, l });
        assert_eq!(
            rgb.to_hex(),
            hex,
            "unexpected RGB for HSL({}, {}, {})",
            h,
            s,
            l
        );
    }
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_round_trip_named_colors_exact() {
    // These colors survive the integer HSL quantization without loss.
    for hex in [
        "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000", "#3366cc", "#ff8000", "#808080",
    ] {
        let color = Rgb::from_hex(hex).unwrap();
        assert_eq!(
            hsl_to_rgb(rgb_to_hsl(color)),
            color,
            "round trip changed {}",
            hex
        );
    }
}

#[test]
fn test_round_trip_within_one_per_channel() {
    // 0, 51, ..., 255 keeps hue and lightness on exact integer values, so
    // only saturation rounding contributes error and every channel stays
    // within ±1.
    let steps = [0u8, 51, 102, 153, 204, 255];
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                let color = Rgb::new(r, g, b);
                let back = hsl_to_rgb(rgb_to_hsl(color));
                for (orig, round_tripped) in [(r, back.r), (g, back.g), (b, back.b)] {
                    let diff = (orig as i32 - round_tripped as i32).abs();
                    assert!(
                        diff <= 1,
                        "round trip of {} drifted by {} (got {})",
                        color.to_hex(),
                        diff,
                        back.to_hex()
                    );
                }
            }
        }
    }
}

// =============================================================================
// Hue rotation
// =============================================================================

#[test]
fn test_rotate_full_cycle_is_identity() {
    for hex in ["#3366cc", "#ff0000", "#00ff00", "#ff8000"] {
        let color = Rgb::from_hex(hex).unwrap();
        assert_eq!(rotate_color(color, 360), color, "360° should not move {}", hex);
        assert_eq!(rotate_color(color, 0), color, "0° should not move {}", hex);
    }
}

#[test]
fn test_rotate_negative_offset_wraps_upward() {
    for hex in ["#3366cc", "#ff0000", "#00ff00", "#c08040"] {
        let color = Rgb::from_hex(hex).unwrap();
        assert_eq!(
            rotate_color(color, -30),
            rotate_color(color, 330),
            "-30 and 330 must agree for {}",
            hex
        );
        assert_eq!(
            rotate_color(color, -390),
            rotate_color(color, 330),
            "wrapping must reduce any negative offset for {}",
            hex
        );
    }
}

#[test]
fn test_rotate_known_offsets() {
    let red = Rgb::from_hex("#ff0000").unwrap();
    assert_eq!(rotate_color(red, 180).to_hex(), "#00ffff");
    assert_eq!(rotate_color(red, 90).to_hex(), "#80ff00");
}

#[test]
fn test_rotate_achromatic_color_is_stable() {
    // Grey has no hue to rotate; it must come back unchanged.
    let grey = Rgb::from_hex("#808080").unwrap();
    for degrees in [-90, 45, 180, 270] {
        assert_eq!(rotate_color(grey, degrees), grey);
    }
}
