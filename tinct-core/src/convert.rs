//! Hex <-> HSL conversion for color-picker integration
//!
//! Picker widgets speak `#rrggbb`; style variables speak `"H S% L%"`. The
//! lenient entry points never fail: malformed hex degrades to black, which is
//! the documented fallback rather than a swallowed error.

use tinct_model::{ColorParseError, HexColor, Hsl};
use tracing::debug;

/// Convert a picker hex string to HSL, falling back to black.
///
/// Accepts `#RGB` and `#RRGGBB` (any case). Every other input, including a
/// missing `#` or stray characters, yields `Hsl { h: 0, s: 0, l: 0 }`.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match try_hex_to_hsl(hex) {
        Ok(hsl) => hsl,
        Err(err) => {
            debug!(%err, "falling back to black for unparseable hex color");
            Hsl::BLACK
        }
    }
}

/// Strict variant of [`hex_to_hsl`]
pub fn try_hex_to_hsl(hex: &str) -> Result<Hsl, ColorParseError> {
    hex.parse::<HexColor>().map(rgb_to_hsl)
}

/// Parse a picker hex string, falling back to black like [`hex_to_hsl`].
pub fn parse_hex_lenient(hex: &str) -> HexColor {
    hex.parse().unwrap_or(HexColor::BLACK)
}

/// Convert RGB to HSL with integer-rounded components
///
/// Hue is rounded to whole degrees, saturation and lightness to whole
/// percent, matching what the style variables carry.
pub fn rgb_to_hsl(color: HexColor) -> Hsl {
    let (r, g, b) = color.rgb8();
    let (r, g, b) = (
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        // Achromatic (gray)
        return Hsl::new(0.0, 0.0, (l * 100.0).round() as f32);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if (max - r).abs() < f64::EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(
        (sector * 60.0).round() as f32,
        (s * 100.0).round() as f32,
        (l * 100.0).round() as f32,
    )
}

/// Convert HSL to the hex form a color picker expects
pub fn hsl_to_hex(hsl: Hsl) -> HexColor {
    let h = f64::from(hsl.h());
    let s = f64::from(hsl.s()) / 100.0;
    let l = f64::from(hsl.l()) / 100.0;

    let k = |n: f64| (n + h / 30.0).rem_euclid(12.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = k(n);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    let channel = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;

    HexColor::from_rgb8(channel(f(0.0)), channel(f(8.0)), channel(f(4.0)))
}

/// Convert an `"H S% L%"` string to hex; `None` when the string is malformed
pub fn hsl_string_to_hex(hsl: &str) -> Option<HexColor> {
    Hsl::parse(hsl).map(hsl_to_hex)
}
