//! HSL color type and its `"H S% L%"` string form
//!
//! This is the representation the style variables carry: a bare triple such
//! as `258 36% 51%`, which the presentation layer wraps in `hsl(...)`.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ColorParseError;

/// A color in HSL space
///
/// Hue always lies in `[0, 360)` and both percentages in `[0, 100]`; every
/// constructor either normalizes or rejects out-of-range components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Hsl {
    h: f32,
    s: f32,
    l: f32,
}

impl Hsl {
    /// Pure black, the fallback for unparseable hex input.
    pub const BLACK: Self = Self::from_normalized(0.0, 0.0, 0.0);

    /// Create a new HSL color, wrapping hue and clamping the percentages
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: finite_or_zero(h).rem_euclid(360.0),
            s: finite_or_zero(s).clamp(0.0, 100.0),
            l: finite_or_zero(l).clamp(0.0, 100.0),
        }
    }

    /// Components already in range, for `const` tables
    ///
    /// Out-of-range or non-finite input panics, which fails compilation when
    /// the call is evaluated in a `const` item.
    pub const fn from_normalized(h: f32, s: f32, l: f32) -> Self {
        assert!(h >= 0.0 && h < 360.0, "hue must lie in [0, 360)");
        assert!(s >= 0.0 && s <= 100.0, "saturation must lie in [0, 100]");
        assert!(l >= 0.0 && l <= 100.0, "lightness must lie in [0, 100]");
        Self { h, s, l }
    }

    /// Hue in degrees (0-360)
    pub const fn h(&self) -> f32 {
        self.h
    }

    /// Saturation as percentage (0-100)
    pub const fn s(&self) -> f32 {
        self.s
    }

    /// Lightness as percentage (0-100)
    pub const fn l(&self) -> f32 {
        self.l
    }

    /// Parse an `"H S% L%"` string, returning `None` for malformed input.
    ///
    /// Callers treat `None` as "no value" and fall back to whatever the
    /// initial snapshot holds for the slot.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let [h, s, l] = parts.as_slice() else {
            return Err(ColorParseError::WrongComponentCount {
                input: input.to_string(),
                found: parts.len(),
            });
        };

        let component = |raw: &str, name: &'static str, percent: bool| {
            let raw = if percent {
                raw.strip_suffix('%').unwrap_or(raw)
            } else {
                raw
            };
            raw.parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ColorParseError::InvalidComponent {
                    input: input.to_string(),
                    component: name,
                })
        };

        Ok(Self::new(
            component(*h, "hue", false)?,
            component(*s, "saturation", true)?,
            component(*l, "lightness", true)?,
        ))
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}%",
            format_component(self.h),
            format_component(self.s),
            format_component(self.l)
        )
    }
}

/// Integers print bare; anything else keeps one decimal place.
fn format_component(value: f32) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{}", tenths as i32)
    } else {
        format!("{tenths:.1}")
    }
}

impl From<Hsl> for String {
    fn from(value: Hsl) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Hsl {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
