//! Hex color strings as produced and consumed by color pickers

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ColorParseError;

/// An opaque sRGB color written as `#RGB` or `#RRGGBB`
///
/// Always formats as lowercase `#rrggbb`; the short form is expanded on
/// parse by doubling each digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb8(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHexDigit(input.to_string()));
        }

        let channel = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::InvalidHexDigit(input.to_string()))
        };

        match digits.len() {
            3 => {
                let doubled: String =
                    digits.chars().flat_map(|c| [c, c]).collect();
                Ok(Self::from_rgb8(
                    channel(&doubled[0..2])?,
                    channel(&doubled[2..4])?,
                    channel(&doubled[4..6])?,
                ))
            }
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::InvalidHexLength(input.to_string())),
        }
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form_case_insensitively() {
        let hex: HexColor = "#6750A4".parse().unwrap();
        assert_eq!(hex.rgb8(), (0x67, 0x50, 0xa4));
        assert_eq!("#6750a4".parse::<HexColor>().unwrap(), hex);
    }

    #[test]
    fn short_form_doubles_each_digit() {
        let hex: HexColor = "#f0A".parse().unwrap();
        assert_eq!(hex.rgb8(), (0xff, 0x00, 0xaa));
    }

    #[test]
    fn formats_lowercase_zero_padded() {
        assert_eq!(HexColor::from_rgb8(1, 0xAB, 0).to_string(), "#01ab00");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            "6750a4".parse::<HexColor>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#6750a".parse::<HexColor>(),
            Err(ColorParseError::InvalidHexLength(_))
        ));
        assert!(matches!(
            "#67zza4".parse::<HexColor>(),
            Err(ColorParseError::InvalidHexDigit(_))
        ));
        // Multi-byte input must not panic on slicing.
        assert!("#ééé".parse::<HexColor>().is_err());
    }
}
