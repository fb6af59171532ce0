//! Font families offered by the appearance settings

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    System,
    Inter,
    Serif,
    Mono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] =
        [Self::System, Self::Inter, Self::Serif, Self::Mono];

    /// Value written to `--font-family`
    pub fn css_stack(&self) -> &'static str {
        match self {
            Self::System => "ui-sans-serif, system-ui, sans-serif",
            Self::Inter => "Inter, ui-sans-serif, sans-serif",
            Self::Serif => "Georgia, ui-serif, serif",
            Self::Mono => "ui-monospace, SFMono-Regular, monospace",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Inter => "inter",
            Self::Serif => "serif",
            Self::Mono => "mono",
        }
    }
}

impl Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown font family '{0}' (expected one of: system, inter, serif, mono)")]
pub struct UnknownFont(pub String);

impl FromStr for FontFamily {
    type Err = UnknownFont;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFont(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Inter".parse::<FontFamily>(), Ok(FontFamily::Inter));
        assert_eq!(" MONO ".parse::<FontFamily>(), Ok(FontFamily::Mono));
        assert_eq!(
            "comic".parse::<FontFamily>(),
            Err(UnknownFont("comic".to_string()))
        );
    }

    #[test]
    fn every_family_has_a_distinct_stack() {
        for family in FontFamily::ALL {
            let stack = family.css_stack();
            assert_eq!(
                FontFamily::ALL
                    .iter()
                    .filter(|other| other.css_stack() == stack)
                    .count(),
                1,
                "{family}"
            );
        }
    }
}
