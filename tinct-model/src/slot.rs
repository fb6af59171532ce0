//! Palette slots and the style variables they are written to

use std::fmt::{self, Display};
use std::str::FromStr;

/// Semantic role a palette color plays in the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ThemeSlot {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Background,
    Foreground,
    Card,
    CardForeground,
    Ring,
}

impl ThemeSlot {
    pub const ALL: [ThemeSlot; 11] = [
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Background,
        Self::Foreground,
        Self::Card,
        Self::CardForeground,
        Self::Ring,
    ];

    /// Name of the CSS custom property backing this slot
    pub fn css_var(&self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::PrimaryForeground => "--primary-foreground",
            Self::Secondary => "--secondary",
            Self::SecondaryForeground => "--secondary-foreground",
            Self::Accent => "--accent",
            Self::AccentForeground => "--accent-foreground",
            Self::Background => "--background",
            Self::Foreground => "--foreground",
            Self::Card => "--card",
            Self::CardForeground => "--card-foreground",
            Self::Ring => "--ring",
        }
    }

    /// camelCase identifier used in config files and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryForeground => "primaryForeground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondaryForeground",
            Self::Accent => "accent",
            Self::AccentForeground => "accentForeground",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "cardForeground",
            Self::Ring => "ring",
        }
    }

}

impl Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known slot or variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariable(pub String);

impl Display for UnknownVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme variable '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariable {}

impl FromStr for ThemeSlot {
    type Err = UnknownVariable;

    /// Accepts either the camelCase name or the CSS variable name.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == trimmed || slot.css_var() == trimmed)
            .ok_or_else(|| UnknownVariable(input.to_string()))
    }
}

/// Every style variable the theme engine may write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleVar {
    Slot(ThemeSlot),
    /// Corner radius, written as `"{value}rem"`
    Radius,
    FontFamily,
}

impl StyleVar {
    pub const ALL: [StyleVar; 13] = [
        Self::Slot(ThemeSlot::Primary),
        Self::Slot(ThemeSlot::PrimaryForeground),
        Self::Slot(ThemeSlot::Secondary),
        Self::Slot(ThemeSlot::SecondaryForeground),
        Self::Slot(ThemeSlot::Accent),
        Self::Slot(ThemeSlot::AccentForeground),
        Self::Slot(ThemeSlot::Background),
        Self::Slot(ThemeSlot::Foreground),
        Self::Slot(ThemeSlot::Card),
        Self::Slot(ThemeSlot::CardForeground),
        Self::Slot(ThemeSlot::Ring),
        Self::Radius,
        Self::FontFamily,
    ];

    pub fn css_var(&self) -> &'static str {
        match self {
            Self::Slot(slot) => slot.css_var(),
            Self::Radius => "--radius",
            Self::FontFamily => "--font-family",
        }
    }
}

impl From<ThemeSlot> for StyleVar {
    fn from(slot: ThemeSlot) -> Self {
        Self::Slot(slot)
    }
}

impl Display for StyleVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_var())
    }
}

impl FromStr for StyleVar {
    type Err = UnknownVariable;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "--radius" | "radius" => Ok(Self::Radius),
            "--font-family" | "fontFamily" => Ok(Self::FontFamily),
            other => other.parse::<ThemeSlot>().map(Self::Slot),
        }
    }
}
