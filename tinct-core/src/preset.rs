//! Named primary/accent color presets

use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_model::{Hsl, ThemePalette};

use crate::derive::DerivationPolicy;

/// Which surface a preset is offered on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PresetGroup {
    /// Appearance card on the settings page
    Settings,
    /// Live playground on the UI-elements page
    Playground,
    /// Added through configuration
    #[default]
    Custom,
}

impl Display for PresetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Settings => "settings",
            Self::Playground => "playground",
            Self::Custom => "custom",
        })
    }
}

/// A primary/accent pair the user can apply with one click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPreset {
    pub name: Cow<'static, str>,
    pub primary: Hsl,
    pub accent: Hsl,
    #[serde(default)]
    pub group: PresetGroup,
}

impl ColorPreset {
    pub const fn builtin(
        name: &'static str,
        group: PresetGroup,
        primary: (f32, f32, f32),
        accent: (f32, f32, f32),
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            primary: Hsl::from_normalized(primary.0, primary.1, primary.2),
            accent: Hsl::from_normalized(accent.0, accent.1, accent.2),
            group,
        }
    }

    /// Full primary/accent palette this preset produces
    pub fn palette(&self, policy: &DerivationPolicy) -> ThemePalette {
        policy.derive_palette(self.primary, self.accent)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

pub const SETTINGS_PRESETS: [ColorPreset; 4] = [
    ColorPreset::builtin(
        "Default Purple",
        PresetGroup::Settings,
        (258.0, 36.0, 51.0),
        (232.0, 39.0, 34.0),
    ),
    ColorPreset::builtin(
        "Oceanic Blue",
        PresetGroup::Settings,
        (210.0, 70.0, 55.0),
        (190.0, 60.0, 45.0),
    ),
    ColorPreset::builtin(
        "Forest Green",
        PresetGroup::Settings,
        (140.0, 60.0, 45.0),
        (120.0, 50.0, 35.0),
    ),
    ColorPreset::builtin(
        "Sunset Orange",
        PresetGroup::Settings,
        (30.0, 90.0, 55.0),
        (15.0, 80.0, 50.0),
    ),
];

pub const PLAYGROUND_PRESETS: [ColorPreset; 3] = [
    ColorPreset::builtin(
        "Oceanic Tones",
        PresetGroup::Playground,
        (210.0, 70.0, 55.0),
        (170.0, 60.0, 45.0),
    ),
    ColorPreset::builtin(
        "Sunset Hues",
        PresetGroup::Playground,
        (30.0, 90.0, 55.0),
        (0.0, 80.0, 60.0),
    ),
    ColorPreset::builtin(
        "Verdant Greens",
        PresetGroup::Playground,
        (140.0, 60.0, 45.0),
        (40.0, 70.0, 50.0),
    ),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color preset '{0}'")]
pub struct UnknownPreset(pub String);

/// Built-in presets plus any added through configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<ColorPreset>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        Self {
            presets: SETTINGS_PRESETS
                .into_iter()
                .chain(PLAYGROUND_PRESETS)
                .collect(),
        }
    }

    /// Append presets; a name already in the catalog is replaced in place.
    pub fn with_extra(
        mut self,
        extra: impl IntoIterator<Item = ColorPreset>,
    ) -> Self {
        for preset in extra {
            match self.presets.iter_mut().find(|p| p.matches(&preset.name)) {
                Some(existing) => *existing = preset,
                None => self.presets.push(preset),
            }
        }
        self
    }

    /// Case-insensitive lookup by display name
    pub fn find(&self, name: &str) -> Result<&ColorPreset, UnknownPreset> {
        self.presets
            .iter()
            .find(|preset| preset.matches(name))
            .ok_or_else(|| UnknownPreset(name.to_string()))
    }

    pub fn group(
        &self,
        group: PresetGroup,
    ) -> impl Iterator<Item = &ColorPreset> + '_ {
        self.presets.iter().filter(move |preset| preset.group == group)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorPreset> + '_ {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
