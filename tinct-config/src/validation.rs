use std::collections::BTreeSet;

use thiserror::Error;
use tinct_core::{DerivationPolicy, PresetCatalog};
use tinct_model::{Hsl, StyleVar};

use super::models::ThemeConfig;

/// Largest forced secondary shift that still leaves room on the other side
/// of any primary lightness.
const MAX_FORCED_SHIFT: f32 = 50.0;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("derivation.{field} must be a percentage between 0 and 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f32 },
    #[error("invalid secondary derivation: {reason}")]
    InvalidSecondaryShift { reason: String },
    #[error("preset '{name}' is defined more than once")]
    DuplicatePreset { name: String },
    #[error("preset name must not be empty")]
    EmptyPresetName,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.hint {
            Some(hint) => write!(f, "{} (hint: {})", self.message, hint),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> + '_ {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &ThemeConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_derivation(&config.derivation)?;
    validate_presets(config, &mut warnings)?;
    inspect_stylesheet(config, &mut warnings);

    Ok(warnings)
}

fn validate_derivation(
    policy: &DerivationPolicy,
) -> Result<(), ConfigGuardRailError> {
    let percents = [
        ("light_threshold", policy.light_threshold),
        ("saturation_boost", policy.saturation_boost),
        ("lightness_drop", policy.lightness_drop),
        ("dark_floor_trigger", policy.dark_floor_trigger),
        ("dark_floor", policy.dark_floor),
        ("secondary_desaturate", policy.secondary_desaturate),
        ("secondary_light_threshold", policy.secondary_light_threshold),
        ("secondary_shift", policy.secondary_shift),
        ("min_secondary_delta", policy.min_secondary_delta),
        ("secondary_forced_shift", policy.secondary_forced_shift),
        ("ring_saturation_boost", policy.ring_saturation_boost),
        ("ring_lightness_boost", policy.ring_lightness_boost),
    ];

    for (field, value) in percents {
        if !(0.0..=100.0).contains(&value) {
            return Err(ConfigGuardRailError::PercentOutOfRange { field, value });
        }
    }

    if policy.secondary_forced_shift < policy.min_secondary_delta {
        return Err(ConfigGuardRailError::InvalidSecondaryShift {
            reason: format!(
                "secondary_forced_shift ({}) is smaller than min_secondary_delta ({})",
                policy.secondary_forced_shift, policy.min_secondary_delta
            ),
        });
    }

    if policy.secondary_forced_shift > MAX_FORCED_SHIFT {
        return Err(ConfigGuardRailError::InvalidSecondaryShift {
            reason: format!(
                "secondary_forced_shift ({}) must not exceed {MAX_FORCED_SHIFT}",
                policy.secondary_forced_shift
            ),
        });
    }

    Ok(())
}

fn validate_presets(
    config: &ThemeConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let builtin = PresetCatalog::builtin();
    let mut seen = BTreeSet::new();

    for preset in &config.presets {
        let name = preset.name.trim();
        if name.is_empty() {
            return Err(ConfigGuardRailError::EmptyPresetName);
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigGuardRailError::DuplicatePreset {
                name: name.to_string(),
            });
        }
        if builtin.find(name).is_ok() {
            warnings.push_with_hint(
                format!("preset '{name}' replaces the built-in preset"),
                "Rename the preset to keep both",
            );
        }
    }

    Ok(())
}

fn inspect_stylesheet(config: &ThemeConfig, warnings: &mut ConfigWarnings) {
    for (key, value) in config.stylesheet.iter() {
        let value = value.trim();
        let Ok(var) = key.parse::<StyleVar>() else {
            warnings.push_with_hint(
                format!("stylesheet entry '{key}' is not a theme variable"),
                "Use a slot name such as `primary` or its CSS name `--primary`",
            );
            continue;
        };

        match var {
            StyleVar::Slot(slot) if !value.is_empty() => {
                if Hsl::parse(value).is_none() {
                    warnings.push_with_hint(
                        format!(
                            "stylesheet {slot} value '{value}' is not an `H S% L%` triple"
                        ),
                        "The value is kept verbatim but cannot seed pickers or derivations",
                    );
                }
            }
            StyleVar::Radius if !value.is_empty() => {
                let number = value.strip_suffix("rem").unwrap_or(value).trim();
                if number.parse::<f32>().is_err() {
                    warnings.push_with_hint(
                        format!("stylesheet radius '{value}' is not a rem length"),
                        "The radius slider will start from 0.5rem",
                    );
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use tinct_core::{ColorPreset, PresetGroup};

    fn preset(name: &str) -> ColorPreset {
        ColorPreset {
            name: Cow::Owned(name.to_string()),
            primary: Hsl::new(10.0, 50.0, 50.0),
            accent: Hsl::new(20.0, 50.0, 40.0),
            group: PresetGroup::Custom,
        }
    }

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&ThemeConfig::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn rejects_percentages_out_of_range() {
        let mut config = ThemeConfig::default();
        config.derivation.light_threshold = 120.0;
        let err = apply_guard_rails(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigGuardRailError::PercentOutOfRange {
                field: "light_threshold",
                ..
            }
        ));

        config.derivation.light_threshold = f32::NAN;
        assert!(apply_guard_rails(&config).is_err());
    }

    #[test]
    fn forced_shift_must_clear_minimum_delta() {
        let mut config = ThemeConfig::default();
        config.derivation.secondary_forced_shift = 5.0;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidSecondaryShift { .. })
        ));

        config.derivation.secondary_forced_shift = 60.0;
        let err = apply_guard_rails(&config).unwrap_err();
        assert!(err.to_string().contains("must not exceed 50"));
    }

    #[test]
    fn duplicate_presets_are_rejected() {
        let mut config = ThemeConfig::default();
        config.presets = vec![preset("Rose"), preset(" rose ")];
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::DuplicatePreset { name }) if name == "rose"
        ));

        config.presets = vec![preset("  ")];
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::EmptyPresetName)
        ));
    }

    #[test]
    fn replacing_builtin_preset_warns() {
        let mut config = ThemeConfig::default();
        config.presets = vec![preset("Forest Green")];
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].message.contains("Forest Green"));
    }

    #[test]
    fn odd_stylesheet_values_only_warn() {
        let mut config = ThemeConfig::default();
        config.stylesheet.overlay([
            ("primary".to_string(), "rebeccapurple".to_string()),
            ("radius".to_string(), "4px".to_string()),
            ("--shadow".to_string(), "none".to_string()),
            ("card".to_string(), String::new()),
        ]);

        let warnings = apply_guard_rails(&config).unwrap();
        let messages: Vec<_> =
            warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(messages.len(), 3, "{messages:?}");
        assert!(messages.iter().any(|m| m.contains("--shadow")));
        assert!(messages.iter().any(|m| m.contains("rebeccapurple")));
        assert!(messages.iter().any(|m| m.contains("4px")));
    }
}
