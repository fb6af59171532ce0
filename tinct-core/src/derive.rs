//! Palette derivation
//!
//! Turns the handful of colors a user actually picks (primary, accent,
//! background, card) into the full set of slots the presentation layer reads:
//! a secondary tone, a focus-ring tint, and a foreground for every surface.
//!
//! Foregrounds come from a lightness threshold, not from a perceptual
//! contrast computation. A WCAG contrast ratio is not computed anywhere and
//! the results are not guaranteed to meet any accessibility level.

use serde::{Deserialize, Serialize};
use tinct_model::{Hsl, ThemePalette, ThemeSlot};

/// Tuning numbers for the derivation heuristics
///
/// The defaults reproduce the dashboard's built-in behaviour. Configuration
/// may override any of them; `tinct-config` guards against values that would
/// break the secondary-distance guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivationPolicy {
    /// Backgrounds lighter than this (percent) get dark text.
    pub light_threshold: f32,
    /// Saturation added to dark text on light backgrounds.
    pub saturation_boost: f32,
    /// Lightness removed from a light background to get its text tone.
    pub lightness_drop: f32,
    /// Dark text that would land below this lightness snaps to `dark_floor`.
    pub dark_floor_trigger: f32,
    pub dark_floor: f32,
    /// Text tone used on dark backgrounds.
    pub light_tone: Hsl,
    /// Saturation removed from primary to get secondary.
    pub secondary_desaturate: f32,
    /// Primaries lighter than this (percent) get a darker secondary.
    pub secondary_light_threshold: f32,
    pub secondary_shift: f32,
    /// Minimum lightness distance between primary and secondary.
    pub min_secondary_delta: f32,
    /// Shift applied when `secondary_shift` leaves the pair too close.
    pub secondary_forced_shift: f32,
    pub ring_saturation_boost: f32,
    pub ring_lightness_boost: f32,
}

impl Default for DerivationPolicy {
    fn default() -> Self {
        Self {
            light_threshold: 55.0,
            saturation_boost: 10.0,
            lightness_drop: 40.0,
            dark_floor_trigger: 15.0,
            dark_floor: 10.0,
            light_tone: Hsl::from_normalized(0.0, 0.0, 95.0),
            secondary_desaturate: 15.0,
            secondary_light_threshold: 50.0,
            secondary_shift: 20.0,
            min_secondary_delta: 10.0,
            secondary_forced_shift: 25.0,
            ring_saturation_boost: 10.0,
            ring_lightness_boost: 5.0,
        }
    }
}

impl DerivationPolicy {
    /// Contrasting text tone for a background
    ///
    /// Light backgrounds (`l > light_threshold`) get a darker, slightly more
    /// saturated tone of the same hue; everything else gets `light_tone`.
    pub fn derive_foreground(&self, bg: Hsl) -> Hsl {
        if bg.l() > self.light_threshold {
            let dropped = bg.l() - self.lightness_drop;
            let l = if dropped < self.dark_floor_trigger {
                self.dark_floor
            } else {
                dropped
            };
            Hsl::new(bg.h(), bg.s() + self.saturation_boost, l)
        } else {
            self.light_tone
        }
    }

    /// Secondary tone: primary's hue, desaturated, lightness pushed away
    pub fn derive_secondary(&self, primary: Hsl) -> Hsl {
        let toward_dark = primary.l() > self.secondary_light_threshold;
        let shifted = |amount: f32, toward_dark: bool| {
            let signed = if toward_dark { -amount } else { amount };
            (primary.l() + signed).clamp(0.0, 100.0)
        };
        let far_enough = |l: f32| (l - primary.l()).abs() >= self.min_secondary_delta;

        let mut l = shifted(self.secondary_shift, toward_dark);
        if !far_enough(l) {
            l = shifted(self.secondary_forced_shift, toward_dark);
        }
        if !far_enough(l) {
            // Clamped against 0 or 100; the other side has room.
            l = shifted(self.secondary_forced_shift, !toward_dark);
        }

        Hsl::new(
            primary.h(),
            (primary.s() - self.secondary_desaturate).max(0.0),
            l,
        )
    }

    /// Focus-ring tint: primary, a little more saturated and lighter
    pub fn derive_ring(&self, primary: Hsl) -> Hsl {
        Hsl::new(
            primary.h(),
            (primary.s() + self.ring_saturation_boost).min(100.0),
            (primary.l() + self.ring_lightness_boost).min(100.0),
        )
    }

    /// A surface color and the text tone drawn on it
    pub fn derive_surface(&self, surface: Hsl) -> (Hsl, Hsl) {
        (surface, self.derive_foreground(surface))
    }

    /// Every slot that follows from the primary color
    pub fn derive_primary_family(&self, primary: Hsl) -> ThemePalette {
        let secondary = self.derive_secondary(primary);
        ThemePalette::new()
            .with(ThemeSlot::Primary, primary)
            .with(ThemeSlot::PrimaryForeground, self.derive_foreground(primary))
            .with(ThemeSlot::Secondary, secondary)
            .with(
                ThemeSlot::SecondaryForeground,
                self.derive_foreground(secondary),
            )
            .with(ThemeSlot::Ring, self.derive_ring(primary))
    }

    /// Primary family plus accent and its foreground
    pub fn derive_palette(&self, primary: Hsl, accent: Hsl) -> ThemePalette {
        self.derive_primary_family(primary)
            .with(ThemeSlot::Accent, accent)
            .with(ThemeSlot::AccentForeground, self.derive_foreground(accent))
    }
}

/// [`DerivationPolicy::derive_foreground`] under the default policy
pub fn derive_foreground(bg: Hsl) -> Hsl {
    DerivationPolicy::default().derive_foreground(bg)
}

/// [`DerivationPolicy::derive_palette`] under the default policy
pub fn derive_palette(primary: Hsl, accent: Hsl) -> ThemePalette {
    DerivationPolicy::default().derive_palette(primary, accent)
}

/// User-picked colors for a session; `None` leaves the slot to the snapshot
///
/// Any color slot can be picked directly. Secondary and ring otherwise follow
/// primary; a picked value wins over the derived one. Foreground slots are
/// always derived from whichever surface is in effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub primary: Option<Hsl>,
    pub secondary: Option<Hsl>,
    pub accent: Option<Hsl>,
    pub background: Option<Hsl>,
    pub card: Option<Hsl>,
    pub ring: Option<Hsl>,
}

impl ColorOverrides {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.secondary.is_none()
            && self.accent.is_none()
            && self.background.is_none()
            && self.card.is_none()
            && self.ring.is_none()
    }

    /// Only the slots these overrides decide, derived ones included
    pub fn derived_slots(&self, policy: &DerivationPolicy) -> ThemePalette {
        let mut palette = ThemePalette::new();

        if let Some(primary) = self.primary {
            palette.merge(&policy.derive_primary_family(primary));
        }
        if let Some(secondary) = self.secondary {
            palette.set(ThemeSlot::Secondary, secondary);
            palette.set(
                ThemeSlot::SecondaryForeground,
                policy.derive_foreground(secondary),
            );
        }
        if let Some(ring) = self.ring {
            palette.set(ThemeSlot::Ring, ring);
        }
        if let Some(accent) = self.accent {
            palette.set(ThemeSlot::Accent, accent);
            palette.set(ThemeSlot::AccentForeground, policy.derive_foreground(accent));
        }
        if let Some(background) = self.background {
            let (bg, fg) = policy.derive_surface(background);
            palette.set(ThemeSlot::Background, bg);
            palette.set(ThemeSlot::Foreground, fg);
        }
        if let Some(card) = self.card {
            let (card, fg) = policy.derive_surface(card);
            palette.set(ThemeSlot::Card, card);
            palette.set(ThemeSlot::CardForeground, fg);
        }

        palette
    }
}

/// Effective palette: overrides and their derivations over the snapshot
pub fn resolve_palette(
    snapshot: &ThemePalette,
    overrides: &ColorOverrides,
    policy: &DerivationPolicy,
) -> ThemePalette {
    let mut palette = snapshot.clone();
    palette.merge(&overrides.derived_slots(policy));
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hsl(h: f32, s: f32, l: f32) -> Hsl {
        Hsl::new(h, s, l)
    }

    #[test]
    fn light_background_gets_dark_text_of_same_hue() {
        let fg = derive_foreground(hsl(0.0, 0.0, 90.0));
        assert_eq!(fg, hsl(0.0, 10.0, 50.0));
        assert!(fg.l() < DerivationPolicy::default().light_threshold);

        let fg = derive_foreground(hsl(200.0, 95.0, 80.0));
        assert_eq!(fg, hsl(200.0, 100.0, 40.0));
    }

    #[test]
    fn dark_background_gets_near_white_text() {
        assert_eq!(derive_foreground(hsl(0.0, 0.0, 10.0)), hsl(0.0, 0.0, 95.0));
        assert_eq!(
            derive_foreground(hsl(210.0, 70.0, 55.0)),
            hsl(0.0, 0.0, 95.0),
            "threshold is exclusive"
        );
    }

    #[test]
    fn dark_text_snaps_to_floor_when_drop_goes_too_far() {
        let policy = DerivationPolicy {
            lightness_drop: 50.0,
            ..DerivationPolicy::default()
        };
        assert_eq!(policy.derive_foreground(hsl(30.0, 20.0, 60.0)).l(), 10.0);
        assert_eq!(policy.derive_foreground(hsl(30.0, 20.0, 70.0)).l(), 20.0);
    }

    #[test]
    fn oceanic_palette_matches_reference_values() {
        let palette = derive_palette(hsl(210.0, 70.0, 55.0), hsl(170.0, 60.0, 45.0));

        let secondary = palette.get(ThemeSlot::Secondary).unwrap();
        assert_eq!(secondary, hsl(210.0, 55.0, 35.0));
        assert_eq!(palette.get(ThemeSlot::Ring).unwrap().to_string(), "210 80% 60%");
        assert_eq!(
            palette.get(ThemeSlot::PrimaryForeground),
            Some(hsl(0.0, 0.0, 95.0))
        );
        assert_eq!(
            palette.get(ThemeSlot::AccentForeground),
            Some(hsl(0.0, 0.0, 95.0))
        );
        assert_eq!(palette.len(), 7);
    }

    #[test]
    fn dark_primary_gets_lighter_secondary() {
        let secondary =
            DerivationPolicy::default().derive_secondary(hsl(140.0, 10.0, 30.0));
        assert_eq!(secondary, hsl(140.0, 0.0, 50.0));
    }

    #[test]
    fn forced_shift_kicks_in_when_regular_shift_is_too_small() {
        let policy = DerivationPolicy {
            secondary_shift: 5.0,
            ..DerivationPolicy::default()
        };
        assert_eq!(policy.derive_secondary(hsl(0.0, 50.0, 60.0)).l(), 35.0);
        assert_eq!(policy.derive_secondary(hsl(0.0, 50.0, 40.0)).l(), 65.0);
    }

    #[test]
    fn clamped_forced_shift_flips_direction() {
        let policy = DerivationPolicy {
            secondary_shift: 5.0,
            secondary_light_threshold: 95.0,
            ..DerivationPolicy::default()
        };
        // Lightening from 95 clamps at 100; only darkening clears the gap.
        assert_eq!(policy.derive_secondary(hsl(0.0, 50.0, 95.0)).l(), 70.0);
    }

    #[test]
    fn ring_caps_at_full_saturation_and_lightness() {
        let ring = DerivationPolicy::default().derive_ring(hsl(20.0, 95.0, 98.0));
        assert_eq!(ring, hsl(20.0, 100.0, 100.0));
    }

    #[test]
    fn resolve_keeps_snapshot_for_untouched_slots() {
        let snapshot = ThemePalette::new()
            .with(ThemeSlot::Accent, hsl(232.0, 39.0, 34.0))
            .with(ThemeSlot::AccentForeground, hsl(0.0, 0.0, 98.0))
            .with(ThemeSlot::Background, hsl(0.0, 0.0, 100.0));
        let overrides = ColorOverrides {
            primary: Some(hsl(30.0, 90.0, 55.0)),
            card: Some(hsl(0.0, 0.0, 96.0)),
            ..ColorOverrides::default()
        };

        let palette =
            resolve_palette(&snapshot, &overrides, &DerivationPolicy::default());

        assert_eq!(palette.get(ThemeSlot::Accent), Some(hsl(232.0, 39.0, 34.0)));
        assert_eq!(
            palette.get(ThemeSlot::AccentForeground),
            Some(hsl(0.0, 0.0, 98.0))
        );
        assert_eq!(palette.get(ThemeSlot::Secondary), Some(hsl(30.0, 75.0, 35.0)));
        assert_eq!(palette.get(ThemeSlot::Card), Some(hsl(0.0, 0.0, 96.0)));
        assert_eq!(palette.get(ThemeSlot::CardForeground), Some(hsl(0.0, 10.0, 56.0)));
        assert_eq!(palette.get(ThemeSlot::Foreground), None);
    }

    #[test]
    fn picked_secondary_and_ring_win_over_derived_ones() {
        let overrides = ColorOverrides {
            primary: Some(hsl(210.0, 70.0, 55.0)),
            secondary: Some(hsl(40.0, 30.0, 90.0)),
            ring: Some(hsl(0.0, 80.0, 50.0)),
            ..ColorOverrides::default()
        };

        let palette = overrides.derived_slots(&DerivationPolicy::default());

        assert_eq!(palette.get(ThemeSlot::Secondary), Some(hsl(40.0, 30.0, 90.0)));
        assert_eq!(
            palette.get(ThemeSlot::SecondaryForeground),
            Some(hsl(40.0, 40.0, 50.0)),
            "foreground follows the picked secondary"
        );
        assert_eq!(palette.get(ThemeSlot::Ring), Some(hsl(0.0, 80.0, 50.0)));
        assert_eq!(
            palette.get(ThemeSlot::PrimaryForeground),
            Some(hsl(0.0, 0.0, 95.0))
        );
    }

    #[test]
    fn secondary_alone_leaves_primary_family_to_snapshot() {
        let overrides = ColorOverrides {
            secondary: Some(hsl(240.0, 5.0, 20.0)),
            ..ColorOverrides::default()
        };
        let palette = overrides.derived_slots(&DerivationPolicy::default());

        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(ThemeSlot::Primary), None);
        assert_eq!(
            palette.get(ThemeSlot::SecondaryForeground),
            Some(hsl(0.0, 0.0, 95.0))
        );
    }

    #[test]
    fn configured_light_tone_is_normalized() {
        let policy: DerivationPolicy =
            serde_json::from_str(r#"{"light_tone":"720 150% -5%"}"#).unwrap();
        assert_eq!(policy.light_tone, hsl(0.0, 100.0, 0.0));

        let fg = policy.derive_foreground(hsl(220.0, 30.0, 10.0));
        assert_eq!(fg.to_string(), "0 100% 0%");
        assert!((0.0..=100.0).contains(&fg.s()));
    }

    #[test]
    fn default_light_tone_is_in_range() {
        let tone = DerivationPolicy::default().light_tone;
        assert_eq!(tone, Hsl::new(tone.h(), tone.s(), tone.l()));
    }

    #[test]
    fn empty_overrides_derive_nothing() {
        let overrides = ColorOverrides::default();
        assert!(overrides.is_empty());
        assert!(overrides.derived_slots(&DerivationPolicy::default()).is_empty());
    }

    proptest! {
        #[test]
        fn secondary_is_always_distinguishable(
            h in 0.0f32..360.0,
            s in 0.0f32..=100.0,
            l in 0.0f32..=100.0,
        ) {
            let primary = hsl(h, s, l);
            let secondary = DerivationPolicy::default().derive_secondary(primary);
            prop_assert!((secondary.l() - primary.l()).abs() >= 10.0);
            prop_assert_eq!(secondary.h(), primary.h());
        }

        #[test]
        fn foregrounds_stay_in_range(
            h in 0.0f32..360.0,
            s in 0.0f32..=100.0,
            l in 0.0f32..=100.0,
        ) {
            let fg = derive_foreground(hsl(h, s, l));
            prop_assert!((0.0..=100.0).contains(&fg.s()));
            prop_assert!((0.0..=100.0).contains(&fg.l()));
        }
    }
}
