//! Session-scoped theme overrides
//!
//! A [`ThemeSession`] is the single writer of a [`StyleTarget`] while a
//! theming surface is mounted. It captures the computed style once at mount,
//! rewrites every variable on each change (so a cascade from primary to
//! secondary/ring/foregrounds is never half-applied), and puts every variable
//! it touched back the way it found it on teardown.
//!
//! ```text
//! mount ──► Initialized ──(preset/picker/slider/font)──► Customized
//!                ▲                                          │
//!                └─────────────────── reset ◄───────────────┘
//! teardown (explicit or on drop) ──► TornDown
//! ```

use std::collections::{BTreeMap, BTreeSet};

use tinct_model::{HexColor, Hsl, StyleVar, ThemePalette, ThemeSlot};
use tracing::{debug, info, trace};

use crate::convert::{hex_to_hsl, hsl_to_hex, parse_hex_lenient};
use crate::derive::{ColorOverrides, DerivationPolicy};
use crate::font::FontFamily;
use crate::preset::ColorPreset;
use crate::style::StyleTarget;

/// Radius assumed when the stylesheet has none or it does not parse
pub const DEFAULT_RADIUS: f32 = 0.5;
pub const RADIUS_MIN: f32 = 0.0;
pub const RADIUS_MAX: f32 = 1.5;
pub const RADIUS_STEP: f32 = 0.1;

/// Picker values shown before a snapshot provides real ones
pub const DEFAULT_PICKER_PRIMARY: HexColor = HexColor::from_rgb8(0x67, 0x50, 0xa4);
pub const DEFAULT_PICKER_ACCENT: HexColor = HexColor::from_rgb8(0x34, 0x3d, 0x79);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Snapshot captured, no overrides active
    Initialized,
    /// At least one override active
    Customized,
    /// Pre-mount state restored; no further writes
    TornDown,
}

/// Computed style captured once at mount
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSnapshot {
    palette: ThemePalette,
    radius: f32,
    font_family: Option<String>,
    raw: BTreeMap<StyleVar, String>,
}

impl ThemeSnapshot {
    pub fn capture<T: StyleTarget + ?Sized>(target: &T) -> Self {
        let raw: BTreeMap<StyleVar, String> = StyleVar::ALL
            .into_iter()
            .filter_map(|var| {
                let value = target.computed(var)?;
                let value = value.trim();
                (!value.is_empty()).then(|| (var, value.to_string()))
            })
            .collect();

        let palette = ThemeSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let value = raw.get(&StyleVar::Slot(slot))?;
                let parsed = Hsl::parse(value);
                if parsed.is_none() {
                    debug!(%slot, %value, "snapshot value is not an hsl triple");
                }
                parsed.map(|color| (slot, color))
            })
            .collect();

        let radius = raw
            .get(&StyleVar::Radius)
            .and_then(|value| parse_leading_number(value))
            .unwrap_or(DEFAULT_RADIUS);

        Self {
            palette,
            radius,
            font_family: raw.get(&StyleVar::FontFamily).cloned(),
            raw,
        }
    }

    /// Parsed colors; slots whose computed value did not parse are absent
    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Computed value exactly as it was read
    pub fn raw(&self, var: StyleVar) -> Option<&str> {
        self.raw.get(&var).map(String::as_str)
    }
}

/// Leading decimal number of a CSS length such as `0.5rem`
fn parse_leading_number(value: &str) -> Option<f32> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| {
            !(c.is_ascii_digit() || c == '.' || (i == 0 && matches!(c, '-' | '+')))
        })
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse::<f32>().ok().filter(|n| n.is_finite())
}

fn format_rem(value: f32) -> String {
    let tenths = (value * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{}rem", tenths as i32)
    } else {
        format!("{tenths:.1}rem")
    }
}

/// Clamp to the slider range and snap to its step
pub fn snap_radius(value: f32) -> f32 {
    let scale = (1.0 / RADIUS_STEP).round();
    (value.clamp(RADIUS_MIN, RADIUS_MAX) * scale).round() / scale
}

/// Everything a user has changed during the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeOverrides {
    pub colors: ColorOverrides,
    pub radius: Option<f32>,
    pub font_family: Option<FontFamily>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.radius.is_none()
            && self.font_family.is_none()
    }
}

/// Hex values shown in the primary/accent color pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerHex {
    pub primary: HexColor,
    pub accent: HexColor,
}

impl Default for PickerHex {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PICKER_PRIMARY,
            accent: DEFAULT_PICKER_ACCENT,
        }
    }
}

impl PickerHex {
    fn from_palette(palette: &ThemePalette) -> Self {
        let defaults = Self::default();
        Self {
            primary: palette
                .get(ThemeSlot::Primary)
                .map_or(defaults.primary, hsl_to_hex),
            accent: palette
                .get(ThemeSlot::Accent)
                .map_or(defaults.accent, hsl_to_hex),
        }
    }
}

/// Owner of the session's style overrides
pub struct ThemeSession<'a, T: StyleTarget + ?Sized> {
    target: &'a mut T,
    policy: DerivationPolicy,
    /// Inline value of every variable before mount
    prior_inline: BTreeMap<StyleVar, Option<String>>,
    touched: BTreeSet<StyleVar>,
    snapshot: ThemeSnapshot,
    overrides: ThemeOverrides,
    picker: PickerHex,
    phase: SessionPhase,
}

impl<'a, T: StyleTarget + ?Sized> ThemeSession<'a, T> {
    /// Capture the target's current style and take ownership of it
    pub fn mount(target: &'a mut T, policy: DerivationPolicy) -> Self {
        let prior_inline = StyleVar::ALL
            .into_iter()
            .map(|var| (var, target.inline(var)))
            .collect();
        let snapshot = ThemeSnapshot::capture(&*target);
        let picker = PickerHex::from_palette(snapshot.palette());

        info!(
            slots = snapshot.palette().len(),
            radius = snapshot.radius(),
            "theme session mounted"
        );

        let mut session = Self {
            target,
            policy,
            prior_inline,
            touched: BTreeSet::new(),
            snapshot,
            overrides: ThemeOverrides::default(),
            picker,
            phase: SessionPhase::Initialized,
        };
        session.apply();
        session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn snapshot(&self) -> &ThemeSnapshot {
        &self.snapshot
    }

    pub fn overrides(&self) -> &ThemeOverrides {
        &self.overrides
    }

    pub fn picker_hex(&self) -> PickerHex {
        self.picker
    }

    pub fn policy(&self) -> &DerivationPolicy {
        &self.policy
    }

    /// Read access to the style target, e.g. for previews
    pub fn target(&self) -> &T {
        self.target
    }

    /// Snapshot palette with the active overrides and their derivations
    pub fn effective_palette(&self) -> ThemePalette {
        crate::derive::resolve_palette(
            self.snapshot.palette(),
            &self.overrides.colors,
            &self.policy,
        )
    }

    pub fn effective_radius(&self) -> f32 {
        self.overrides.radius.unwrap_or(self.snapshot.radius())
    }

    pub fn effective_font_family(&self) -> Option<&str> {
        match self.overrides.font_family {
            Some(family) => Some(family.css_stack()),
            None => self.snapshot.font_family(),
        }
    }

    /// Rewrite every style variable from overrides, then the snapshot
    ///
    /// All thirteen variables are written in one pass so the target never
    /// holds a palette mixing old and new derivations.
    pub fn apply(&mut self) {
        let derived = self.overrides.colors.derived_slots(&self.policy);

        for slot in ThemeSlot::ALL {
            let var = StyleVar::Slot(slot);
            match derived.get(slot) {
                Some(color) => self.write(var, color.to_string()),
                None => self.write_snapshot(var),
            }
        }

        match self.overrides.radius {
            Some(radius) => self.write(StyleVar::Radius, format_rem(radius)),
            None if self.snapshot.raw(StyleVar::Radius).is_some() => {
                self.write_snapshot(StyleVar::Radius)
            }
            None => {
                self.write(StyleVar::Radius, format_rem(self.snapshot.radius()))
            }
        }

        match self.overrides.font_family {
            Some(family) => {
                self.write(StyleVar::FontFamily, family.css_stack().to_string())
            }
            None => self.write_snapshot(StyleVar::FontFamily),
        }

        debug!(customized = !self.overrides.is_empty(), "theme applied");
    }

    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        debug!(preset = %preset.name, "applying color preset");
        self.overrides.colors.primary = Some(preset.primary);
        self.overrides.colors.accent = Some(preset.accent);
        self.picker.primary = hsl_to_hex(preset.primary);
        self.picker.accent = hsl_to_hex(preset.accent);
        self.customized();
    }

    pub fn set_primary_hex(&mut self, hex: &str) {
        self.picker.primary = parse_hex_lenient(hex);
        self.overrides.colors.primary = Some(hex_to_hsl(hex));
        self.customized();
    }

    pub fn set_accent_hex(&mut self, hex: &str) {
        self.picker.accent = parse_hex_lenient(hex);
        self.overrides.colors.accent = Some(hex_to_hsl(hex));
        self.customized();
    }

    pub fn set_primary_hsl(&mut self, color: Hsl) {
        self.picker.primary = hsl_to_hex(color);
        self.overrides.colors.primary = Some(color);
        self.customized();
    }

    pub fn set_accent_hsl(&mut self, color: Hsl) {
        self.picker.accent = hsl_to_hex(color);
        self.overrides.colors.accent = Some(color);
        self.customized();
    }

    /// Pick secondary directly; it then ignores later primary changes
    pub fn set_secondary_hex(&mut self, hex: &str) {
        self.overrides.colors.secondary = Some(hex_to_hsl(hex));
        self.customized();
    }

    pub fn set_ring_hex(&mut self, hex: &str) {
        self.overrides.colors.ring = Some(hex_to_hsl(hex));
        self.customized();
    }

    pub fn set_background_hex(&mut self, hex: &str) {
        self.overrides.colors.background = Some(hex_to_hsl(hex));
        self.customized();
    }

    pub fn set_card_hex(&mut self, hex: &str) {
        self.overrides.colors.card = Some(hex_to_hsl(hex));
        self.customized();
    }

    /// Slider input; non-finite values are ignored
    pub fn set_radius(&mut self, radius: f32) {
        if !radius.is_finite() {
            debug!(radius, "ignoring non-finite radius");
            return;
        }
        self.overrides.radius = Some(snap_radius(radius));
        self.customized();
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.overrides.font_family = Some(family);
        self.customized();
    }

    /// Drop every override and re-apply the snapshot verbatim
    pub fn reset(&mut self) {
        self.overrides = ThemeOverrides::default();
        self.picker = PickerHex::from_palette(self.snapshot.palette());
        self.apply();
        self.phase = SessionPhase::Initialized;
        info!("theme overrides reset to snapshot");
    }

    /// Restore every touched variable to its pre-mount inline state
    pub fn teardown(mut self) {
        self.restore();
    }

    fn customized(&mut self) {
        self.apply();
        self.phase = SessionPhase::Customized;
    }

    fn write(&mut self, var: StyleVar, value: String) {
        trace!(%var, %value, "set style variable");
        self.target.set_inline(var, value);
        self.touched.insert(var);
    }

    /// Write the snapshot's value, or put the pre-mount inline state back
    fn write_snapshot(&mut self, var: StyleVar) {
        match self.snapshot.raw(var) {
            Some(value) => {
                let value = value.to_string();
                self.write(var, value)
            }
            None => self.restore_var(var),
        }
    }

    fn restore_var(&mut self, var: StyleVar) {
        match self.prior_inline.get(&var).cloned().flatten() {
            Some(value) => self.target.set_inline(var, value),
            None => self.target.remove_inline(var),
        }
        self.touched.insert(var);
    }

    fn restore(&mut self) {
        if self.phase == SessionPhase::TornDown {
            return;
        }
        let touched = std::mem::take(&mut self.touched);
        for var in &touched {
            self.restore_var(*var);
        }
        self.touched.clear();
        self.phase = SessionPhase::TornDown;
        info!(restored = touched.len(), "theme session torn down");
    }
}

impl<T: StyleTarget + ?Sized> Drop for ThemeSession<'_, T> {
    fn drop(&mut self) {
        self.restore();
    }
}

impl<T: StyleTarget + ?Sized> std::fmt::Debug for ThemeSession<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSession")
            .field("phase", &self.phase)
            .field("overrides", &self.overrides)
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}
