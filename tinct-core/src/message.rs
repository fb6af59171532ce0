//! Theme customization messages and their update handler

use tinct_model::Hsl;
use tracing::trace;

use crate::font::FontFamily;
use crate::preset::ColorPreset;
use crate::session::ThemeSession;
use crate::style::StyleTarget;

/// UI events on a theming surface
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeMessage {
    /// Preset button clicked
    ApplyPreset(ColorPreset),
    /// Primary color picker changed (raw picker hex)
    SetPrimaryHex(String),
    /// Accent color picker changed (raw picker hex)
    SetAccentHex(String),
    /// Primary typed as an `H S% L%` triple
    SetPrimaryHsl(Hsl),
    SetAccentHsl(Hsl),
    SetSecondaryHex(String),
    SetRingHex(String),
    SetBackgroundHex(String),
    SetCardHex(String),
    /// Radius slider moved (rem)
    SetRadius(f32),
    SetFontFamily(FontFamily),
    /// Reset appearance to the values captured at mount
    ResetToDefault,
}

impl ThemeMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ApplyPreset(_) => "Theme::ApplyPreset",
            Self::SetPrimaryHex(_) => "Theme::SetPrimaryHex",
            Self::SetAccentHex(_) => "Theme::SetAccentHex",
            Self::SetPrimaryHsl(_) => "Theme::SetPrimaryHsl",
            Self::SetAccentHsl(_) => "Theme::SetAccentHsl",
            Self::SetSecondaryHex(_) => "Theme::SetSecondaryHex",
            Self::SetRingHex(_) => "Theme::SetRingHex",
            Self::SetBackgroundHex(_) => "Theme::SetBackgroundHex",
            Self::SetCardHex(_) => "Theme::SetCardHex",
            Self::SetRadius(_) => "Theme::SetRadius",
            Self::SetFontFamily(_) => "Theme::SetFontFamily",
            Self::ResetToDefault => "Theme::ResetToDefault",
        }
    }
}

/// Main message handler for a theming surface
///
/// Each message is handled in one synchronous step: derivation and the full
/// variable rewrite finish before this returns.
pub fn update<T: StyleTarget + ?Sized>(
    session: &mut ThemeSession<'_, T>,
    message: ThemeMessage,
) {
    trace!(message = message.name(), "theme update");
    match message {
        ThemeMessage::ApplyPreset(preset) => session.apply_preset(&preset),
        ThemeMessage::SetPrimaryHex(hex) => session.set_primary_hex(&hex),
        ThemeMessage::SetAccentHex(hex) => session.set_accent_hex(&hex),
        ThemeMessage::SetPrimaryHsl(color) => session.set_primary_hsl(color),
        ThemeMessage::SetAccentHsl(color) => session.set_accent_hsl(color),
        ThemeMessage::SetSecondaryHex(hex) => session.set_secondary_hex(&hex),
        ThemeMessage::SetRingHex(hex) => session.set_ring_hex(&hex),
        ThemeMessage::SetBackgroundHex(hex) => session.set_background_hex(&hex),
        ThemeMessage::SetCardHex(hex) => session.set_card_hex(&hex),
        ThemeMessage::SetRadius(radius) => session.set_radius(radius),
        ThemeMessage::SetFontFamily(family) => session.set_font_family(family),
        ThemeMessage::ResetToDefault => session.reset(),
    }
}
