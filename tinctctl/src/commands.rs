use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use tinct_config::ThemeConfig;
use tinct_core::{
    FontFamily, InMemoryStyleSheet, PresetGroup, ThemeMessage, ThemeSession,
    hsl_to_hex as encode_hex, try_hex_to_hsl, update,
};
use tinct_model::{Hsl, StyleVar};
use tracing::debug;

use crate::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub(crate) enum PresetFilter {
    All,
    Group(PresetGroup),
}

/// Overrides requested on the `preview` command line
#[derive(Debug, Default)]
pub(crate) struct PreviewOptions {
    pub preset: Option<String>,
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub secondary: Option<String>,
    pub ring: Option<String>,
    pub background: Option<String>,
    pub card: Option<String>,
    pub radius: Option<f32>,
    pub font: Option<FontFamily>,
}

/// Accept a picker hex or an `H S% L%` triple.
fn parse_color(input: &str, what: &str) -> Result<Hsl> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        try_hex_to_hsl(trimmed)
            .with_context(|| format!("invalid {what} color '{input}'"))
    } else {
        trimmed
            .parse::<Hsl>()
            .with_context(|| format!("invalid {what} color '{input}'"))
    }
}

/// A validated primary/accent pick, kept in the form it was typed
#[derive(Debug)]
enum Picked {
    Hex(String),
    Hsl(Hsl),
}

fn picked_color(raw: &str, what: &str) -> Result<Picked> {
    let color = parse_color(raw, what)?;
    let trimmed = raw.trim();
    Ok(if trimmed.starts_with('#') {
        Picked::Hex(trimmed.to_string())
    } else {
        Picked::Hsl(color)
    })
}

fn render(sheet: &InMemoryStyleSheet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(sheet.render_css()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&sheet.to_json())?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub(crate) fn hex_to_hsl(hex: &str) -> Result<String> {
    let hsl = try_hex_to_hsl(hex.trim())
        .with_context(|| format!("invalid hex color '{hex}'"))?;
    Ok(format!("{hsl}\n"))
}

pub(crate) fn hsl_to_hex(hsl: &str) -> Result<String> {
    let hsl = hsl
        .parse::<Hsl>()
        .with_context(|| format!("invalid hsl color '{hsl}'"))?;
    Ok(format!("{}\n", encode_hex(hsl)))
}

pub(crate) fn derive(
    config: &ThemeConfig,
    primary: &str,
    accent: &str,
    format: OutputFormat,
) -> Result<String> {
    let primary = parse_color(primary, "primary")?;
    let accent = parse_color(accent, "accent")?;
    let palette = config.derivation.derive_palette(primary, accent);
    debug!(slots = palette.len(), "derived palette");

    let sheet = InMemoryStyleSheet::with_base(
        palette
            .iter()
            .map(|(slot, color)| (StyleVar::Slot(slot), color.to_string())),
    );
    render(&sheet, format)
}

pub(crate) fn presets(config: &ThemeConfig, filter: PresetFilter) -> String {
    let catalog = config.preset_catalog();
    let mut out = String::new();
    for preset in catalog.iter().filter(|preset| match filter {
        PresetFilter::All => true,
        PresetFilter::Group(group) => preset.group == group,
    }) {
        let _ = writeln!(
            out,
            "{:<16} {:<10} primary {:<12} ({}) accent {:<12} ({})",
            preset.name,
            preset.group,
            preset.primary.to_string(),
            encode_hex(preset.primary),
            preset.accent.to_string(),
            encode_hex(preset.accent),
        );
    }
    out
}

pub(crate) fn preview(
    config: &ThemeConfig,
    opts: &PreviewOptions,
    format: OutputFormat,
) -> Result<String> {
    let catalog = config.preset_catalog();
    let preset = opts
        .preset
        .as_deref()
        .map(|name| catalog.find(name).cloned())
        .transpose()?;

    let surfaces = [
        ("secondary", &opts.secondary),
        ("ring", &opts.ring),
        ("background", &opts.background),
        ("card", &opts.card),
    ];
    for (what, value) in surfaces {
        if let Some(hex) = value {
            if !hex.trim().starts_with('#') {
                bail!("{what} expects a hex color such as #f8fafc (got '{hex}')");
            }
            parse_color(hex, what)?;
        }
    }
    let primary = opts
        .primary
        .as_deref()
        .map(|raw| picked_color(raw, "primary"))
        .transpose()?;
    let accent = opts
        .accent
        .as_deref()
        .map(|raw| picked_color(raw, "accent"))
        .transpose()?;

    let mut sheet = config.style_sheet();
    let mut session = ThemeSession::mount(&mut sheet, config.derivation);

    let mut messages = Vec::new();
    messages.extend(preset.map(ThemeMessage::ApplyPreset));
    messages.extend(primary.map(|picked| match picked {
        Picked::Hex(hex) => ThemeMessage::SetPrimaryHex(hex),
        Picked::Hsl(color) => ThemeMessage::SetPrimaryHsl(color),
    }));
    messages.extend(accent.map(|picked| match picked {
        Picked::Hex(hex) => ThemeMessage::SetAccentHex(hex),
        Picked::Hsl(color) => ThemeMessage::SetAccentHsl(color),
    }));
    messages.extend(opts.secondary.clone().map(ThemeMessage::SetSecondaryHex));
    messages.extend(opts.ring.clone().map(ThemeMessage::SetRingHex));
    messages.extend(opts.background.clone().map(ThemeMessage::SetBackgroundHex));
    messages.extend(opts.card.clone().map(ThemeMessage::SetCardHex));
    messages.extend(opts.radius.map(ThemeMessage::SetRadius));
    messages.extend(opts.font.map(ThemeMessage::SetFontFamily));

    for message in messages {
        update(&mut session, message);
    }

    let rendered = render(session.target(), format);
    session.teardown();
    rendered
}
