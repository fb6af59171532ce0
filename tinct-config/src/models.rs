use anyhow::{Context, anyhow};
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};
use tinct_core::{
    ColorPreset, DerivationPolicy, FontFamily, InMemoryStyleSheet,
    PresetCatalog,
};
use tinct_model::StyleVar;
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "TINCT_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "TINCT_CONFIG_JSON";

/// Source that produced the theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ThemeConfigSource {
    /// Resolve where configuration should come from, without reading it.
    /// Evaluation order:
    /// 1) `$TINCT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$TINCT_CONFIG_JSON` (inline JSON),
    /// 3) `tinct.toml` / `tinct.json` in the working directory,
    /// 4) defaults.
    pub fn detect() -> Self {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            return Self::EnvPath(PathBuf::from(path_str));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            return Self::EnvInline;
        }

        match ThemeConfig::find_default_file() {
            Some(path) => Self::File(path),
            None => Self::Default,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::EnvPath(path) | Self::File(path) => {
                Some(path)
            }
            Self::EnvInline | Self::Default => None,
        }
    }
}

impl std::fmt::Display for ThemeConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::Explicit(path) => write!(f, "{}", path.display()),
            Self::EnvPath(path) => {
                write!(f, "{} (via {CONFIG_PATH_ENV})", path.display())
            }
            Self::EnvInline => write!(f, "{CONFIG_JSON_ENV}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Base stylesheet values keyed by variable name.
///
/// Keys are either the camelCase slot name (`primary`, `cardForeground`,
/// `radius`, `fontFamily`) or the CSS variable (`--primary`). Entries from a
/// config file overlay the built-in dashboard theme; an empty value removes
/// the variable from the stylesheet entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StylesheetConfig {
    vars: BTreeMap<String, String>,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        let vars = [
            ("primary", "258 36% 51%"),
            ("primaryForeground", "0 0% 98%"),
            ("secondary", "240 4.8% 95.9%"),
            ("secondaryForeground", "240 5.9% 10%"),
            ("accent", "232 39% 34%"),
            ("accentForeground", "0 0% 98%"),
            ("background", "0 0% 100%"),
            ("foreground", "240 10% 3.9%"),
            ("card", "0 0% 100%"),
            ("cardForeground", "240 10% 3.9%"),
            ("ring", "258 36% 51%"),
            ("radius", "0.5rem"),
            ("fontFamily", FontFamily::System.css_stack()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        Self { vars }
    }
}

impl<'de> Deserialize<'de> for StylesheetConfig {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut config = Self::default();
        config.overlay(overrides);
        Ok(config)
    }
}

impl StylesheetConfig {
    /// Stylesheet with nothing in it
    pub fn empty() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Apply entries on top; keys naming the same variable replace it.
    pub fn overlay(
        &mut self,
        entries: impl IntoIterator<Item = (String, String)>,
    ) {
        for (key, value) in entries {
            if let Ok(var) = key.parse::<StyleVar>() {
                self.vars.retain(|existing, _| {
                    existing.parse::<StyleVar>() != Ok(var)
                });
            }
            self.vars.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Recognized variables with non-empty values
    pub fn vars(&self) -> impl Iterator<Item = (StyleVar, &str)> + '_ {
        self.vars.iter().filter_map(|(key, value)| {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            match key.parse::<StyleVar>() {
                Ok(var) => Some((var, value)),
                Err(err) => {
                    debug!(%err, "skipping stylesheet entry");
                    None
                }
            }
        })
    }

    pub fn to_style_sheet(&self) -> InMemoryStyleSheet {
        InMemoryStyleSheet::with_base(
            self.vars().map(|(var, value)| (var, value.to_string())),
        )
    }
}

/// Top-level theme settings. The stylesheet stands in for the document the
/// engine themes; derivation numbers tune how picked colors cascade; extra
/// presets join the built-in ones.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Base variable values the session snapshots at mount.
    pub stylesheet: StylesheetConfig,
    /// Foreground/secondary/ring heuristic thresholds. Keep
    /// `secondary_forced_shift` between `min_secondary_delta` and 50 or the
    /// secondary can end up indistinguishable from primary.
    pub derivation: DerivationPolicy,
    /// Presets appended to the built-in list; a matching name replaces the
    /// built-in preset.
    pub presets: Vec<ColorPreset>,
}

impl ThemeConfig {
    /// Parse file contents, picking the format from the extension
    pub fn parse_for_path(contents: &str, path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(contents).with_context(|| {
                format!("invalid theme config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(contents).map_err(|err| {
                    anyhow!("invalid theme config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse theme config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid theme config json: {err}"))
    }

    /// The stylesheet a session mounts onto
    pub fn style_sheet(&self) -> InMemoryStyleSheet {
        self.stylesheet.to_style_sheet()
    }

    pub fn preset_catalog(&self) -> PresetCatalog {
        PresetCatalog::builtin().with_extra(self.presets.iter().cloned())
    }

    pub(crate) fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "tinct.toml",
            "tinct.json",
            "config/tinct.toml",
            "config/tinct.json",
        ];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
