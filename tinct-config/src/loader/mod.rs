pub mod error;

use std::{env, fs, path::PathBuf};

use tracing::{info, warn};

use self::error::ConfigLoadError;
use super::models::{CONFIG_JSON_ENV, ThemeConfig, ThemeConfigSource};
use super::validation::{self, ConfigWarnings};

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: ThemeConfig,
    pub source: ThemeConfigSource,
    pub warnings: ConfigWarnings,
}

/// Resolves, reads, parses and validates the theme configuration.
///
/// An explicit path wins over everything `ThemeConfigSource::detect` would
/// pick.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let source = match &self.config_path {
            Some(path) => ThemeConfigSource::Explicit(path.clone()),
            None => ThemeConfigSource::detect(),
        };

        let config = match &source {
            ThemeConfigSource::Default => ThemeConfig::default(),
            ThemeConfigSource::EnvInline => {
                let raw = read_env(CONFIG_JSON_ENV)?;
                ThemeConfig::parse_json(&raw).map_err(ConfigLoadError::Parse)?
            }
            ThemeConfigSource::Explicit(path)
            | ThemeConfigSource::EnvPath(path)
            | ThemeConfigSource::File(path) => {
                let contents = fs::read_to_string(path).map_err(|source| {
                    ConfigLoadError::Io {
                        path: path.clone(),
                        source,
                    }
                })?;
                ThemeConfig::parse_for_path(&contents, path)
                    .map_err(ConfigLoadError::Parse)?
            }
        };

        let warnings = validation::apply_guard_rails(&config)?;
        for warning in warnings.iter() {
            warn!(%warning, "theme config warning");
        }
        info!(%source, presets = config.presets.len(), "theme config loaded");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }
}

/// Unset and non-UTF-8 values are load errors, not empty configs
fn read_env(var: &'static str) -> Result<String, ConfigLoadError> {
    env::var(var).map_err(|source| ConfigLoadError::Env { var, source })
}
