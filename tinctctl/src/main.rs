//! `tinctctl`: convert colors, derive palettes and preview theme overrides
//! from the command line.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tinct_config::ConfigLoader;
use tinct_core::{FontFamily, PresetGroup};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{PreviewOptions, PresetFilter};

#[derive(Debug, Parser)]
#[command(
    name = "tinctctl",
    version,
    about = "Theme override engine: color conversion, palette derivation and previews"
)]
struct Cli {
    /// Theme config file (TOML or JSON); overrides TINCT_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a picker hex color (#rgb or #rrggbb) to an `H S% L%` triple
    HexToHsl { hex: String },
    /// Convert an `H S% L%` triple to #rrggbb
    HslToHex { hsl: String },
    /// Derive the full palette from a primary and an accent color
    Derive {
        /// Hex (#rrggbb) or `H S% L%`
        #[arg(long)]
        primary: String,
        /// Hex (#rrggbb) or `H S% L%`
        #[arg(long)]
        accent: String,
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
    },
    /// List the available color presets
    Presets {
        #[arg(long, value_enum, default_value = "all")]
        group: GroupArg,
    },
    /// Apply overrides to the configured stylesheet and print the result
    Preview {
        /// Preset name (case-insensitive)
        #[arg(long)]
        preset: Option<String>,
        #[arg(long)]
        primary: Option<String>,
        #[arg(long)]
        accent: Option<String>,
        /// Hex only; replaces the secondary derived from primary
        #[arg(long)]
        secondary: Option<String>,
        /// Hex only; replaces the ring derived from primary
        #[arg(long)]
        ring: Option<String>,
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        card: Option<String>,
        /// Corner radius in rem (0.0-1.5, snapped to 0.1)
        #[arg(long, allow_negative_numbers = true)]
        radius: Option<f32>,
        /// system, inter, serif or mono
        #[arg(long)]
        font: Option<FontFamily>,
        #[arg(long, value_enum, default_value = "css")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum OutputFormat {
    Css,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GroupArg {
    Settings,
    Playground,
    Custom,
    All,
}

impl From<GroupArg> for PresetFilter {
    fn from(val: GroupArg) -> Self {
        match val {
            GroupArg::Settings => PresetFilter::Group(PresetGroup::Settings),
            GroupArg::Playground => PresetFilter::Group(PresetGroup::Playground),
            GroupArg::Custom => PresetFilter::Group(PresetGroup::Custom),
            GroupArg::All => PresetFilter::All,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Command::HexToHsl { hex } => commands::hex_to_hsl(&hex)?,
        Command::HslToHex { hsl } => commands::hsl_to_hex(&hsl)?,
        Command::Derive {
            primary,
            accent,
            format,
        } => {
            let load = load_config(cli.config)?;
            commands::derive(&load.config, &primary, &accent, format)?
        }
        Command::Presets { group } => {
            let load = load_config(cli.config)?;
            commands::presets(&load.config, group.into())
        }
        Command::Preview {
            preset,
            primary,
            accent,
            secondary,
            ring,
            background,
            card,
            radius,
            font,
            format,
        } => {
            let load = load_config(cli.config)?;
            let opts = PreviewOptions {
                preset,
                primary,
                accent,
                secondary,
                ring,
                background,
                card,
                radius,
                font,
            };
            commands::preview(&load.config, &opts, format)?
        }
    };

    print!("{output}");
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<tinct_config::ConfigLoad> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
