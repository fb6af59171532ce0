//! # Tinct Core
//!
//! Runtime theming for a dashboard whose look is driven by CSS custom
//! properties holding `"H S% L%"` triples.
//!
//! ## Overview
//!
//! - **Conversion**: hex ↔ HSL with the same channel math a browser picker uses
//! - **Derivation**: secondary, ring and foreground slots from a few picked colors
//! - **Presets**: named primary/accent pairs for one-click theming
//! - **Sessions**: capture the computed style at mount, write overrides on
//!   every change, restore everything on reset or teardown
//!
//! ## Architecture
//!
//! - [`convert`]: hex parsing and HSL conversion
//! - [`derive`]: [`DerivationPolicy`] and palette resolution
//! - [`preset`]: built-in presets and the [`PresetCatalog`]
//! - [`font`]: selectable font stacks
//! - [`style`]: the [`StyleTarget`] seam and an in-memory stylesheet
//! - [`session`]: the [`ThemeSession`] lifecycle
//! - [`message`]: UI messages and their update handler
//!
//! ## Example
//!
//! ```
//! use tinct_core::{
//!     DerivationPolicy, InMemoryStyleSheet, PresetCatalog, StyleTarget,
//!     ThemeSession,
//! };
//! use tinct_model::{StyleVar, ThemeSlot};
//!
//! let mut sheet = InMemoryStyleSheet::with_base([(
//!     StyleVar::Slot(ThemeSlot::Primary),
//!     "258 36% 51%".to_string(),
//! )]);
//!
//! let mut session = ThemeSession::mount(&mut sheet, DerivationPolicy::default());
//! let catalog = PresetCatalog::builtin();
//! session.apply_preset(catalog.find("Oceanic Tones").unwrap());
//! assert_eq!(
//!     session.target().computed(StyleVar::Slot(ThemeSlot::Ring)).as_deref(),
//!     Some("210 80% 60%")
//! );
//!
//! session.teardown();
//! assert!(!sheet.has_inline_overrides());
//! ```
#![allow(missing_docs)]

pub mod convert;
pub mod derive;
pub mod font;
pub mod message;
pub mod preset;
pub mod session;
pub mod style;

pub use convert::{
    hex_to_hsl, hsl_string_to_hex, hsl_to_hex, parse_hex_lenient, rgb_to_hsl,
    try_hex_to_hsl,
};
pub use derive::{
    ColorOverrides, DerivationPolicy, derive_foreground, derive_palette,
    resolve_palette,
};
pub use font::{FontFamily, UnknownFont};
pub use message::{ThemeMessage, update};
pub use preset::{
    ColorPreset, PLAYGROUND_PRESETS, PresetCatalog, PresetGroup,
    SETTINGS_PRESETS, UnknownPreset,
};
pub use session::{
    PickerHex, SessionPhase, ThemeOverrides, ThemeSession, ThemeSnapshot,
    snap_radius,
};
pub use style::{InMemoryStyleSheet, StyleTarget};
