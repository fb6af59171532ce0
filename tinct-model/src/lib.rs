//! Core data model definitions shared across tinct crates.
#![allow(missing_docs)]

pub mod error;
pub mod hex;
pub mod hsl;
pub mod palette;
pub mod slot;

pub use error::ColorParseError;
pub use hex::HexColor;
pub use hsl::Hsl;
pub use palette::ThemePalette;
pub use slot::{StyleVar, ThemeSlot, UnknownVariable};
