//! Shared configuration library for tinct.
//!
//! This crate centralizes theme config loading (file, inline JSON, defaults)
//! and the guard rails that keep derivation numbers sane. `tinctctl` and any
//! embedding application go through [`ConfigLoader`] so there is a single
//! source of truth for stylesheet defaults and validation rules.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{StylesheetConfig, ThemeConfig, ThemeConfigSource};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
