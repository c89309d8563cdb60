//! Veneer Theme
//!
//! Pure theme data and evaluation for the veneer retrofit engine: no I/O
//! beyond the settings document, no host state, no interception. The engine
//! crate wires these tables into the live seams.
//!
//! # Components
//!
//! - [`ThemePalette`]: the two primary colors plus a font, with every
//!   dependent value derived from them and never stored independently
//! - [`rules`]: the four rule-table categories (color identity, font
//!   selection, draw pipelines, widget style)
//! - [`tint`]: the grayscale-mask colorizer for themed button icons
//! - [`ThemeSettings`]: the key-addressed settings document; every key is
//!   optional and a missing key means the built-in default
//!
//! # Example
//!
//! ```rust
//! use veneer_core::Color;
//! use veneer_theme::rules::ColorRules;
//! use veneer_theme::ThemePalette;
//!
//! let palette = ThemePalette::default();
//! let mut rules = ColorRules::new();
//! rules.declare(Color::rgb(255, 255, 192), Color::rgb(210, 210, 210));
//!
//! assert_eq!(
//!     rules.resolve(Color::rgb(255, 255, 192), &palette),
//!     Some(Color::rgb(210, 210, 210)),
//! );
//! assert_eq!(rules.resolve(Color::rgb(255, 255, 193), &palette), None);
//! ```

pub mod error;
pub mod palette;
pub mod rules;
pub mod settings;
pub mod tint;

pub use error::{Result, ThemeError};
pub use palette::ThemePalette;
pub use settings::ThemeSettings;
