//! Font descriptors
//!
//! Fonts are opaque to the engine: it never shapes or rasterizes text, it
//! only substitutes which font the host will use. A descriptor is therefore
//! plain data the settings layer can round-trip.

use serde::{Deserialize, Serialize};

/// Weight/slant variant of a font
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// A font as the host identifies it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDesc {
    pub family: String,
    /// Point size
    pub size: f32,
    #[serde(default)]
    pub style: FontStyle,
}

impl FontDesc {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::Regular,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// A new descriptor in the same family. Secondary theme fonts (button
    /// captions, single-line edit fields) are derived from the configured
    /// main font this way.
    pub fn derive(&self, size: f32, style: FontStyle) -> Self {
        Self {
            family: self.family.clone(),
            size,
            style,
        }
    }
}
