//! Theme settings document
//!
//! A small TOML document of independently keyed settings. Every key is
//! optional: a missing document, a missing key, or an unparseable document
//! all resolve to the built-in defaults without surfacing an error to the
//! user. Only *writing* settings can fail.

use std::path::Path;

use serde::{Deserialize, Serialize};
use veneer_core::{Color, FontDesc};

use crate::error::Result;

/// User-configurable theme settings
///
/// Scalar keys come before the font table so the document serializes
/// cleanly as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub background: Option<Color>,
    pub text: Option<Color>,
    /// Recompute derived colors whenever a primary changes
    pub auto_adjust: bool,
    /// Main font; secondary fonts derive from its family
    pub font: Option<FontDesc>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            background: None,
            text: None,
            auto_adjust: true,
            font: None,
        }
    }
}

impl ThemeSettings {
    /// Read settings from `path`. Absent or unreadable documents are the
    /// normal first-run case and yield defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "no saved theme settings");
                return Self::default();
            }
        };
        Self::parse(&text)
    }

    /// Parse a settings document, falling back to defaults on malformed
    /// input rather than refusing to theme at all.
    pub fn parse(text: &str) -> Self {
        match toml::from_str(text) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "theme settings unreadable, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
