//! Color identity rules
//!
//! The value-construction seam runs every color the host makes through this
//! table. A source identity maps either to a fixed replacement or to a
//! palette-derived one, so a palette change does not require re-declaring
//! the rules.

use indexmap::IndexMap;
use veneer_core::Color;

use crate::palette::ThemePalette;

/// Replacement side of a color rule
pub enum ColorSubstitute {
    /// A fixed color
    Value(Color),
    /// A color computed from the live palette at resolve time
    Derived(Box<dyn Fn(&ThemePalette) -> Color + Send + Sync>),
}

impl ColorSubstitute {
    fn resolve(&self, palette: &ThemePalette) -> Color {
        match self {
            ColorSubstitute::Value(color) => *color,
            ColorSubstitute::Derived(derive) => derive(palette),
        }
    }
}

impl From<Color> for ColorSubstitute {
    fn from(color: Color) -> Self {
        ColorSubstitute::Value(color)
    }
}

/// Declaration-ordered color substitution table
///
/// Source identities are mutually distinct: re-declaring one replaces the
/// earlier rule and logs the replacement, so no rule is ever shadowed
/// silently.
#[derive(Default)]
pub struct ColorRules {
    rules: IndexMap<Color, ColorSubstitute>,
}

impl ColorRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `source -> replacement`
    pub fn declare(&mut self, source: Color, replacement: impl Into<ColorSubstitute>) {
        if self.rules.insert(source, replacement.into()).is_some() {
            tracing::warn!(%source, "color rule re-declared; earlier replacement dropped");
        }
    }

    /// Declare a replacement that follows the palette
    pub fn declare_derived<F>(&mut self, source: Color, derive: F)
    where
        F: Fn(&ThemePalette) -> Color + Send + Sync + 'static,
    {
        self.declare(source, ColorSubstitute::Derived(Box::new(derive)));
    }

    /// The replacement for `candidate`, or `None` when no declared source
    /// identity matches exactly
    pub fn resolve(&self, candidate: Color, palette: &ThemePalette) -> Option<Color> {
        self.rules.get(&candidate).map(|s| s.resolve(palette))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_identity_resolves_to_replacement() {
        let palette = ThemePalette::default();
        let mut rules = ColorRules::new();
        rules.declare(Color::rgb(255, 255, 192), Color::rgb(210, 210, 210));

        assert_eq!(
            rules.resolve(Color::rgb(255, 255, 192), &palette),
            Some(Color::rgb(210, 210, 210))
        );
    }

    #[test]
    fn off_by_one_channel_passes_through() {
        let palette = ThemePalette::default();
        let mut rules = ColorRules::new();
        rules.declare(Color::rgb(255, 255, 192), Color::rgb(210, 210, 210));

        assert_eq!(rules.resolve(Color::rgb(255, 255, 193), &palette), None);
    }

    #[test]
    fn rededeclaration_replaces_without_growing_the_table() {
        let palette = ThemePalette::default();
        let mut rules = ColorRules::new();
        rules.declare(Color::BLACK, Color::rgb(1, 1, 1));
        rules.declare(Color::BLACK, Color::rgb(2, 2, 2));

        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules.resolve(Color::BLACK, &palette),
            Some(Color::rgb(2, 2, 2))
        );
    }

    #[test]
    fn derived_replacement_follows_the_palette() {
        let mut palette = ThemePalette::default();
        let mut rules = ColorRules::new();
        rules.declare_derived(Color::rgb(0, 0, 64), |p| p.background());

        assert_eq!(
            rules.resolve(Color::rgb(0, 0, 64), &palette),
            Some(palette.background())
        );

        palette.set_background(Color::rgb(30, 30, 30));
        assert_eq!(
            rules.resolve(Color::rgb(0, 0, 64), &palette),
            Some(Color::rgb(30, 30, 30))
        );
    }
}
