//! The theme palette
//!
//! Two primary colors and one font; everything else is derived. Derived
//! values are recomputed whenever a primary changes and are never stored
//! independently of their sources, so they cannot drift.

use veneer_core::{Color, FontDesc, FontStyle};

use crate::settings::ThemeSettings;

/// Fraction by which the background is lightened for button faces and the
/// text color is darkened for disabled text.
const DERIVE_STEP: f32 = 0.1;

/// Primary colors, font, and their derived values
#[derive(Clone, Debug, PartialEq)]
pub struct ThemePalette {
    background: Color,
    text: Color,
    font: FontDesc,
    // Derived; recomputed on every primary change
    disabled_text: Color,
    button_background: Color,
    button_font: FontDesc,
    edit_font: FontDesc,
    auto_adjust: bool,
}

impl ThemePalette {
    pub const DEFAULT_BACKGROUND: Color = Color::rgb(12, 12, 12);
    pub const DEFAULT_TEXT: Color = Color::rgb(210, 210, 210);

    pub fn new(background: Color, text: Color, font: FontDesc) -> Self {
        let mut palette = Self {
            background,
            text,
            font,
            disabled_text: Color::BLACK,
            button_background: Color::BLACK,
            button_font: FontDesc::new("", 0.0),
            edit_font: FontDesc::new("", 0.0),
            auto_adjust: true,
        };
        palette.separate();
        palette.recompute();
        palette
    }

    /// Palette configured from a settings document; absent keys keep the
    /// built-in defaults.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut palette = Self::new(
            settings.background.unwrap_or(Self::DEFAULT_BACKGROUND),
            settings.text.unwrap_or(Self::DEFAULT_TEXT),
            settings
                .font
                .clone()
                .unwrap_or_else(|| FontDesc::new("Tahoma", 8.25)),
        );
        palette.auto_adjust = settings.auto_adjust;
        palette.recompute();
        palette
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn text(&self) -> Color {
        self.text
    }

    pub fn font(&self) -> &FontDesc {
        &self.font
    }

    pub fn disabled_text(&self) -> Color {
        self.disabled_text
    }

    pub fn button_background(&self) -> Color {
        self.button_background
    }

    /// Bold caption font for buttons, derived from the main font family
    pub fn button_font(&self) -> &FontDesc {
        &self.button_font
    }

    /// Slightly smaller font for single-line edit fields; keeps their text
    /// from overflowing the fixed-height boxes the host lays out
    pub fn edit_font(&self) -> &FontDesc {
        &self.edit_font
    }

    pub fn auto_adjust(&self) -> bool {
        self.auto_adjust
    }

    pub fn set_background(&mut self, background: Color) {
        self.background = background;
        self.separate();
        self.recompute();
    }

    pub fn set_text(&mut self, text: Color) {
        self.text = text;
        self.separate();
        self.recompute();
    }

    pub fn set_font(&mut self, font: FontDesc) {
        self.font = font;
        self.recompute();
    }

    /// When off, derived colors freeze at the built-in defaults instead of
    /// following the primaries.
    pub fn set_auto_adjust(&mut self, auto_adjust: bool) {
        self.auto_adjust = auto_adjust;
        self.recompute();
    }

    /// Restore the invariant `background != text`. A coinciding pair is
    /// pushed apart from both ends; one step always separates two equal
    /// 8-bit colors.
    fn separate(&mut self) {
        if self.background == self.text {
            tracing::warn!(
                color = %self.background,
                "background and text colors coincide; separating"
            );
            self.background = self.background.darken(DERIVE_STEP);
            self.text = self.text.lighten(DERIVE_STEP);
        }
        debug_assert_ne!(self.background, self.text);
    }

    fn recompute(&mut self) {
        if self.auto_adjust {
            self.disabled_text = self.text.darken(DERIVE_STEP);
            self.button_background = self.background.lighten(DERIVE_STEP);
        } else {
            self.disabled_text = Self::DEFAULT_TEXT.darken(DERIVE_STEP);
            self.button_background = Self::DEFAULT_BACKGROUND.lighten(DERIVE_STEP);
        }
        self.button_font = self.font.derive(7.0, FontStyle::Bold);
        self.edit_font = self.font.derive(8.0, FontStyle::Regular);
    }
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_BACKGROUND,
            Self::DEFAULT_TEXT,
            FontDesc::new("Tahoma", 8.25),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_values_follow_primaries() {
        let mut palette = ThemePalette::default();
        palette.set_text(Color::rgb(200, 200, 200));
        assert_eq!(palette.disabled_text(), Color::rgb(180, 180, 180));

        palette.set_background(Color::rgb(20, 20, 20));
        assert_eq!(palette.button_background(), Color::rgb(43, 43, 43));
    }

    #[test]
    fn equal_primaries_are_separated() {
        let gray = Color::rgb(128, 128, 128);
        let palette = ThemePalette::new(gray, gray, FontDesc::new("Tahoma", 8.25));
        assert_ne!(palette.background(), palette.text());
    }

    #[test]
    fn separation_applies_on_late_updates_too() {
        let mut palette = ThemePalette::default();
        palette.set_text(palette.background());
        assert_ne!(palette.background(), palette.text());

        let mut palette = ThemePalette::default();
        palette.set_background(palette.text());
        assert_ne!(palette.background(), palette.text());
    }

    #[test]
    fn separation_works_at_the_extremes() {
        for c in [Color::BLACK, Color::WHITE] {
            let palette = ThemePalette::new(c, c, FontDesc::new("Tahoma", 8.25));
            assert_ne!(palette.background(), palette.text());
        }
    }

    #[test]
    fn secondary_fonts_derive_from_the_main_family() {
        let mut palette = ThemePalette::default();
        palette.set_font(FontDesc::new("Verdana", 9.0));
        assert_eq!(palette.button_font().family, "Verdana");
        assert_eq!(palette.button_font().style, FontStyle::Bold);
        assert_eq!(palette.edit_font().size, 8.0);
    }

    #[test]
    fn auto_adjust_off_freezes_derived_colors() {
        let mut palette = ThemePalette::default();
        palette.set_auto_adjust(false);
        palette.set_text(Color::rgb(90, 90, 90));
        assert_eq!(
            palette.disabled_text(),
            ThemePalette::DEFAULT_TEXT.darken(0.1)
        );
    }
}
