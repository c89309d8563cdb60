//! Widget style rules
//!
//! Two mechanisms, applied in this order by the tree walker:
//!
//! 1. **Style changes**: ordered (predicate, change) pairs writing colors
//!    or images onto matching widgets. Every matching change applies; later
//!    changes overwrite the fields they set, so a kind-wide change followed
//!    by a name-specific one composes naturally.
//! 2. **Fixups**: one structural adjustment per widget kind, dispatched by
//!    table over the closed kind enumeration. Fixups express what value
//!    substitution cannot: border styles, auto-size, padding, literal-name
//!    corrections.

use std::sync::Arc;

use image::RgbaImage;
use rustc_hash::FxHashMap;
use veneer_core::{Color, Widget, WidgetKind};

use crate::error::Result;
use crate::palette::ThemePalette;

/// Matches widgets a style change applies to
pub type WidgetPredicate = Box<dyn Fn(&Widget) -> bool + Send + Sync>;

/// Context handed to fixups; carries the palette and whatever name
/// knowledge the engine has
pub struct FixupContext<'a> {
    pub palette: &'a ThemePalette,
    /// Widget names that must keep their host-assigned size (the walker
    /// fills this from the catalog's group prefixes)
    pub fixed_size_prefixes: &'a [String],
}

/// One structural adjustment for a widget kind
pub type Fixup = Box<dyn Fn(&mut Widget, &FixupContext) -> Result<()> + Send + Sync>;

/// Field-wise style overwrite
#[derive(Clone, Debug, Default)]
pub struct StyleChange {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub image: Option<Arc<RgbaImage>>,
}

impl StyleChange {
    pub fn background(color: Color) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    pub fn foreground(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Self::default()
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_image(mut self, image: Arc<RgbaImage>) -> Self {
        self.image = Some(image);
        self
    }

    fn apply(&self, widget: &mut Widget) {
        if let Some(background) = self.background {
            widget.style.background = Some(background);
        }
        if let Some(foreground) = self.foreground {
            widget.style.foreground = Some(foreground);
        }
        if let Some(image) = &self.image {
            widget.background_image = Some(Arc::clone(image));
        }
    }
}

/// Ordered style changes plus the per-kind fixup table
#[derive(Default)]
pub struct StyleRules {
    changes: Vec<(WidgetPredicate, StyleChange)>,
    fixups: FxHashMap<WidgetKind, Fixup>,
}

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change every widget
    pub fn change_all(&mut self, change: StyleChange) {
        self.change_when(|_| true, change);
    }

    /// Change every widget of one kind
    pub fn change_kind(&mut self, kind: WidgetKind, change: StyleChange) {
        self.change_when(move |w| w.kind == kind, change);
    }

    /// Change widgets of one kind with an exact runtime name
    pub fn change_named(&mut self, kind: WidgetKind, name: impl Into<String>, change: StyleChange) {
        let name = name.into();
        self.change_when(move |w| w.kind == kind && w.name == name, change);
    }

    /// Change widgets matching an arbitrary predicate
    pub fn change_when<F>(&mut self, predicate: F, change: StyleChange)
    where
        F: Fn(&Widget) -> bool + Send + Sync + 'static,
    {
        self.changes.push((Box::new(predicate), change));
    }

    /// Install the structural fixup for one widget kind. Each kind has at
    /// most one fixup; installing a second replaces the first loudly.
    pub fn set_fixup<F>(&mut self, kind: WidgetKind, fixup: F)
    where
        F: Fn(&mut Widget, &FixupContext) -> Result<()> + Send + Sync + 'static,
    {
        if self.fixups.insert(kind, Box::new(fixup)).is_some() {
            tracing::warn!(?kind, "structural fixup replaced");
        }
    }

    /// Apply every matching style change to `widget`, in declaration order
    pub fn apply_changes(&self, widget: &mut Widget) {
        for (predicate, change) in &self.changes {
            if predicate(widget) {
                change.apply(widget);
            }
        }
    }

    /// Run the kind fixup for `widget`, if its kind has one
    pub fn run_fixup(&self, widget: &mut Widget, ctx: &FixupContext) -> Result<()> {
        match self.fixups.get(&widget.kind) {
            Some(fixup) => fixup(widget, ctx),
            None => Ok(()),
        }
    }

    pub fn has_fixup(&self, kind: WidgetKind) -> bool {
        self.fixups.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    fn fixup_ctx(palette: &ThemePalette) -> FixupContext<'_> {
        FixupContext {
            palette,
            fixed_size_prefixes: &[],
        }
    }

    #[test]
    fn later_changes_overwrite_earlier_fields() {
        let mut rules = StyleRules::new();
        rules.change_all(StyleChange::background(Color::rgb(12, 12, 12)));
        rules.change_kind(WidgetKind::Button, StyleChange::background(Color::rgb(23, 26, 39)));

        let mut button = Widget::new(WidgetKind::Button, "cmdOk");
        rules.apply_changes(&mut button);
        assert_eq!(button.style.background, Some(Color::rgb(23, 26, 39)));

        let mut label = Widget::new(WidgetKind::Label, "lbl");
        rules.apply_changes(&mut label);
        assert_eq!(label.style.background, Some(Color::rgb(12, 12, 12)));
    }

    #[test]
    fn unset_fields_survive_later_changes() {
        let mut rules = StyleRules::new();
        rules.change_all(
            StyleChange::background(Color::BLACK).with_foreground(Color::WHITE),
        );
        rules.change_kind(WidgetKind::Button, StyleChange::background(Color::rgb(9, 9, 9)));

        let mut button = Widget::new(WidgetKind::Button, "cmdOk");
        rules.apply_changes(&mut button);
        assert_eq!(button.style.foreground, Some(Color::WHITE));
    }

    #[test]
    fn named_changes_require_kind_and_exact_name() {
        let mut rules = StyleRules::new();
        rules.change_named(
            WidgetKind::Button,
            "cmdToolbarColony",
            StyleChange::background(Color::rgb(26, 45, 46)),
        );

        let mut hit = Widget::new(WidgetKind::Button, "cmdToolbarColony");
        rules.apply_changes(&mut hit);
        assert_eq!(hit.style.background, Some(Color::rgb(26, 45, 46)));

        let mut miss = Widget::new(WidgetKind::Label, "cmdToolbarColony");
        rules.apply_changes(&mut miss);
        assert_eq!(miss.style.background, None);
    }

    #[test]
    fn fixups_dispatch_by_kind() {
        let palette = ThemePalette::default();
        let mut rules = StyleRules::new();
        rules.set_fixup(WidgetKind::TreeView, |widget, _| {
            widget.style.border = veneer_core::BorderStyle::Single;
            Ok(())
        });

        let mut tree_view = Widget::new(WidgetKind::TreeView, "tv");
        rules.run_fixup(&mut tree_view, &fixup_ctx(&palette)).unwrap();
        assert_eq!(tree_view.style.border, veneer_core::BorderStyle::Single);

        let mut list = Widget::new(WidgetKind::ListBox, "lb");
        rules.run_fixup(&mut list, &fixup_ctx(&palette)).unwrap();
        assert_eq!(list.style.border, veneer_core::BorderStyle::Inset3D);
    }

    #[test]
    fn fixup_errors_surface_to_the_caller() {
        let palette = ThemePalette::default();
        let mut rules = StyleRules::new();
        rules.set_fixup(WidgetKind::Label, |widget, _| {
            Err(ThemeError::fixup(widget.name.clone(), "no such metric"))
        });

        let mut label = Widget::new(WidgetKind::Label, "lbl");
        assert!(rules.run_fixup(&mut label, &fixup_ctx(&palette)).is_err());
    }
}
