//! Font selection rules
//!
//! A base font plus ordered exception rules. The first matching exception
//! wins; widgets matching nothing fall back to the base font, and when no
//! base is set the host's own font stands.

use veneer_core::{FontDesc, WidgetKind};

/// What a font predicate may discriminate on
#[derive(Clone, Copy, Debug)]
pub struct FontContext<'a> {
    pub kind: WidgetKind,
    pub name: &'a str,
    /// Multiline edit fields keep the base font; single-line ones get a
    /// smaller size so text stays inside the host's fixed box heights
    pub multiline: bool,
}

type FontPredicate = Box<dyn Fn(&FontContext) -> bool + Send + Sync>;

/// Base font and ordered exceptions
#[derive(Default)]
pub struct FontRules {
    base: Option<FontDesc>,
    rules: Vec<(FontPredicate, FontDesc)>,
}

impl FontRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Font applied to every widget no exception claims
    pub fn set_base(&mut self, font: FontDesc) {
        self.base = Some(font);
    }

    /// Exception for every widget of one kind
    pub fn for_kind(&mut self, kind: WidgetKind, font: FontDesc) {
        self.when(move |ctx| ctx.kind == kind, font);
    }

    /// Exception with an arbitrary discriminator
    pub fn when<F>(&mut self, predicate: F, font: FontDesc)
    where
        F: Fn(&FontContext) -> bool + Send + Sync + 'static,
    {
        self.rules.push((Box::new(predicate), font));
    }

    /// The font for this widget, or `None` to leave the host's font alone
    pub fn resolve(&self, ctx: &FontContext) -> Option<&FontDesc> {
        self.rules
            .iter()
            .find(|(predicate, _)| predicate(ctx))
            .map(|(_, font)| font)
            .or(self.base.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(kind: WidgetKind, name: &str, multiline: bool) -> FontContext<'_> {
        FontContext {
            kind,
            name,
            multiline,
        }
    }

    #[test]
    fn no_rules_means_hands_off() {
        let rules = FontRules::new();
        assert!(rules.resolve(&ctx(WidgetKind::Label, "lbl", false)).is_none());
    }

    #[test]
    fn exceptions_win_over_the_base_font() {
        let mut rules = FontRules::new();
        rules.set_base(FontDesc::new("Tahoma", 8.25));
        rules.for_kind(WidgetKind::Button, FontDesc::new("Tahoma", 7.0));

        let button = rules
            .resolve(&ctx(WidgetKind::Button, "cmdOk", false))
            .unwrap();
        assert_eq!(button.size, 7.0);

        let label = rules
            .resolve(&ctx(WidgetKind::Label, "lbl", false))
            .unwrap();
        assert_eq!(label.size, 8.25);
    }

    #[test]
    fn first_matching_exception_wins() {
        let mut rules = FontRules::new();
        rules.for_kind(WidgetKind::TextBox, FontDesc::new("Tahoma", 8.0));
        rules.when(
            |ctx| ctx.kind == WidgetKind::TextBox && ctx.multiline,
            FontDesc::new("Tahoma", 12.0),
        );

        // The broader kind rule was declared first, so it claims multiline
        // text boxes too.
        let font = rules
            .resolve(&ctx(WidgetKind::TextBox, "txtNotes", true))
            .unwrap();
        assert_eq!(font.size, 8.0);
    }

    #[test]
    fn multiline_discriminator() {
        let mut rules = FontRules::new();
        rules.set_base(FontDesc::new("Tahoma", 8.25));
        rules.when(
            |ctx| ctx.kind == WidgetKind::TextBox && !ctx.multiline,
            FontDesc::new("Tahoma", 8.0),
        );

        let single = rules
            .resolve(&ctx(WidgetKind::TextBox, "txtQty", false))
            .unwrap();
        assert_eq!(single.size, 8.0);

        let multi = rules
            .resolve(&ctx(WidgetKind::TextBox, "txtNotes", true))
            .unwrap();
        assert_eq!(multi.size, 8.25);
    }
}
