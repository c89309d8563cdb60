//! The packaged dark retrofit
//!
//! The concrete rule complement veneer ships with: which of the host's
//! fixed palette constants get rewritten, which draw contexts restore them,
//! and which structural corrections each widget kind needs. Everything here
//! goes through the ordinary registration API; a different host profile is
//! a different module like this one, not an engine change.

use std::sync::Arc;

use image::RgbaImage;
use veneer_core::{
    BorderStyle, Color, ComboStyle, DrawKind, FlatStyle, Smoothing, TabSizeMode, Widget,
    WidgetKind,
};
use veneer_theme::rules::{FixupContext, StyleChange};
use veneer_theme::{tint, ThemePalette, ThemeSettings};

use crate::catalog::{ButtonRole, GroupKind, WidgetCatalog};
use crate::classifier::SurfaceOrigin;
use crate::engine::Engine;
use crate::toggles::ToggleState;

/// Colors the host constructs, matched by exact identity
pub mod host_colors {
    use veneer_core::Color;

    pub const TEXT: Color = Color::rgb(255, 255, 192);
    pub const WINDOW_BACKGROUND: Color = Color::rgb(0, 0, 64);
    pub const ENABLED_BUTTON_BACKGROUND: Color = Color::rgb(0, 0, 120);
    pub const DISABLED_TEXT: Color = Color::rgb(211, 211, 211);
    /// Same value as [`TEXT`]; the host reuses one yellow for general text
    /// and for player markers, and only draw context tells them apart
    pub const PLAYER_MARKER: Color = TEXT;
    pub const NEUTRAL_MARKER: Color = Color::rgb(144, 238, 144);
    pub const CIVILIAN_MARKER: Color = Color::rgb(0, 206, 209);
    pub const HOSTILE_MARKER: Color = Color::rgb(255, 0, 0);
    /// Orbital rings and comet paths both come out of this green
    pub const TRAIL: Color = Color::rgb(50, 205, 50);
}

/// Colors the retrofit introduces
pub mod theme_colors {
    use veneer_core::Color;

    pub const PLANET: Color = Color::rgb(128, 128, 128);
    pub const ORBIT: Color = PLANET.with_alpha(128);
    pub const SPACE_MASTER_ACTIVE: Color = Color::rgb(248, 231, 28);
    pub const AUTO_TURNS_ACTIVE: Color = Color::rgb(126, 211, 33);
}

// The two acknowledged literal-name fixups. Everything else resolves
// through the catalog.
const SIDEBAR_TAB_PANEL: &str = "tabSidebar";
const CROWDED_LABEL_NAME: &str = "label17";
const CROWDED_LABEL_TEXT: &str = "Transfer Destination";

/// Builder for a fully configured dark-retrofit engine
#[derive(Default)]
pub struct Retrofit {
    settings: ThemeSettings,
    toggle_icons: Vec<(ButtonRole, Arc<RgbaImage>, Arc<RgbaImage>)>,
    button_icons: Vec<(ButtonRole, Arc<RgbaImage>, Option<Color>)>,
}

impl Retrofit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: ThemeSettings) -> Self {
        self.settings = settings;
        self
    }

    /// On/off masks for one of the two-state toggles
    pub fn toggle_icon(
        mut self,
        role: ButtonRole,
        on_mask: Arc<RgbaImage>,
        off_mask: Arc<RgbaImage>,
    ) -> Self {
        self.toggle_icons.push((role, on_mask, off_mask));
        self
    }

    /// Static mask icon for a toolbar button, tinted with the text color,
    /// optionally with a per-role face color
    pub fn button_icon(
        mut self,
        role: ButtonRole,
        mask: Arc<RgbaImage>,
        face: Option<Color>,
    ) -> Self {
        self.button_icons.push((role, mask, face));
        self
    }

    /// Wire the full rule complement into a fresh engine
    pub fn build(
        self,
        catalog: Box<dyn WidgetCatalog>,
        origin: Box<dyn SurfaceOrigin>,
    ) -> Engine {
        let palette = ThemePalette::from_settings(&self.settings);
        tracing::info!(
            background = %palette.background(),
            text = %palette.text(),
            font = %palette.font().family,
            "building dark retrofit"
        );
        let mut engine = Engine::new(palette, catalog, origin);

        declare_construction_rules(&mut engine);
        declare_draw_rules(&mut engine);
        declare_font_rules(&mut engine);
        declare_style_rules(&mut engine);
        self.declare_icons(&mut engine);
        self.declare_toggles(&mut engine);
        declare_initial_selections(&mut engine);

        engine
    }

    fn declare_icons(&self, engine: &mut Engine) {
        let text = engine.palette().text();
        for (role, mask, face) in &self.button_icons {
            let Some(name) = engine.catalog().button_name(*role).map(String::from) else {
                tracing::debug!(?role, "catalog has no widget for role; icon skipped");
                continue;
            };
            let icon = Arc::new(tint::colorize(mask, text));
            let mut change = StyleChange::default().with_image(icon);
            if let Some(face) = *face {
                change = change.with_background(face);
            }
            engine
                .styles_mut()
                .change_named(WidgetKind::Button, name, change);
        }
    }

    fn declare_toggles(self, engine: &mut Engine) {
        for (role, on_mask, off_mask) in self.toggle_icons {
            let (identity, active_color) = match role {
                ButtonRole::SpaceMaster => ("space-master", theme_colors::SPACE_MASTER_ACTIVE),
                ButtonRole::AutoTurns => ("auto-turns", theme_colors::AUTO_TURNS_ACTIVE),
                other => {
                    tracing::warn!(?other, "role has no toggle semantics; icons ignored");
                    continue;
                }
            };
            engine.add_toggle(ToggleState::new(
                role,
                identity,
                on_mask,
                off_mask,
                active_color,
            ));
        }
    }
}

fn declare_construction_rules(engine: &mut Engine) {
    let colors = engine.colors_mut();
    colors.declare_derived(host_colors::TEXT, |p| p.text());
    colors.declare_derived(host_colors::WINDOW_BACKGROUND, |p| p.background());
    colors.declare_derived(host_colors::ENABLED_BUTTON_BACKGROUND, |p| p.background());
    colors.declare_derived(host_colors::DISABLED_TEXT, |p| p.disabled_text());
}

fn declare_draw_rules(engine: &mut Engine) {
    let draw = engine.draw_mut();

    draw.on_pen(DrawKind::EllipseOutline, |surface, pen, _| {
        surface.smoothing = Smoothing::AntiAlias;
        // The same rings mark colonies, not just orbits.
        if pen.color == host_colors::TRAIL {
            pen.color = theme_colors::ORBIT;
        }
    });

    draw.on_brush(DrawKind::EllipseFill, |surface, brush, palette| {
        surface.smoothing = Smoothing::AntiAlias;
        // The construction seam already turned the legacy yellow into the
        // palette text color, but player markers keep the yellow: restore
        // it for this fill context.
        if brush.solid_color() == Some(palette.text()) {
            brush.set_solid_color(host_colors::PLAYER_MARKER);
        }
    });

    draw.on_pen(DrawKind::Line, |surface, pen, palette| {
        surface.smoothing = Smoothing::AntiAlias;
        if pen.color == host_colors::CIVILIAN_MARKER
            || pen.color == host_colors::HOSTILE_MARKER
            || pen.color == host_colors::NEUTRAL_MARKER
            || pen.color == palette.text()
        {
            // Movement tails, drawn at half the marker brightness. The
            // player tail arrives as the rewritten text color; put the
            // legacy yellow back before darkening.
            let tail = if pen.color == palette.text() {
                host_colors::PLAYER_MARKER
            } else {
                pen.color
            };
            pen.color = tail.darken(0.5);
        } else if pen.color == host_colors::TRAIL && pen.width == 1.0 {
            // Comet path. The distance ruler uses the same green with a
            // wider pen and stays untouched.
            pen.color = theme_colors::ORBIT;
        }
    });

    draw.on_brush(DrawKind::Text, |_, brush, palette| {
        // Text drawn in the marker yellow is general text, not a marker.
        if brush.solid_color() == Some(host_colors::PLAYER_MARKER) {
            brush.set_solid_color(palette.text());
        }
    });
}

fn declare_font_rules(engine: &mut Engine) {
    let main = engine.palette().font().clone();
    let button = engine.palette().button_font().clone();
    let edit = engine.palette().edit_font().clone();

    let fonts = engine.fonts_mut();
    fonts.set_base(main);
    fonts.for_kind(WidgetKind::Button, button);
    fonts.when(
        |ctx| ctx.kind == WidgetKind::TextBox && !ctx.multiline,
        edit,
    );
}

fn declare_style_rules(engine: &mut Engine) {
    let background = engine.palette().background();
    let text = engine.palette().text();
    let button_background = engine.palette().button_background();

    let styles = engine.styles_mut();
    styles.change_all(StyleChange::background(background).with_foreground(text));
    styles.change_kind(WidgetKind::Button, StyleChange::background(button_background));

    styles.set_fixup(WidgetKind::Button, |widget, ctx| {
        widget.style.flat = FlatStyle::Flat;
        widget.style.flat_border_color = Some(ctx.palette.background());
        widget.style.flat_border_width = 2;
        // The custom font changes text metrics, so buttons size themselves,
        // except the families whose layout the host packs tightly.
        let fixed = ctx
            .fixed_size_prefixes
            .iter()
            .any(|p| widget.name.starts_with(p.as_str()));
        if !fixed {
            widget.style.auto_size = true;
        }
        Ok(())
    });

    styles.set_fixup(WidgetKind::ComboBox, |widget, _| {
        widget.style.flat = FlatStyle::Flat;
        widget.style.combo = ComboStyle::DropDownList;
        Ok(())
    });

    styles.set_fixup(WidgetKind::TreeView, soften_border);
    styles.set_fixup(WidgetKind::ListBox, soften_border);
    styles.set_fixup(WidgetKind::FlowPanel, soften_border);

    styles.set_fixup(WidgetKind::ListView, |widget, ctx| {
        soften_border(widget, ctx)?;
        if widget.style.columns > 1 {
            widget.style.full_row_select = true;
        }
        Ok(())
    });

    styles.set_fixup(WidgetKind::TextBox, |widget, ctx| {
        soften_border(widget, ctx)?;
        // Align the edit inset with list views.
        widget.style.text_padding = 4;
        Ok(())
    });

    styles.set_fixup(WidgetKind::TabPanel, |widget, _| {
        widget.style.tab_size_mode = TabSizeMode::FillToRight;
        // The map sidebar's tab strip needs two lines under the custom font.
        if widget.name == SIDEBAR_TAB_PANEL {
            widget.style.tab_padding = (5, 3);
        }
        Ok(())
    });

    styles.set_fixup(WidgetKind::Label, |widget, _| {
        // This one label overflows onto its combo box under the custom font.
        if widget.name == CROWDED_LABEL_NAME && widget.text == CROWDED_LABEL_TEXT {
            widget.style.location.0 -= 10;
        }
        Ok(())
    });

    styles.set_fixup(WidgetKind::Window, |widget, _| {
        // The host ships the toolkit's stock chrome icon; hide it.
        widget.style.show_chrome_icon = false;
        Ok(())
    });
}

fn soften_border(widget: &mut Widget, _ctx: &FixupContext) -> veneer_theme::Result<()> {
    if widget.style.border == BorderStyle::Inset3D {
        widget.style.border = BorderStyle::Single;
    }
    Ok(())
}

fn declare_initial_selections(engine: &mut Engine) {
    for (group, role) in [
        (GroupKind::TimeIncrement, ButtonRole::TimeIncrement),
        (GroupKind::SubPulse, ButtonRole::SubPulse),
    ] {
        if let Some(name) = engine.catalog().button_name(role).map(String::from) {
            engine.groups_mut().select(group, name);
        }
    }
}
