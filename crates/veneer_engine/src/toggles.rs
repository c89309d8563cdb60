//! Stateful toggle synchronization
//!
//! A toggle is one logical two-state control that the host may expose as
//! several live widgets at once, one per open window. State transitions are
//! driven only from the foreground window's copy; every other copy reflects.
//! Propagation mutes each widget's notifications while its appearance is
//! copied, because assigning a background image re-fires the very event the
//! toggle listens on; without the mute, two windows would toggle each other
//! forever.

use std::sync::Arc;

use image::RgbaImage;
use veneer_core::{Color, WidgetId, WidgetTree};
use veneer_theme::{tint, ThemePalette};

use crate::catalog::ButtonRole;
use crate::engine::Engine;

/// One logical two-state control
pub struct ToggleState {
    role: ButtonRole,
    /// Identity tag shared by every live duplicate ("space-master",
    /// "auto-turns")
    identity: String,
    on: bool,
    on_mask: Arc<RgbaImage>,
    off_mask: Arc<RgbaImage>,
    on_color: Color,
    /// `None` follows the palette text color
    off_color: Option<Color>,
}

impl ToggleState {
    pub fn new(
        role: ButtonRole,
        identity: impl Into<String>,
        on_mask: Arc<RgbaImage>,
        off_mask: Arc<RgbaImage>,
        on_color: Color,
    ) -> Self {
        Self {
            role,
            identity: identity.into(),
            on: false,
            on_mask,
            off_mask,
            on_color,
            off_color: None,
        }
    }

    pub fn with_off_color(mut self, color: Color) -> Self {
        self.off_color = Some(color);
        self
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// The themed icon for the current state
    pub fn icon(&self, palette: &ThemePalette) -> Arc<RgbaImage> {
        let (mask, color) = if self.on {
            (&self.on_mask, self.on_color)
        } else {
            (&self.off_mask, self.off_color.unwrap_or_else(|| palette.text()))
        };
        Arc::new(tint::colorize(mask, color))
    }
}

/// React to a host appearance event on a widget wired to `role`.
///
/// The widget drives a state transition only when it sits in the foreground
/// window; afterwards the recomputed icon is copied onto the driver and onto
/// every duplicate in every open window, each under a notification mute.
pub(crate) fn handle_change(
    engine: &mut Engine,
    tree: &mut WidgetTree,
    widget: WidgetId,
    role: ButtonRole,
) {
    let Some(toggle) = engine.toggles.iter_mut().find(|t| t.role == role) else {
        return;
    };
    let window = tree.window_of(widget);
    if window.is_some() && window == tree.active_window() {
        toggle.on = !toggle.on;
        tracing::debug!(identity = %toggle.identity, on = toggle.on, "toggle transitioned");
    }

    let icon = toggle.icon(&engine.palette);
    refresh_all(engine, tree, widget, icon);
}

/// Paint the current state onto one newly wired widget without transitioning
pub(crate) fn refresh_widget(
    engine: &mut Engine,
    tree: &mut WidgetTree,
    widget: WidgetId,
    role: ButtonRole,
) {
    let Some(toggle) = engine.toggles.iter().find(|t| t.role == role) else {
        return;
    };
    let icon = toggle.icon(&engine.palette);
    let _mute = engine.subs.mute(widget);
    engine.assign_background_image(tree, widget, icon);
}

fn refresh_all(
    engine: &mut Engine,
    tree: &mut WidgetTree,
    driver: WidgetId,
    icon: Arc<RgbaImage>,
) {
    let Some(name) = tree.get(driver).map(|w| w.name.clone()) else {
        return;
    };

    {
        let _mute = engine.subs.mute(driver);
        engine.assign_background_image(tree, driver, Arc::clone(&icon));
    }

    // Duplicates across every open window; a window without this control is
    // the normal case, not an error.
    for window in tree.windows().to_vec() {
        let Some(duplicate) = tree.find_by_name(window, &name) else {
            continue;
        };
        if duplicate == driver {
            continue;
        }
        let _mute = engine.subs.mute(duplicate);
        engine.assign_background_image(tree, duplicate, Arc::clone(&icon));
    }
}
