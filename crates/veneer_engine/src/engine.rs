//! The engine instance
//!
//! One `Engine` value owns every piece of mutable theming state: palette,
//! rule tables, toggles, group selections, the surface memo, and the
//! subscription registry. There is no ambient global: the host adapter
//! constructs the engine explicitly and passes it by reference into each
//! seam callback, so initialization order is the caller's and tests can run
//! as many engines as they like.
//!
//! Every entry point runs synchronously to completion on the host's UI
//! thread; by the time a seam callback returns, the host sees the rewritten
//! value.

use std::sync::Arc;

use image::RgbaImage;
use veneer_core::{
    Color, DrawEvent, EventKind, Subscriptions, SurfaceArena, WidgetId, WidgetTree,
};
use veneer_theme::rules::{ColorRules, DrawRules, FontRules, StyleRules};
use veneer_theme::ThemePalette;

use crate::catalog::{ButtonRole, GroupKind, WidgetCatalog};
use crate::classifier::{SurfaceClassifier, SurfaceOrigin};
use crate::groups::ChoiceGroups;
use crate::hooks::{self, HookHost, InstallReport};
use crate::toggles::ToggleState;
use crate::{groups, toggles, walker};

/// Handler identity used by the subscription registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookToken {
    /// Two-state toggle wired to a button role
    Toggle(ButtonRole),
    /// Radio-style family member
    Group(GroupKind),
}

/// The retrofit theming engine
pub struct Engine {
    pub(crate) palette: ThemePalette,
    pub(crate) colors: ColorRules,
    pub(crate) fonts: FontRules,
    pub(crate) draw: DrawRules,
    pub(crate) styles: StyleRules,
    pub(crate) toggles: Vec<ToggleState>,
    pub(crate) groups: ChoiceGroups,
    pub(crate) classifier: SurfaceClassifier,
    pub(crate) subs: Subscriptions<HookToken>,
    pub(crate) catalog: Box<dyn WidgetCatalog>,
    pub(crate) origin: Box<dyn SurfaceOrigin>,
    /// Cached from the catalog: name prefixes of buttons that must keep
    /// their host-assigned size
    pub(crate) fixed_size_prefixes: Vec<String>,
}

impl Engine {
    pub fn new(
        palette: ThemePalette,
        catalog: Box<dyn WidgetCatalog>,
        origin: Box<dyn SurfaceOrigin>,
    ) -> Self {
        let mut fixed_size_prefixes = Vec::new();
        for group in [GroupKind::TimeIncrement, GroupKind::SubPulse] {
            fixed_size_prefixes.extend(catalog.group_prefixes(group).iter().cloned());
        }
        Self {
            palette,
            colors: ColorRules::new(),
            fonts: FontRules::new(),
            draw: DrawRules::new(),
            styles: StyleRules::new(),
            toggles: Vec::new(),
            groups: ChoiceGroups::new(),
            classifier: SurfaceClassifier::new(),
            subs: Subscriptions::new(),
            catalog,
            origin,
            fixed_size_prefixes,
        }
    }

    // ---- registration ----

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut ThemePalette {
        &mut self.palette
    }

    pub fn colors_mut(&mut self) -> &mut ColorRules {
        &mut self.colors
    }

    pub fn fonts_mut(&mut self) -> &mut FontRules {
        &mut self.fonts
    }

    pub fn draw_mut(&mut self) -> &mut DrawRules {
        &mut self.draw
    }

    pub fn styles_mut(&mut self) -> &mut StyleRules {
        &mut self.styles
    }

    pub fn add_toggle(&mut self, toggle: ToggleState) {
        self.toggles.push(toggle);
    }

    pub fn toggle(&self, role: ButtonRole) -> Option<&ToggleState> {
        self.toggles.iter().find(|t| t.role() == role)
    }

    pub fn groups(&self) -> &ChoiceGroups {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut ChoiceGroups {
        &mut self.groups
    }

    pub fn catalog(&self) -> &dyn WidgetCatalog {
        self.catalog.as_ref()
    }

    /// Attach every interception seam through the host adapter; per-seam
    /// failures are logged and reported, never fatal
    pub fn install_hooks(&mut self, host: &mut dyn HookHost) -> InstallReport {
        hooks::install(host)
    }

    // ---- seam entry points ----

    /// Value-construction seam: every color the host constructs passes
    /// through here on its way back to the caller
    pub fn intercept_color(&self, candidate: Color) -> Color {
        self.colors
            .resolve(candidate, &self.palette)
            .unwrap_or(candidate)
    }

    /// Draw-primitive seam: mutate the in-flight pen or brush before the
    /// host's underlying draw executes. Surfaces outside the themed
    /// application are never touched.
    pub fn before_draw(&mut self, surfaces: &mut SurfaceArena, event: &mut DrawEvent) {
        if !self
            .classifier
            .belongs_to_themed_app(event.surface, self.origin.as_ref())
        {
            return;
        }
        let Some(surface) = surfaces.get_mut(event.surface) else {
            return;
        };
        self.draw
            .apply(event.kind, surface, &mut event.tool, &self.palette);
    }

    /// Lifecycle seam: a window's native handle exists; theme its whole
    /// subtree before the host shows it
    pub fn window_created(&mut self, tree: &mut WidgetTree, window: WidgetId) {
        if let Some(w) = tree.get(window) {
            tracing::debug!(name = %w.name, "theming new window");
        }
        walker::apply_tree(self, tree, window);
    }

    /// Re-theme a subtree the host added to an already-live window. The
    /// host owes us this call; children added silently stay unthemed.
    pub fn widget_added(&mut self, tree: &mut WidgetTree, widget: WidgetId) {
        walker::apply_tree(self, tree, widget);
    }

    /// Interaction seam: the host fired `kind` on `widget`
    pub fn interaction(&mut self, tree: &mut WidgetTree, widget: WidgetId, kind: EventKind) {
        for token in self.subs.dispatch(widget, kind) {
            match token {
                HookToken::Toggle(role) => toggles::handle_change(self, tree, widget, role),
                HookToken::Group(group) => groups::handle_click(self, tree, widget, group),
            }
        }
    }

    /// Assign a background image the way the host does: the assignment
    /// itself synchronously notifies appearance subscribers. Mute the
    /// widget first when that notification must not run.
    pub fn assign_background_image(
        &mut self,
        tree: &mut WidgetTree,
        widget: WidgetId,
        image: Arc<RgbaImage>,
    ) {
        if !tree.set_background_image(widget, image) {
            return;
        }
        self.interaction(tree, widget, EventKind::AppearanceChanged);
    }

    /// Active-subscription count for (widget, kind); exposed for the
    /// idempotence property
    pub fn subscription_count(&self, widget: WidgetId, kind: EventKind) -> usize {
        self.subs.count(widget, kind)
    }
}
