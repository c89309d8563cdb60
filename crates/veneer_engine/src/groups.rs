//! Choice-group synchronization
//!
//! The time-increment and sub-pulse button families behave like radio
//! groups: clicking any member makes it the group's active member, and the
//! active member is highlighted by border color in every open window.
//! Unlike toggles, selection is global; clicks from background windows
//! count, because the host itself accepts them.

use rustc_hash::FxHashMap;
use veneer_core::{WidgetId, WidgetKind, WidgetTree};
use veneer_theme::ThemePalette;

use crate::catalog::GroupKind;
use crate::engine::Engine;

/// Active-member bookkeeping for the radio-style button families
#[derive(Default)]
pub struct ChoiceGroups {
    active: FxHashMap<GroupKind, String>,
}

impl ChoiceGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime name of the group's active member
    pub fn active(&self, group: GroupKind) -> Option<&str> {
        self.active.get(&group).map(String::as_str)
    }

    pub fn select(&mut self, group: GroupKind, member: impl Into<String>) {
        self.active.insert(group, member.into());
    }
}

/// React to a click on a group member
pub(crate) fn handle_click(
    engine: &mut Engine,
    tree: &mut WidgetTree,
    widget: WidgetId,
    group: GroupKind,
) {
    let Some(name) = tree.get(widget).map(|w| w.name.clone()) else {
        return;
    };
    engine.groups.select(group, name.clone());
    tracing::debug!(?group, active = %name, "choice group selection moved");
    restyle_members(engine, tree, group);
}

/// Re-apply active/inactive border styling to every member of `group` in
/// every open window
pub(crate) fn restyle_members(engine: &mut Engine, tree: &mut WidgetTree, group: GroupKind) {
    let prefixes = engine.catalog.group_prefixes(group).to_vec();
    let active = engine.groups.active(group).map(String::from);

    for window in tree.windows().to_vec() {
        let mut stack = vec![window];
        while let Some(id) = stack.pop() {
            stack.extend(tree.children(id));
            let Some(widget) = tree.get(id) else { continue };
            if widget.kind != WidgetKind::Button {
                continue;
            }
            if !prefixes.iter().any(|p| widget.name.starts_with(p.as_str())) {
                continue;
            }
            let is_active = active.as_deref() == Some(widget.name.as_str());
            apply_member_style(tree, &engine.palette, id, is_active);
        }
    }
}

/// Border highlight for one group member
pub(crate) fn apply_member_style(
    tree: &mut WidgetTree,
    palette: &ThemePalette,
    member: WidgetId,
    is_active: bool,
) {
    if let Some(widget) = tree.get_mut(member) {
        widget.style.flat_border_color = Some(if is_active {
            palette.button_background().lighten(0.5)
        } else {
            palette.background()
        });
    }
}
