//! Tree walking
//!
//! Structural fixups cannot be expressed as value substitution; they run
//! against live widgets once a window's native handle exists. The walker
//! visits every node of a subtree exactly once, in the host's native child
//! order, and isolates per-node faults: one widget a fixup cannot digest
//! costs that widget its theming, never its siblings'.

use veneer_core::{EventKind, WidgetId, WidgetKind, WidgetTree};
use veneer_theme::rules::{FixupContext, FontContext};

use crate::catalog::GroupKind;
use crate::engine::{Engine, HookToken};
use crate::{groups, toggles};

/// Apply styling to `root` and its whole subtree
pub(crate) fn apply_tree(engine: &mut Engine, tree: &mut WidgetTree, root: WidgetId) {
    apply_node(engine, tree, root);
    for child in tree.children(root) {
        apply_tree(engine, tree, child);
    }
}

fn apply_node(engine: &mut Engine, tree: &mut WidgetTree, id: WidgetId) {
    {
        let Some(widget) = tree.get_mut(id) else { return };

        engine.styles.apply_changes(widget);

        if let Some(font) = engine
            .fonts
            .resolve(&FontContext {
                kind: widget.kind,
                name: &widget.name,
                multiline: widget.style.multiline,
            })
            .cloned()
        {
            widget.style.font = Some(font);
        }

        let ctx = FixupContext {
            palette: &engine.palette,
            fixed_size_prefixes: &engine.fixed_size_prefixes,
        };
        if let Err(err) = engine.styles.run_fixup(widget, &ctx) {
            tracing::warn!(
                name = %widget.name,
                kind = ?widget.kind,
                %err,
                "structural fixup failed; continuing with siblings"
            );
        }
    }

    wire_button(engine, tree, id);
}

/// Attach role behavior to buttons the catalog knows about. Subscriptions
/// use the remove-before-add discipline, so re-walking a live window never
/// doubles them.
fn wire_button(engine: &mut Engine, tree: &mut WidgetTree, id: WidgetId) {
    let name = match tree.get(id) {
        Some(w) if w.kind == WidgetKind::Button => w.name.clone(),
        _ => return,
    };

    for group in [GroupKind::TimeIncrement, GroupKind::SubPulse] {
        let is_member = engine
            .catalog
            .group_prefixes(group)
            .iter()
            .any(|p| name.starts_with(p.as_str()));
        if is_member {
            engine
                .subs
                .subscribe(id, EventKind::Click, HookToken::Group(group));
            let is_active = engine.groups.active(group) == Some(name.as_str());
            groups::apply_member_style(tree, &engine.palette, id, is_active);
        }
    }

    let roles: Vec<_> = engine.toggles.iter().map(|t| t.role()).collect();
    for role in roles {
        if engine.catalog.button_name(role) == Some(name.as_str()) {
            engine
                .subs
                .subscribe(id, EventKind::AppearanceChanged, HookToken::Toggle(role));
            toggles::refresh_widget(engine, tree, id, role);
        }
    }
}
