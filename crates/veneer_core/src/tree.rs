//! The live window tree
//!
//! An arena mirror of the host's widget graph. The arena owns the nodes; the
//! engine holds only copyable keys and must tolerate keys going stale when
//! the host destroys a window; every lookup is an `Option`, never a panic.

use slotmap::SlotMap;

use crate::widget::{Widget, WidgetId, WidgetKind};

/// All open windows and their widget subtrees
#[derive(Default)]
pub struct WidgetTree {
    arena: SlotMap<WidgetId, Widget>,
    windows: Vec<WidgetId>,
    active: Option<WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new top-level window. The new window becomes the foreground
    /// window, as it does in the host.
    pub fn open_window(&mut self, name: impl Into<String>) -> WidgetId {
        let id = self.arena.insert(Widget::new(WidgetKind::Window, name));
        self.windows.push(id);
        self.active = Some(id);
        id
    }

    /// Insert a widget as the last child of `parent`. When the parent is
    /// already gone the widget is dropped and the returned key is the null
    /// key, which resolves to `None` like any other stale key.
    pub fn insert(&mut self, parent: WidgetId, mut widget: Widget) -> WidgetId {
        widget.parent = Some(parent);
        let id = self.arena.insert(widget);
        match self.arena.get_mut(parent) {
            Some(p) => p.children.push(id),
            None => {
                // Parent died between host callbacks; orphan nodes are
                // unreachable, so drop the insert entirely.
                tracing::warn!("parent vanished before child insert; dropping the child");
                self.arena.remove(id);
                return WidgetId::default();
            }
        }
        id
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.arena.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.arena.get_mut(id)
    }

    /// Child keys of `id` in native order; empty for stale keys
    pub fn children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.arena
            .get(id)
            .map(|w| w.children.clone())
            .unwrap_or_default()
    }

    /// The window containing `id`, walking parent links
    pub fn window_of(&self, id: WidgetId) -> Option<WidgetId> {
        let mut current = id;
        loop {
            let widget = self.arena.get(current)?;
            match widget.parent {
                Some(parent) => current = parent,
                None => {
                    return (widget.kind == WidgetKind::Window).then_some(current);
                }
            }
        }
    }

    /// Open windows in creation order
    pub fn windows(&self) -> &[WidgetId] {
        &self.windows
    }

    /// The foreground window, if any window is open
    pub fn active_window(&self) -> Option<WidgetId> {
        self.active
    }

    /// Bring a window to the foreground
    pub fn activate(&mut self, window: WidgetId) {
        if self.windows.contains(&window) {
            self.active = Some(window);
        }
    }

    /// Depth-first search for a widget by name inside one window's subtree.
    /// Duplicate controls in other windows are deliberately not visible to
    /// this lookup.
    pub fn find_by_name(&self, window: WidgetId, name: &str) -> Option<WidgetId> {
        let mut stack = vec![window];
        while let Some(id) = stack.pop() {
            let Some(widget) = self.arena.get(id) else {
                continue;
            };
            if widget.name == name && id != window {
                return Some(id);
            }
            // Reverse so the leftmost child is searched first.
            stack.extend(widget.children.iter().rev().copied());
        }
        None
    }

    /// Close a window and drop its whole subtree
    pub fn close_window(&mut self, window: WidgetId) {
        self.windows.retain(|&w| w != window);
        if self.active == Some(window) {
            self.active = self.windows.last().copied();
        }
        self.remove_subtree(window);
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn set_background_image(
        &mut self,
        id: WidgetId,
        image: std::sync::Arc<image::RgbaImage>,
    ) -> bool {
        match self.arena.get_mut(id) {
            Some(widget) => {
                widget.background_image = Some(image);
                true
            }
            None => false,
        }
    }

    fn remove_subtree(&mut self, root: WidgetId) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(widget) = self.arena.remove(id) {
                stack.extend(widget.children);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;

    fn button(name: &str) -> Widget {
        Widget::new(WidgetKind::Button, name)
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut tree = WidgetTree::new();
        let window = tree.open_window("wndMain");
        let a = tree.insert(window, button("a"));
        let b = tree.insert(window, button("b"));
        let c = tree.insert(window, button("c"));
        assert_eq!(tree.children(window), vec![a, b, c]);
    }

    #[test]
    fn find_by_name_is_scoped_to_one_window() {
        let mut tree = WidgetTree::new();
        let first = tree.open_window("wndTactical");
        let second = tree.open_window("wndGalactic");
        let in_first = tree.insert(first, button("cmdSubPulse"));
        let in_second = tree.insert(second, button("cmdSubPulse"));

        assert_eq!(tree.find_by_name(first, "cmdSubPulse"), Some(in_first));
        assert_eq!(tree.find_by_name(second, "cmdSubPulse"), Some(in_second));
        assert_eq!(tree.find_by_name(first, "cmdMissing"), None);
    }

    #[test]
    fn find_by_name_searches_nested_children() {
        let mut tree = WidgetTree::new();
        let window = tree.open_window("wndMain");
        let panel = tree.insert(window, Widget::new(WidgetKind::FlowPanel, "pnlTop"));
        let deep = tree.insert(panel, button("cmdDeep"));
        assert_eq!(tree.find_by_name(window, "cmdDeep"), Some(deep));
    }

    #[test]
    fn window_of_walks_to_the_root() {
        let mut tree = WidgetTree::new();
        let window = tree.open_window("wndMain");
        let panel = tree.insert(window, Widget::new(WidgetKind::TabPanel, "tabs"));
        let leaf = tree.insert(panel, button("cmd"));
        assert_eq!(tree.window_of(leaf), Some(window));
        assert_eq!(tree.window_of(window), Some(window));
    }

    #[test]
    fn newest_window_is_active_until_activated_elsewhere() {
        let mut tree = WidgetTree::new();
        let first = tree.open_window("first");
        let second = tree.open_window("second");
        assert_eq!(tree.active_window(), Some(second));
        tree.activate(first);
        assert_eq!(tree.active_window(), Some(first));
    }

    #[test]
    fn close_window_drops_subtree_and_refocuses() {
        let mut tree = WidgetTree::new();
        let first = tree.open_window("first");
        let second = tree.open_window("second");
        let child = tree.insert(second, button("cmd"));

        tree.close_window(second);
        assert!(tree.get(second).is_none());
        assert!(tree.get(child).is_none());
        assert_eq!(tree.active_window(), Some(first));
        assert_eq!(tree.windows(), &[first]);
    }

    #[test]
    fn stale_keys_resolve_to_none() {
        let mut tree = WidgetTree::new();
        let window = tree.open_window("wndMain");
        let child = tree.insert(window, button("cmd"));
        tree.close_window(window);
        assert!(tree.get(child).is_none());
        assert!(tree.children(child).is_empty());
        assert_eq!(tree.window_of(child), None);
    }
}
