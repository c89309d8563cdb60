//! Widget event subscriptions
//!
//! The host re-runs its own wiring freely: a widget may subscribe the same
//! logical handler many times as windows are rebuilt, and appearance changes
//! made *by* a handler fire the very event the handler listens to. Two
//! disciplines keep that sane:
//!
//! - subscribing removes the equal token before re-adding it, so there is
//!   exactly one active subscription per (widget, event, token) at all times;
//! - [`Subscriptions::mute`] returns an RAII guard that silences dispatch
//!   for one widget until the guard drops, so a handler can mutate a
//!   duplicate widget without re-firing the duplicate's own handler.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::widget::WidgetId;

/// Host events the engine subscribes to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A window's native handle came into existence
    HandleCreated,
    /// A widget's background image or displayed state changed
    AppearanceChanged,
    Click,
    WindowActivated,
}

type MuteMap = Rc<RefCell<FxHashMap<WidgetId, u32>>>;

/// Subscription registry keyed by (widget, event kind)
///
/// `T` is the engine's handler token type; tokens are compared with `==`
/// for the remove-before-add discipline.
pub struct Subscriptions<T> {
    handlers: FxHashMap<(WidgetId, EventKind), SmallVec<[T; 2]>>,
    muted: MuteMap,
}

impl<T: Clone + PartialEq> Subscriptions<T> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
            muted: Rc::new(RefCell::new(FxHashMap::default())),
        }
    }

    /// Attach `token` to (widget, kind). An equal token already attached is
    /// removed first, so repeated subscription is idempotent.
    pub fn subscribe(&mut self, widget: WidgetId, kind: EventKind, token: T) {
        let slot = self.handlers.entry((widget, kind)).or_default();
        slot.retain(|t| *t != token);
        slot.push(token);
    }

    pub fn unsubscribe(&mut self, widget: WidgetId, kind: EventKind, token: &T) {
        if let Some(slot) = self.handlers.get_mut(&(widget, kind)) {
            slot.retain(|t| t != token);
            if slot.is_empty() {
                self.handlers.remove(&(widget, kind));
            }
        }
    }

    /// Drop every subscription of a destroyed widget
    pub fn clear_widget(&mut self, widget: WidgetId) {
        self.handlers.retain(|(w, _), _| *w != widget);
    }

    /// Tokens that should run for this event, in subscription order.
    /// Returns nothing while the widget is muted.
    pub fn dispatch(&self, widget: WidgetId, kind: EventKind) -> Vec<T> {
        if self.is_muted(widget) {
            return Vec::new();
        }
        self.handlers
            .get(&(widget, kind))
            .map(|slot| slot.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of active subscriptions for (widget, kind); test hook for the
    /// idempotence property
    pub fn count(&self, widget: WidgetId, kind: EventKind) -> usize {
        self.handlers
            .get(&(widget, kind))
            .map(|slot| slot.len())
            .unwrap_or(0)
    }

    pub fn is_muted(&self, widget: WidgetId) -> bool {
        self.muted.borrow().contains_key(&widget)
    }

    /// Silence dispatch for `widget` until the returned guard drops. Guards
    /// nest; the widget stays muted until the last one is gone. The guard
    /// holds no borrow of the registry, so subscriptions can be mutated and
    /// events dispatched while it is alive.
    pub fn mute(&self, widget: WidgetId) -> NotifyGuard {
        *self.muted.borrow_mut().entry(widget).or_insert(0) += 1;
        NotifyGuard {
            widget,
            muted: Rc::clone(&self.muted),
        }
    }
}

impl<T: Clone + PartialEq> Default for Subscriptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped notification suppression for one widget; releases on drop along
/// every exit path
pub struct NotifyGuard {
    widget: WidgetId,
    muted: MuteMap,
}

impl Drop for NotifyGuard {
    fn drop(&mut self) {
        let mut muted = self.muted.borrow_mut();
        if let Some(depth) = muted.get_mut(&self.widget) {
            *depth -= 1;
            if *depth == 0 {
                muted.remove(&self.widget);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WidgetTree;

    fn widget() -> WidgetId {
        let mut tree = WidgetTree::new();
        tree.open_window("wnd")
    }

    #[test]
    fn repeated_subscription_leaves_one_active() {
        let mut subs: Subscriptions<&str> = Subscriptions::new();
        let w = widget();
        for _ in 0..5 {
            subs.subscribe(w, EventKind::AppearanceChanged, "toggle");
        }
        assert_eq!(subs.count(w, EventKind::AppearanceChanged), 1);
        assert_eq!(subs.dispatch(w, EventKind::AppearanceChanged), vec!["toggle"]);
    }

    #[test]
    fn distinct_tokens_coexist_in_order() {
        let mut subs: Subscriptions<&str> = Subscriptions::new();
        let w = widget();
        subs.subscribe(w, EventKind::Click, "group");
        subs.subscribe(w, EventKind::Click, "style");
        subs.subscribe(w, EventKind::Click, "group");
        assert_eq!(subs.dispatch(w, EventKind::Click), vec!["style", "group"]);
    }

    #[test]
    fn unsubscribe_removes_only_the_named_token() {
        let mut subs: Subscriptions<&str> = Subscriptions::new();
        let w = widget();
        subs.subscribe(w, EventKind::Click, "a");
        subs.subscribe(w, EventKind::Click, "b");
        subs.unsubscribe(w, EventKind::Click, &"a");
        assert_eq!(subs.dispatch(w, EventKind::Click), vec!["b"]);
    }

    #[test]
    fn mute_guard_silences_until_dropped() {
        let mut subs: Subscriptions<&str> = Subscriptions::new();
        let w = widget();
        subs.subscribe(w, EventKind::AppearanceChanged, "toggle");

        {
            let _guard = subs.mute(w);
            assert!(subs.dispatch(w, EventKind::AppearanceChanged).is_empty());
        }
        assert_eq!(subs.dispatch(w, EventKind::AppearanceChanged), vec!["toggle"]);
    }

    #[test]
    fn nested_mutes_release_in_any_order() {
        let subs: Subscriptions<&str> = Subscriptions::new();
        let w = widget();
        let outer = subs.mute(w);
        let inner = subs.mute(w);
        drop(outer);
        assert!(subs.is_muted(w));
        drop(inner);
        assert!(!subs.is_muted(w));
    }

    #[test]
    fn muting_one_widget_does_not_touch_another() {
        let mut subs: Subscriptions<&str> = Subscriptions::new();
        let mut tree = WidgetTree::new();
        let a = tree.open_window("a");
        let b = tree.open_window("b");
        subs.subscribe(a, EventKind::Click, "t");
        subs.subscribe(b, EventKind::Click, "t");

        let _guard = subs.mute(a);
        assert!(subs.dispatch(a, EventKind::Click).is_empty());
        assert_eq!(subs.dispatch(b, EventKind::Click), vec!["t"]);
    }
}
