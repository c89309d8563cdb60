//! Veneer Core
//!
//! The host object model observed by the veneer retrofit theming engine.
//!
//! Veneer themes an application it did not build and cannot recompile. This
//! crate holds the vocabulary shared by the engine and the host adapter:
//!
//! - **Colors**: 8-bit RGBA values with exact-identity equality, because the
//!   rule tables discriminate by the precise values the host constructs
//! - **Draw events**: transient pen/brush snapshots crossing the draw seams
//! - **Widget tree**: an arena mirror of the host's live window tree
//! - **Event subscriptions**: the remove-before-add subscription discipline
//!   and scoped notification suppression
//!
//! # Example
//!
//! ```rust
//! use veneer_core::{Color, Widget, WidgetKind, WidgetTree};
//!
//! let mut tree = WidgetTree::new();
//! let window = tree.open_window("wndTacticalMap");
//! let button = tree.insert(window, Widget::new(WidgetKind::Button, "cmdIncrement5"));
//!
//! assert_eq!(tree.window_of(button), Some(window));
//! assert_eq!(tree.find_by_name(window, "cmdIncrement5"), Some(button));
//! ```

pub mod color;
pub mod draw;
pub mod events;
pub mod font;
pub mod surface;
pub mod tree;
pub mod widget;

pub use color::Color;
pub use draw::{Brush, DrawEvent, DrawKind, GradientStop, PaintTool, Pen};
pub use events::{EventKind, NotifyGuard, Subscriptions};
pub use font::{FontDesc, FontStyle};
pub use surface::{Smoothing, Surface, SurfaceArena, SurfaceId};
pub use tree::WidgetTree;
pub use widget::{
    BorderStyle, ComboStyle, FlatStyle, TabSizeMode, Widget, WidgetId, WidgetKind, WidgetStyle,
};
