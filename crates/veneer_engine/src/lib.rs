//! Veneer Engine
//!
//! The interception-and-rewrite engine that retrofits a visual theme onto a
//! host application it cannot recompile. The engine observes the host
//! through three seam categories (value construction, draw primitives, and
//! window lifecycle), rewrites themed values in flight, walks each window's
//! widget tree as it materializes, and keeps duplicated toggle controls
//! synchronized across windows.
//!
//! # Architecture
//!
//! - [`Engine`]: one value owning all mutable theming state; no globals
//! - [`hooks`]: the seam catalog and fault-isolated installation
//! - [`catalog`]: logical button identities behind a collaborator trait
//! - [`classifier`]: the per-surface "is this ours?" memo
//! - [`toggles`] / [`groups`]: cross-window state synchronization
//! - [`retrofit`]: the packaged dark theme, wired entirely through the
//!   public registration API
//!
//! # Example
//!
//! ```rust
//! use veneer_core::{SurfaceId, Widget, WidgetKind, WidgetTree};
//! use veneer_engine::catalog::StaticCatalog;
//! use veneer_engine::classifier::SurfaceOrigin;
//! use veneer_engine::retrofit::{host_colors, Retrofit};
//!
//! struct AllOurs;
//! impl SurfaceOrigin for AllOurs {
//!     fn is_themed(&self, _surface: SurfaceId) -> bool {
//!         true
//!     }
//! }
//!
//! let mut engine = Retrofit::new().build(Box::new(StaticCatalog::new()), Box::new(AllOurs));
//!
//! // The construction seam rewrites the host's legacy text yellow.
//! let rewritten = engine.intercept_color(host_colors::TEXT);
//! assert_eq!(rewritten, engine.palette().text());
//!
//! // Windows are themed as their native handles appear.
//! let mut tree = WidgetTree::new();
//! let window = tree.open_window("wndMain");
//! tree.insert(window, Widget::new(WidgetKind::Button, "cmdOk"));
//! engine.window_created(&mut tree, window);
//! ```

pub mod catalog;
pub mod classifier;
mod engine;
pub mod groups;
pub mod hooks;
pub mod retrofit;
pub mod toggles;
mod walker;

pub use catalog::{ButtonRole, GroupKind, StaticCatalog, WidgetCatalog};
pub use classifier::{SurfaceClassifier, SurfaceOrigin};
pub use engine::{Engine, HookToken};
pub use hooks::{HookError, HookHost, InstallReport, Seam};
pub use retrofit::Retrofit;
pub use toggles::ToggleState;
