//! Rule tables
//!
//! Ordered collections of (predicate, rewrite) pairs in four categories.
//! Matching is by exact value identity, never semantic meaning: the host
//! reuses a handful of RGB constants for unrelated roles, so a rule that
//! needs to hit only one of those roles must carry a secondary
//! discriminator (pen width, geometry kind, widget kind plus name prefix)
//! rather than a looser color match.
//!
//! Evaluation order differs by category, deliberately:
//!
//! - [`ColorRules`] is first-match-wins in declaration order, and declaring
//!   the same source identity twice replaces the earlier rule loudly;
//!   silent shadowing is a bug magnet when every rule keys on a bare RGB
//!   value.
//! - [`DrawRules`] are unconditional pipeline stages run in registration
//!   order; a later stage sees the value the earlier stages already wrote.
//!   The two-stage rewrite (a global construction rule followed by a local
//!   per-context restore) only composes under this model.

mod color;
mod draw;
mod font;
mod style;

pub use color::{ColorRules, ColorSubstitute};
pub use draw::{BrushStage, DrawRules, PenStage};
pub use font::{FontContext, FontRules};
pub use style::{Fixup, FixupContext, StyleChange, StyleRules, WidgetPredicate};
