//! Graphics-context classifier
//!
//! Draw interception must not leak into surfaces the engine has no business
//! touching: toolkit-internal previews, other processes' popups. Whether a
//! surface belongs to the themed application is answered authoritatively by
//! the lifecycle collaborator, once per surface; every further draw call in
//! the same paint pass hits the memo. Entries are never evicted: surfaces
//! are scoped to one paint cycle, so their short lifetime bounds the memo.

use rustc_hash::FxHashMap;
use veneer_core::SurfaceId;

/// Authoritative, comparatively expensive origin check
pub trait SurfaceOrigin {
    fn is_themed(&self, surface: SurfaceId) -> bool;
}

/// Per-surface memo over the origin check
#[derive(Default)]
pub struct SurfaceClassifier {
    memo: FxHashMap<SurfaceId, bool>,
}

impl SurfaceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does this surface belong to the themed application?
    pub fn belongs_to_themed_app(
        &mut self,
        surface: SurfaceId,
        origin: &dyn SurfaceOrigin,
    ) -> bool {
        *self
            .memo
            .entry(surface)
            .or_insert_with(|| origin.is_themed(surface))
    }

    /// Memoized answer, if one exists
    pub fn cached(&self, surface: SurfaceId) -> Option<bool> {
        self.memo.get(&surface).copied()
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}
