//! Drawing surfaces
//!
//! A surface is the target of one paint cycle. Surfaces are short-lived and
//! host-owned; the engine only ever sees their keys, raises their smoothing
//! mode, and asks the classifier whether a surface belongs to the themed
//! application at all.

use slotmap::{new_key_type, SlotMap};

use crate::widget::WidgetId;

new_key_type! {
    /// Key of a live drawing surface
    pub struct SurfaceId;
}

/// Anti-aliasing mode of a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    #[default]
    None,
    AntiAlias,
}

/// One paint cycle's drawing target
#[derive(Clone, Debug, Default)]
pub struct Surface {
    pub smoothing: Smoothing,
    /// Window whose paint cycle produced this surface, when the host exposes
    /// that. Foreign surfaces (other processes, toolkit-internal previews)
    /// have no window here.
    pub window: Option<WidgetId>,
}

/// Arena of live surfaces, maintained by the host adapter
#[derive(Default)]
pub struct SurfaceArena {
    surfaces: SlotMap<SurfaceId, Surface>,
}

impl SurfaceArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, surface: Surface) -> SurfaceId {
        self.surfaces.insert(surface)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    /// Drop a surface at the end of its paint cycle
    pub fn destroy(&mut self, id: SurfaceId) {
        self.surfaces.remove(id);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
