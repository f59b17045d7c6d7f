//! Host surfaces as seen by the morphing effect.
//!
//! The host owns every [`Surface`]; the effect only reads its geometry and
//! capability tag and writes [`RenderHints`] onto it. Animation state is kept
//! separately, keyed by [`SurfaceId`], in the
//! [`AnimationRegistry`](crate::registry::AnimationRegistry).

use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;

use crate::geometry::Geometry;

/// Unique identifier for each surface known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Create a new unique surface ID.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        SurfaceId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value (for debugging/logging).
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Capability tag the host assigns to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Tooltip,
    Notification,
    CriticalNotification,
    /// Anything else: application windows, docks, popups...
    Other,
}

bitflags! {
    /// Rendering hints consumed by the host renderer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RenderHints: u8 {
        /// Render the background contrast effect even if the surface did not ask for it
        const FORCE_BACKGROUND_CONTRAST = 0b01;
        /// Render the blur effect even if the surface did not ask for it
        const FORCE_BLUR                = 0b10;
    }
}

/// An on-screen surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    kind: SurfaceKind,
    /// Current frame geometry, updated by the host.
    pub geometry: Geometry,
    /// Hints written by effects, read by the renderer.
    pub hints: RenderHints,
}

impl Surface {
    /// Create a surface with a fresh ID and no hints.
    pub fn new(kind: SurfaceKind, geometry: Geometry) -> Self {
        Self {
            id: SurfaceId::next(),
            kind,
            geometry,
            hints: RenderHints::empty(),
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }
}
