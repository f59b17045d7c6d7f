//! Per-surface animation slots.
//!
//! Every managed surface owns at most one fade animation and at most one
//! move/resize animation. Installing a handle into an occupied slot replaces
//! (and returns) the previous one; the runtime is responsible for whatever an
//! orphaned handle still holds.

use std::collections::HashMap;

use crate::animation::{AnimationHandle, AnimationId};
use crate::surface::SurfaceId;

/// The two kinds of animation a surface can carry at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Opacity cross-fade
    Fade,
    /// Synchronized size and position tracks
    Move,
}

/// Animation handles attached to one surface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SurfaceAnimations {
    pub fade: Option<AnimationHandle>,
    pub movement: Option<AnimationHandle>,
}

impl SurfaceAnimations {
    fn slot_mut(&mut self, kind: SlotKind) -> &mut Option<AnimationHandle> {
        match kind {
            SlotKind::Fade => &mut self.fade,
            SlotKind::Move => &mut self.movement,
        }
    }

    fn is_empty(&self) -> bool {
        self.fade.is_none() && self.movement.is_none()
    }
}

/// Stores the active fade and move handles of every surface.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    surfaces: HashMap<SurfaceId, SurfaceAnimations>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, surface: SurfaceId, kind: SlotKind) -> Option<&AnimationHandle> {
        let animations = self.surfaces.get(&surface)?;
        match kind {
            SlotKind::Fade => animations.fade.as_ref(),
            SlotKind::Move => animations.movement.as_ref(),
        }
    }

    pub fn fade(&self, surface: SurfaceId) -> Option<&AnimationHandle> {
        self.get(surface, SlotKind::Fade)
    }

    pub fn movement(&self, surface: SurfaceId) -> Option<&AnimationHandle> {
        self.get(surface, SlotKind::Move)
    }

    /// Install `handle` into a slot, returning the handle it replaced.
    pub fn install(
        &mut self,
        surface: SurfaceId,
        kind: SlotKind,
        handle: AnimationHandle,
    ) -> Option<AnimationHandle> {
        self.surfaces
            .entry(surface)
            .or_default()
            .slot_mut(kind)
            .replace(handle)
    }

    /// Clear whichever slot holds `animation`.
    ///
    /// Returns the surface and slot that were cleared, or `None` when the
    /// handle had already been replaced.
    pub fn complete(&mut self, animation: AnimationId) -> Option<(SurfaceId, SlotKind)> {
        let mut cleared = None;
        for (surface, animations) in self.surfaces.iter_mut() {
            for kind in [SlotKind::Fade, SlotKind::Move] {
                let slot = animations.slot_mut(kind);
                if slot.as_ref().is_some_and(|handle| handle.id() == animation) {
                    *slot = None;
                    cleared = Some((*surface, kind));
                }
            }
            if cleared.is_some() {
                break;
            }
        }

        if let Some((surface, _)) = cleared {
            if self.surfaces.get(&surface).is_some_and(SurfaceAnimations::is_empty) {
                self.surfaces.remove(&surface);
            }
        }
        cleared
    }

    /// Drop all handles of a surface that went away.
    pub fn forget(&mut self, surface: SurfaceId) -> Option<SurfaceAnimations> {
        self.surfaces.remove(&surface)
    }

    /// Number of installed handles across all surfaces.
    pub fn active_count(&self) -> usize {
        self.surfaces
            .values()
            .map(|a| a.fade.is_some() as usize + a.movement.is_some() as usize)
            .sum()
    }
}
