//! Host-side surface bookkeeping.
//!
//! [`SurfaceManager`] holds the surfaces the host has mapped, in stacking
//! order (bottom to top). It stands in for the compositor scene the effect is
//! loaded into.

use std::collections::HashMap;

use crate::geometry::Geometry;
use crate::surface::{Surface, SurfaceId};

/// Manages all surfaces known to the host.
#[derive(Debug, Default)]
pub struct SurfaceManager {
    surfaces: HashMap<SurfaceId, Surface>,
    stacking_order: Vec<SurfaceId>,
}

impl SurfaceManager {
    /// Create a new empty surface manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface on top of the stack.
    pub fn add(&mut self, surface: Surface) -> SurfaceId {
        let id = surface.id();
        if self.surfaces.insert(id, surface).is_none() {
            self.stacking_order.push(id);
        }
        id
    }

    /// Remove a surface by ID.
    pub fn remove(&mut self, id: SurfaceId) -> Option<Surface> {
        self.stacking_order.retain(|other| *other != id);
        self.surfaces.remove(&id)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    /// Get a mutable surface by ID.
    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(&id)
    }

    /// Replace a surface's geometry, returning the previous one.
    pub fn set_geometry(&mut self, id: SurfaceId, geometry: Geometry) -> Option<Geometry> {
        let surface = self.surfaces.get_mut(&id)?;
        Some(std::mem::replace(&mut surface.geometry, geometry))
    }

    /// Iterate over surfaces from bottom to top.
    pub fn stacking_order(&self) -> impl Iterator<Item = &Surface> + '_ {
        self.stacking_order
            .iter()
            .filter_map(|id| self.surfaces.get(id))
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
