//! The morphing effect: bootstrap, surface management and event dispatch.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::animation::{AnimationId, AnimationRuntime, Timeline};
use crate::config::{load_duration, ConfigSource};
use crate::controller::{GeometryController, Transition, DEFAULT_DURATION};
use crate::eligibility::is_eligible;
use crate::geometry::Geometry;
use crate::host::HostEvent;
use crate::registry::AnimationRegistry;
use crate::surface::{Surface, SurfaceId};
use crate::surface_manager::SurfaceManager;

/// Animates geometry changes of tooltips and notifications.
///
/// Owns the animation runtime, the per-surface animation slots and the set of
/// surfaces whose geometry notifications it listens to.
pub struct MorphingEffect<R: AnimationRuntime> {
    runtime: R,
    config: Box<dyn ConfigSource>,
    controller: GeometryController,
    registry: AnimationRegistry,
    managed: HashSet<SurfaceId>,
}

impl<R: AnimationRuntime> MorphingEffect<R> {
    pub fn new(runtime: R, config: impl ConfigSource + 'static) -> Self {
        Self {
            runtime,
            config: Box::new(config),
            controller: GeometryController::new(DEFAULT_DURATION),
            registry: AnimationRegistry::new(),
            managed: HashSet::new(),
        }
    }

    /// Read the configuration and start managing every surface already mapped.
    pub fn init(&mut self, surfaces: &SurfaceManager) {
        self.reload_config();
        for surface in surfaces.stacking_order() {
            self.manage(surface);
        }
        log::info!(
            "Morphing effect initialized: {} of {} surfaces managed, duration {:?}",
            self.managed.len(),
            surfaces.len(),
            self.duration()
        );
    }

    /// Re-read the animation duration. Running animations keep their timing.
    pub fn reload_config(&mut self) {
        let previous = self.controller.duration();
        let duration = load_duration(self.config.as_ref(), DEFAULT_DURATION, previous);
        if duration != previous {
            log::debug!("Animation duration {:?} -> {:?}", previous, duration);
        }
        self.controller.set_duration(duration);
    }

    /// Start listening to geometry changes of `surface` if it is eligible.
    ///
    /// Returns whether the surface is managed afterwards.
    pub fn manage(&mut self, surface: &Surface) -> bool {
        if !is_eligible(surface) {
            return false;
        }
        if self.managed.insert(surface.id()) {
            log::debug!(
                "Managing {:?} surface {}",
                surface.kind(),
                surface.id().raw()
            );
        }
        true
    }

    /// Stop tracking a surface the host destroyed.
    pub fn unmanage(&mut self, id: SurfaceId) {
        if self.managed.remove(&id) {
            self.registry.forget(id);
            log::debug!("Surface {} released", id.raw());
        }
    }

    pub fn is_managed(&self, id: SurfaceId) -> bool {
        self.managed.contains(&id)
    }

    pub fn frame_geometry_about_to_change(&mut self, surface: &Surface) -> Option<Transition> {
        if !self.is_managed(surface.id()) {
            return None;
        }
        Some(self.controller.frame_geometry_about_to_change(
            surface,
            &mut self.registry,
            &mut self.runtime,
        ))
    }

    pub fn frame_geometry_changed(
        &mut self,
        surface: &mut Surface,
        previous: Option<Geometry>,
    ) -> Option<Transition> {
        if !self.is_managed(surface.id()) {
            return None;
        }
        Some(self.controller.frame_geometry_changed(
            surface,
            previous,
            &mut self.registry,
            &mut self.runtime,
        ))
    }

    /// The runtime finished `animation`; free its slot.
    pub fn animation_finished(&mut self, animation: AnimationId) {
        if let Some((surface, kind)) = self.registry.complete(animation) {
            log::trace!(
                "Surface {}: {:?} animation {} complete",
                surface.raw(),
                kind,
                animation.raw()
            );
        }
    }

    /// Dispatch one host notification.
    pub fn handle_event(&mut self, event: HostEvent, surfaces: &mut SurfaceManager) {
        match event {
            HostEvent::ConfigChanged => self.reload_config(),
            HostEvent::SurfaceAdded(surface) => {
                self.manage(&surface);
                surfaces.add(surface);
            }
            HostEvent::SurfaceRemoved(id) => {
                surfaces.remove(id);
                self.unmanage(id);
            }
            HostEvent::GeometryAboutToChange(id) => {
                if let Some(surface) = surfaces.get(id) {
                    self.frame_geometry_about_to_change(surface);
                }
            }
            HostEvent::GeometryChanged {
                surface,
                geometry,
                previous,
            } => {
                if let Some(surface) = surfaces.get_mut(surface) {
                    surface.geometry = geometry;
                    self.frame_geometry_changed(surface, previous);
                }
            }
            HostEvent::AnimationFinished(animation) => self.animation_finished(animation),
        }
    }

    /// Duration used for the next animation.
    pub fn duration(&self) -> Duration {
        self.controller.duration()
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }
}

impl MorphingEffect<Timeline> {
    /// Advance the built-in timeline and release finished animations.
    ///
    /// Returns the number of animations that finished.
    pub fn advance(&mut self, now: Instant) -> usize {
        let finished = self.runtime.advance(now);
        for done in &finished {
            self.animation_finished(done.animation);
        }
        finished.len()
    }
}
