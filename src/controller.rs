//! Reactions to frame geometry changes of managed surfaces.
//!
//! A geometry change arrives as a pair of notifications. Before the change the
//! surface gets a cross-fade from its previous appearance; after the change
//! its frame is moved and resized from the old geometry to the new one. When an
//! animation of the same kind is still running it is steered to the new end
//! point instead of being restarted, so repeated changes never make the
//! surface jump.

use std::time::Duration;

use crate::animation::{
    AnimationId, AnimationRequest, AnimationRuntime, TimingFunction, TrackKind, TrackSpec,
};
use crate::geometry::Geometry;
use crate::registry::{AnimationRegistry, SlotKind};
use crate::retarget::{retarget_fade, retarget_movement};
use crate::surface::{RenderHints, Surface};

/// Default length of every morphing animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

/// What a handler did with a surface's animation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The running animation was steered; no new handle was allocated.
    Retargeted(AnimationId),
    /// A new animation was installed, replacing `replaced` if there was one.
    Created {
        animation: AnimationId,
        replaced: Option<AnimationId>,
    },
}

impl Transition {
    /// Handle in the slot after the transition.
    pub fn animation(&self) -> AnimationId {
        match self {
            Transition::Retargeted(animation) => *animation,
            Transition::Created { animation, .. } => *animation,
        }
    }
}

/// Decides between retargeting and replacing animations on geometry changes.
#[derive(Debug, Clone)]
pub struct GeometryController {
    duration: Duration,
    timing: TimingFunction,
}

impl GeometryController {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            timing: TimingFunction::InOutCubic,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Applies to animations created or retargeted from now on.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Handle the notification sent before `surface` changes its frame geometry.
    pub fn frame_geometry_about_to_change<R: AnimationRuntime + ?Sized>(
        &self,
        surface: &Surface,
        registry: &mut AnimationRegistry,
        runtime: &mut R,
    ) -> Transition {
        if let Some(fade) = registry.fade(surface.id()) {
            if retarget_fade(runtime, fade) {
                log::trace!("Surface {}: fade retargeted", surface.id().raw());
                return Transition::Retargeted(fade.id());
            }
        }

        let handle = runtime.animate(AnimationRequest {
            surface: surface.id(),
            duration: self.duration,
            timing: self.timing,
            tracks: vec![TrackSpec::new(TrackKind::Opacity, 0.0, 1.0)],
        });
        let animation = handle.id();
        let replaced = registry
            .install(surface.id(), SlotKind::Fade, handle)
            .map(|old| old.id());

        log::debug!(
            "Surface {}: new fade {} ({:?})",
            surface.id().raw(),
            animation.raw(),
            self.duration
        );
        Transition::Created {
            animation,
            replaced,
        }
    }

    /// Handle the notification sent after `surface` changed its frame geometry.
    ///
    /// `previous` is the geometry before the change. When the host could not
    /// supply it, the current geometry is used and the fresh animation has
    /// equal endpoints.
    pub fn frame_geometry_changed<R: AnimationRuntime + ?Sized>(
        &self,
        surface: &mut Surface,
        previous: Option<Geometry>,
        registry: &mut AnimationRegistry,
        runtime: &mut R,
    ) -> Transition {
        surface.hints |= RenderHints::FORCE_BACKGROUND_CONTRAST | RenderHints::FORCE_BLUR;

        let new_geometry = surface.geometry;
        let old_geometry = previous.unwrap_or(new_geometry);

        if let Some(movement) = registry.movement(surface.id()) {
            let outcome = retarget_movement(runtime, movement, &new_geometry, self.duration);
            if outcome.succeeded() {
                log::trace!("Surface {}: move retargeted", surface.id().raw());
                return Transition::Retargeted(movement.id());
            }
            log::trace!(
                "Surface {}: move not retargetable ({:?}), replacing",
                surface.id().raw(),
                outcome
            );
        }

        let handle = runtime.animate(AnimationRequest {
            surface: surface.id(),
            duration: self.duration,
            timing: self.timing,
            tracks: vec![
                TrackSpec::new(TrackKind::Size, old_geometry.size(), new_geometry.size()),
                TrackSpec::new(
                    TrackKind::Position,
                    old_geometry.center(),
                    new_geometry.center(),
                ),
            ],
        });
        let animation = handle.id();
        let replaced = registry
            .install(surface.id(), SlotKind::Move, handle)
            .map(|old| old.id());

        log::debug!(
            "Surface {}: new move {} {:?} -> {:?}",
            surface.id().raw(),
            animation.raw(),
            old_geometry,
            new_geometry
        );
        Transition::Created {
            animation,
            replaced,
        }
    }
}

impl Default for GeometryController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use crate::animation::{Timeline, TrackValue};
    use crate::retarget::{POSITION_TRACK, SIZE_TRACK};
    use crate::surface::SurfaceKind;

    struct Fixture {
        controller: GeometryController,
        registry: AnimationRegistry,
        timeline: Timeline,
        start: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let start = Instant::now();
            Self {
                controller: GeometryController::default(),
                registry: AnimationRegistry::new(),
                timeline: Timeline::new(start),
                start,
            }
        }

        fn move_to(&mut self, surface: &mut Surface, geometry: Geometry) -> Transition {
            self.controller.frame_geometry_about_to_change(
                surface,
                &mut self.registry,
                &mut self.timeline,
            );
            let previous = std::mem::replace(&mut surface.geometry, geometry);
            self.controller.frame_geometry_changed(
                surface,
                Some(previous),
                &mut self.registry,
                &mut self.timeline,
            )
        }
    }

    #[test]
    fn test_first_change_creates_fade_and_move() {
        let mut fx = Fixture::new();
        let mut tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 100.0, 20.0));

        let transition = fx.move_to(&mut tooltip, Geometry::new(10.0, 0.0, 100.0, 20.0));
        assert!(matches!(
            transition,
            Transition::Created { replaced: None, .. }
        ));

        let movement = fx.registry.movement(tooltip.id()).unwrap();
        assert_eq!(movement.tracks(), &[TrackKind::Size, TrackKind::Position]);
        assert_eq!(
            fx.timeline.value(movement.track(POSITION_TRACK).unwrap()),
            Some(TrackValue::Pair(50.0, 10.0))
        );
        assert_eq!(
            fx.timeline.target(movement.track(POSITION_TRACK).unwrap()),
            Some(TrackValue::Pair(60.0, 10.0))
        );
        assert_eq!(
            fx.timeline.target(movement.track(SIZE_TRACK).unwrap()),
            Some(TrackValue::Pair(100.0, 20.0))
        );
        assert!(fx.registry.fade(tooltip.id()).is_some());
        assert!(tooltip
            .hints
            .contains(RenderHints::FORCE_BACKGROUND_CONTRAST | RenderHints::FORCE_BLUR));
    }

    #[test]
    fn test_second_change_retargets_both() {
        let mut fx = Fixture::new();
        let mut tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 100.0, 20.0));

        let first = fx.move_to(&mut tooltip, Geometry::new(10.0, 0.0, 100.0, 20.0));
        let fade = fx.registry.fade(tooltip.id()).map(|h| h.id());
        fx.timeline.advance(fx.start + Duration::from_millis(50));

        let second = fx.move_to(&mut tooltip, Geometry::new(20.0, 0.0, 120.0, 20.0));
        assert_eq!(second, Transition::Retargeted(first.animation()));
        assert_eq!(fx.registry.fade(tooltip.id()).map(|h| h.id()), fade);
        assert_eq!(fx.registry.active_count(), 2);

        let movement = fx.registry.movement(tooltip.id()).unwrap();
        assert_eq!(
            fx.timeline.target(movement.track(SIZE_TRACK).unwrap()),
            Some(TrackValue::Pair(120.0, 20.0))
        );
        assert_eq!(
            fx.timeline.target(movement.track(POSITION_TRACK).unwrap()),
            Some(TrackValue::Pair(80.0, 10.0))
        );
    }

    #[test]
    fn test_finished_move_is_replaced() {
        let mut fx = Fixture::new();
        let mut tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 100.0, 20.0));

        let first = fx.move_to(&mut tooltip, Geometry::new(10.0, 0.0, 100.0, 20.0));
        // The runtime dropped it but nobody cleared the slot yet.
        fx.timeline.advance(fx.start + Duration::from_secs(1));

        let second = fx.move_to(&mut tooltip, Geometry::new(20.0, 0.0, 100.0, 20.0));
        match second {
            Transition::Created {
                animation,
                replaced,
            } => {
                assert_ne!(animation, first.animation());
                assert_eq!(replaced, Some(first.animation()));
            }
            other => panic!("expected a new animation, got {:?}", other),
        }

        // The fresh animation starts from the previous geometry.
        let movement = fx.registry.movement(tooltip.id()).unwrap();
        assert_eq!(
            fx.timeline.value(movement.track(POSITION_TRACK).unwrap()),
            Some(TrackValue::Pair(60.0, 10.0))
        );
    }

    #[test]
    fn test_missing_previous_geometry_is_degenerate() {
        let mut fx = Fixture::new();
        let geometry = Geometry::new(5.0, 5.0, 40.0, 40.0);
        let mut notification = Surface::new(SurfaceKind::Notification, geometry);

        let transition = fx.controller.frame_geometry_changed(
            &mut notification,
            None,
            &mut fx.registry,
            &mut fx.timeline,
        );
        let movement = fx.registry.movement(notification.id()).unwrap();
        assert_eq!(movement.id(), transition.animation());

        let position = movement.track(POSITION_TRACK).unwrap();
        assert_eq!(fx.timeline.value(position), fx.timeline.target(position));
        assert_eq!(
            fx.timeline.target(position),
            Some(TrackValue::Pair(25.0, 25.0))
        );
    }

    #[test]
    fn test_set_duration_only_affects_new_animations() {
        let mut fx = Fixture::new();
        let mut tooltip = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 10.0, 10.0));

        let first = fx.move_to(&mut tooltip, Geometry::new(5.0, 0.0, 10.0, 10.0));
        fx.controller.set_duration(Duration::from_millis(400));
        assert_eq!(fx.timeline.duration(first.animation()), Some(DEFAULT_DURATION));

        let mut other = Surface::new(SurfaceKind::Tooltip, Geometry::new(0.0, 0.0, 10.0, 10.0));
        let second = fx.move_to(&mut other, Geometry::new(5.0, 0.0, 10.0, 10.0));
        assert_eq!(
            fx.timeline.duration(second.animation()),
            Some(Duration::from_millis(400))
        );
    }
}
