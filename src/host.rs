//! Wiring the effect into a host event loop.
//!
//! Host notifications travel over a calloop channel as [`HostEvent`]s, so they
//! can be produced from any thread while every handler still runs to
//! completion on the loop thread, in send order.
//!
//! ```ignore
//! let mut event_loop = EventLoop::try_new()?;
//! let (sender, channel) = calloop::channel::channel();
//! let token = register_events(&event_loop.handle(), channel)?;
//!
//! let mut compositor = Compositor::new(surfaces, MorphingEffect::new(runtime, settings));
//! compositor.init();
//!
//! sender.send(HostEvent::ConfigChanged)?;
//! event_loop.dispatch(Some(Duration::ZERO), &mut compositor)?;
//!
//! // Later, to stop listening:
//! event_loop.handle().remove(token);
//! ```

use calloop::channel::{Channel, Event};
use calloop::{LoopHandle, RegistrationToken};

use crate::animation::{AnimationId, AnimationRuntime};
use crate::effect::MorphingEffect;
use crate::error::MorphError;
use crate::geometry::Geometry;
use crate::surface::{Surface, SurfaceId};
use crate::surface_manager::SurfaceManager;

/// Notifications the host delivers to the effect.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The effect configuration changed on disk
    ConfigChanged,
    /// A surface was mapped
    SurfaceAdded(Surface),
    /// A surface was destroyed
    SurfaceRemoved(SurfaceId),
    /// A surface is about to change its frame geometry
    GeometryAboutToChange(SurfaceId),
    /// A surface changed its frame geometry to `geometry`
    GeometryChanged {
        surface: SurfaceId,
        geometry: Geometry,
        previous: Option<Geometry>,
    },
    /// The runtime finished an animation
    AnimationFinished(AnimationId),
}

/// Event loop data: the host's surfaces plus the effect loaded into it.
pub struct Compositor<R: AnimationRuntime> {
    pub surfaces: SurfaceManager,
    pub effect: MorphingEffect<R>,
}

impl<R: AnimationRuntime> Compositor<R> {
    pub fn new(surfaces: SurfaceManager, effect: MorphingEffect<R>) -> Self {
        Self { surfaces, effect }
    }

    /// Initialize the effect against the surfaces mapped so far.
    pub fn init(&mut self) {
        self.effect.init(&self.surfaces);
    }

    pub fn dispatch(&mut self, event: HostEvent) {
        self.effect.handle_event(event, &mut self.surfaces);
    }

    /// Change a surface's geometry, notifying the effect before and after.
    ///
    /// Returns the previous geometry, or `None` for an unknown surface.
    pub fn set_geometry(&mut self, id: SurfaceId, geometry: Geometry) -> Option<Geometry> {
        let previous = self.surfaces.get(id)?.geometry;
        self.dispatch(HostEvent::GeometryAboutToChange(id));
        self.dispatch(HostEvent::GeometryChanged {
            surface: id,
            geometry,
            previous: Some(previous),
        });
        Some(previous)
    }
}

/// Insert `channel` into the event loop as the effect's notification source.
///
/// Removing the returned token from the loop unsubscribes the effect.
pub fn register_events<R: AnimationRuntime + 'static>(
    handle: &LoopHandle<'static, Compositor<R>>,
    channel: Channel<HostEvent>,
) -> Result<RegistrationToken, MorphError> {
    handle
        .insert_source(channel, |event, _, compositor| match event {
            Event::Msg(event) => compositor.dispatch(event),
            Event::Closed => log::debug!("Host event channel closed"),
        })
        .map_err(|err| MorphError::EventLoop(err.error))
}
