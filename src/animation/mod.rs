//! The boundary between the morphing effect and the host's animation runtime.
//!
//! The effect never interpolates anything itself. It describes what should
//! animate with an [`AnimationRequest`], receives an opaque
//! [`AnimationHandle`] back, and later asks the runtime to steer individual
//! tracks of that handle with [`AnimationRuntime::retarget`].
//!
//! [`Timeline`] is an in-process runtime used by the demo and the tests.

mod animatable;
mod timeline;
mod timing;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::surface::SurfaceId;

pub use animatable::{Animatable, TrackValue};
pub use timeline::{Finished, Timeline};
pub use timing::TimingFunction;

/// Unique identifier of one animation created by a runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Generate a new unique animation ID
    pub fn next() -> Self {
        static NEXT_ANIMATION_ID: AtomicU64 = AtomicU64::new(1);
        AnimationId(NEXT_ANIMATION_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// What a track animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Cross-fade from the previous appearance of the surface
    Opacity,
    /// Frame size `(width, height)`
    Size,
    /// Frame center `(x, y)`
    Position,
}

/// One sub-animation of a request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackSpec {
    pub kind: TrackKind,
    pub from: TrackValue,
    pub to: TrackValue,
}

impl TrackSpec {
    pub fn new(kind: TrackKind, from: impl Into<TrackValue>, to: impl Into<TrackValue>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Everything a runtime needs to start an animation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    pub surface: SurfaceId,
    pub duration: Duration,
    pub timing: TimingFunction,
    /// Ordered tracks; a handle's track indices follow this order
    pub tracks: Vec<TrackSpec>,
}

/// Opaque token for a running animation and the kinds of its tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationHandle {
    id: AnimationId,
    tracks: Vec<TrackKind>,
}

impl AnimationHandle {
    pub fn new(id: AnimationId, tracks: Vec<TrackKind>) -> Self {
        Self { id, tracks }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn tracks(&self) -> &[TrackKind] {
        &self.tracks
    }

    /// Address of track `index`, if the handle has one.
    pub fn track(&self, index: usize) -> Option<TrackRef> {
        (index < self.tracks.len()).then_some(TrackRef {
            animation: self.id,
            index,
        })
    }
}

/// Address of a single track inside an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackRef {
    pub animation: AnimationId,
    pub index: usize,
}

/// Animation primitives provided by the host.
///
/// Implementations must honour the retarget contract the controller relies on:
/// `retarget` is synchronous, returns `false` without touching anything when
/// the track cannot be redirected, and on success moves the track's end point
/// while keeping its current interpolated value.
pub trait AnimationRuntime {
    /// Start a new animation.
    fn animate(&mut self, request: AnimationRequest) -> AnimationHandle;

    /// Redirect a running track toward `target`.
    ///
    /// `duration` replaces the remaining time; `None` keeps the track's own timing.
    fn retarget(&mut self, track: TrackRef, target: TrackValue, duration: Option<Duration>)
        -> bool;
}
