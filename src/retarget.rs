//! Steering running animations toward new end points.

use std::time::Duration;

use crate::animation::{AnimationHandle, AnimationRuntime, TrackValue};
use crate::geometry::Geometry;

/// Track indices of a move/resize handle.
pub const SIZE_TRACK: usize = 0;
pub const POSITION_TRACK: usize = 1;
/// Track index of a fade handle.
pub const OPACITY_TRACK: usize = 0;

/// Outcome of steering a single track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackRetarget {
    /// The runtime redirected the track.
    Retargeted,
    /// The runtime refused; the track is unchanged.
    Rejected,
    /// The handle has no such track.
    Missing,
    /// Not attempted because an earlier track of the group failed.
    Skipped,
}

/// Per-track outcome of steering a move/resize handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovementRetarget {
    pub size: TrackRetarget,
    pub position: TrackRetarget,
}

impl MovementRetarget {
    /// Both tracks now head for the new geometry.
    pub fn succeeded(&self) -> bool {
        self.size == TrackRetarget::Retargeted && self.position == TrackRetarget::Retargeted
    }
}

fn retarget_track<R: AnimationRuntime + ?Sized>(
    runtime: &mut R,
    handle: &AnimationHandle,
    index: usize,
    target: TrackValue,
    duration: Option<Duration>,
) -> TrackRetarget {
    let Some(track) = handle.track(index) else {
        return TrackRetarget::Missing;
    };
    if runtime.retarget(track, target, duration) {
        TrackRetarget::Retargeted
    } else {
        TrackRetarget::Rejected
    }
}

/// Steer a fade back toward fully opaque, keeping its own timing.
pub fn retarget_fade<R: AnimationRuntime + ?Sized>(
    runtime: &mut R,
    handle: &AnimationHandle,
) -> bool {
    retarget_track(runtime, handle, OPACITY_TRACK, TrackValue::Scalar(1.0), None)
        == TrackRetarget::Retargeted
}

/// Steer both tracks of a move/resize handle toward `geometry`.
///
/// Position is only attempted once size has been redirected, so a refused
/// size track leaves the whole handle untouched.
pub fn retarget_movement<R: AnimationRuntime + ?Sized>(
    runtime: &mut R,
    handle: &AnimationHandle,
    geometry: &Geometry,
    duration: Duration,
) -> MovementRetarget {
    let size = retarget_track(
        runtime,
        handle,
        SIZE_TRACK,
        geometry.size().into(),
        Some(duration),
    );
    let position = if size == TrackRetarget::Retargeted {
        retarget_track(
            runtime,
            handle,
            POSITION_TRACK,
            geometry.center().into(),
            Some(duration),
        )
    } else {
        TrackRetarget::Skipped
    };

    MovementRetarget { size, position }
}
