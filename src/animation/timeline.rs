use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::{
    AnimationHandle, AnimationId, AnimationRequest, AnimationRuntime, TimingFunction, TrackRef,
    TrackValue,
};
use crate::surface::SurfaceId;

/// An animation that ran to completion and was dropped by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub animation: AnimationId,
    pub surface: SurfaceId,
}

/// Interpolation state of one track
struct TrackState {
    /// Value when the current leg started
    start: TrackValue,
    /// End point of the current leg
    target: TrackValue,
    /// Frame time the current leg started at
    started_at: Instant,
    /// Length of the current leg
    duration: Duration,
}

impl TrackState {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, now: Instant, timing: TimingFunction) -> TrackValue {
        let eased_t = timing.evaluate(self.progress(now));
        self.start
            .lerp(&self.target, eased_t)
            .unwrap_or(self.target)
    }

    fn remaining(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.duration.saturating_sub(elapsed)
    }
}

struct RunningAnimation {
    surface: SurfaceId,
    timing: TimingFunction,
    tracks: Vec<TrackState>,
}

impl RunningAnimation {
    fn is_done(&self, now: Instant) -> bool {
        self.tracks.iter().all(|track| track.progress(now) >= 1.0)
    }
}

/// In-process [`AnimationRuntime`] driven by explicit frame times.
///
/// Animations start at the timeline's current frame time and are advanced by
/// [`Timeline::advance`], which also reports the ones that completed.
pub struct Timeline {
    now: Instant,
    running: HashMap<AnimationId, RunningAnimation>,
}

impl Timeline {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            running: HashMap::new(),
        }
    }

    /// Current frame time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the frame time to `now` and drop every animation that completed.
    pub fn advance(&mut self, now: Instant) -> Vec<Finished> {
        if now > self.now {
            self.now = now;
        }

        let now = self.now;
        let finished: Vec<Finished> = self
            .running
            .iter()
            .filter(|(_, animation)| animation.is_done(now))
            .map(|(id, animation)| Finished {
                animation: *id,
                surface: animation.surface,
            })
            .collect();

        for done in &finished {
            self.running.remove(&done.animation);
            log::trace!("Animation {} finished", done.animation.raw());
        }

        finished
    }

    /// Current interpolated value of a track.
    pub fn value(&self, track: TrackRef) -> Option<TrackValue> {
        let animation = self.running.get(&track.animation)?;
        let state = animation.tracks.get(track.index)?;
        Some(state.sample(self.now, animation.timing))
    }

    /// End point of a track's current leg.
    pub fn target(&self, track: TrackRef) -> Option<TrackValue> {
        let animation = self.running.get(&track.animation)?;
        animation.tracks.get(track.index).map(|state| state.target)
    }

    /// Longest leg length among the animation's tracks.
    pub fn duration(&self, id: AnimationId) -> Option<Duration> {
        let animation = self.running.get(&id)?;
        animation.tracks.iter().map(|track| track.duration).max()
    }

    pub fn is_running(&self, id: AnimationId) -> bool {
        self.running.contains_key(&id)
    }

    /// Number of running animations.
    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}

impl AnimationRuntime for Timeline {
    fn animate(&mut self, request: AnimationRequest) -> AnimationHandle {
        let id = AnimationId::next();
        let kinds = request.tracks.iter().map(|spec| spec.kind).collect();

        let tracks = request
            .tracks
            .iter()
            .map(|spec| {
                if !spec.from.same_shape(&spec.to) {
                    log::warn!(
                        "{:?} track of animation {} has mismatched endpoints, snapping to target",
                        spec.kind,
                        id.raw()
                    );
                }
                TrackState {
                    start: spec.from,
                    target: spec.to,
                    started_at: self.now,
                    duration: request.duration,
                }
            })
            .collect();

        log::trace!(
            "Animation {} started for surface {} ({:?}, {} tracks)",
            id.raw(),
            request.surface.raw(),
            request.duration,
            request.tracks.len()
        );

        self.running.insert(
            id,
            RunningAnimation {
                surface: request.surface,
                timing: request.timing,
                tracks,
            },
        );

        AnimationHandle::new(id, kinds)
    }

    fn retarget(
        &mut self,
        track: TrackRef,
        target: TrackValue,
        duration: Option<Duration>,
    ) -> bool {
        let now = self.now;
        let Some(animation) = self.running.get_mut(&track.animation) else {
            return false;
        };
        let timing = animation.timing;
        let Some(state) = animation.tracks.get_mut(track.index) else {
            return false;
        };
        if !state.target.same_shape(&target) {
            return false;
        }

        // Already heading there
        if state.target == target {
            return true;
        }

        let current = state.sample(now, timing);
        let duration = duration.unwrap_or_else(|| state.remaining(now));
        state.start = current;
        state.target = target;
        state.started_at = now;
        state.duration = duration;

        log::trace!(
            "Animation {} track {} retargeted to {:?} over {:?}",
            track.animation.raw(),
            track.index,
            target,
            duration
        );
        true
    }
}
