#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use morphing::prelude::*;

/// A retarget call as seen by [`RecordingRuntime`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetargetCall {
    pub track: TrackRef,
    pub kind: TrackKind,
    pub target: TrackValue,
    pub duration: Option<Duration>,
    pub accepted: bool,
}

/// Runtime that records every call and refuses retargets of chosen track kinds.
#[derive(Default)]
pub struct RecordingRuntime {
    pub requests: Vec<(AnimationId, AnimationRequest)>,
    pub retargets: Vec<RetargetCall>,
    rejected: HashSet<TrackKind>,
    tracks: HashMap<AnimationId, Vec<TrackKind>>,
}

impl RecordingRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every future retarget of `kind`.
    pub fn reject(&mut self, kind: TrackKind) {
        self.rejected.insert(kind);
    }

    pub fn accept_all(&mut self) {
        self.rejected.clear();
    }

    pub fn request(&self, id: AnimationId) -> Option<&AnimationRequest> {
        self.requests
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, request)| request)
    }

    /// Number of animations created so far.
    pub fn created(&self) -> usize {
        self.requests.len()
    }
}

impl AnimationRuntime for RecordingRuntime {
    fn animate(&mut self, request: AnimationRequest) -> AnimationHandle {
        let id = AnimationId::next();
        let kinds: Vec<TrackKind> = request.tracks.iter().map(|t| t.kind).collect();
        self.tracks.insert(id, kinds.clone());
        self.requests.push((id, request));
        AnimationHandle::new(id, kinds)
    }

    fn retarget(
        &mut self,
        track: TrackRef,
        target: TrackValue,
        duration: Option<Duration>,
    ) -> bool {
        let Some(kind) = self
            .tracks
            .get(&track.animation)
            .and_then(|kinds| kinds.get(track.index))
            .copied()
        else {
            return false;
        };
        let accepted = !self.rejected.contains(&kind);
        self.retargets.push(RetargetCall {
            track,
            kind,
            target,
            duration,
            accepted,
        });
        accepted
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compositor with the given surfaces already mapped and the effect initialized.
pub fn compositor(
    surfaces: Vec<Surface>,
    settings: impl ConfigSource + 'static,
) -> Compositor<RecordingRuntime> {
    init_logging();
    let mut manager = SurfaceManager::new();
    for surface in surfaces {
        manager.add(surface);
    }
    let effect = MorphingEffect::new(RecordingRuntime::new(), settings);
    let mut compositor = Compositor::new(manager, effect);
    compositor.init();
    compositor
}
