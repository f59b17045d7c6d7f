//! Geometry-change animations for transient compositor surfaces.
//!
//! Tooltips and notifications move and resize a lot: they follow the cursor,
//! grow when their text changes, stack up as new notifications arrive. This
//! crate smooths those changes. Before a change the surface cross-fades from
//! its previous appearance; after it the frame is interpolated from the old
//! geometry to the new one. An animation still in flight is steered toward the
//! new end point rather than restarted, and the size and position of a frame
//! are always steered or restarted together.
//!
//! The interpolation itself belongs to the host. The effect talks to it through
//! [`AnimationRuntime`]; [`Timeline`] is a small in-process runtime.

pub mod animation;
pub mod config;
pub mod controller;
pub mod effect;
pub mod eligibility;
pub mod error;
pub mod geometry;
pub mod host;
pub mod registry;
pub mod retarget;
pub mod surface;
pub mod surface_manager;

pub use animation::{AnimationRuntime, Timeline};
pub use effect::MorphingEffect;

pub mod prelude {
    pub use crate::animation::{
        AnimationHandle, AnimationId, AnimationRequest, AnimationRuntime, TimingFunction,
        Timeline, TrackKind, TrackRef, TrackSpec, TrackValue,
    };
    pub use crate::config::{ConfigSource, EffectSettings, TomlConfig};
    pub use crate::controller::{GeometryController, Transition, DEFAULT_DURATION};
    pub use crate::effect::MorphingEffect;
    pub use crate::eligibility::is_eligible;
    pub use crate::error::{ConfigError, MorphError};
    pub use crate::geometry::Geometry;
    pub use crate::host::{register_events, Compositor, HostEvent};
    pub use crate::registry::{AnimationRegistry, SlotKind};
    pub use crate::surface::{RenderHints, Surface, SurfaceId, SurfaceKind};
    pub use crate::surface_manager::SurfaceManager;
}
