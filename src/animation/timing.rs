//! Timing functions (easing curves) for animations.
//!
//! The morphing effect only ever asks the runtime for a symmetric
//! ease-in/ease-out curve, so that is the single selector offered here.
//! Runtimes are free to map it to their own curve implementation; the
//! reference [`Timeline`](super::Timeline) evaluates it with [`TimingFunction::evaluate`].

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingFunction {
    /// Cubic ease-in/ease-out: slow start and end, fast middle, symmetric around t = 0.5
    #[default]
    InOutCubic,
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::InOutCubic => in_out_cubic(t),
        }
    }
}

fn in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = -2.0 * t + 2.0;
        1.0 - f * f * f / 2.0
    }
}
