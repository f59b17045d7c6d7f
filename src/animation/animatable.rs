/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for (f32, f32) {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        (f32::lerp(&from.0, &to.0, t), f32::lerp(&from.1, &to.1, t))
    }
}

/// Endpoint or current value of a single animation track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    /// Opacity in `0.0..=1.0`
    Scalar(f32),
    /// Size `(width, height)` or center position `(x, y)`
    Pair(f32, f32),
}

impl TrackValue {
    /// Whether both values have the same shape and can be interpolated.
    pub fn same_shape(&self, other: &TrackValue) -> bool {
        matches!(
            (self, other),
            (TrackValue::Scalar(_), TrackValue::Scalar(_))
                | (TrackValue::Pair(..), TrackValue::Pair(..))
        )
    }

    /// Interpolate towards `to`. Returns `None` when the shapes differ.
    pub fn lerp(&self, to: &TrackValue, t: f32) -> Option<TrackValue> {
        match (self, to) {
            (TrackValue::Scalar(a), TrackValue::Scalar(b)) => {
                Some(TrackValue::Scalar(f32::lerp(a, b, t)))
            }
            (TrackValue::Pair(a1, a2), TrackValue::Pair(b1, b2)) => {
                let (v1, v2) = <(f32, f32)>::lerp(&(*a1, *a2), &(*b1, *b2), t);
                Some(TrackValue::Pair(v1, v2))
            }
            _ => None,
        }
    }
}

impl From<f32> for TrackValue {
    fn from(value: f32) -> Self {
        TrackValue::Scalar(value)
    }
}

impl From<(f32, f32)> for TrackValue {
    fn from((value1, value2): (f32, f32)) -> Self {
        TrackValue::Pair(value1, value2)
    }
}
