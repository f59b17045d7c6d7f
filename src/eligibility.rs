use crate::surface::{Surface, SurfaceKind};

/// Whether geometry changes of `surface` should ever be animated.
///
/// Only transient surfaces qualify: tooltips, notifications and critical
/// notifications. Everything else is left to snap.
pub fn is_eligible(surface: &Surface) -> bool {
    matches!(
        surface.kind(),
        SurfaceKind::Tooltip | SurfaceKind::Notification | SurfaceKind::CriticalNotification
    )
}
