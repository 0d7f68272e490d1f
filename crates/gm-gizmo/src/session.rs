//! Immutable drag snapshot

use glam::{Quat, Vec2, Vec3};

use gm_core::axis::GizmoAxis;

/// State captured once when a drag begins, read-only for its duration.
///
/// All per-frame drag math derives from this snapshot plus the current
/// cursor position, never from the previous frame's mutated transform, so
/// the resulting transform is a pure function of total cursor displacement.
/// The session is owned exclusively by the controller and dropped on
/// release.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    /// Axis locked for the duration of the drag
    pub axis: GizmoAxis,
    /// Target location at drag start
    pub start_location: Vec3,
    /// Target orientation at drag start
    pub start_rotation: Quat,
    /// Target scale at drag start
    pub start_scale: Vec3,
    /// Cursor position at drag start, viewport pixels
    pub start_cursor: Vec2,
    /// World-space impact point latched from the hover hit that led to
    /// this drag
    pub impact_point: Vec3,
    /// Unit screen-space rotation tangent, precomputed at drag start.
    /// Zero for translate/scale drags.
    pub rotate_screen_vec: Vec2,
}
