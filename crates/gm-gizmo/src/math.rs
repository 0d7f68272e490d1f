//! Screen-space drag math
//!
//! Helpers that turn a 3D manipulation axis and a total 2D cursor offset
//! into world-space deltas. Screen coordinates are y-down, so camera-space
//! up projects with a negated y.

use glam::{Mat4, Vec2, Vec3};

/// Squared length below which a projected direction is treated as
/// degenerate.
const DEGENERATE_EPSILON: f32 = 1e-10;

/// Threshold on the projection matrix's bottom-right homogeneous term for
/// classifying it as orthographic.
const ORTHO_W_EPSILON: f32 = 1e-4;

/// Project a 3D axis into unit 2D screen space using the camera basis.
///
/// Returns zero when the axis is (nearly) parallel to the view direction;
/// a drag along such an axis produces no motion instead of a numerically
/// unstable direction.
pub fn stable_axis_screen_dir(axis: Vec3, right: Vec3, up: Vec3) -> Vec2 {
    let projected = Vec2::new(axis.dot(right), -axis.dot(up));
    if projected.length_squared() < DEGENERATE_EPSILON {
        Vec2::ZERO
    } else {
        projected.normalize()
    }
}

/// World-space distance represented by one screen pixel at the given depth.
///
/// Orthographic projections (bottom-right homogeneous term of 1) derive the
/// pixel size from the projection's vertical extent alone; perspective
/// projections scale with the depth of the manipulated point along the
/// camera forward axis, clamped to `min_depth` to avoid the near-camera
/// singularity. A degenerate vertical projection scale degrades to zero,
/// which turns the drag into a no-op rather than an error.
pub fn world_per_pixel(proj: &Mat4, viewport_height: f32, depth: f32, min_depth: f32) -> f32 {
    let height = viewport_height.max(1.0);
    let y_scale = proj.y_axis.y;
    if y_scale.abs() < 1e-6 {
        return 0.0;
    }

    if (proj.w_axis.w - 1.0).abs() < ORTHO_W_EPSILON {
        let half_world_height = 1.0 / y_scale;
        2.0 * half_world_height / height
    } else {
        let depth = depth.max(min_depth);
        2.0 * depth / (height * y_scale)
    }
}

/// Unit screen-space tangent of a rotation at the grab point.
///
/// The tangent is the rotation axis crossed with the vector from the gizmo
/// center to the latched impact point, projected onto the camera basis.
/// Computed once at drag start and cached in the session.
pub fn rotate_screen_vec(axis: Vec3, center: Vec3, impact: Vec3, right: Vec3, up: Vec3) -> Vec2 {
    let tangent = axis.cross(impact - center);
    let projected = Vec2::new(tangent.dot(right), -tangent.dot(up));
    if projected.length_squared() < DEGENERATE_EPSILON {
        Vec2::ZERO
    } else {
        projected.normalize()
    }
}
