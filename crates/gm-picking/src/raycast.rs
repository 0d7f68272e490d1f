//! Cursor-to-ray construction
//!
//! Builds world-space picking rays from 2D cursor positions. Two paths are
//! provided: a matrix unprojection through the inverse view-projection
//! transform, and a camera-basis path that maps the cursor into a
//! sub-viewport's local range first so several independent viewports can
//! share one camera.

use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use gm_core::camera::Camera;
use gm_core::ray::Ray;
use gm_core::viewport::Viewport;

/// Build a ray by unprojecting a screen point through the inverse
/// view-projection transform.
///
/// The ray origin is the camera's world position (recovered from the
/// inverse view matrix); the direction points toward the unprojected far
/// point and is unit length.
pub fn ray_from_screen(view: Mat4, proj: Mat4, cursor: Vec2, screen_size: Vec2) -> Ray {
    let ndc_x = (2.0 * cursor.x / screen_size.x) - 1.0;
    let ndc_y = 1.0 - (2.0 * cursor.y / screen_size.y);

    let inv_view_proj = (proj * view).inverse();
    let camera_pos = view.inverse().w_axis.xyz();

    let far_ndc = Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let far_world = inv_view_proj * far_ndc;
    let far_world = far_world.xyz() / far_world.w;

    Ray::toward(camera_pos, far_world)
}

/// Build a ray for a cursor inside a sub-viewport, from an explicit camera
/// basis.
///
/// The cursor is first mapped into the viewport's local `[0,1]` range using
/// `viewport_offset` and `viewport_size`, so independent viewports each
/// produce correct rays from one shared camera. The aspect ratio comes from
/// the viewport rectangle itself.
///
/// Behavior is undefined for a `viewport_size` with a non-positive
/// component; callers must guard.
#[allow(clippy::too_many_arguments)]
pub fn ray_from_viewport(
    camera_pos: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    fov_y: f32,
    cursor: Vec2,
    viewport_size: Vec2,
    viewport_offset: Vec2,
) -> Ray {
    let aspect = viewport_size.x / viewport_size.y;
    ray_from_viewport_with_aspect(
        camera_pos,
        right,
        up,
        forward,
        fov_y,
        cursor,
        viewport_size,
        viewport_offset,
        aspect,
    )
}

/// Viewport-relative ray with an explicit aspect ratio, for viewports whose
/// rectangle does not match the render target's native aspect.
#[allow(clippy::too_many_arguments)]
pub fn ray_from_viewport_with_aspect(
    camera_pos: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    fov_y: f32,
    cursor: Vec2,
    viewport_size: Vec2,
    viewport_offset: Vec2,
    aspect: f32,
) -> Ray {
    let local = (cursor - viewport_offset) / viewport_size;
    let ndc_x = 2.0 * local.x - 1.0;
    let ndc_y = 1.0 - 2.0 * local.y;

    let tan_half_fov = (fov_y * 0.5).tan();
    let direction = forward + right * (ndc_x * tan_half_fov * aspect) + up * (ndc_y * tan_half_fov);

    Ray::new(camera_pos, direction.normalize())
}

/// Build a ray from a [`Camera`] and a cursor position in viewport pixels.
pub fn ray_from_camera(camera: &Camera, cursor: Vec2, viewport: Viewport) -> Ray {
    let view = camera.view_matrix();
    let proj = camera.projection_matrix(viewport.aspect());
    ray_from_screen(view, proj, cursor, viewport.size())
}
