//! Ray/primitive intersection tests
//!
//! Pure geometric predicates used for scene-object picking and gizmo handle
//! hit testing. Every function returns the smallest valid distance `t` along
//! the ray, in world units, or `None` on a miss. Rays are assumed to carry a
//! unit-length direction (see [`Ray`]).

use glam::Vec3;

use crate::ray::Ray;

/// Determinant threshold below which a ray is treated as parallel to a
/// triangle or plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Ray-sphere intersection test.
///
/// Solves the quadratic `|origin + t*dir - center|^2 = radius^2` and returns
/// the smallest non-negative root. Returns `None` when the discriminant is
/// negative or both roots lie behind the ray origin.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let t_near = (-b - sqrt_d) / (2.0 * a);
    if t_near >= 0.0 {
        return Some(t_near);
    }
    let t_far = (-b + sqrt_d) / (2.0 * a);
    if t_far >= 0.0 { Some(t_far) } else { None }
}

/// Ray-triangle intersection test (Möller-Trumbore).
///
/// Rejects rays nearly parallel to the triangle plane, hits behind the
/// origin (`t <= 0`), and barycentric coordinates outside the triangle.
pub fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let edge1 = b - a;
    let edge2 = c - a;

    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t > 0.0 { Some(t) } else { None }
}

/// Ray-plane intersection test.
///
/// Returns the distance to the plane through `point` with `normal`, or
/// `None` when the ray is parallel to the plane or the hit lies behind the
/// origin.
pub fn ray_plane(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin).dot(normal) / denom;
    if t >= 0.0 { Some(t) } else { None }
}

/// Ray-cylinder intersection test for a finite cylinder between `start` and
/// `end`.
///
/// Projects the ray into the plane perpendicular to the cylinder axis and
/// solves the resulting quadratic, then checks that the hit point lies
/// within the finite axis segment.
pub fn ray_cylinder(ray: &Ray, start: Vec3, end: Vec3, radius: f32) -> Option<f32> {
    let axis = (end - start).normalize();
    let length = (end - start).length();

    // Ray direction and origin offset projected off the cylinder axis
    let d = ray.direction - axis * ray.direction.dot(axis);
    let o = (ray.origin - start) - axis * (ray.origin - start).dot(axis);

    let a = d.dot(d);
    // Ray parallel to the cylinder axis has no radial component to solve
    if a < PARALLEL_EPSILON {
        return None;
    }
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < 0.0 {
        return None;
    }

    // Reject hits outside the finite segment
    let projection = (ray.point_at(t) - start).dot(axis);
    if projection < 0.0 || projection > length {
        return None;
    }

    Some(t)
}

/// Ray-ring intersection test.
///
/// Intersects the ray with the ring's plane, then checks that the hit point
/// falls within the annular band `ring_radius ± thickness`.
pub fn ray_ring(
    ray: &Ray,
    center: Vec3,
    normal: Vec3,
    ring_radius: f32,
    thickness: f32,
) -> Option<f32> {
    let t = ray_plane(ray, center, normal)?;

    let distance_from_center = (ray.point_at(t) - center).length();
    if (distance_from_center - ring_radius).abs() <= thickness {
        Some(t)
    } else {
        None
    }
}
