//! World-space picking ray

use glam::Vec3;

/// A world-space ray with a unit-length direction.
///
/// The producer is responsible for normalization; consumers rely on the
/// direction being unit length so that intersection distances are world
/// units. Renormalizing in a consumer would silently change `t` semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray starting point
    pub origin: Vec3,
    /// Unit-length ray direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and an already-normalized direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            (direction.length_squared() - 1.0).abs() < 1e-4,
            "ray direction must be unit length"
        );
        Self { origin, direction }
    }

    /// Create a ray from an origin toward a target point, normalizing the
    /// direction.
    pub fn toward(origin: Vec3, target: Vec3) -> Self {
        Self {
            origin,
            direction: (target - origin).normalize(),
        }
    }

    /// Point along the ray at parameter `t` (world units).
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
