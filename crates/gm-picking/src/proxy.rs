//! Collision collaborators for picking
//!
//! Scene objects participate in picking through the [`Pickable`] trait;
//! gizmo handles are described by [`HandleProxy`] values rebuilt every frame
//! from the manipulated target's transform.

use glam::Vec3;
use uuid::Uuid;

use gm_core::axis::GizmoAxis;
use gm_core::intersect;
use gm_core::ray::Ray;

/// A scene object that can be hit by a picking ray.
///
/// The collision test is owned by the object itself (its bounding volume or
/// mesh); the picking service only compares distances.
pub trait Pickable {
    /// Stable identity of this object.
    fn id(&self) -> Uuid;

    /// Distance along the ray to the closest hit, or `None` on a miss.
    fn test_ray(&self, ray: &Ray) -> Option<f32>;
}

/// Sphere-bounded pickable object.
#[derive(Debug, Clone)]
pub struct SphereCollider {
    /// Object identity
    pub id: Uuid,
    /// Sphere center in world space
    pub center: Vec3,
    /// Sphere radius
    pub radius: f32,
}

impl SphereCollider {
    /// Create a sphere collider with a fresh id.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
        }
    }
}

impl Pickable for SphereCollider {
    fn id(&self) -> Uuid {
        self.id
    }

    fn test_ray(&self, ray: &Ray) -> Option<f32> {
        intersect::ray_sphere(ray, self.center, self.radius)
    }
}

/// Triangle-mesh pickable object, tested triangle by triangle.
#[derive(Debug, Clone)]
pub struct TriMeshCollider {
    /// Object identity
    pub id: Uuid,
    /// World-space triangles
    pub triangles: Vec<[Vec3; 3]>,
}

impl TriMeshCollider {
    /// Create a mesh collider with a fresh id.
    pub fn new(triangles: Vec<[Vec3; 3]>) -> Self {
        Self {
            id: Uuid::new_v4(),
            triangles,
        }
    }
}

impl Pickable for TriMeshCollider {
    fn id(&self) -> Uuid {
        self.id
    }

    fn test_ray(&self, ray: &Ray) -> Option<f32> {
        let mut closest: Option<f32> = None;
        for [a, b, c] in &self.triangles {
            if let Some(t) = intersect::ray_triangle(ray, *a, *b, *c)
                && closest.is_none_or(|best| t < best)
            {
                closest = Some(t);
            }
        }
        closest
    }
}

/// Hit-test geometry of one gizmo handle.
#[derive(Debug, Clone, Copy)]
pub enum HandleShape {
    /// Translate arrow: a finite cylinder from the gizmo origin
    Arrow {
        /// Cylinder start (gizmo origin)
        start: Vec3,
        /// Unit direction of the arrow
        dir: Vec3,
        /// Arrow length
        length: f32,
        /// Hit-test radius
        radius: f32,
    },
    /// Rotation ring in the plane perpendicular to its normal
    Ring {
        /// Ring center (gizmo origin)
        center: Vec3,
        /// Unit ring normal (the rotation axis)
        normal: Vec3,
        /// Ring radius
        radius: f32,
        /// Hit-test band half-width
        thickness: f32,
    },
    /// Scale cube at the end of an axis, hit-tested as a sphere
    Cube {
        /// Cube center
        center: Vec3,
        /// Hit-test radius
        hit_radius: f32,
    },
}

/// One pickable gizmo handle: an axis tag plus its hit geometry.
#[derive(Debug, Clone, Copy)]
pub struct HandleProxy {
    /// Axis this handle manipulates
    pub axis: GizmoAxis,
    /// Hit-test geometry
    pub shape: HandleShape,
}

impl HandleProxy {
    /// Distance along the ray to this handle, or `None` on a miss.
    pub fn test_ray(&self, ray: &Ray) -> Option<f32> {
        match self.shape {
            HandleShape::Arrow {
                start,
                dir,
                length,
                radius,
            } => intersect::ray_cylinder(ray, start, start + dir * length, radius),
            HandleShape::Ring {
                center,
                normal,
                radius,
                thickness,
            } => intersect::ray_ring(ray, center, normal, radius, thickness),
            HandleShape::Cube { center, hit_radius } => {
                intersect::ray_sphere(ray, center, hit_radius)
            }
        }
    }
}

/// Result of a gizmo handle hit test.
#[derive(Debug, Clone, Copy)]
pub struct HandleHit {
    /// Axis of the handle that was hit
    pub axis: GizmoAxis,
    /// Distance along the ray
    pub distance: f32,
    /// World-space impact point, latched as the drag anchor when a hover
    /// turns into a drag
    pub impact: Vec3,
}
