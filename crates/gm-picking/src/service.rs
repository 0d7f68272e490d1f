//! Closest-hit picking orchestration

use std::time::{Duration, Instant};

use glam::Vec2;
use uuid::Uuid;

use gm_core::camera::Camera;
use gm_core::ray::Ray;
use gm_core::viewport::Viewport;

use crate::proxy::{HandleHit, HandleProxy, Pickable};
use crate::raycast;

/// Orchestrates rays against candidate objects and gizmo handle proxies,
/// returning the closest positive hit.
///
/// Ties are broken by candidate iteration order: the first candidate in the
/// supplied slice wins under an exact distance tie, which keeps results
/// reproducible for a stable candidate ordering.
///
/// The service keeps monotonic diagnostic counters (total picks performed,
/// last and cumulative pick duration). They are a side channel for
/// observability and never influence pick results.
#[derive(Debug, Default)]
pub struct PickingService {
    picks_total: u64,
    last_pick: Duration,
    total_pick: Duration,
}

impl PickingService {
    /// Create a service with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the closest candidate under the viewport center.
    pub fn perform_picking(
        &mut self,
        candidates: &[&dyn Pickable],
        camera: &Camera,
        viewport: Viewport,
    ) -> Option<Uuid> {
        let ray = raycast::ray_from_camera(camera, viewport.size() * 0.5, viewport);
        self.pick_closest(candidates, &ray)
    }

    /// Pick the closest candidate under a cursor inside a sub-viewport,
    /// with the aspect ratio taken from the viewport rectangle.
    pub fn perform_viewport_picking(
        &mut self,
        candidates: &[&dyn Pickable],
        camera: &Camera,
        fov_y: f32,
        cursor: Vec2,
        viewport_size: Vec2,
        viewport_offset: Vec2,
    ) -> Option<Uuid> {
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return None;
        }
        let ray = raycast::ray_from_viewport(
            camera.position,
            camera.right(),
            camera.view_up(),
            camera.forward(),
            fov_y,
            cursor,
            viewport_size,
            viewport_offset,
        );
        self.pick_closest(candidates, &ray)
    }

    /// Sub-viewport pick with an explicit aspect ratio, for viewports whose
    /// rectangle does not match the render target's native aspect.
    #[allow(clippy::too_many_arguments)]
    pub fn perform_viewport_picking_with_aspect(
        &mut self,
        candidates: &[&dyn Pickable],
        camera: &Camera,
        fov_y: f32,
        cursor: Vec2,
        viewport_size: Vec2,
        viewport_offset: Vec2,
        aspect: f32,
    ) -> Option<Uuid> {
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return None;
        }
        let ray = raycast::ray_from_viewport_with_aspect(
            camera.position,
            camera.right(),
            camera.view_up(),
            camera.forward(),
            fov_y,
            cursor,
            viewport_size,
            viewport_offset,
            aspect,
        );
        self.pick_closest(candidates, &ray)
    }

    /// Test one candidate against a ray, delegating to its own collision
    /// collaborator.
    pub fn check_actor_picking(&self, target: &dyn Pickable, ray: &Ray) -> Option<f32> {
        target.test_ray(ray)
    }

    /// Test one gizmo handle proxy, returning distance and the world-space
    /// impact point used as the drag anchor.
    pub fn check_gizmo_handle(&self, proxy: &HandleProxy, ray: &Ray) -> Option<HandleHit> {
        proxy.test_ray(ray).map(|distance| HandleHit {
            axis: proxy.axis,
            distance,
            impact: ray.point_at(distance),
        })
    }

    fn pick_closest(&mut self, candidates: &[&dyn Pickable], ray: &Ray) -> Option<Uuid> {
        let started = Instant::now();

        let mut closest: Option<(Uuid, f32)> = None;
        for candidate in candidates {
            if let Some(t) = candidate.test_ray(ray)
                && t > 0.0
                && closest.is_none_or(|(_, best)| t < best)
            {
                closest = Some((candidate.id(), t));
            }
        }

        let elapsed = started.elapsed();
        self.picks_total += 1;
        self.last_pick = elapsed;
        self.total_pick += elapsed;
        tracing::trace!(
            candidates = candidates.len(),
            hit = closest.is_some(),
            elapsed_us = elapsed.as_micros() as u64,
            "pick"
        );

        closest.map(|(id, _)| id)
    }

    /// Total number of picks performed.
    pub fn picks_total(&self) -> u64 {
        self.picks_total
    }

    /// Duration of the most recent pick.
    pub fn last_pick_duration(&self) -> Duration {
        self.last_pick
    }

    /// Cumulative duration of all picks.
    pub fn total_pick_duration(&self) -> Duration {
        self.total_pick
    }
}
