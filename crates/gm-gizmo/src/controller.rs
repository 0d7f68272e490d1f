//! Gizmo interaction state machine

use glam::{Quat, Vec2, Vec3};

use gm_core::axis::{GizmoAxis, GizmoMode, GizmoSpace};
use gm_core::camera::Camera;
use gm_core::config::GizmoConfig;
use gm_core::viewport::Viewport;
use gm_picking::proxy::{HandleHit, HandleProxy, HandleShape};
use gm_picking::raycast;
use gm_picking::service::PickingService;

use crate::math;
use crate::session::DragSession;
use crate::target::ManipulableTarget;

/// Per-frame pointer input, polled by the host loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Cursor position in viewport pixels
    pub cursor: Vec2,
    /// Primary button held this frame
    pub primary_down: bool,
    /// Primary button released this frame
    pub primary_released: bool,
}

/// Observable state of the interaction machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    /// Nothing hovered, no drag active
    Idle,
    /// A handle is under the cursor, updated every frame
    Hovering,
    /// One axis locked, drag session active
    Dragging,
}

/// Interactive transform gizmo controller.
///
/// Driven once per frame from the host loop. While no drag is active the
/// controller hover-tests the current mode's handles under the cursor;
/// a primary-button press over a handle locks that axis and opens a
/// [`DragSession`] snapshot. Each dragging frame recomputes the transform
/// from the **total** cursor offset since drag start, so the result is
/// independent of frame rate and intermediate cursor paths. Release
/// discards the session and returns to idle.
pub struct GizmoController {
    mode: GizmoMode,
    space: GizmoSpace,
    config: GizmoConfig,
    picking: PickingService,
    hovered_axis: GizmoAxis,
    hover_impact: Vec3,
    session: Option<DragSession>,
    primary_was_down: bool,
}

impl GizmoController {
    /// Create a controller with default configuration.
    pub fn new() -> Self {
        Self::with_config(GizmoConfig::default())
    }

    /// Create a controller with explicit configuration.
    pub fn with_config(config: GizmoConfig) -> Self {
        Self {
            mode: GizmoMode::Translate,
            space: GizmoSpace::World,
            config,
            picking: PickingService::new(),
            hovered_axis: GizmoAxis::None,
            hover_impact: Vec3::ZERO,
            session: None,
            primary_was_down: false,
        }
    }

    /// Current manipulation mode.
    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    /// Set the manipulation mode. Refused while a drag is active so the
    /// locked axis cannot be reinterpreted mid-drag.
    pub fn set_mode(&mut self, mode: GizmoMode) {
        if self.session.is_none() {
            self.mode = mode;
            self.hovered_axis = GizmoAxis::None;
        }
    }

    /// Current coordinate space.
    pub fn space(&self) -> GizmoSpace {
        self.space
    }

    /// Set the coordinate space. Refused while a drag is active.
    pub fn set_space(&mut self, space: GizmoSpace) {
        if self.session.is_none() {
            self.space = space;
            self.hovered_axis = GizmoAxis::None;
        }
    }

    /// Axis currently hovered or locked by an active drag.
    pub fn hovered_axis(&self) -> GizmoAxis {
        self.hovered_axis
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// World-space point where the active drag grabbed its handle, latched
    /// at drag start. `None` while no drag is active. Hosts use this to
    /// render drag feedback at the grab point.
    pub fn drag_anchor(&self) -> Option<Vec3> {
        self.session.as_ref().map(|s| s.impact_point)
    }

    /// Observable interaction state.
    pub fn state(&self) -> InteractionState {
        if self.session.is_some() {
            InteractionState::Dragging
        } else if self.hovered_axis != GizmoAxis::None {
            InteractionState::Hovering
        } else {
            InteractionState::Idle
        }
    }

    /// Picking service used for hover evaluation, exposed for its
    /// diagnostic counters.
    pub fn picking(&self) -> &PickingService {
        &self.picking
    }

    /// Active configuration.
    pub fn config(&self) -> &GizmoConfig {
        &self.config
    }

    /// Discard any in-flight drag and return to idle.
    ///
    /// Collaborators must call this when the manipulated target is
    /// deselected or destroyed externally; the controller cannot detect
    /// that on its own.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("drag cancelled");
        }
        self.hovered_axis = GizmoAxis::None;
    }

    /// Advance the state machine by one frame.
    ///
    /// A missing camera or target is a no-op frame: the machine does not
    /// advance and no transform is mutated. The controller cannot tell a
    /// deselection from a frame without a target, so external deselection
    /// must be signalled through [`cancel`](Self::cancel).
    pub fn update(
        &mut self,
        input: &FrameInput,
        camera: Option<&Camera>,
        viewport: Viewport,
        target: Option<&mut dyn ManipulableTarget>,
    ) {
        let (Some(camera), Some(target)) = (camera, target) else {
            return;
        };

        if self.session.is_some() {
            if input.primary_released || !input.primary_down {
                self.end_drag();
            } else {
                self.apply_drag(camera, viewport, input.cursor, target);
            }
            self.primary_was_down = input.primary_down;
            return;
        }

        // Hover evaluation runs only while not dragging, so the locked axis
        // can never be reassigned mid-drag.
        self.evaluate_hover(camera, viewport, input.cursor, target);

        // Only a press that lands this frame starts a drag; a button held
        // since before the cursor reached the handle does not.
        let pressed = input.primary_down && !self.primary_was_down;
        if pressed && self.hovered_axis != GizmoAxis::None {
            self.begin_drag(input.cursor, camera, target);
        }
        self.primary_was_down = input.primary_down;
    }

    fn evaluate_hover(
        &mut self,
        camera: &Camera,
        viewport: Viewport,
        cursor: Vec2,
        target: &dyn ManipulableTarget,
    ) {
        let ray = raycast::ray_from_camera(camera, cursor, viewport);
        let handles = self.build_handles(target.location(), target.rotation(), camera);

        let mut best: Option<HandleHit> = None;
        for proxy in &handles {
            if let Some(hit) = self.picking.check_gizmo_handle(proxy, &ray)
                && hit.distance > 0.0
                && best.as_ref().is_none_or(|b| hit.distance < b.distance)
            {
                best = Some(hit);
            }
        }

        match best {
            Some(hit) => {
                if self.hovered_axis != hit.axis {
                    tracing::debug!(axis = ?hit.axis, "handle hovered");
                }
                self.hovered_axis = hit.axis;
                // Latched as the drag anchor if this hover becomes a drag
                self.hover_impact = hit.impact;
            }
            None => {
                self.hovered_axis = GizmoAxis::None;
            }
        }
    }

    fn begin_drag(&mut self, cursor: Vec2, camera: &Camera, target: &dyn ManipulableTarget) {
        let axis = self.hovered_axis;
        let rotation = target.rotation();

        // The rotation tangent is computed once here and cached; every
        // dragging frame reads it from the session.
        let rotate_screen_vec = if self.mode == GizmoMode::Rotate {
            let rotation_axis = self.handle_axis_dir(axis, rotation);
            math::rotate_screen_vec(
                rotation_axis,
                target.location(),
                self.hover_impact,
                camera.right(),
                camera.view_up(),
            )
        } else {
            Vec2::ZERO
        };

        self.session = Some(DragSession {
            axis,
            start_location: target.location(),
            start_rotation: rotation,
            start_scale: target.scale(),
            start_cursor: cursor,
            impact_point: self.hover_impact,
            rotate_screen_vec,
        });
        tracing::debug!(axis = ?axis, mode = ?self.mode, "drag started");
    }

    fn apply_drag(
        &self,
        camera: &Camera,
        viewport: Viewport,
        cursor: Vec2,
        target: &mut dyn ManipulableTarget,
    ) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        // Total offset since drag start; never a frame-to-frame delta, so
        // floating-point error cannot accumulate across frames.
        let offset = cursor - session.start_cursor;

        match self.mode {
            GizmoMode::Translate | GizmoMode::Scale => {
                let axis_dir = self.handle_axis_dir(session.axis, session.start_rotation);
                let screen_dir =
                    math::stable_axis_screen_dir(axis_dir, camera.right(), camera.view_up());

                let proj = camera.projection_matrix(viewport.aspect());
                let depth = (session.start_location - camera.position).dot(camera.forward());
                let world_per_pixel = math::world_per_pixel(
                    &proj,
                    viewport.clamped_height(),
                    depth,
                    self.config.interaction.min_drag_depth,
                );
                let movement = offset.dot(screen_dir) * world_per_pixel;

                if self.mode == GizmoMode::Translate {
                    target.set_location(session.start_location + axis_dir * movement);
                } else {
                    let mut scale = session.start_scale;
                    scale[Self::scale_component(session.axis)] += movement;
                    target.set_scale(scale);
                }
            }
            GizmoMode::Rotate => {
                let angle = offset.dot(session.rotate_screen_vec)
                    * self.config.interaction.rotate_radians_per_pixel;
                let rotation_axis = self.handle_axis_dir(session.axis, session.start_rotation);
                let delta = Quat::from_axis_angle(rotation_axis, angle);
                // Delta always pre-multiplies the drag-start orientation so
                // the rotation stays expressed in the frame captured at
                // drag start.
                target.set_rotation(delta * session.start_rotation);
            }
        }
    }

    fn end_drag(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(axis = ?session.axis, "drag ended");
        }
        self.hovered_axis = GizmoAxis::None;
    }

    /// Resolve the 3D direction of a handle axis.
    ///
    /// Scale always resolves in the target's local frame regardless of the
    /// configured space; translate and rotate follow the space setting.
    fn handle_axis_dir(&self, axis: GizmoAxis, rotation: Quat) -> Vec3 {
        let basis = axis.basis();
        match self.mode {
            GizmoMode::Scale => rotation * basis,
            GizmoMode::Translate | GizmoMode::Rotate => match self.space {
                GizmoSpace::World => basis,
                GizmoSpace::Local => rotation * basis,
            },
        }
    }

    fn scale_component(axis: GizmoAxis) -> usize {
        match axis {
            GizmoAxis::None | GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    fn build_handles(&self, location: Vec3, rotation: Quat, camera: &Camera) -> [HandleProxy; 3] {
        let handles = &self.config.handles;
        let scale = handles.gizmo_scale((camera.position - location).length());

        GizmoAxis::PICKABLE.map(|axis| {
            let dir = self.handle_axis_dir(axis, rotation);
            let shape = match self.mode {
                GizmoMode::Translate => HandleShape::Arrow {
                    start: location,
                    dir,
                    length: handles.arrow_length * scale,
                    radius: handles.arrow_hit_radius * scale,
                },
                GizmoMode::Rotate => HandleShape::Ring {
                    center: location,
                    normal: dir,
                    radius: handles.ring_radius * scale,
                    thickness: handles.ring_hit_thickness * scale,
                },
                GizmoMode::Scale => HandleShape::Cube {
                    center: location + dir * (handles.scale_cube_offset * scale),
                    hit_radius: handles.scale_cube_hit_radius * scale,
                },
            };
            HandleProxy { axis, shape }
        })
    }
}

impl Default for GizmoController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TransformTarget;
    use approx::assert_relative_eq;
    use glam::Vec4Swizzles;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    /// Camera at (10, 0, 0) looking down -X at the origin; right = +Y,
    /// view up = +Z.
    fn side_camera() -> Camera {
        let mut camera = Camera::new();
        camera.target = Vec3::ZERO;
        camera.yaw = 0.0;
        camera.pitch = 0.0;
        camera.distance = 10.0;
        camera.orbit(0.0, 0.0); // refresh position
        camera
    }

    fn world_to_screen(camera: &Camera, viewport: Viewport, point: Vec3) -> Vec2 {
        let clip =
            camera.projection_matrix(viewport.aspect()) * camera.view_matrix() * point.extend(1.0);
        let ndc = clip.xyz() / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc.y) * 0.5 * viewport.height,
        )
    }

    fn hover_frame(cursor: Vec2) -> FrameInput {
        FrameInput {
            cursor,
            primary_down: false,
            primary_released: false,
        }
    }

    fn press_frame(cursor: Vec2) -> FrameInput {
        FrameInput {
            cursor,
            primary_down: true,
            primary_released: false,
        }
    }

    fn release_frame(cursor: Vec2) -> FrameInput {
        FrameInput {
            cursor,
            primary_down: false,
            primary_released: true,
        }
    }

    fn expected_world_per_pixel(camera: &Camera, depth: f32) -> f32 {
        let proj = camera.projection_matrix(VIEWPORT.aspect());
        math::world_per_pixel(&proj, VIEWPORT.height, depth, 1.0)
    }

    #[test]
    fn test_hover_sets_axis_and_state() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        // Mid-point of the Y translate arrow
        let cursor = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(cursor),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        assert_eq!(controller.hovered_axis(), GizmoAxis::Y);
        assert_eq!(controller.state(), InteractionState::Hovering);
    }

    #[test]
    fn test_hover_clears_off_handles() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let on_handle = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(on_handle),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.state(), InteractionState::Hovering);

        controller.update(
            &hover_frame(Vec2::new(10.0, 10.0)),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.hovered_axis(), GizmoAxis::None);
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_release_without_drag_leaves_transform_unchanged() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let before = target;
        let mut controller = GizmoController::new();

        controller.update(
            &release_frame(Vec2::new(10.0, 10.0)),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        assert_eq!(target, before);
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_held_button_swept_onto_handle_does_not_drag() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        // Button goes down away from any handle
        controller.update(
            &press_frame(Vec2::new(10.0, 10.0)),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(!controller.is_dragging());

        // Cursor sweeps onto the Y arrow while the button stays held
        let on_handle = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &press_frame(on_handle),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.state(), InteractionState::Hovering);
        assert!(!controller.is_dragging());

        // A fresh press over the handle does start a drag
        controller.update(
            &release_frame(on_handle),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(on_handle),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_translate_drag_matches_world_per_pixel() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());

        // The anchor is latched on the arrow surface near the grab point
        let anchor = controller.drag_anchor().unwrap();
        assert_relative_eq!(anchor.y, 0.75, epsilon = 0.1);

        // World +Y projects to screen +x for this camera, so drag right
        let offset = Vec2::new(50.0, 0.0);
        controller.update(
            &press_frame(start + offset),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        let wpp = expected_world_per_pixel(&camera, 10.0);
        assert_relative_eq!(target.location.y, 50.0 * wpp, epsilon = 1e-4);
        assert_relative_eq!(target.location.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.location.z, 0.0, epsilon = 1e-5);

        controller.update(
            &release_frame(start + offset),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(!controller.is_dragging());
        assert_relative_eq!(target.location.y, 50.0 * wpp, epsilon = 1e-4);
    }

    #[test]
    fn test_translate_drag_is_path_independent() {
        let camera = side_camera();
        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        let total = Vec2::new(120.0, -35.0);

        let drag = |steps: u32| -> TransformTarget {
            let mut target = TransformTarget::new();
            let mut controller = GizmoController::new();
            controller.update(
                &hover_frame(start),
                Some(&camera),
                VIEWPORT,
                Some(&mut target),
            );
            controller.update(
                &press_frame(start),
                Some(&camera),
                VIEWPORT,
                Some(&mut target),
            );
            for i in 1..=steps {
                // Deliberately non-linear path; only the endpoint matters
                let jitter = if i % 2 == 0 { 13.0 } else { -7.0 };
                let fraction = i as f32 / steps as f32;
                let cursor = start + total * fraction + Vec2::new(0.0, jitter * (1.0 - fraction));
                controller.update(
                    &press_frame(cursor),
                    Some(&camera),
                    VIEWPORT,
                    Some(&mut target),
                );
            }
            target
        };

        let one_step = drag(1);
        let many_steps = drag(7);
        assert_relative_eq!(one_step.location.y, many_steps.location.y, epsilon = 1e-5);
        assert_relative_eq!(one_step.location.x, many_steps.location.x, epsilon = 1e-5);
        assert_relative_eq!(one_step.location.z, many_steps.location.z, epsilon = 1e-5);
    }

    #[test]
    fn test_translate_drag_roll_invariant() {
        // Rolling the camera 90 degrees about its forward axis rotates the
        // screen basis; an equivalent screen-space drag must produce the
        // same world displacement.
        let camera = side_camera();
        let mut rolled = side_camera();
        rolled.up = Vec3::Y; // right becomes -Z, view up becomes +Y

        let drag = |camera: &Camera, offset: Vec2| -> TransformTarget {
            let mut target = TransformTarget::new();
            let mut controller = GizmoController::new();
            let start = world_to_screen(camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
            controller.update(
                &hover_frame(start),
                Some(camera),
                VIEWPORT,
                Some(&mut target),
            );
            controller.update(
                &press_frame(start),
                Some(camera),
                VIEWPORT,
                Some(&mut target),
            );
            assert!(controller.is_dragging());
            controller.update(
                &press_frame(start + offset),
                Some(camera),
                VIEWPORT,
                Some(&mut target),
            );
            target
        };

        // World +Y maps to screen +x unrolled and to screen -y rolled
        let unrolled = drag(&camera, Vec2::new(50.0, 0.0));
        let after_roll = drag(&rolled, Vec2::new(0.0, -50.0));
        assert_relative_eq!(unrolled.location.y, after_roll.location.y, epsilon = 1e-4);
        assert!(unrolled.location.y > 0.0);
    }

    #[test]
    fn test_rotate_drag_fixed_sensitivity() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();
        controller.set_mode(GizmoMode::Rotate);

        // Grab the X ring at its topmost point (0, 1.5, 0): rotation
        // tangent there is +Z, which projects to screen (0, -1)
        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 1.5, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.hovered_axis(), GizmoAxis::X);
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        // Move exactly parallel to the cached drag screen vector
        let length = 80.0;
        let cursor = start + Vec2::new(0.0, -length);
        controller.update(
            &press_frame(cursor),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        let expected = Quat::from_axis_angle(Vec3::X, length * 0.005);
        assert_relative_eq!(target.rotation.angle_between(expected), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_scale_world_space_still_resolves_local_axis() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        // Local Y points along world +Z after this rotation
        target.rotation = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);

        let mut controller = GizmoController::new();
        controller.set_mode(GizmoMode::Scale);
        controller.set_space(GizmoSpace::World);

        // The Y scale cube sits at the rotated local Y axis end, world
        // (0, 0, 1.5), even though Space is World: the documented quirk
        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.0, 1.5));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.hovered_axis(), GizmoAxis::Y);
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        // Local Y (world +Z) projects to screen (0, -1); drag along it
        let offset = Vec2::new(0.0, -60.0);
        controller.update(
            &press_frame(start + offset),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        let wpp = expected_world_per_pixel(&camera, 10.0);
        assert_relative_eq!(target.scale.y, 1.0 + 60.0 * wpp, epsilon = 1e-4);
        assert_relative_eq!(target.scale.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(target.scale.z, 1.0, epsilon = 1e-5);
        // Location and rotation untouched by a scale drag
        assert_eq!(target.location, Vec3::ZERO);
    }

    #[test]
    fn test_cancel_discards_drag() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());

        // The selection provider deselected the target externally
        controller.cancel();
        assert!(!controller.is_dragging());
        assert_eq!(controller.state(), InteractionState::Idle);

        // Held button away from any handle mutates nothing
        let before = target;
        controller.update(
            &press_frame(Vec2::new(10.0, 10.0)),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(target, before);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_missing_target_is_a_noop() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());

        // A frame without a target does not advance the machine
        controller.update(&press_frame(start), Some(&camera), VIEWPORT, None);
        assert!(controller.is_dragging());
    }

    #[test]
    fn test_missing_camera_is_a_noop() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());

        let before = target;
        controller.update(
            &press_frame(start + Vec2::new(40.0, 0.0)),
            None,
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());
        assert_eq!(target, before);
    }

    #[test]
    fn test_mode_and_space_locked_while_dragging() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        let mut controller = GizmoController::new();

        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.75, 0.0));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert!(controller.is_dragging());

        controller.set_mode(GizmoMode::Rotate);
        controller.set_space(GizmoSpace::Local);
        assert_eq!(controller.mode(), GizmoMode::Translate);
        assert_eq!(controller.space(), GizmoSpace::World);
    }

    #[test]
    fn test_local_space_translate_follows_target_rotation() {
        let camera = side_camera();
        let mut target = TransformTarget::new();
        // Local Y points along world +Z
        target.rotation = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);

        let mut controller = GizmoController::new();
        controller.set_space(GizmoSpace::Local);

        // The local Y arrow now runs along world +Z
        let start = world_to_screen(&camera, VIEWPORT, Vec3::new(0.0, 0.0, 0.75));
        controller.update(
            &hover_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );
        assert_eq!(controller.hovered_axis(), GizmoAxis::Y);
        controller.update(
            &press_frame(start),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        let offset = Vec2::new(0.0, -45.0);
        controller.update(
            &press_frame(start + offset),
            Some(&camera),
            VIEWPORT,
            Some(&mut target),
        );

        let wpp = expected_world_per_pixel(&camera, 10.0);
        assert_relative_eq!(target.location.z, 45.0 * wpp, epsilon = 1e-4);
        assert_relative_eq!(target.location.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target.location.y, 0.0, epsilon = 1e-5);
    }
}
