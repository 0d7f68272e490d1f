//! Orbit camera for the 3D viewport

use glam::{Mat4, Vec3};

/// Projection type for the viewport camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in radians
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
    },
    /// Orthographic projection with a vertical half-extent in world units
    Orthographic {
        /// Half of the world-space height visible in the viewport
        half_height: f32,
    },
}

/// Orbit camera.
///
/// Position is derived from yaw/pitch/distance around a target point so the
/// camera can be orbited, panned, and zoomed by the host viewport. The
/// world up axis is +Z.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera world position
    pub position: Vec3,
    /// Orbit target
    pub target: Vec3,
    /// World up axis
    pub up: Vec3,
    /// Projection type and parameters
    pub projection: Projection,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Orbit yaw in radians
    pub yaw: f32,
    /// Orbit pitch in radians
    pub pitch: f32,
    /// Orbit distance
    pub distance: f32,
}

impl Camera {
    /// Create a camera with default orbit parameters.
    pub fn new() -> Self {
        let yaw = 45.0_f32.to_radians();
        let pitch = 30.0_f32.to_radians();
        let distance = 5.0;
        let target = Vec3::ZERO;

        let mut camera = Self {
            position: Vec3::ZERO,
            target,
            up: Vec3::Z,
            projection: Projection::Perspective {
                fov_y: 40.0_f32.to_radians(),
            },
            near: 0.1,
            far: 100000.0,
            yaw,
            pitch,
            distance,
        };
        camera.update_position_from_orbit();
        camera
    }

    /// Orbit the camera around the target.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch =
            (self.pitch + delta_pitch).clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
        self.update_position_from_orbit();
    }

    /// Pan the camera by moving the orbit target.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let right = self.right();
        let up = self.view_up();

        let scale = self.distance * 0.002;
        self.target += right * (-delta_x * scale) + up * (delta_y * scale);
        self.update_position_from_orbit();
    }

    /// Zoom the camera toward or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * 0.1)).clamp(0.1, 10000.0);
        if let Projection::Orthographic { half_height } = &mut self.projection {
            *half_height = (*half_height * (1.0 - delta * 0.1)).clamp(0.01, 10000.0);
        }
        self.update_position_from_orbit();
    }

    /// Fit the camera to show the given bounding sphere.
    pub fn fit_all(&mut self, center: Vec3, radius: f32) {
        self.target = center;
        self.distance = (radius * 2.5).max(1.0);
        self.update_position_from_orbit();
    }

    /// Set to top view.
    pub fn set_top_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = 89.0_f32.to_radians();
        self.update_position_from_orbit();
    }

    /// Set to front view.
    pub fn set_front_view(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.update_position_from_orbit();
    }

    /// Set to side view.
    pub fn set_side_view(&mut self) {
        self.yaw = 90.0_f32.to_radians();
        self.pitch = 0.0;
        self.update_position_from_orbit();
    }

    fn update_position_from_orbit(&mut self) {
        let x = self.distance * self.pitch.cos() * self.yaw.cos();
        let y = self.distance * self.pitch.cos() * self.yaw.sin();
        let z = self.distance * self.pitch.sin();
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Unit vector from the camera toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Unit vector pointing right in view space.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Unit vector pointing up in view space (orthogonal to forward and
    /// right, unlike the world up axis when the camera is pitched).
    pub fn view_up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// View matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        match self.projection {
            Projection::Perspective { fov_y } => {
                Mat4::perspective_rh(fov_y, aspect, self.near, self.far)
            }
            Projection::Orthographic { half_height } => {
                let half_width = half_height * aspect;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
