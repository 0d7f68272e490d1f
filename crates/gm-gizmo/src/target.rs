//! Manipulable target collaborator contract

use glam::{Quat, Vec3};

/// A scene object whose transform the gizmo may mutate.
///
/// The target's transform is owned by its external entity; the controller
/// only writes to it while a drag is active. The selection provider hands
/// the controller at most one target per frame ("currently selected"),
/// expressed as `Option<&mut dyn ManipulableTarget>`.
pub trait ManipulableTarget {
    /// World-space location.
    fn location(&self) -> Vec3;
    /// Set the world-space location.
    fn set_location(&mut self, location: Vec3);
    /// World-space orientation.
    fn rotation(&self) -> Quat;
    /// Set the world-space orientation.
    fn set_rotation(&mut self, rotation: Quat);
    /// Per-axis scale in the target's local frame.
    fn scale(&self) -> Vec3;
    /// Set the per-axis scale.
    fn set_scale(&mut self, scale: Vec3);
}

/// Plain transform value implementing [`ManipulableTarget`], for tests and
/// hosts that keep transforms as data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTarget {
    /// World-space location
    pub location: Vec3,
    /// World-space orientation
    pub rotation: Quat,
    /// Per-axis local scale
    pub scale: Vec3,
}

impl TransformTarget {
    /// Identity transform at the origin.
    pub fn new() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Default for TransformTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ManipulableTarget for TransformTarget {
    fn location(&self) -> Vec3 {
        self.location
    }

    fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}
