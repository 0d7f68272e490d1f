//! Gizmo axis, mode, and coordinate space

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Manipulation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GizmoMode {
    /// Move the target along a locked axis
    #[default]
    Translate,
    /// Rotate the target about a locked axis
    Rotate,
    /// Scale the target along a locked axis
    Scale,
}

/// Gizmo coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GizmoSpace {
    /// Axes aligned to the world basis
    #[default]
    World,
    /// Axes follow the target's rotation
    Local,
}

/// Which axis is hovered or locked for a drag.
///
/// `None` is the only legal value when nothing is hovered and no drag is
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GizmoAxis {
    /// No axis hovered or locked
    #[default]
    None,
    /// X axis
    X,
    /// Y axis
    Y,
    /// Z axis
    Z,
}

impl GizmoAxis {
    /// Component index into a scale vector. `None` maps to -1.
    pub fn index(&self) -> i32 {
        match self {
            GizmoAxis::None => -1,
            GizmoAxis::X => 0,
            GizmoAxis::Y => 1,
            GizmoAxis::Z => 2,
        }
    }

    /// Canonical basis vector for this axis.
    ///
    /// `None` falls back to X so that drag math downstream of a stale axis
    /// selection stays on a defined branch instead of producing a zero axis.
    pub fn basis(&self) -> Vec3 {
        match self {
            GizmoAxis::None | GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }

    /// The three pickable axes, in hover evaluation order.
    pub const PICKABLE: [GizmoAxis; 3] = [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z];
}
