//! Gizmo configuration structures
//!
//! Configurable handle geometry and interaction settings that can be
//! serialized and loaded from RON configuration files.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Handle geometry configuration, in gizmo-local units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleConfig {
    /// Translate arrow length
    pub arrow_length: f32,
    /// Hit-test radius around an arrow shaft
    pub arrow_hit_radius: f32,
    /// Rotation ring radius
    pub ring_radius: f32,
    /// Hit-test band half-width around a ring
    pub ring_hit_thickness: f32,
    /// Distance from gizmo origin to a scale cube center
    pub scale_cube_offset: f32,
    /// Hit-test radius of a scale cube
    pub scale_cube_hit_radius: f32,
    /// Gizmo scale per world unit of camera distance
    pub screen_scale_factor: f32,
    /// Clamp range for the distance-based gizmo scale
    pub scale_range: (f32, f32),
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            arrow_length: constants::ARROW_LENGTH,
            arrow_hit_radius: constants::ARROW_HIT_RADIUS,
            ring_radius: constants::RING_RADIUS,
            ring_hit_thickness: constants::RING_HIT_THICKNESS,
            scale_cube_offset: constants::SCALE_CUBE_OFFSET,
            scale_cube_hit_radius: constants::SCALE_CUBE_HIT_RADIUS,
            screen_scale_factor: constants::SCREEN_SCALE_FACTOR,
            scale_range: (constants::MIN_GIZMO_SCALE, constants::MAX_GIZMO_SCALE),
        }
    }
}

impl HandleConfig {
    /// Distance-based gizmo scale for a camera at `camera_distance` from the
    /// gizmo origin, clamped to the configured range.
    pub fn gizmo_scale(&self, camera_distance: f32) -> f32 {
        let (min, max) = self.scale_range;
        (camera_distance * self.screen_scale_factor).clamp(min, max)
    }
}

/// Drag interaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// Rotation sensitivity in radians per pixel
    pub rotate_radians_per_pixel: f32,
    /// Minimum perspective depth for pixel-to-world conversion
    pub min_drag_depth: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            rotate_radians_per_pixel: constants::ROTATE_RADIANS_PER_PIXEL,
            min_drag_depth: constants::MIN_DRAG_DEPTH,
        }
    }
}

/// Complete gizmo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Handle geometry settings
    pub handles: HandleConfig,
    /// Drag interaction settings
    pub interaction: InteractionConfig,
}

impl GizmoConfig {
    /// Serialize to a RON string.
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Deserialize from a RON string.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Save to a RON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let text = self.to_ron()?;
        std::fs::write(path, text).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Load from a RON file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&text)
    }
}

/// Configuration persistence errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// File IO failed
    #[error("IO error: {0}")]
    Io(String),
    /// RON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(String),
    /// RON deserialization failed
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
