//! Viewport collaborator contract

use glam::Vec2;

/// Pixel dimensions of the viewport being picked or dragged in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from pixel dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport size as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Aspect ratio, falling back to 1 for degenerate dimensions.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Height clamped to at least one pixel, for use as a divisor.
    pub fn clamped_height(&self) -> f32 {
        self.height.max(1.0)
    }
}
