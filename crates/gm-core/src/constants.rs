//! Default gizmo handle dimensions
//!
//! All lengths are in gizmo-local units and are multiplied by the
//! distance-based gizmo scale before hit testing.

/// Translate arrow length
pub const ARROW_LENGTH: f32 = 1.0;

/// Hit-test radius around a translate arrow shaft
pub const ARROW_HIT_RADIUS: f32 = 0.08;

/// Rotation ring radius
pub const RING_RADIUS: f32 = 1.0;

/// Hit-test band half-width around a rotation ring
pub const RING_HIT_THICKNESS: f32 = 0.1;

/// Distance from the gizmo origin to a scale cube center
pub const SCALE_CUBE_OFFSET: f32 = 1.0;

/// Hit-test radius of a scale cube (sphere approximation)
pub const SCALE_CUBE_HIT_RADIUS: f32 = 0.12;

/// Gizmo scale per world unit of camera distance, so the gizmo keeps a
/// roughly constant screen size
pub const SCREEN_SCALE_FACTOR: f32 = 0.15;

/// Lower clamp for the distance-based gizmo scale
pub const MIN_GIZMO_SCALE: f32 = 0.1;

/// Upper clamp for the distance-based gizmo scale
pub const MAX_GIZMO_SCALE: f32 = 10.0;

/// Rotation sensitivity in radians per pixel of screen-space drag
pub const ROTATE_RADIANS_PER_PIXEL: f32 = 0.005;

/// Minimum perspective depth used for pixel-to-world conversion, guarding
/// the near-camera singularity
pub const MIN_DRAG_DEPTH: f32 = 1.0;
