//! Core math and domain types for viewport gizmo manipulation
//!
//! This crate holds the pure, dependency-light pieces shared by the picking
//! and interaction crates:
//!
//! - [`ray::Ray`] - World-space ray for picking queries
//! - [`intersect`] - Closed-form ray/primitive intersection tests
//! - [`camera::Camera`] - Orbit camera with perspective and orthographic
//!   projection
//! - [`axis`] - Axis / mode / space tagged unions
//! - [`config`] - Serializable handle and interaction settings
//!
//! Everything here is a pure function or a plain value type; there is no
//! GPU, UI, or scene-graph coupling.

pub mod axis;
pub mod camera;
pub mod config;
pub mod constants;
pub mod intersect;
pub mod ray;
pub mod viewport;

pub use axis::{GizmoAxis, GizmoMode, GizmoSpace};
pub use camera::{Camera, Projection};
pub use config::{ConfigError, GizmoConfig, HandleConfig, InteractionConfig};
pub use ray::Ray;
pub use viewport::Viewport;
