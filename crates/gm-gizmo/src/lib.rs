//! Interactive transform gizmo for a 3D editor viewport
//!
//! The gizmo lets a user translate, rotate, and scale a selected object by
//! dragging axis handles. This crate owns the interaction logic:
//!
//! - [`controller::GizmoController`] - Per-frame hover / drag state machine,
//!   driven by the host loop with polled pointer input
//! - [`target::ManipulableTarget`] - The transform the controller mutates,
//!   implemented by whatever the host selects
//! - [`math`] - Screen-space drag math: stable axis projection,
//!   world-units-per-pixel, rotation tangents
//!
//! Drag math always works from the total cursor offset since drag start
//! against an immutable snapshot of the target's transform, so dragging is
//! frame-rate independent and accumulates no floating-point drift.

pub mod controller;
pub mod math;
mod session;
pub mod target;

pub use controller::{FrameInput, GizmoController, InteractionState};
pub use target::{ManipulableTarget, TransformTarget};
