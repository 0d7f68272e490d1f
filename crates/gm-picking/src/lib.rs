//! Ray building and picking orchestration
//!
//! This crate turns 2D cursor positions into world-space rays and runs them
//! against scene objects and gizmo handle proxies:
//!
//! - [`raycast`] - Cursor-to-ray construction, including the
//!   viewport-relative path for split-viewport layouts
//! - [`proxy`] - Collision collaborators: the [`proxy::Pickable`] trait for
//!   scene objects and [`proxy::HandleProxy`] for gizmo handle geometry
//! - [`service::PickingService`] - Closest-hit orchestration with
//!   diagnostic counters

pub mod proxy;
pub mod raycast;
pub mod service;

pub use proxy::{HandleHit, HandleProxy, HandleShape, Pickable, SphereCollider, TriMeshCollider};
pub use service::PickingService;
