//! Camera system for 3D scene viewing.
//!
//! Provides the perspective camera, the framing policy that computes a
//! default pose from model bounds, the eased camera transition, and the
//! damped orbit/pan controller.

/// Damped orbit/pan controller with distance clamping.
pub mod controller;
/// Core perspective camera type.
pub mod core;
/// Bounding-box-driven camera framing policy.
pub mod framing;
/// Eased camera transitions between poses.
pub mod transition;

pub use controller::OrbitController;
pub use core::Camera;
pub use framing::{compute_framing_pose, CameraPose};
pub use transition::CameraTransition;
