//! Shared utilities for the viewer.
//!
//! Helpers for easing curves and frame timing.

pub mod easing;
pub mod frame_timing;
