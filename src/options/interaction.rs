use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Orbit, pan, gesture, and transition tuning.
pub struct InteractionOptions {
    /// Minimum allowed eye-to-target distance.
    pub min_distance: f32,
    /// Maximum allowed eye-to-target distance.
    pub max_distance: f32,
    /// Per-frame inertia damping factor for orbit/pan momentum.
    pub damping: f32,
    /// Orbit sensitivity, radians per screen pixel.
    pub rotate_speed: f32,
    /// Pan sensitivity, world units per screen pixel.
    pub pan_speed: f32,
    /// Turntable speed when auto-rotation is on, radians per second.
    pub auto_rotate_speed: f32,
    /// Duration of eased camera transitions, in milliseconds.
    pub transition_ms: u64,
    /// Maximum spacing between taps of a double tap, in milliseconds.
    pub double_tap_ms: u64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            max_distance: 100.0,
            damping: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.01,
            auto_rotate_speed: 0.5,
            transition_ms: 1000,
            double_tap_ms: 300,
        }
    }
}
