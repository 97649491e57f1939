//! Two-finger pinch-zoom gesture handler.
//!
//! A state machine over touch-contact counts: entering a two-contact
//! sequence records the initial finger spacing and camera distance and
//! disables the orbit controller; every move with exactly two contacts maps
//! the spacing ratio to a camera-distance change (spreading the fingers
//! zooms in); dropping below two contacts re-enables the controller
//! unconditionally. Side effects are confined to the camera position and
//! the controller's `enabled` flag.

use glam::{Vec2, Vec3};

use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;

/// Pinch gesture state. Baselines are reset at the start of every
/// two-finger sequence and are meaningless while fewer than two contacts
/// are active.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PinchState {
    /// Fewer than two contacts active.
    Idle,
    /// Exactly two contacts landed; baselines recorded at entry.
    Pinching {
        /// Finger spacing when the second contact landed.
        initial_touch_distance: f32,
        /// Eye-to-target distance when the second contact landed.
        initial_camera_distance: f32,
    },
}

/// Pinch-zoom gesture handler.
#[derive(Debug)]
pub struct PinchZoom {
    state: PinchState,
}

/// Euclidean distance between the first two contacts.
fn touch_distance(touches: &[Vec2]) -> f32 {
    (touches[0] - touches[1]).length()
}

impl Default for PinchZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchZoom {
    /// Create an idle pinch handler.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PinchState::Idle,
        }
    }

    /// Whether a pinch is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, PinchState::Pinching { .. })
    }

    /// React to a change in the set of active contacts (touch start, end,
    /// or cancel).
    ///
    /// Exactly two contacts arm the gesture and disable the orbit
    /// controller; fewer than two disarm it and re-enable the controller —
    /// this also covers a fresh single-finger touchstart while the
    /// controller was left disabled.
    pub fn on_contacts_changed(
        &mut self,
        touches: &[Vec2],
        camera: &Camera,
        controls: &mut OrbitController,
    ) {
        if touches.len() == 2 {
            self.state = PinchState::Pinching {
                initial_touch_distance: touch_distance(touches),
                initial_camera_distance: camera.distance_to(controls.target),
            };
            controls.enabled = false;
        } else if touches.len() < 2 {
            self.state = PinchState::Idle;
            controls.enabled = true;
        }
        // Three or more contacts: ignored, matching the two-finger policy
    }

    /// React to contact movement while the gesture may be active.
    ///
    /// With exactly two contacts, maps `scale = current / initial` spacing
    /// to `zoom_factor = 1 / scale` so spreading the fingers decreases the
    /// camera distance. The new distance is clamped to the controller's
    /// `[min_distance, max_distance]` and applied along the existing
    /// target-to-eye direction. A zero initial spacing skips the update.
    pub fn on_move(
        &self,
        touches: &[Vec2],
        camera: &mut Camera,
        controls: &OrbitController,
    ) {
        let PinchState::Pinching {
            initial_touch_distance,
            initial_camera_distance,
        } = self.state
        else {
            return;
        };
        if touches.len() != 2 {
            return;
        }
        // Guards divide-by-zero from a degenerate start
        if initial_touch_distance == 0.0 {
            return;
        }

        let scale = touch_distance(touches) / initial_touch_distance;
        if scale <= 0.0 {
            return;
        }
        let zoom_factor = 1.0 / scale;
        let new_distance = initial_camera_distance * zoom_factor;
        let clamped =
            new_distance.clamp(controls.min_distance, controls.max_distance);

        let direction =
            (camera.eye - controls.target).normalize_or(Vec3::Z);
        camera.eye = controls.target + direction * clamped;
    }
}
