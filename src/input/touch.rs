use glam::Vec2;
use rustc_hash::FxHashMap;

use super::event::TouchPhase;

/// Tracks the set of active touch contacts by platform id.
///
/// Also remembers whether the current touch sequence ever reached two
/// simultaneous contacts, so tap classification can ignore the finger lifts
/// that end a pinch.
#[derive(Debug, Default)]
pub struct TouchTracker {
    contacts: FxHashMap<u64, Vec2>,
    multi_touch_seen: bool,
}

impl TouchTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a contact change. Returns the number of contacts now active.
    pub fn apply(&mut self, id: u64, phase: TouchPhase, position: Vec2) -> usize {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                let _ = self.contacts.insert(id, position);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let _ = self.contacts.remove(&id);
            }
        }
        if self.contacts.len() >= 2 {
            self.multi_touch_seen = true;
        }
        self.contacts.len()
    }

    /// Number of currently active contacts.
    #[must_use]
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Last recorded position of a contact, if it is active. Read before
    /// [`apply`](Self::apply) to recover the per-event movement delta.
    #[must_use]
    pub fn position_of(&self, id: u64) -> Option<Vec2> {
        self.contacts.get(&id).copied()
    }

    /// Positions of the currently active contacts, in arbitrary order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec2> {
        self.contacts.values().copied().collect()
    }

    /// Whether the touch sequence that just ended (or is ending) ever had
    /// two or more simultaneous contacts. Resets once all contacts are up.
    pub fn sequence_was_multi_touch(&mut self) -> bool {
        let was = self.multi_touch_seen;
        if self.contacts.is_empty() {
            self.multi_touch_seen = false;
        }
        was
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::controller::OrbitController;
    use crate::camera::core::Camera;
    use crate::options::InteractionOptions;

    #[test]
    fn tracks_contact_count() {
        let mut touches = TouchTracker::new();
        assert_eq!(touches.apply(1, TouchPhase::Started, Vec2::ZERO), 1);
        assert_eq!(
            touches.apply(2, TouchPhase::Started, Vec2::new(10.0, 0.0)),
            2
        );
        assert_eq!(touches.apply(1, TouchPhase::Ended, Vec2::ZERO), 1);
        assert_eq!(touches.apply(2, TouchPhase::Cancelled, Vec2::ZERO), 0);
    }

    #[test]
    fn multi_touch_flag_resets_after_sequence() {
        let mut touches = TouchTracker::new();
        let _ = touches.apply(1, TouchPhase::Started, Vec2::ZERO);
        let _ = touches.apply(2, TouchPhase::Started, Vec2::ONE);
        let _ = touches.apply(2, TouchPhase::Ended, Vec2::ONE);
        assert!(touches.sequence_was_multi_touch());
        let _ = touches.apply(1, TouchPhase::Ended, Vec2::ZERO);
        assert!(touches.sequence_was_multi_touch());
        // Flag consumed at sequence end; a fresh single tap is not multi-touch
        let _ = touches.apply(3, TouchPhase::Started, Vec2::ZERO);
        let _ = touches.apply(3, TouchPhase::Ended, Vec2::ZERO);
        assert!(!touches.sequence_was_multi_touch());
    }

    #[test]
    fn single_contact_drag_orbits_camera() {
        let mut touches = TouchTracker::new();
        let mut controls =
            OrbitController::new(&InteractionOptions::default());
        let mut camera = Camera {
            eye: Vec3::new(5.0, 5.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        };
        let start = camera.eye;
        let distance_before = camera.distance_to(controls.target);

        // The delta for a moved contact is its position change since the
        // last event, recovered from the tracker before the move lands
        let _ = touches.apply(7, TouchPhase::Started, Vec2::new(100.0, 100.0));
        let next = Vec2::new(160.0, 80.0);
        let prev = touches.position_of(7).unwrap();
        let _ = touches.apply(7, TouchPhase::Moved, next);
        controls.rotate(next - prev);
        controls.update(&mut camera, 1.0 / 60.0);

        assert!((camera.eye - start).length() > 1e-3);
        assert!(
            (camera.distance_to(controls.target) - distance_before).abs()
                < 1e-3
        );
    }
}
