//! Eased camera transitions between poses.
//!
//! A transition captures the camera's live position as its interpolation
//! start, then drives the eye along a cubic-ease-out curve toward the target
//! while re-tracking the look-at point every frame. Beginning a new
//! transition while one is in flight silently replaces it — the new
//! interpolation starts from wherever the camera is right now, never from
//! the superseded transition's original start.

use glam::Vec3;
use web_time::{Duration, Instant};

use crate::camera::core::Camera;
use crate::camera::framing::CameraPose;
use crate::util::easing::EasingFunction;

/// Default transition duration for framing moves.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// State of one in-flight transition. Created per framing request and
/// discarded on completion.
#[derive(Debug, Clone)]
struct TransitionState {
    start_position: Vec3,
    target_position: Vec3,
    look_at: Vec3,
    start_time: Instant,
    duration: Duration,
}

/// Drives the camera from its current pose to a target pose over a fixed
/// duration. Fire-and-forget: no completion callback, last writer wins.
#[derive(Debug, Default)]
pub struct CameraTransition {
    active: Option<TransitionState>,
    easing: EasingFunction,
}

impl CameraTransition {
    /// Create an idle transition driver with the default easing curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: None,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// Begin a transition from the camera's current live position to the
    /// given pose. Replaces any in-flight transition.
    pub fn begin(
        &mut self,
        camera: &Camera,
        pose: CameraPose,
        duration: Duration,
        now: Instant,
    ) {
        self.active = Some(TransitionState {
            start_position: camera.eye,
            target_position: pose.position,
            look_at: pose.look_at,
            start_time: now,
            duration,
        });
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Advance the in-flight transition, writing the interpolated eye
    /// position and re-tracking the look-at point. Returns `true` while the
    /// transition is still running, `false` once finished (or idle).
    pub fn update(&mut self, camera: &mut Camera, now: Instant) -> bool {
        let Some(ref state) = self.active else {
            return false;
        };

        let elapsed = now.duration_since(state.start_time).as_secs_f32();
        let duration = state.duration.as_secs_f32();
        let progress = if duration > 0.0 {
            (elapsed / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let eased = self.easing.evaluate(progress);

        camera.eye = state.start_position.lerp(state.target_position, eased);
        // Look-at re-tracks every frame, not just at the end
        camera.target = state.look_at;

        if progress >= 1.0 {
            self.active = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(5.0, 5.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    fn pose(position: Vec3, look_at: Vec3) -> CameraPose {
        CameraPose { position, look_at }
    }

    #[test]
    fn completes_at_target_after_duration() {
        let mut camera = test_camera();
        let mut transition = CameraTransition::new();
        let t0 = Instant::now();
        let target = Vec3::new(10.0, 0.0, 0.0);

        transition.begin(
            &camera,
            pose(target, Vec3::ZERO),
            Duration::from_millis(1000),
            t0,
        );
        let still_running =
            transition.update(&mut camera, t0 + Duration::from_millis(1000));

        assert!(!still_running);
        assert!(!transition.is_active());
        assert!((camera.eye - target).length() < 1e-5);
    }

    #[test]
    fn eased_midpoint_overshoots_linear() {
        let mut camera = test_camera();
        camera.eye = Vec3::ZERO;
        let mut transition = CameraTransition::new();
        let t0 = Instant::now();

        transition.begin(
            &camera,
            pose(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
            Duration::from_millis(1000),
            t0,
        );
        let _ = transition.update(&mut camera, t0 + Duration::from_millis(500));

        // Cubic ease-out at t=0.5: 1 - 0.5^3 = 0.875
        assert!((camera.eye.x - 0.875).abs() < 1e-5);
    }

    #[test]
    fn look_at_retracks_every_frame() {
        let mut camera = test_camera();
        camera.target = Vec3::new(9.0, 9.0, 9.0);
        let mut transition = CameraTransition::new();
        let t0 = Instant::now();
        let center = Vec3::new(1.0, 2.0, 3.0);

        transition.begin(
            &camera,
            pose(Vec3::new(10.0, 10.0, 10.0), center),
            Duration::from_millis(1000),
            t0,
        );
        let _ = transition.update(&mut camera, t0 + Duration::from_millis(1));

        // Mid-flight, not just at the end
        assert_eq!(camera.target, center);
    }

    #[test]
    fn restart_begins_from_live_position() {
        let mut camera = test_camera();
        camera.eye = Vec3::ZERO;
        let mut transition = CameraTransition::new();
        let t0 = Instant::now();

        // Transition A toward +X
        transition.begin(
            &camera,
            pose(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO),
            Duration::from_millis(1000),
            t0,
        );
        let mid = t0 + Duration::from_millis(400);
        let _ = transition.update(&mut camera, mid);
        let live_at_restart = camera.eye;
        assert!(live_at_restart.x > 0.0);
        assert!(live_at_restart.x < 10.0);

        // Transition B toward +Y, started mid-flight of A
        transition.begin(
            &camera,
            pose(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO),
            Duration::from_millis(1000),
            mid,
        );
        // At B's t=0 the camera must sit exactly where it was at restart
        let _ = transition.update(&mut camera, mid);
        assert!((camera.eye - live_at_restart).length() < 1e-6);

        // And B interpolates from there, not from A's original start
        let _ =
            transition.update(&mut camera, mid + Duration::from_millis(1000));
        assert!((camera.eye - Vec3::new(0.0, 10.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut camera = test_camera();
        let mut transition = CameraTransition::new();
        let t0 = Instant::now();
        let target = Vec3::new(2.0, 2.0, 2.0);

        transition.begin(&camera, pose(target, Vec3::ZERO), Duration::ZERO, t0);
        let still_running = transition.update(&mut camera, t0);

        assert!(!still_running);
        assert!((camera.eye - target).length() < 1e-6);
    }

    #[test]
    fn idle_update_leaves_camera_untouched() {
        let mut camera = test_camera();
        let before = camera.eye;
        let mut transition = CameraTransition::new();

        assert!(!transition.update(&mut camera, Instant::now()));
        assert_eq!(camera.eye, before);
    }
}
