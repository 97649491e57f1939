//! Damped orbit/pan controller.
//!
//! Operates directly on the [`Camera`]'s live pose each frame: orbit and pan
//! input accumulates momentum which the per-frame [`update`] applies and
//! decays, in the manner of a classic orbit control. The
//! controller clamps the orbit distance to `[min_distance, max_distance]` on
//! every update, so the distance invariant holds regardless of who moved the
//! camera last. Zoom is deliberately absent here — wheel zoom is disabled by
//! policy and pinch zoom writes the camera directly while this controller is
//! disabled.
//!
//! [`update`]: OrbitController::update

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::InteractionOptions;

/// Keeps the polar angle away from the poles to avoid up-vector flips.
const POLAR_EPSILON: f32 = 0.01;

/// Orbit/pan camera controller with inertia damping and distance clamping.
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Whether the controller responds to input and per-frame updates.
    /// Cleared while a two-finger pinch is active.
    pub enabled: bool,
    /// Orbit center; the camera always looks here.
    pub target: Vec3,
    /// Minimum allowed eye-to-target distance.
    pub min_distance: f32,
    /// Maximum allowed eye-to-target distance.
    pub max_distance: f32,
    /// Turntable auto-rotation around the target.
    pub auto_rotate: bool,

    damping: f32,
    rotate_speed: f32,
    pan_speed: f32,
    auto_rotate_speed: f32,
    rotate_momentum: Vec2,
    pan_momentum: Vec2,
}

impl OrbitController {
    /// Create a controller from interaction options, centered on the origin.
    #[must_use]
    pub fn new(options: &InteractionOptions) -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
            auto_rotate: false,
            damping: options.damping,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            auto_rotate_speed: options.auto_rotate_speed,
            rotate_momentum: Vec2::ZERO,
            pan_momentum: Vec2::ZERO,
        }
    }

    /// Feed an orbit drag delta (screen pixels). Ignored while disabled.
    pub fn rotate(&mut self, delta: Vec2) {
        if self.enabled {
            self.rotate_momentum += delta * self.rotate_speed;
        }
    }

    /// Feed a pan drag delta (screen pixels). Ignored while disabled.
    pub fn pan(&mut self, delta: Vec2) {
        if self.enabled {
            self.pan_momentum += delta * self.pan_speed;
        }
    }

    /// Current eye-to-target distance.
    #[must_use]
    pub fn distance(&self, camera: &Camera) -> f32 {
        camera.distance_to(self.target)
    }

    /// Apply one frame of damped orbit/pan to the camera.
    ///
    /// No-op while disabled — during a pinch the gesture handler is the only
    /// writer of camera distance. The orbit distance is clamped to
    /// `[min_distance, max_distance]` before the pose is written back.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) {
        if !self.enabled {
            return;
        }

        let mut offset = camera.eye - self.target;
        let radius = offset.length().max(f32::EPSILON);

        // Spherical decomposition around the world up axis
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta -= self.rotate_momentum.x;
        phi -= self.rotate_momentum.y;
        if self.auto_rotate {
            theta += self.auto_rotate_speed * dt;
        }
        phi = phi.clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);

        let radius = radius.clamp(self.min_distance, self.max_distance);
        offset = radius
            * Vec3::new(
                phi.sin() * theta.sin(),
                phi.cos(),
                phi.sin() * theta.cos(),
            );

        // Pan translates target and eye together in the view plane
        let forward = (self.target - camera.eye).normalize_or(-Vec3::Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        let translation = right * (-self.pan_momentum.x) + up * self.pan_momentum.y;
        self.target += translation;

        camera.eye = self.target + offset;
        camera.target = self.target;
        camera.up = Vec3::Y;

        // Inertia decay, matching the classic per-frame damping factor
        self.rotate_momentum *= 1.0 - self.damping;
        self.pan_momentum *= 1.0 - self.damping;
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

    fn controller() -> OrbitController {
        OrbitController::new(&InteractionOptions::default())
    }

    #[test]
    fn disabled_controller_leaves_camera_untouched() {
        let mut camera = test_camera();
        let before = camera.eye;
        let mut controls = controller();
        controls.enabled = false;

        controls.rotate(Vec2::new(50.0, 0.0));
        controls.update(&mut camera, 1.0 / 60.0);

        assert_eq!(camera.eye, before);
    }

    #[test]
    fn rotate_preserves_distance() {
        let mut camera = test_camera();
        let mut controls = controller();
        let before = controls.distance(&camera);

        controls.rotate(Vec2::new(40.0, 10.0));
        controls.update(&mut camera, 1.0 / 60.0);

        assert!((controls.distance(&camera) - before).abs() < 1e-4);
    }

    #[test]
    fn update_clamps_distance_to_bounds() {
        let mut controls = controller();
        let mut camera = test_camera();

        camera.eye = Vec3::new(500.0, 0.0, 0.0);
        controls.update(&mut camera, 1.0 / 60.0);
        assert!(
            controls.distance(&camera) <= controls.max_distance + 1e-3
        );

        camera.eye = Vec3::new(0.01, 0.0, 0.0);
        controls.update(&mut camera, 1.0 / 60.0);
        assert!(
            controls.distance(&camera) >= controls.min_distance - 1e-3
        );
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut camera = test_camera();
        let mut controls = controller();
        let offset_before = camera.eye - controls.target;

        controls.pan(Vec2::new(30.0, -10.0));
        controls.update(&mut camera, 1.0 / 60.0);

        let offset_after = camera.eye - controls.target;
        assert!((offset_after.length() - offset_before.length()).abs() < 1e-3);
        assert!(controls.target != Vec3::ZERO);
        assert_eq!(camera.target, controls.target);
    }

    #[test]
    fn momentum_decays_over_frames() {
        let mut camera = test_camera();
        let mut controls = controller();

        controls.rotate(Vec2::new(20.0, 0.0));
        controls.update(&mut camera, 1.0 / 60.0);
        let after_one = camera.eye;
        controls.update(&mut camera, 1.0 / 60.0);
        let step_two = (camera.eye - after_one).length();

        // Run the damping out; the camera should settle
        for _ in 0..2000 {
            controls.update(&mut camera, 1.0 / 60.0);
        }
        let settled = camera.eye;
        controls.update(&mut camera, 1.0 / 60.0);
        assert!((camera.eye - settled).length() < 1e-3);
        assert!(step_two > 0.0);
    }

    #[test]
    fn auto_rotate_orbits_without_input() {
        let mut camera = test_camera();
        let mut controls = controller();
        controls.auto_rotate = true;
        let before = camera.eye;

        controls.update(&mut camera, 0.5);

        assert!((camera.eye - before).length() > 1e-4);
        assert!(
            (controls.distance(&camera)
                - before.distance(controls.target))
            .abs()
                < 1e-3
        );
    }
}
