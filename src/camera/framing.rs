//! Camera framing policy.
//!
//! Computes a default camera pose that fully frames a model's bounding box
//! with a fixed elevated three-quarter viewing angle. Invoked every time a
//! model finishes loading and on manual re-center requests.

use glam::Vec3;

use crate::scene::bounds::BoundingInfo;

/// Closeness coefficient applied to the fov-derived fit distance.
/// Smaller brings the camera nearer.
pub const FRAMING_CLOSENESS: f32 = 0.5;

/// Per-axis offset coefficient for the diagonal viewing direction.
///
/// Intentionally not normalized — `(0.7, 0.7, 0.7)` scaled by the framing
/// distance gives a reproducible elevated three-quarter view whose actual
/// eye distance is `0.7 * sqrt(3)` times the nominal distance.
pub const DIAGONAL_BIAS: f32 = 0.7;

/// Lower bound on the framing distance, guarding degenerate (zero-size)
/// bounds against a zero or non-finite camera position.
pub const DISTANCE_FLOOR: f32 = 0.1;

/// A camera pose produced by the framing policy: where the eye goes and
/// what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub look_at: Vec3,
}

/// Compute the camera pose that frames the given bounds.
///
/// `distance = |max_dim / sin(fov/2)| * FRAMING_CLOSENESS`, with the eye
/// placed at `center + distance * (0.7, 0.7, 0.7)` looking at the center.
/// Degenerate bounds (`max_dim == 0`) produce a finite pose at the distance
/// floor rather than failing.
#[must_use]
pub fn compute_framing_pose(
    bounds: &BoundingInfo,
    vertical_fov_radians: f32,
) -> CameraPose {
    let size = bounds.size;
    let max_dim = size.x.max(size.y).max(size.z);

    let half_fov_sin = (vertical_fov_radians / 2.0).sin();
    let distance =
        (max_dim / half_fov_sin).abs() * FRAMING_CLOSENESS;
    let distance = if distance.is_finite() {
        distance.max(DISTANCE_FLOOR)
    } else {
        DISTANCE_FLOOR
    };

    CameraPose {
        position: bounds.center + distance * Vec3::splat(DIAGONAL_BIAS),
        look_at: bounds.center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOV: f32 = 75.0_f32 * std::f32::consts::PI / 180.0;

    /// Nominal framing distance implied by a pose (the `distance` term
    /// before the diagonal bias is applied).
    fn nominal_distance(pose: &CameraPose) -> f32 {
        let offset = pose.position - pose.look_at;
        // offset = distance * (0.7, 0.7, 0.7)
        offset.x / DIAGONAL_BIAS
    }

    #[test]
    fn distance_formula_exact() {
        let bounds = BoundingInfo {
            center: Vec3::new(1.0, 2.0, 3.0),
            size: Vec3::new(4.0, 8.0, 2.0),
        };
        let pose = compute_framing_pose(&bounds, FOV);

        let expected = (8.0 / (FOV / 2.0).sin()).abs() * 0.5;
        assert!((nominal_distance(&pose) - expected).abs() < 1e-4);
        assert_eq!(pose.look_at, bounds.center);
    }

    #[test]
    fn offset_is_uniform_diagonal() {
        let bounds = BoundingInfo {
            center: Vec3::ZERO,
            size: Vec3::splat(2.0),
        };
        let pose = compute_framing_pose(&bounds, FOV);
        let offset = pose.position - pose.look_at;
        assert!((offset.x - offset.y).abs() < 1e-6);
        assert!((offset.y - offset.z).abs() < 1e-6);
        assert!(offset.x > 0.0);
    }

    #[test]
    fn degenerate_bounds_yield_finite_positive_distance() {
        let bounds = BoundingInfo {
            center: Vec3::new(-3.0, 0.5, 9.0),
            size: Vec3::ZERO,
        };
        let pose = compute_framing_pose(&bounds, FOV);
        let offset = pose.position - pose.look_at;

        assert!(pose.position.is_finite());
        assert!(offset.length() > 0.0);
        assert!((nominal_distance(&pose) - DISTANCE_FLOOR).abs() < 1e-6);
    }

    #[test]
    fn larger_models_frame_from_farther_away() {
        let small = BoundingInfo {
            center: Vec3::ZERO,
            size: Vec3::splat(1.0),
        };
        let large = BoundingInfo {
            center: Vec3::ZERO,
            size: Vec3::splat(10.0),
        };
        let near = compute_framing_pose(&small, FOV);
        let far = compute_framing_pose(&large, FOV);
        assert!(nominal_distance(&far) > nominal_distance(&near));
    }
}
