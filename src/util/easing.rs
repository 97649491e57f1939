//! Easing functions for animation interpolation.
//!
//! Provides the interpolation curves used by camera transitions.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out: `1 - (1-t)^3`. Fast start, strong deceleration.
    CubicOut,
}

impl EasingFunction {
    /// Default easing function: cubic ease-out for natural camera motion.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_out_endpoints() {
        let cubic = EasingFunction::CubicOut;
        assert_eq!(cubic.evaluate(0.0), 0.0);
        assert!((cubic.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_out_shape() {
        // Ease-out: early progress (t=0.25) should already exceed 0.25
        let cubic = EasingFunction::CubicOut;
        let result_at_quarter = cubic.evaluate(0.25);
        assert!(
            result_at_quarter > 0.25,
            "Ease-out should have value > 0.25 at t=0.25, got {result_at_quarter}"
        );
        // 1 - 0.75^3 = 0.578125
        assert!((result_at_quarter - 0.578_125).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let cubic = EasingFunction::CubicOut;
        assert_eq!(cubic.evaluate(-0.5), 0.0);
        assert!((cubic.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_default_is_cubic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicOut);
    }
}
