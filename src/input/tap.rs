//! Double-tap detection.

use web_time::{Duration, Instant};

/// Default double-tap window, in milliseconds.
pub const DEFAULT_WINDOW_MS: u64 = 300;

/// Classifies taps into double taps by timestamp spacing.
///
/// A tap counts as the second of a pair when it lands strictly after the
/// previous one and strictly within the window. Every tap becomes the new
/// reference point, so a rapid burst of taps fires on every tap after the
/// first.
#[derive(Debug)]
pub struct DoubleTapDetector {
    last_tap: Option<Instant>,
    window: Duration,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_WINDOW_MS))
    }
}

impl DoubleTapDetector {
    /// Create a detector with the given pairing window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            last_tap: None,
            window,
        }
    }

    /// Record a tap at `now`. Returns `true` when it completes a double tap.
    pub fn on_tap(&mut self, now: Instant) -> bool {
        let is_double = match self.last_tap {
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                // Strictly-positive spacing: two events with the same
                // timestamp are one tap reported twice, not a double tap
                elapsed > Duration::ZERO && elapsed < self.window
            }
            None => false,
        };
        self.last_tap = Some(now);
        is_double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_taps_within_window_pair_up() {
        let mut taps = DoubleTapDetector::default();
        let t0 = Instant::now();
        assert!(!taps.on_tap(t0));
        assert!(taps.on_tap(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn slow_taps_do_not_pair() {
        let mut taps = DoubleTapDetector::default();
        let t0 = Instant::now();
        assert!(!taps.on_tap(t0));
        assert!(!taps.on_tap(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn identical_timestamps_do_not_pair() {
        let mut taps = DoubleTapDetector::default();
        let t0 = Instant::now();
        assert!(!taps.on_tap(t0));
        assert!(!taps.on_tap(t0));
    }

    #[test]
    fn three_quick_taps_yield_one_double_then_another() {
        let mut taps = DoubleTapDetector::default();
        let t0 = Instant::now();
        assert!(!taps.on_tap(t0));
        assert!(taps.on_tap(t0 + Duration::from_millis(100)));
        // Third tap pairs with the second, which became the reference
        assert!(taps.on_tap(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut taps = DoubleTapDetector::new(Duration::from_millis(300));
        let t0 = Instant::now();
        assert!(!taps.on_tap(t0));
        assert!(!taps.on_tap(t0 + Duration::from_millis(300)));
    }
}
