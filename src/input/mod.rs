//! Input handling: platform-agnostic event types and the gesture state
//! machines (pinch zoom, double tap) the engine composes.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable engine actions.
pub mod keyboard;
/// Pinch-zoom gesture state machine.
pub mod pinch;
/// Double-tap detection.
pub mod tap;
/// Active touch-contact tracking.
pub mod touch;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use keyboard::KeyAction;
pub use pinch::PinchZoom;
pub use tap::DoubleTapDetector;
pub use touch::TouchTracker;
