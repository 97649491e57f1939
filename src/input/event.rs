/// Platform-agnostic input events.
///
/// These are fed into [`ViewerEngine::handle_input`], which dispatches them
/// to the orbit controller and the gesture state machines.
///
/// [`ViewerEngine::handle_input`]: crate::engine::ViewerEngine::handle_input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel. Swallowed by policy — wheel zoom is disabled.
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// A touch contact changed.
    Touch {
        /// Platform-assigned contact identifier.
        id: u64,
        /// Phase of this contact.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (side/extra buttons). The engine ignores these —
    /// in particular they never register taps.
    Other,
}

/// Lifecycle phase of a touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Contact began.
    Started,
    /// Contact moved.
    Moved,
    /// Contact lifted normally.
    Ended,
    /// Contact cancelled by the platform.
    Cancelled,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use super::*;

    #[test]
    fn side_buttons_do_not_map_to_left() {
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Back),
            MouseButton::Other
        );
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Forward),
            MouseButton::Other
        );
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Other(6)),
            MouseButton::Other
        );
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Left),
            MouseButton::Left
        );
    }
}
