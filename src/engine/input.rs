//! Input dispatch for [`ViewerEngine`].

use glam::Vec2;
use web_time::Instant;

use super::ViewerEngine;
use crate::input::{InputEvent, KeyAction, MouseButton, TouchPhase};

impl ViewerEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the engine internally dispatches
    /// to orbit/pan, the pinch-zoom state machine, and double-tap
    /// detection.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Touch { id, phase, x, y });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.dispatch_cursor_moved(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.dispatch_mouse_button(button, pressed);
            }
            InputEvent::Scroll { delta: _ } => {
                // Wheel zoom is disabled; pinch is the only zoom gesture
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.dispatch_touch(id, phase, x, y);
            }
        }
    }

    /// Cursor moved — compute delta, forward to orbit or pan.
    fn dispatch_cursor_moved(&mut self, x: f32, y: f32) {
        let (delta_x, delta_y) = if let Some((lx, ly)) = self.last_cursor_pos {
            (x - lx, y - ly)
        } else {
            (0.0, 0.0)
        };
        self.last_cursor_pos = Some((x, y));

        if self.mouse_pressed {
            let delta = Vec2::new(delta_x, delta_y);
            if delta.length_squared() > 1.0 {
                self.dragging = true;
            }
            if self.shift_pressed {
                self.controls.pan(delta);
            } else {
                self.controls.rotate(delta);
            }
        }
    }

    /// Mouse button — press starts a potential drag, release without a
    /// drag counts as a tap.
    fn dispatch_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        if pressed {
            self.mouse_pressed = true;
            self.dragging = false;
        } else {
            self.mouse_pressed = false;
            if !self.dragging {
                self.register_tap();
            }
        }
    }

    /// Touch contact changed — update the tracker, then route to orbit,
    /// the pinch state machine, and tap detection.
    fn dispatch_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        let previous = self.touches.position_of(id);
        let contacts = self.touches.apply(id, phase, position);
        let positions = self.touches.positions();

        match phase {
            TouchPhase::Started | TouchPhase::Ended
            | TouchPhase::Cancelled => {
                self.pinch.on_contacts_changed(
                    &positions,
                    &self.camera,
                    &mut self.controls,
                );
            }
            TouchPhase::Moved => {
                if self.pinch.is_active() {
                    self.pinch.on_move(
                        &positions,
                        &mut self.camera,
                        &self.controls,
                    );
                } else if contacts == 1 {
                    // One-finger drag orbits, mirroring the mouse path
                    if let Some(prev) = previous {
                        self.controls.rotate(position - prev);
                    }
                }
            }
        }

        // Finger lifts that end a pinch are not taps. The multi-touch flag
        // is consumed on cancellation too, so it cannot leak into the next
        // sequence.
        if matches!(phase, TouchPhase::Ended | TouchPhase::Cancelled) {
            let was_multi_touch = self.touches.sequence_was_multi_touch();
            if phase == TouchPhase::Ended && !was_multi_touch {
                self.register_tap();
            }
        }
    }

    /// Feed the double-tap detector; a completed pair resets the camera.
    fn register_tap(&mut self) {
        if self.taps.on_tap(Instant::now()) {
            self.reset_camera();
        }
    }
}

// ── KeyAction execution ──

impl KeyAction {
    /// Execute this action on the given engine.
    pub fn execute(self, engine: &mut ViewerEngine) {
        match self {
            Self::RecenterCamera => engine.reset_camera(),
            Self::ToggleAutoRotate => engine.toggle_auto_rotate(),
            Self::NextModel => engine.next_model(),
            Self::PrevModel => engine.prev_model(),
        }
    }
}
