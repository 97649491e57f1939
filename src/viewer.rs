//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use vantage::Viewer;
//! Viewer::builder()
//!     .with_models_dir("models")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::VantageError;
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::ViewerEngine;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    models_dir: PathBuf,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Vantage", models
    /// from `models/`, default options).
    fn new() -> Self {
        Self {
            models_dir: PathBuf::from("models"),
            options: None,
            title: "Vantage".into(),
        }
    }

    /// Set the model catalog directory.
    #[must_use]
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            models_dir: self.models_dir,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays models from a catalog directory.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    models_dir: PathBuf,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), VantageError> {
        let event_loop = EventLoop::new()
            .map_err(|e| VantageError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            last_frame_time: Instant::now(),
            models_dir: self.models_dir,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<ViewerEngine>,
    last_frame_time: Instant,
    models_dir: PathBuf,
    options: Option<Options>,
    title: String,
}

/// Clamp the wgpu surface size to non-zero dimensions.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let (vp_w, vp_h) = viewport_size(inner);

        let engine_result = pollster::block_on(ViewerEngine::new(
            window.clone(),
            (vp_w, vp_h),
            &self.models_dir,
        ));

        let mut engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Some(opts) = self.options.take() {
            engine.apply_options(opts);
        }

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (vp_w, vp_h) = viewport_size(event_size);
                if let Some(engine) = &mut self.engine {
                    engine.resize(vp_w, vp_h);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt =
                    now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                if let Some(engine) = &mut self.engine {
                    engine.update(dt);
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let (vp_w, vp_h) =
                                    viewport_size(w.inner_size());
                                engine.resize(vp_w, vp_h);
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::Scroll {
                        delta: scroll_delta,
                    });
                }
            }

            WindowEvent::Touch(touch) => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::Touch {
                        id: touch.id,
                        phase: touch.phase.into(),
                        x: touch.location.x as f32,
                        y: touch.location.y as f32,
                    });
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::ModifiersChanged {
                        shift: modifiers.state().shift_key(),
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };

                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    if let Some(action) =
                        engine.options().keybindings.lookup(&key_str)
                    {
                        action.execute(engine);
                    }
                }
            }

            _ => (),
        }
    }
}
