//! The viewer engine: owns the GPU context, camera stack, gesture state,
//! and the loaded scene.
//!
//! # Frame loop
//!
//! Each frame, call [`update`](ViewerEngine::update) with the frame delta
//! and then [`render`](ViewerEngine::render) to draw and present. Call
//! [`resize`](ViewerEngine::resize) when the window size changes. Input is
//! forwarded via [`handle_input`](ViewerEngine::handle_input).
//!
//! # Camera write order
//!
//! `update` applies the orbit controller's damping step first and the
//! in-flight transition second, so a running transition is the last writer
//! of the eye position within a frame. Pinch zoom writes the camera
//! directly from touch events while the controller is disabled.

mod input;

use std::path::{Path, PathBuf};

use web_time::{Duration, Instant};

use crate::camera::framing::CameraPose;
use crate::camera::{
    compute_framing_pose, Camera, CameraTransition, OrbitController,
};
use crate::error::VantageError;
use crate::gpu::RenderContext;
use crate::input::{DoubleTapDetector, PinchZoom, TouchTracker};
use crate::options::Options;
use crate::renderer::MeshRenderer;
use crate::scene::{compute_bounds, list_models, load_model, ModelEntry, Scene};
use crate::util::frame_timing::FrameTiming;

/// Default camera pose used when no model is loaded.
const DEFAULT_EYE: glam::Vec3 = glam::Vec3::new(5.0, 5.0, 5.0);

/// The core viewer engine.
pub struct ViewerEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    renderer: MeshRenderer,

    /// Authoritative camera state.
    pub camera: Camera,
    /// Damped orbit/pan controller.
    pub controls: OrbitController,
    transition: CameraTransition,

    touches: TouchTracker,
    taps: DoubleTapDetector,
    pinch: PinchZoom,
    /// Framing request deferred because a pinch was in progress.
    pending_framing: Option<CameraPose>,

    scene: Scene,
    catalog: Vec<ModelEntry>,
    models_dir: PathBuf,
    current_model: Option<usize>,

    options: Options,
    frame_timing: FrameTiming,

    // Mouse drag state
    last_cursor_pos: Option<(f32, f32)>,
    mouse_pressed: bool,
    shift_pressed: bool,
    dragging: bool,
}

impl ViewerEngine {
    /// Create the engine, scan the model catalog, and load its first entry.
    ///
    /// A missing or empty catalog is not an error — the viewer starts with
    /// an empty scene at the default pose. A model that fails to load is
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        models_dir: &Path,
    ) -> Result<Self, VantageError> {
        let options = Options::default();
        let context = RenderContext::new(window, size).await?;

        let mut renderer = MeshRenderer::new(&context);
        renderer.set_background(options.display.background);

        let camera = Camera {
            eye: DEFAULT_EYE,
            target: glam::Vec3::ZERO,
            up: glam::Vec3::Y,
            aspect: context.aspect(),
            fovy: options.camera.fovy,
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        };
        let mut controls = OrbitController::new(&options.interaction);
        controls.auto_rotate = options.display.auto_rotate;

        let catalog = list_models(models_dir);
        log::info!(
            "model catalog: {} entr{} in {}",
            catalog.len(),
            if catalog.len() == 1 { "y" } else { "ies" },
            models_dir.display()
        );

        let mut engine = Self {
            context,
            renderer,
            camera,
            controls,
            transition: CameraTransition::new(),
            touches: TouchTracker::new(),
            taps: DoubleTapDetector::new(Duration::from_millis(
                options.interaction.double_tap_ms,
            )),
            pinch: PinchZoom::new(),
            pending_framing: None,
            scene: Scene::new(),
            catalog,
            models_dir: models_dir.to_path_buf(),
            current_model: None,
            frame_timing: FrameTiming::new(options.display.target_fps),
            options,
            last_cursor_pos: None,
            mouse_pressed: false,
            shift_pressed: false,
            dragging: false,
        };

        if !engine.catalog.is_empty() {
            if let Err(e) = engine.load_model_by_index(0) {
                log::warn!("initial model load failed: {e}");
            }
        }
        Ok(engine)
    }

    /// Advance per-frame state: controller damping, then the in-flight
    /// transition, then any framing request deferred by a pinch.
    pub fn update(&mut self, dt: f32) {
        let now = Instant::now();
        self.controls.update(&mut self.camera, dt);
        let _ = self.transition.update(&mut self.camera, now);

        if !self.pinch.is_active() {
            if let Some(pose) = self.pending_framing.take() {
                self.start_transition(pose, now);
            }
        }
    }

    /// Render one frame, re-uploading geometry if the scene changed.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }
        if self.scene.is_dirty() {
            self.renderer.upload_scene(&self.context, &self.scene);
            self.scene.mark_rendered();
        }
        self.renderer.render(&self.context, &self.camera)?;
        self.frame_timing.end_frame();
        Ok(())
    }

    /// Reconfigure the surface and projection for a new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera.aspect = self.context.aspect();
        self.renderer.resize(&self.context);
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// The model catalog discovered at startup.
    #[must_use]
    pub fn catalog(&self) -> &[ModelEntry] {
        &self.catalog
    }

    /// Name of the currently loaded model, if any.
    #[must_use]
    pub fn current_model_name(&self) -> Option<&str> {
        self.scene.model_name.as_deref()
    }

    /// Re-scan the catalog directory for model files.
    pub fn refresh_catalog(&mut self) {
        self.catalog = list_models(&self.models_dir);
    }

    /// Load the catalog entry at `index` and frame it.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::ModelLoad`] on a bad index or unreadable
    /// file; the current scene is left untouched.
    pub fn load_model_by_index(
        &mut self,
        index: usize,
    ) -> Result<(), VantageError> {
        let entry = self.catalog.get(index).ok_or_else(|| {
            VantageError::ModelLoad(format!(
                "no catalog entry at index {index}"
            ))
        })?;
        let root = load_model(&entry.path)?;
        let name = entry.name.clone();
        self.scene.set_model(root, name);
        self.current_model = Some(index);
        self.frame_model();
        Ok(())
    }

    /// Load the next catalog entry, wrapping at the end.
    pub fn next_model(&mut self) {
        self.step_model(1);
    }

    /// Load the previous catalog entry, wrapping at the start.
    pub fn prev_model(&mut self) {
        self.step_model(-1);
    }

    fn step_model(&mut self, direction: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let len = self.catalog.len() as isize;
        let current = self.current_model.map_or(0, |i| i as isize);
        let next = (current + direction).rem_euclid(len) as usize;
        if let Err(e) = self.load_model_by_index(next) {
            log::warn!("model switch failed: {e}");
        }
    }

    /// Frame the loaded model: recenter the orbit target on its bounds and
    /// start an eased move to the framing pose.
    pub fn frame_model(&mut self) {
        let Some(root) = &self.scene.model else {
            return;
        };
        let bounds = compute_bounds(root);
        let pose = compute_framing_pose(&bounds, self.camera.fovy_radians());
        self.controls.target = bounds.center;
        self.request_framing(pose);
    }

    /// Reset the camera: frame the model if one is loaded, otherwise ease
    /// back to the default pose.
    pub fn reset_camera(&mut self) {
        if self.scene.model.is_some() {
            self.frame_model();
        } else {
            self.controls.target = glam::Vec3::ZERO;
            self.request_framing(CameraPose {
                position: DEFAULT_EYE,
                look_at: glam::Vec3::ZERO,
            });
        }
    }

    /// Toggle turntable auto-rotation.
    pub fn toggle_auto_rotate(&mut self) {
        self.controls.auto_rotate = !self.controls.auto_rotate;
    }

    /// Set the background clear color, linear RGB.
    pub fn set_background(&mut self, color: [f32; 3]) {
        self.options.display.background = color;
        self.renderer.set_background(color);
    }

    /// Start an eased transition to `pose`, or defer it until the current
    /// pinch ends — a framing move mid-pinch would fight the gesture for
    /// the camera.
    fn request_framing(&mut self, pose: CameraPose) {
        if self.pinch.is_active() {
            self.pending_framing = Some(pose);
        } else {
            self.start_transition(pose, Instant::now());
        }
    }

    fn start_transition(&mut self, pose: CameraPose, now: Instant) {
        self.controls.target = pose.look_at;
        self.transition.begin(
            &self.camera,
            pose,
            Duration::from_millis(self.options.interaction.transition_ms),
            now,
        );
    }

    /// Runtime options currently in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the runtime options and re-apply the derived state.
    pub fn apply_options(&mut self, mut options: Options) {
        options.keybindings.rebuild_reverse_map();
        self.camera.fovy = options.camera.fovy;
        self.camera.znear = options.camera.znear;
        self.camera.zfar = options.camera.zfar;
        let auto_rotate = self.controls.auto_rotate;
        self.controls = OrbitController::new(&options.interaction);
        self.controls.auto_rotate = auto_rotate;
        self.taps = DoubleTapDetector::new(Duration::from_millis(
            options.interaction.double_tap_ms,
        ));
        self.renderer.set_background(options.display.background);
        self.frame_timing = FrameTiming::new(options.display.target_fps);
        self.options = options;
        // Keep the orbit centered where it was
        self.controls.target = self.camera.target;
    }
}
