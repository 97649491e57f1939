use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
///
/// The camera's orientation is implied by `eye`, `target`, and `up`; setting
/// `target` is the "look at point" operation. Authoritative camera state
/// lives here — the transition animator and gesture handlers read and write
/// it but never own it.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn fovy_radians(&self) -> f32 {
        self.fovy.to_radians()
    }

    /// Distance from the eye to the given point.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        (self.eye - point).length()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
    }
}
