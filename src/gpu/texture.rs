//! Depth-buffer texture helper.

/// Format shared by the depth texture and every pipeline's depth-stencil
/// state.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth texture sized to the swapchain, recreated on resize.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}
