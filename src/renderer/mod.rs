//! Forward mesh renderer: one pipeline, baked world transforms, flat
//! per-vertex color with a simple three-light model.
//!
//! Scene geometry is flattened into a single vertex/index buffer pair at
//! upload time — models are static once loaded, so per-node model matrices
//! would buy nothing. The scene's generation counter decides when to
//! re-upload.

pub mod lighting;

use glam::Mat3;
pub use lighting::{Lighting, LightingUniform};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::texture::DEPTH_FORMAT;
use crate::gpu::{DepthTexture, RenderContext};
use crate::scene::Scene;

/// Interleaved vertex with world transform pre-applied.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space normal.
    pub normal: [f32; 3],
    /// Linear RGB base color.
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Forward renderer for the loaded model.
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    lighting: Lighting,
    depth: DepthTexture,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
    background: wgpu::Color,
}

impl MeshRenderer {
    /// Create the renderer and its pipeline for the context's surface
    /// format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let camera_uniform = CameraUniform::new();
        let camera_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let camera_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );
        let camera_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &camera_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: camera_buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        let lighting = Lighting::new(context);
        let pipeline =
            Self::create_pipeline(context, &camera_layout, &lighting.layout);
        let depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Self {
            pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            lighting,
            depth,
            vertex_buffer: None,
            index_buffer: None,
            index_count: 0,
            background: wgpu::Color {
                r: 0.941,
                g: 0.941,
                b: 0.941,
                a: 1.0,
            },
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Mesh Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/mesh.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Mesh Pipeline Layout"),
                bind_group_layouts: &[camera_layout, lighting_layout],
                push_constant_ranges: &[],
            },
        );

        context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Mesh Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        )
    }

    /// Set the clear color, linear RGB.
    pub fn set_background(&mut self, color: [f32; 3]) {
        self.background = wgpu::Color {
            r: f64::from(color[0]),
            g: f64::from(color[1]),
            b: f64::from(color[2]),
            a: 1.0,
        };
    }

    /// Flatten the scene's visible meshes into GPU buffers, baking each
    /// node's world transform into the vertices.
    pub fn upload_scene(&mut self, context: &RenderContext, scene: &Scene) {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();

        if let Some(root) = &scene.model {
            root.visit_meshes(&mut |mesh, world| {
                let base = vertices.len() as u32;
                // Normals need the inverse-transpose to survive
                // non-uniform scale
                let normal_matrix =
                    Mat3::from_mat4(world).inverse().transpose();
                for (position, normal) in
                    mesh.positions.iter().zip(&mesh.normals)
                {
                    vertices.push(Vertex {
                        position: world
                            .transform_point3(*position)
                            .to_array(),
                        normal: (normal_matrix * *normal)
                            .normalize_or(glam::Vec3::Y)
                            .to_array(),
                        color: mesh.color,
                    });
                }
                indices.extend(mesh.indices.iter().map(|i| base + i));
            });
        }

        if vertices.is_empty() {
            self.vertex_buffer = None;
            self.index_buffer = None;
            self.index_count = 0;
            return;
        }

        self.vertex_buffer = Some(context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
        self.index_buffer = Some(context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
        self.index_count = indices.len() as u32;
    }

    /// Recreate size-dependent resources after a surface resize.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );
    }

    /// Render one frame with the given camera.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain texture cannot be
    /// acquired; callers reconfigure and retry on `Lost`/`Outdated`.
    pub fn render(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Mesh Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.background),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            if let (Some(vertex_buffer), Some(index_buffer)) =
                (&self.vertex_buffer, &self.index_buffer)
            {
                if self.index_count > 0 {
                    pass.set_pipeline(&self.pipeline);
                    pass.set_bind_group(0, &self.camera_bind_group, &[]);
                    pass.set_bind_group(1, &self.lighting.bind_group, &[]);
                    pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                    pass.set_index_buffer(
                        index_buffer.slice(..),
                        wgpu::IndexFormat::Uint32,
                    );
                    pass.draw_indexed(0..self.index_count, 0, 0..1);
                }
            }
        }

        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
