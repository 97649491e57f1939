//! Scene lighting: ambient + key directional light + two colored point
//! fills, uploaded as a single uniform block.

use wgpu::util::DeviceExt;

use crate::gpu::RenderContext;

/// Lighting configuration shared by the mesh shader.
/// NOTE: Must match WGSL struct layout exactly (96 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Key light direction (normalized, pointing away from the scene).
    pub directional_dir: [f32; 3],
    /// Key light intensity.
    pub directional_intensity: f32,
    /// Ambient light color, linear RGB.
    pub ambient_color: [f32; 3],
    /// Ambient intensity.
    pub ambient_intensity: f32,
    /// First fill light position.
    pub point1_position: [f32; 3],
    /// Fill light intensity (shared by both fills).
    pub point_intensity: f32,
    /// First fill light color.
    pub point1_color: [f32; 3],
    /// Fill light falloff range.
    pub point_range: f32,
    /// Second fill light position.
    pub point2_position: [f32; 3],
    pub(crate) _pad1: f32,
    /// Second fill light color.
    pub point2_color: [f32; 3],
    pub(crate) _pad2: f32,
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self {
            // Key light from upper front-right
            directional_dir: normalize([10.0, 10.0, 5.0]),
            directional_intensity: 2.0,
            // Mid-gray ambient (0x404040)
            ambient_color: [0.251, 0.251, 0.251],
            ambient_intensity: 1.5,
            point1_position: [-10.0, 10.0, -10.0],
            point_intensity: 1.2,
            // Warm coral fill (0xff6b6b)
            point1_color: [1.0, 0.42, 0.42],
            point_range: 50.0,
            point2_position: [10.0, -10.0, 10.0],
            _pad1: 0.0,
            // Cool teal fill (0x4ecdc4)
            point2_color: [0.306, 0.804, 0.769],
            _pad2: 0.0,
        }
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Lighting bind group holding the fixed light rig, uploaded once at
/// creation.
pub struct Lighting {
    /// Bind group layout for pipeline creation.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for draw calls.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the lighting buffer with the default lights.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let uniform = LightingUniform::default();

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Lighting Bind Group"),
                });

        Self { layout, bind_group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_size_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<LightingUniform>(), 96);
    }

    #[test]
    fn directional_dir_is_normalized() {
        let uniform = LightingUniform::default();
        let [x, y, z] = uniform.directional_dir;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }
}
