//! Vertex and uniform types shared by the globe pipelines.

/// A single vertex of the sphere mesh.
///
/// Layout: position(vec3) + uv(vec2) = 20 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl GlobeVertex {
    /// wgpu vertex buffer layout for `GlobeVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<GlobeVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // uv: vec2<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
}

/// One endpoint of a wireframe segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

impl LineVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// Per-instance point position; the quad corners come from `vertex_index`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
}

impl PointInstance {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// Gradient sphere uniforms (group 0, binding 0 of `globe.wgsl`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    pub time: f32,
    pub alpha: f32,
    /// Distance from the center where the glow term reaches zero.
    pub glow_radius: f32,
    pub _pad: f32,
}

/// Wireframe uniforms (group 0, binding 0 of `wireframe.wgsl`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    pub mvp: [f32; 16],
    /// Tint with opacity in alpha.
    pub color: [f32; 4],
}

/// Point cloud uniforms (group 0, binding 0 of `points.wgsl`).
///
/// Model-view and projection are kept apart so quads can be expanded in
/// view space and stay camera-facing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub model_view: [f32; 16],
    pub projection: [f32; 16],
    pub color: [f32; 4],
    /// Quad edge length in world units.
    pub size: f32,
    pub _pad: [f32; 3],
}

/// Everything the backend uploads for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub sphere: SphereUniforms,
    pub wireframe: LineUniforms,
    pub points: PointUniforms,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn globe_vertex_size_is_20_bytes() {
        assert_eq!(std::mem::size_of::<GlobeVertex>(), 20);
        assert_eq!(std::mem::align_of::<GlobeVertex>(), 4);
    }

    #[test]
    fn position_only_vertices_are_12_bytes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 12);
        assert_eq!(std::mem::size_of::<PointInstance>(), 12);
    }

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        // WGSL uniform structs round up to 16-byte multiples.
        assert_eq!(std::mem::size_of::<SphereUniforms>(), 80);
        assert_eq!(std::mem::size_of::<LineUniforms>(), 80);
        assert_eq!(std::mem::size_of::<PointUniforms>(), 160);
    }

    #[test]
    fn bytemuck_cast_works() {
        let v = GlobeVertex {
            position: [1.0, 2.0, 3.0],
            uv: [0.5, 0.25],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 20);
        let back: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &[1.0, 2.0, 3.0, 0.5, 0.25]);
    }
}
