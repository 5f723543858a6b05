//! wgpu pipelines, buffers and render targets for the three globe layers.
//!
//! Each layer is a pipeline plus its own uniform buffer and bind group
//! (its "material"). Geometry lives in separate vertex/index buffers.

use wgpu::util::DeviceExt;

use super::assets::GlobeAssets;
use super::types::{
    FrameUniforms, GlobeVertex, LineUniforms, LineVertex, PointInstance, PointUniforms,
    SphereUniforms,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const SPHERE_SHADER: &str = include_str!("../shaders/globe.wgsl");
const WIREFRAME_SHADER: &str = include_str!("../shaders/wireframe.wgsl");
const POINTS_SHADER: &str = include_str!("../shaders/points.wgsl");

/// Vertices per point quad (two triangles, generated in the shader).
const POINT_QUAD_VERTICES: u32 = 6;

/// Geometry buffers uploaded once at mount.
pub struct GlobeBuffers {
    pub sphere_vertices: wgpu::Buffer,
    pub sphere_indices: wgpu::Buffer,
    pub index_count: u32,
    pub wireframe_vertices: wgpu::Buffer,
    pub wireframe_vertex_count: u32,
    pub point_positions: wgpu::Buffer,
    pub point_count: u32,
}

impl GlobeBuffers {
    pub fn new(device: &wgpu::Device, assets: &GlobeAssets) -> Self {
        let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe sphere vertices"),
            contents: bytemuck::cast_slice(&assets.sphere.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe sphere indices"),
            contents: bytemuck::cast_slice(&assets.sphere.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let wireframe_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe wireframe vertices"),
            contents: bytemuck::cast_slice(&assets.wireframe),
            usage: wgpu::BufferUsages::VERTEX,
        });
        // wgpu rejects zero-sized vertex buffers, so an empty cloud still
        // gets one placeholder instance that is never drawn.
        let placeholder = [PointInstance {
            position: [0.0; 3],
        }];
        let positions: &[PointInstance] = if assets.points.is_empty() {
            &placeholder
        } else {
            &assets.points
        };
        let point_positions = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globe point positions"),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            sphere_vertices,
            sphere_indices,
            index_count: assets.sphere.indices.len() as u32,
            wireframe_vertices,
            wireframe_vertex_count: assets.wireframe.len() as u32,
            point_positions,
            point_count: assets.points.len() as u32,
        }
    }

    pub fn destroy(&self) {
        self.sphere_vertices.destroy();
        self.sphere_indices.destroy();
        self.wireframe_vertices.destroy();
        self.point_positions.destroy();
    }
}

/// A pipeline with its uniform buffer and bind group.
pub struct LayerMaterial {
    pub pipeline: wgpu::RenderPipeline,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

struct LayerDescriptor<'a> {
    label: &'a str,
    shader: &'a str,
    uniform_size: u64,
    buffers: &'a [wgpu::VertexBufferLayout<'static>],
    topology: wgpu::PrimitiveTopology,
    depth_write: bool,
}

impl LayerMaterial {
    fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        desc: LayerDescriptor<'_>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.label),
            source: wgpu::ShaderSource::Wgsl(desc.shader.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(desc.label),
            size: desc.uniform_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(desc.label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(desc.uniform_size),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.label),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: desc.buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: desc.depth_write,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count,
                ..Default::default()
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }
}

/// The three layer materials.
pub struct GlobeMaterials {
    pub sphere: LayerMaterial,
    pub wireframe: LayerMaterial,
    pub points: LayerMaterial,
}

impl GlobeMaterials {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, sample_count: u32) -> Self {
        let sphere = LayerMaterial::new(
            device,
            format,
            sample_count,
            LayerDescriptor {
                label: "globe sphere",
                shader: SPHERE_SHADER,
                uniform_size: std::mem::size_of::<SphereUniforms>() as u64,
                buffers: &[GlobeVertex::LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: true,
            },
        );
        let wireframe = LayerMaterial::new(
            device,
            format,
            sample_count,
            LayerDescriptor {
                label: "globe wireframe",
                shader: WIREFRAME_SHADER,
                uniform_size: std::mem::size_of::<LineUniforms>() as u64,
                buffers: &[LineVertex::LAYOUT],
                topology: wgpu::PrimitiveTopology::LineList,
                depth_write: false,
            },
        );
        let points = LayerMaterial::new(
            device,
            format,
            sample_count,
            LayerDescriptor {
                label: "globe points",
                shader: POINTS_SHADER,
                uniform_size: std::mem::size_of::<PointUniforms>() as u64,
                buffers: &[PointInstance::LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: false,
            },
        );

        Self {
            sphere,
            wireframe,
            points,
        }
    }

    pub fn upload(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.sphere.uniform_buffer, 0, bytemuck::bytes_of(&uniforms.sphere));
        queue.write_buffer(
            &self.wireframe.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms.wireframe),
        );
        queue.write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&uniforms.points));
    }

    /// Record sphere, wireframe and points in that order.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, buffers: &'a GlobeBuffers) {
        pass.set_pipeline(&self.sphere.pipeline);
        pass.set_bind_group(0, &self.sphere.bind_group, &[]);
        pass.set_vertex_buffer(0, buffers.sphere_vertices.slice(..));
        pass.set_index_buffer(buffers.sphere_indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..buffers.index_count, 0, 0..1);

        pass.set_pipeline(&self.wireframe.pipeline);
        pass.set_bind_group(0, &self.wireframe.bind_group, &[]);
        pass.set_vertex_buffer(0, buffers.wireframe_vertices.slice(..));
        pass.draw(0..buffers.wireframe_vertex_count, 0..1);

        if buffers.point_count > 0 {
            pass.set_pipeline(&self.points.pipeline);
            pass.set_bind_group(0, &self.points.bind_group, &[]);
            pass.set_vertex_buffer(0, buffers.point_positions.slice(..));
            pass.draw(0..POINT_QUAD_VERTICES, 0..buffers.point_count);
        }
    }

    pub fn destroy(&self) {
        self.sphere.uniform_buffer.destroy();
        self.wireframe.uniform_buffer.destroy();
        self.points.uniform_buffer.destroy();
    }
}

/// Depth buffer and, with MSAA, the multisampled color target.
pub struct RenderTargets {
    depth: wgpu::Texture,
    pub depth_view: wgpu::TextureView,
    msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
}

impl RenderTargets {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let depth = create_target(device, "globe depth", DEPTH_FORMAT, width, height, sample_count);
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let msaa = (sample_count > 1).then(|| {
            let texture = create_target(device, "globe msaa color", format, width, height, sample_count);
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            (texture, view)
        });

        Self {
            depth,
            depth_view,
            msaa,
        }
    }

    /// Attachment view and resolve target for a frame presented to `frame_view`.
    pub fn color_attachment<'a>(
        &'a self,
        frame_view: &'a wgpu::TextureView,
    ) -> (&'a wgpu::TextureView, Option<&'a wgpu::TextureView>) {
        match &self.msaa {
            Some((_, msaa_view)) => (msaa_view, Some(frame_view)),
            None => (frame_view, None),
        }
    }

    pub fn destroy(&self) {
        self.depth.destroy();
        if let Some((texture, _)) = &self.msaa {
            texture.destroy();
        }
    }
}

fn create_target(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    })
}
