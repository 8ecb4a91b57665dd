//! Mesh pipeline
//!
//! Draws every visible scene mesh with either Lambert shading (ambient plus
//! directional lights) or a flat unlit color. Double-sided materials use a
//! second pipeline with culling disabled. The pipeline owns the depth buffer
//! shared by the whole frame.

use std::num::NonZeroU64;

use skyward_core::VisibleMesh;
use wgpu::util::DeviceExt;

use super::types::{FrameUniforms, MeshVertex, ObjectUniforms};
use crate::gpu_mesh::GpuMeshCache;

/// Depth format used by every pipeline in the frame
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Number of object slots allocated up front
const INITIAL_OBJECT_CAPACITY: usize = 64;

/// Round `size` up to a multiple of `alignment`
pub(crate) fn align_to(size: u64, alignment: u64) -> u64 {
    if alignment == 0 {
        return size;
    }
    size.div_ceil(alignment) * alignment
}

/// Render pipeline for scene meshes
pub struct MeshPipeline {
    /// Back faces culled
    culled: wgpu::RenderPipeline,
    /// Both faces drawn
    double_sided: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    /// Bytes between consecutive object slots
    object_stride: u64,
    object_capacity: usize,
    /// Objects written by the last `prepare`
    object_count: usize,
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl MeshPipeline {
    /// Create a new mesh pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Object Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<ObjectUniforms>() as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&frame_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/mesh.wgsl").into()),
        });

        let culled = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            Some(wgpu::Face::Back),
            "Mesh Pipeline",
        );
        let double_sided = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            None,
            "Double-Sided Mesh Pipeline",
        );

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Frame Bind Group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let object_stride = align_to(
            std::mem::size_of::<ObjectUniforms>() as u64,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let (object_buffer, object_bind_group) =
            Self::create_object_storage(device, &object_layout, object_stride, INITIAL_OBJECT_CAPACITY);

        Self {
            culled,
            double_sided,
            frame_buffer,
            frame_bind_group,
            object_layout,
            object_buffer,
            object_bind_group,
            object_stride,
            object_capacity: INITIAL_OBJECT_CAPACITY,
            object_count: 0,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        cull_mode: Option<wgpu::Face>,
        label: &str,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn create_object_storage(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        stride: u64,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mesh Object Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(std::mem::size_of::<ObjectUniforms>() as u64),
                }),
            }],
        });
        (buffer, bind_group)
    }

    /// Get the vertex buffer layout for MeshVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // normal: vec3<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Write frame and per-object uniforms for this frame's draws
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &FrameUniforms,
        visible: &[VisibleMesh],
    ) {
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(frame));

        if visible.len() > self.object_capacity {
            let capacity = visible.len().next_power_of_two();
            let (buffer, bind_group) =
                Self::create_object_storage(device, &self.object_layout, self.object_stride, capacity);
            self.object_buffer = buffer;
            self.object_bind_group = bind_group;
            self.object_capacity = capacity;
            log::debug!("Grew mesh object buffer to {} slots", capacity);
        }

        let stride = self.object_stride as usize;
        let mut bytes = vec![0u8; stride * visible.len()];
        for (slot, mesh) in bytes.chunks_exact_mut(stride).zip(visible) {
            let uniforms = ObjectUniforms::new(&mesh.world, &mesh.material);
            let data = bytemuck::bytes_of(&uniforms);
            slot[..data.len()].copy_from_slice(data);
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.object_buffer, 0, &bytes);
        }
        self.object_count = visible.len();
    }

    /// Ensure depth texture exists and is the right size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture = Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Depth attachment for the frame, once created
    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth_texture.as_ref()
    }

    /// Record draws for the meshes passed to the last `prepare`
    ///
    /// Meshes not yet in the cache are skipped.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, cache: &GpuMeshCache, visible: &[VisibleMesh]) {
        pass.set_bind_group(0, &self.frame_bind_group, &[]);

        let mut current_double_sided = None;
        for (index, mesh) in visible.iter().take(self.object_count).enumerate() {
            let Some(gpu) = cache.get(mesh.mesh) else {
                continue;
            };
            let double_sided = mesh.material.double_sided;
            if current_double_sided != Some(double_sided) {
                pass.set_pipeline(if double_sided { &self.double_sided } else { &self.culled });
                current_double_sided = Some(double_sided);
            }
            let offset = (index as u64 * self.object_stride) as u32;
            pass.set_bind_group(1, &self.object_bind_group, &[offset]);
            pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
            pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }
}
