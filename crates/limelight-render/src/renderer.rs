use crate::lighting::{BlockUniforms, CameraUniforms};
use crate::text_mesh::{build_text_mesh, TextVertex};
use limelight_core::types::TextAlign;
use std::ops::Range;
use wgpu::util::DeviceExt;

/// Upper bound on headline blocks a scene can carry.
pub const MAX_TEXT_BLOCKS: usize = 8;

/// Dynamic-offset stride for per-block uniforms. 256 satisfies every
/// adapter's min_uniform_buffer_offset_alignment.
const BLOCK_UNIFORM_STRIDE: u64 = 256;

struct TextBatch {
    fill_range: Range<u32>,
    outline_range: Range<u32>,
}

/// Single public struct owning all rendering GPU resources, created once
/// at init. Text content is fixed for the lifetime of the page, so the
/// glyph meshes are baked here; per-frame work is uniform writes only.
pub struct Renderer {
    fill_pipeline: wgpu::RenderPipeline,
    outline_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    block_buffer: wgpu::Buffer,
    block_bind_group: wgpu::BindGroup,
    fill_vertex_buffer: wgpu::Buffer,
    outline_vertex_buffer: wgpu::Buffer,
    batches: Vec<TextBatch>,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        blocks: &[(&str, TextAlign)],
    ) -> Self {
        let fill_wgsl = include_str!("../../../shaders/text_fill.wgsl");
        let outline_wgsl = include_str!("../../../shaders/text_outline.wgsl");

        let fill_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("text-fill-shader"),
            source: wgpu::ShaderSource::Wgsl(fill_wgsl.into()),
        });
        let outline_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("text-outline-shader"),
            source: wgpu::ShaderSource::Wgsl(outline_wgsl.into()),
        });

        // -- Bake glyph meshes for every block --
        let blocks = if blocks.len() > MAX_TEXT_BLOCKS {
            log::warn!(
                "{} text blocks exceeds the limit of {MAX_TEXT_BLOCKS}; extra blocks dropped",
                blocks.len()
            );
            &blocks[..MAX_TEXT_BLOCKS]
        } else {
            blocks
        };

        let mut fill_vertices: Vec<TextVertex> = Vec::new();
        let mut outline_vertices: Vec<TextVertex> = Vec::new();
        let mut batches = Vec::with_capacity(blocks.len());
        for (text, align) in blocks {
            let mesh = build_text_mesh(text, *align);
            let fill_start = fill_vertices.len() as u32;
            let outline_start = outline_vertices.len() as u32;
            fill_vertices.extend_from_slice(&mesh.fill_vertices);
            outline_vertices.extend_from_slice(&mesh.outline_vertices);
            batches.push(TextBatch {
                fill_range: fill_start..fill_vertices.len() as u32,
                outline_range: outline_start..outline_vertices.len() as u32,
            });
        }

        let fill_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("text-fill-vertices"),
            contents: bytemuck::cast_slice(&fill_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let outline_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("text-outline-vertices"),
            contents: bytemuck::cast_slice(&outline_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // -- Uniform buffers --
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera-uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let block_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("block-uniforms"),
            size: MAX_TEXT_BLOCKS as u64 * BLOCK_UNIFORM_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // -- Bind groups --
        let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera-bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CameraUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });
        let block_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("block-bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<BlockUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera-bind-group"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });
        let block_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("block-bind-group"),
            layout: &block_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &block_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<BlockUniforms>() as u64),
                }),
            }],
        });

        // -- Pipelines --
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("text-pipeline-layout"),
            bind_group_layouts: &[&camera_bgl, &block_bgl],
            push_constant_ranges: &[],
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        };

        let make_pipeline = |label: &str, module: &wgpu::ShaderModule| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout.clone()],
                },
                fragment: Some(wgpu::FragmentState {
                    module,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
        };

        let fill_pipeline = make_pipeline("text-fill-pipeline", &fill_module);
        let outline_pipeline = make_pipeline("text-outline-pipeline", &outline_module);

        log::info!(
            "renderer ready: {} blocks, {} fill / {} outline vertices",
            batches.len(),
            fill_vertices.len(),
            outline_vertices.len()
        );

        Self {
            fill_pipeline,
            outline_pipeline,
            camera_buffer,
            camera_bind_group,
            block_buffer,
            block_bind_group,
            fill_vertex_buffer,
            outline_vertex_buffer,
            batches,
        }
    }

    /// Upload this frame's camera and per-block uniforms. `blocks` must
    /// line up with the batches baked at init.
    pub fn prepare(
        &self,
        queue: &wgpu::Queue,
        camera: CameraUniforms,
        blocks: &[BlockUniforms],
    ) {
        debug_assert_eq!(blocks.len(), self.batches.len(), "draw list drifted");
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera));
        for (i, block) in blocks.iter().take(self.batches.len()).enumerate() {
            queue.write_buffer(
                &self.block_buffer,
                i as u64 * BLOCK_UNIFORM_STRIDE,
                bytemuck::bytes_of(block),
            );
        }
    }

    /// Record the scene pass: clear to black, then every block's fill and
    /// outline geometry.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.camera_bind_group, &[]);

        pass.set_pipeline(&self.fill_pipeline);
        pass.set_vertex_buffer(0, self.fill_vertex_buffer.slice(..));
        for (i, batch) in self.batches.iter().enumerate() {
            let offset = (i as u64 * BLOCK_UNIFORM_STRIDE) as u32;
            pass.set_bind_group(1, &self.block_bind_group, &[offset]);
            pass.draw(batch.fill_range.clone(), 0..1);
        }

        pass.set_pipeline(&self.outline_pipeline);
        pass.set_vertex_buffer(0, self.outline_vertex_buffer.slice(..));
        for (i, batch) in self.batches.iter().enumerate() {
            let offset = (i as u64 * BLOCK_UNIFORM_STRIDE) as u32;
            pass.set_bind_group(1, &self.block_bind_group, &[offset]);
            pass.draw(batch.outline_range.clone(), 0..1);
        }
    }
}
