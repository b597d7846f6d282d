/// The flat render pipeline.
///
/// Compiles `assets/shaders/flat.wgsl` and combines it with the vertex
/// layout and the materials bind-group layout from
/// [`crate::pipeline::PipelineLayouts`].  The resulting
/// `wgpu::RenderPipeline` is `Arc`-wrapped and cheaply cloneable.
use std::sync::Arc;

use crate::geometry::Vertex;
use crate::pipeline::PipelineLayouts;

#[derive(Clone)]
pub struct FlatPipeline {
    pub inner: Arc<wgpu::RenderPipeline>,
    /// Layouts are kept here so passes and banks can create bind groups
    /// without needing the full `PipelineLayouts` struct.
    pub layouts: PipelineLayouts,
}

impl FlatPipeline {
    /// Compiles and links the flat shader for the given `target_format` and
    /// `sample_count`.
    pub fn new(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: PipelineLayouts,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../../../assets/shaders/flat.wgsl"
        ));

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[&layouts.materials],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            // Positions arrive pre-sorted in clip space; no depth buffer.
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            inner: Arc::new(pipeline),
            layouts,
        }
    }
}

#[cfg(test)]
mod tests {
    const FLAT_SHADER: &str = include_str!("../../../../assets/shaders/flat.wgsl");

    fn parse_and_validate() -> naga::Module {
        let module = naga::front::wgsl::parse_str(FLAT_SHADER)
            .unwrap_or_else(|e| panic!("WGSL parse error: {e:?}"));

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .unwrap_or_else(|e| panic!("WGSL validation error: {e:?}"));

        module
    }

    #[test]
    fn shader_compiles_and_validates() {
        parse_and_validate();
    }

    #[test]
    fn shader_declares_both_entry_points() {
        let module = parse_and_validate();

        let stage_of = |name: &str| {
            module
                .entry_points
                .iter()
                .find(|ep| ep.name == name)
                .unwrap_or_else(|| panic!("missing entry point {name}"))
                .stage
        };
        assert_eq!(stage_of("vs_main"), naga::ShaderStage::Vertex);
        assert_eq!(stage_of("fs_main"), naga::ShaderStage::Fragment);
    }

    #[test]
    fn materials_bound_as_read_only_storage_at_group0_binding0() {
        let module = parse_and_validate();

        let (_, var) = module
            .global_variables
            .iter()
            .find(|(_, v)| v.name.as_deref() == Some("materials"))
            .expect("missing materials global");

        assert_eq!(
            var.space,
            naga::AddressSpace::Storage {
                access: naga::StorageAccess::LOAD,
            }
        );
        assert_eq!(
            var.binding,
            Some(naga::ResourceBinding {
                group: 0,
                binding: 0,
            })
        );
    }

    #[test]
    fn fragment_stage_samples_first_ambient() {
        // Textual pin of the contract: index 0, ambient term only.
        assert!(FLAT_SHADER.contains("materials[0].ambient"));
        assert!(!FLAT_SHADER.contains(".diffuse"));
        assert!(!FLAT_SHADER.contains(".specular"));
    }

    #[test]
    fn vertex_stage_is_a_pass_through() {
        // No transform uniform exists anywhere in the module.
        assert!(FLAT_SHADER.contains("vec4<f32>(in.position, 1.0)"));
        assert!(!FLAT_SHADER.contains("var<uniform>"));
    }
}
