/// Shared `wgpu::BindGroupLayout` objects.  Centralising them here means
/// every pass and bank that needs the materials group uses the *same*
/// layout without re-creating it.
use std::sync::Arc;

use crate::material::GpuMaterial;

/// All bind-group layouts used by the built-in pipelines.
///
/// Layouts are created once and shared via `Arc` so individual passes can
/// hold a reference without owning the whole struct.
#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0) — the materials array: one read-only `STORAGE` buffer at
    /// binding 0, visible to the fragment stage only.
    pub materials: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let materials = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Materials"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        // At least one 48-byte Material record must be bound.
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<GpuMaterial>() as u64,
                        ),
                    },
                    count: None,
                }],
            },
        ));

        Self { materials }
    }
}
