//! `basalt_renderer` — the flat-material wgpu renderer.
//!
//! # Module layout
//!
//! | Module      | Responsibility                                        |
//! |-------------|-------------------------------------------------------|
//! | `context`   | Re-exports `GpuContext`; device/queue accessors       |
//! | `resources` | Low-level buffer allocation helpers                   |
//! | `geometry`  | `Vertex`, `Mesh`, built-in triangle                   |
//! | `material`  | `GpuMaterial`, `MaterialBank` storage binding         |
//! | `stages`    | CPU reference of the vertex/fragment stage contract   |
//! | `pipeline`  | Bind-group layouts + compiled `FlatPipeline`          |
//! | `passes`    | The built-in `FlatPass`                               |

pub mod context;
pub mod geometry;
pub mod material;
pub mod passes;
pub mod pipeline;
pub mod resources;
pub mod stages;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use basalt_core::{Color, MaterialDescriptor};
pub use context::GpuContext;
pub use geometry::{Mesh, Vertex};
pub use glam;
pub use material::{GpuMaterial, MaterialBank, MaterialError};

use passes::FlatPass;
use pipeline::{FlatPipeline, PipelineLayouts};

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Top-level renderer.
///
/// Owns the GPU context, the compiled flat pipeline, the bound material
/// bank and the list of meshes drawn every frame.  The frame API is
/// [`Renderer::begin_frame`] followed by [`Renderer::render_to_view`] with
/// the swapchain view of the current frame.
pub struct Renderer {
    pub context: GpuContext,
    pass: FlatPass,
    materials: MaterialBank,
    meshes: Vec<Mesh>,
}

impl Renderer {
    /// Compiles the pipeline for `format` and uploads `materials`.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Empty`] if `materials` is empty — the flat
    /// shader reads record 0 unconditionally, so a renderer without at
    /// least one material must never exist.
    pub fn new(
        context: GpuContext,
        format: wgpu::TextureFormat,
        materials: &[MaterialDescriptor],
    ) -> Result<Self, MaterialError> {
        let device = &context.device;

        let layouts = PipelineLayouts::new(device);
        let bank = MaterialBank::new(device, &layouts.materials, materials)?;
        let pipeline = FlatPipeline::new(device, format, 1, layouts);

        log::debug!(
            "renderer ready: {} material(s), format {format:?}",
            bank.len()
        );

        Ok(Self {
            context,
            pass: FlatPass::new(pipeline),
            materials: bank,
            meshes: Vec::new(),
        })
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Renders every mesh into an external `TextureView` (e.g. a swapchain
    /// frame).
    pub fn render_to_view(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        self.pass
            .execute(encoder, view, None, &self.materials, &self.meshes);
    }

    // ── Scene management ──────────────────────────────────────────────────────

    /// Appends a mesh to the draw list; returns its stable index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Removes all meshes from the draw list.
    pub fn clear_meshes(&mut self) {
        self.meshes.clear();
    }

    // ── Materials ─────────────────────────────────────────────────────────────

    /// Overwrites one material record in place (GPU write).
    pub fn set_material(
        &self,
        index: usize,
        material: MaterialDescriptor,
    ) -> Result<(), MaterialError> {
        self.materials.write(&self.context.queue, index, material)
    }

    /// The bound material bank.
    pub fn materials(&self) -> &MaterialBank {
        &self.materials
    }

    // ── Clear color ───────────────────────────────────────────────────────────

    pub fn set_clear_color(&mut self, color: Color) {
        self.pass.clear_color = color.to_wgpu();
    }
}
