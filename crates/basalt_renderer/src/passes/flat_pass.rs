/// Flat geometry pass.
///
/// Clears the color attachment, binds the material bank at group 0 and
/// emits one non-indexed draw per mesh.  There is no depth attachment —
/// primitives land in submission order.
use wgpu::{
    Color, CommandEncoder, LoadOp, Operations, RenderPassColorAttachment, RenderPassDescriptor,
    StoreOp, TextureView,
};

use crate::geometry::Mesh;
use crate::material::MaterialBank;
use crate::pipeline::FlatPipeline;

pub struct FlatPass {
    pipeline: FlatPipeline,
    /// Background / clear color.
    pub clear_color: Color,
}

impl FlatPass {
    pub fn new(pipeline: FlatPipeline) -> Self {
        Self {
            pipeline,
            clear_color: Color {
                r: 0.1,
                g: 0.2,
                b: 0.3,
                a: 1.0,
            },
        }
    }

    pub fn execute(
        &self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        materials: &MaterialBank,
        meshes: &[Mesh],
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Flat Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: Operations {
                    load: LoadOp::Clear(self.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*materials.bind_group, &[]);

        for mesh in meshes {
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.draw(0..mesh.vertex_count, 0..1);
        }
    }
}
