/// A drawable GPU mesh — a vertex buffer plus the number of vertices in it.
///
/// Meshes are cheaply cloneable because the underlying buffer is `Arc`-
/// wrapped; a second handle does **not** copy GPU memory.  The flat pipeline
/// draws non-indexed triangle lists, so no index buffer is carried.
use std::sync::Arc;

use crate::geometry::{primitives, Vertex};
use crate::resources::buffer;

#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    pub vertex_count: u32,
}

impl Mesh {
    /// Uploads `vertices` and returns a mesh drawing them as a triangle list.
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        Self {
            vertex_buffer: buffer::create_vertex(device, label, vertices),
            vertex_count: vertices.len() as u32,
        }
    }

    /// Convenience constructor — the clip-space test triangle.
    pub fn triangle(device: &wgpu::Device) -> Self {
        primitives::triangle(device)
    }
}
