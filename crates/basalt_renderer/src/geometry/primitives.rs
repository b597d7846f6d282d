/// Built-in primitives.
///
/// Positions are authored directly in clip space because the flat pipeline
/// applies no transform — the triangle below covers the centre of the
/// viewport on any backend.
use crate::geometry::{Mesh, Vertex};

pub fn triangle(device: &wgpu::Device) -> Mesh {
    let vertices: &[Vertex] = &[
        Vertex::new(0.0, 0.5, 0.0),
        Vertex::new(-0.5, -0.5, 0.0),
        Vertex::new(0.5, -0.5, 0.0),
    ];

    Mesh::new(device, "Triangle VB", vertices)
}
