/// GPU vertex type used by the flat pipeline.
///
/// A vertex is nothing but an object-space position; the flat shader
/// forwards it to clip space untransformed, so whatever is uploaded here is
/// what the rasterizer sees.  The matching WGSL attribute location is
/// declared in `assets/shaders/flat.wgsl`.
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position, consumed directly as a clip-space coordinate.
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }

    /// Returns the `VertexBufferLayout` that matches this struct's memory
    /// layout.  Pass this to `wgpu::VertexState::buffers` when building a
    /// render pipeline.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // @location(0) position
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
            ],
        }
    }
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Self {
            position: v.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn vec3_conversion() {
        let v = Vertex::from(Vec3::new(0.5, -0.5, 0.0));
        assert_eq!(v, Vertex::new(0.5, -0.5, 0.0));
    }
}
