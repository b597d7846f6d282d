//! CPU reference of the two flat-shader stages.
//!
//! These are the same pure functions the WGSL in
//! `assets/shaders/flat.wgsl` expresses, written in plain Rust so the
//! contract can be pinned by unit tests without a GPU.  Both stages are
//! total functions of their inputs — no state, no side effects — so a
//! software rasterizer could drop them in unchanged.

use glam::{Vec3, Vec4};

use crate::material::GpuMaterial;

/// Per-vertex input: one attribute, the object-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInput {
    pub position: Vec3,
}

/// Per-vertex output: the builtin clip-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    pub clip_position: Vec4,
}

/// Vertex stage: extend the position with a homogeneous 1.0.
///
/// No transform is applied — inputs are treated as already being in clip
/// space.  Non-finite components pass through unchanged; what the
/// rasterizer does with such a primitive is backend-defined.
pub fn vertex_stage(input: VertexInput) -> VertexOutput {
    VertexOutput {
        clip_position: input.position.extend(1.0),
    }
}

/// Fragment stage: the ambient colour of the first bound material.
///
/// The interpolated position, the diffuse/specular terms and every record
/// past index 0 are ignored, so every covered fragment of a draw comes out
/// identical.  The non-empty slice is the caller's invariant, exactly as it
/// is for the storage buffer on the GPU; [`crate::MaterialBank`] enforces
/// it at construction.
pub fn fragment_stage(materials: &[GpuMaterial]) -> [f32; 4] {
    materials[0].ambient
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_core::{Color, MaterialDescriptor};

    fn bank(colors: &[Color]) -> Vec<GpuMaterial> {
        colors
            .iter()
            .map(|&c| GpuMaterial::from(MaterialDescriptor::uniform(c)))
            .collect()
    }

    #[test]
    fn vertex_stage_appends_homogeneous_one() {
        let out = vertex_stage(VertexInput {
            position: Vec3::new(0.5, -0.5, 0.0),
        });
        assert_eq!(out.clip_position, Vec4::new(0.5, -0.5, 0.0, 1.0));
    }

    #[test]
    fn vertex_stage_applies_no_transform() {
        // Components are carried through bit-for-bit, including values far
        // outside the clip volume.
        let p = Vec3::new(123.25, -0.0, 8192.5);
        let out = vertex_stage(VertexInput { position: p });
        assert_eq!(out.clip_position.truncate(), p);
        assert_eq!(out.clip_position.w, 1.0);
    }

    #[test]
    fn vertex_stage_is_pure() {
        let input = VertexInput {
            position: Vec3::new(0.1, 0.2, 0.3),
        };
        assert_eq!(vertex_stage(input), vertex_stage(input));
    }

    #[test]
    fn fragment_stage_returns_first_ambient() {
        let materials = bank(&[Color::RED]);
        assert_eq!(fragment_stage(&materials), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn fragment_stage_ignores_diffuse_and_specular() {
        let materials = vec![GpuMaterial::from(MaterialDescriptor::new(
            Color::RED,
            Color::GREEN,
            Color::BLUE,
        ))];
        assert_eq!(fragment_stage(&materials), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn fragment_stage_never_reads_past_first_record() {
        let materials = bank(&[Color::CYAN, Color::YELLOW]);
        assert_eq!(fragment_stage(&materials), [0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn fragment_stage_is_pure() {
        let materials = bank(&[Color::MAGENTA]);
        assert_eq!(fragment_stage(&materials), fragment_stage(&materials));
    }
}
