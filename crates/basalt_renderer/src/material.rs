//! GPU-side material storage.
//!
//! Materials live in a single read-only storage buffer bound at
//! `@group(0) @binding(0)`.  Any number of fragment invocations may read the
//! bank concurrently; nothing on the GPU ever writes it.  CPU-side updates
//! go through [`MaterialBank::write`], which stages the copy on the queue so
//! it is ordered before any subsequently submitted draw.

use std::sync::Arc;

use basalt_core::MaterialDescriptor;
use thiserror::Error;

use crate::resources::buffer;

/// One record of the materials storage buffer.
///
/// Three consecutive `vec4<f32>` fields, 48 bytes, no padding — this must
/// stay in lock-step with the `Material` struct in
/// `assets/shaders/flat.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuMaterial {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<MaterialDescriptor> for GpuMaterial {
    fn from(m: MaterialDescriptor) -> Self {
        Self {
            ambient: m.ambient.to_array(),
            diffuse: m.diffuse.to_array(),
            specular: m.specular.to_array(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MaterialError {
    /// The flat shader unconditionally reads record 0, so an empty bank can
    /// never be allowed to reach a draw call.
    #[error("material bank must hold at least one material")]
    Empty,
    #[error("material index {index} out of bounds (bank holds {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// The bound materials array: storage buffer plus its bind group.
///
/// A `MaterialBank` is constructible only from a non-empty descriptor
/// slice, which is what makes the shader's `materials[0]` access safe —
/// every bind group that can reach a draw satisfies the invariant.  The
/// bank may hold more than one record; the flat shader still samples only
/// the first.
pub struct MaterialBank {
    buffer: Arc<wgpu::Buffer>,
    pub bind_group: Arc<wgpu::BindGroup>,
    len: usize,
}

impl MaterialBank {
    /// Uploads `materials` and creates the group-0 bind group.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::Empty`] if `materials` is empty.
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        materials: &[MaterialDescriptor],
    ) -> Result<Self, MaterialError> {
        let records = Self::lower(materials)?;
        let buffer = buffer::create_storage(device, "Material Bank", &records);

        let bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Material Bank Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        }));

        Ok(Self {
            buffer,
            bind_group,
            len: records.len(),
        })
    }

    /// Lowers descriptors to GPU records, rejecting the empty case.
    pub fn lower(materials: &[MaterialDescriptor]) -> Result<Vec<GpuMaterial>, MaterialError> {
        if materials.is_empty() {
            return Err(MaterialError::Empty);
        }
        Ok(materials.iter().copied().map(Into::into).collect())
    }

    /// Overwrites one record in place.
    ///
    /// The bank's length is fixed at creation; growing it means rebuilding
    /// the bank (and its bind group).
    pub fn write(
        &self,
        queue: &wgpu::Queue,
        index: usize,
        material: MaterialDescriptor,
    ) -> Result<(), MaterialError> {
        check_index(index, self.len)?;
        buffer::write_element(queue, &self.buffer, index, &GpuMaterial::from(material));
        Ok(())
    }

    /// Number of records in the bank.  Always at least 1.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` — a bank is constructible only non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Bounds check for record updates, kept device-free for testability.
fn check_index(index: usize, len: usize) -> Result<(), MaterialError> {
    if index >= len {
        return Err(MaterialError::OutOfBounds { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_core::Color;

    #[test]
    fn record_is_48_bytes() {
        // Must match the WGSL Material struct: three vec4<f32> fields.
        assert_eq!(std::mem::size_of::<GpuMaterial>(), 48);
        assert_eq!(std::mem::align_of::<GpuMaterial>(), 4);
    }

    #[test]
    fn descriptor_lowering_preserves_channels() {
        let m = GpuMaterial::from(MaterialDescriptor::new(
            Color::RED,
            Color::GREEN,
            Color::BLUE,
        ));
        assert_eq!(m.ambient, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(m.diffuse, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(m.specular, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(MaterialBank::lower(&[]).unwrap_err(), MaterialError::Empty);
    }

    #[test]
    fn write_past_end_is_rejected() {
        assert_eq!(
            check_index(2, 2).unwrap_err(),
            MaterialError::OutOfBounds { index: 2, len: 2 }
        );
        assert_eq!(
            check_index(7, 1).unwrap_err(),
            MaterialError::OutOfBounds { index: 7, len: 1 }
        );
        assert!(check_index(1, 2).is_ok());
        assert!(check_index(0, 1).is_ok());
    }

    #[test]
    fn lowering_keeps_record_order() {
        let records = MaterialBank::lower(&[
            MaterialDescriptor::uniform(Color::CYAN),
            MaterialDescriptor::uniform(Color::YELLOW),
        ])
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ambient, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(records[1].ambient, [1.0, 1.0, 0.0, 1.0]);
    }
}
