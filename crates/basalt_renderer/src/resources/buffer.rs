/// Thin wrappers over `wgpu::Buffer` creation that enforce common usage
/// patterns and remove boilerplate from higher-level modules.
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Creates a GPU vertex buffer from a slice of `Pod` data.
pub fn create_vertex<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX,
        }),
    )
}

/// Creates a GPU storage buffer initialised with `data`.
///
/// The buffer carries `STORAGE | COPY_DST` usages: shaders bind it
/// (read-only in our layouts) and the CPU can overwrite records in place via
/// [`write_element`] between frames.
pub fn create_storage<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        }),
    )
}

/// Overwrites the `index`-th `T`-sized record of `buffer` with `data`.
///
/// The write is staged on the queue, so it is ordered before any draw
/// submitted after this call — the shader never observes a half-written
/// record.
pub fn write_element<T: bytemuck::Pod>(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    index: usize,
    data: &T,
) {
    let offset = (index * std::mem::size_of::<T>()) as wgpu::BufferAddress;
    queue.write_buffer(buffer, offset, bytemuck::bytes_of(data));
}
