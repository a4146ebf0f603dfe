//! GPU-resident meshes.

use wgpu::util::DeviceExt;

use crate::gfx::geometry::GeometryData;

/// Vertex and index buffers for one piece of geometry.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    vertex_count: u32,
}

impl Mesh {
    /// Interleaves `data` and uploads it.
    pub fn upload(device: &wgpu::Device, data: &GeometryData, label: &str) -> Self {
        let vertices = data.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh '{}': {} vertices, {} triangles",
            label,
            vertices.len(),
            data.triangle_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            vertex_count: vertices.len() as u32,
        }
    }

    /// Records an indexed draw of the whole mesh.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Releases both buffers.
    pub fn unload(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}
