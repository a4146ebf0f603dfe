//! Linked shader programs and the scope that draws with them.

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::gfx::camera::camera_utils::convert_matrix4_to_array;
use crate::gfx::resources::{Mesh, Texture};

/// Model-view-projection matrix as laid out in the uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MvpUniform {
    pub mvp: [[f32; 4]; 4],
}

impl MvpUniform {
    pub fn new(mvp: Matrix4<f32>) -> Self {
        Self {
            mvp: convert_matrix4_to_array(mvp),
        }
    }
}

/// A render pipeline plus its MVP uniform.
///
/// Each program owns one uniform buffer, so it can be drawn with a single
/// transform per submitted frame.
pub struct Program {
    name: String,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    textured: bool,
}

impl Program {
    /// Layout for the MVP uniform at group 0, binding 0.
    pub fn uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("MVP Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    pub(crate) fn new(
        device: &wgpu::Device,
        name: &str,
        pipeline: wgpu::RenderPipeline,
        uniform_layout: &wgpu::BindGroupLayout,
        textured: bool,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} MVP Buffer", name)),
            contents: bytemuck::bytes_of(&MvpUniform::new(cgmath::SquareMatrix::identity())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} MVP Bind Group", name)),
            layout: uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            name: name.to_string(),
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            textured,
        }
    }

    /// Uploads the transform used by this frame's draws.
    pub fn set_mvp(&self, queue: &wgpu::Queue, mvp: Matrix4<f32>) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&MvpUniform::new(mvp)));
    }

    /// Makes this program current in `render_pass` until the scope ends.
    pub fn begin<'s, 'p>(
        &'s self,
        render_pass: &'s mut wgpu::RenderPass<'p>,
    ) -> ShaderScope<'s, 'p> {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        ShaderScope {
            program: self,
            render_pass,
            texture_bound: false,
        }
    }

    /// Releases the uniform buffer. The pipeline is dropped with `self`.
    pub fn unload(self) {
        self.uniform_buffer.destroy();
    }
}

/// A program bound to a render pass.
///
/// Textures and meshes are bound through the scope, so nothing can be drawn
/// without a current program.
pub struct ShaderScope<'s, 'p> {
    program: &'s Program,
    render_pass: &'s mut wgpu::RenderPass<'p>,
    texture_bound: bool,
}

impl ShaderScope<'_, '_> {
    /// Binds `texture` for sampling. Ignored by untextured programs.
    pub fn bind_texture(&mut self, texture: &Texture) -> &mut Self {
        if self.program.textured {
            self.render_pass.set_bind_group(1, texture.bind_group(), &[]);
            self.texture_bound = true;
        }
        self
    }

    /// Records a draw of `mesh` with the current program.
    ///
    /// A textured program with no texture bound draws nothing.
    pub fn draw(&mut self, mesh: &Mesh) -> &mut Self {
        if self.program.textured && !self.texture_bound {
            log::warn!("program '{}' drawn without a texture", self.program.name);
            return self;
        }
        mesh.draw(self.render_pass);
        self
    }

    /// Ends the scope. Dropping it has the same effect.
    pub fn end(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::SquareMatrix;

    #[test]
    fn uniform_is_column_major() {
        let m = Matrix4::from_translation(cgmath::Vector3::new(1.0, 2.0, 3.0));
        let uniform = MvpUniform::new(m);
        assert_eq!(uniform.mvp[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<MvpUniform>(), 64);
    }

    #[test]
    fn identity_uniform_has_unit_diagonal() {
        let uniform = MvpUniform::new(Matrix4::identity());
        for (i, column) in uniform.mvp.iter().enumerate() {
            assert_eq!(column[i], 1.0);
        }
    }
}
