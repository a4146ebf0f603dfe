//! Sampled scene textures.

use image::RgbaImage;

use super::texture_resource::TextureResource;

/// A GPU image bound for sampling in fragment shaders (bind group 1).
pub struct Texture {
    resource: TextureResource,
    bind_group: wgpu::BindGroup,
}

impl Texture {
    /// Layout shared by every textured program: texture at binding 0,
    /// sampler at binding 1, both fragment-visible.
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        layout: &wgpu::BindGroupLayout,
        label: &str,
    ) -> Self {
        let resource = TextureResource::from_image(device, queue, image, label);
        let sampler = TextureResource::repeat_sampler(device, label, wgpu::FilterMode::Linear);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", label)),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&resource.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            resource,
            bind_group,
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Releases the GPU allocation.
    pub fn unload(self) {
        self.resource.texture.destroy();
    }
}
