//! Render pipeline management system for wgpu
//!
//! Compiles vertex and fragment WGSL modules separately, caches them by file
//! name so several programs can share a stage, and links pairs of them into
//! [`Program`]s with shared bind group layouts.

use std::{collections::HashMap, path::Path, sync::Arc};
use wgpu::*;

use super::program::Program;
use super::vertex::Vertex3D;
use crate::error::AssetError;
use crate::gfx::resources::Texture;

/// Layout name for the per-program MVP uniform (group 0).
pub const UNIFORM_LAYOUT: &str = "uniforms";
/// Layout name for the sampled texture (group 1).
pub const TEXTURE_LAYOUT: &str = "texture";

/// Configuration for creating a shader program
///
/// Names a vertex module and a fragment module previously loaded with
/// [`PipelineManager::load_shader`], plus the fixed render state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub vertex_shader: String,
    pub fragment_shader: String,
    pub textured: bool,
    pub primitive_topology: PrimitiveTopology,
    pub cull_mode: Option<Face>,
    pub color_format: TextureFormat,
    pub depth_format: Option<TextureFormat>,
}

impl PipelineConfig {
    /// Creates a config pairing a vertex and a fragment module
    ///
    /// Defaults to triangle lists, back-face culling and no depth buffer.
    pub fn new(vertex_shader: &str, fragment_shader: &str) -> Self {
        Self {
            label: format!("{vertex_shader} + {fragment_shader}"),
            vertex_shader: vertex_shader.to_string(),
            fragment_shader: fragment_shader.to_string(),
            textured: false,
            primitive_topology: PrimitiveTopology::TriangleList,
            cull_mode: Some(Face::Back),
            color_format: TextureFormat::Bgra8UnormSrgb,
            depth_format: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    /// Adds the texture bind group at group 1 (builder pattern)
    pub fn with_texture(mut self) -> Self {
        self.textured = true;
        self
    }

    /// Sets the colour target format (builder pattern)
    pub fn with_color_format(mut self, format: TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    /// Enables depth testing against a buffer of this format (builder pattern)
    pub fn with_depth_format(mut self, format: TextureFormat) -> Self {
        self.depth_format = Some(format);
        self
    }
}

/// Builds shader programs from separately compiled stages
///
/// Every compile and link step runs inside a validation error scope, so a
/// bad shader surfaces as an [`AssetError::Shader`] at load time instead of
/// an uncaptured device error mid-frame.
pub struct PipelineManager {
    device: Arc<Device>,
    shader_modules: HashMap<String, ShaderModule>,
    common_layouts: HashMap<String, BindGroupLayout>,
}

impl PipelineManager {
    /// Creates a new pipeline manager with the uniform and texture layouts
    /// registered
    ///
    /// # Arguments
    /// * `device` - Shared wgpu device for creating resources
    pub fn new(device: Arc<Device>) -> Self {
        let uniform_layout = Program::uniform_bind_group_layout(&device);
        let texture_layout = Texture::bind_group_layout(&device);

        let mut manager = Self {
            device,
            shader_modules: HashMap::new(),
            common_layouts: HashMap::new(),
        };
        manager.register_bind_group_layout(UNIFORM_LAYOUT, uniform_layout);
        manager.register_bind_group_layout(TEXTURE_LAYOUT, texture_layout);
        manager
    }

    /// Registers a shared bind group layout
    ///
    /// # Arguments
    /// * `name` - Identifier for this layout
    /// * `layout` - The bind group layout to register
    pub fn register_bind_group_layout(&mut self, name: &str, layout: BindGroupLayout) {
        self.common_layouts.insert(name.to_string(), layout);
    }

    /// Gets a registered bind group layout by name
    pub fn get_bind_group_layout(&self, name: &str) -> Option<&BindGroupLayout> {
        self.common_layouts.get(name)
    }

    /// Compiles a shader module and caches it under `name`
    ///
    /// # Arguments
    /// * `name` - Shader identifier, usually its file name
    /// * `source` - WGSL shader source code
    pub fn load_shader(&mut self, name: &str, source: &str) -> Result<(), AssetError> {
        self.device.push_error_scope(ErrorFilter::Validation);
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });
        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(AssetError::Shader {
                name: name.to_string(),
                message: err.to_string(),
            });
        }

        log::debug!("compiled shader '{}'", name);
        self.shader_modules.insert(name.to_string(), shader_module);
        Ok(())
    }

    /// Reads `dir/name` and compiles it, unless `name` is already cached.
    pub fn load_shader_file(&mut self, dir: &Path, name: &str) -> Result<(), AssetError> {
        if self.shader_modules.contains_key(name) {
            return Ok(());
        }

        let path = dir.join(name);
        let source = std::fs::read_to_string(&path)
            .map_err(|source| AssetError::Read { path, source })?;
        self.load_shader(name, &source)
    }

    /// Links a vertex and fragment module into a program
    ///
    /// # Arguments
    /// * `name` - Program identifier used in errors and labels
    /// * `config` - Stage names and render state
    pub fn create_program(
        &self,
        name: &str,
        config: &PipelineConfig,
    ) -> Result<Program, AssetError> {
        let vertex = self.stage(name, &config.vertex_shader, "vertex")?;
        let fragment = self.stage(name, &config.fragment_shader, "fragment")?;
        let uniform_layout = self.layout(name, UNIFORM_LAYOUT)?;

        let mut bind_group_layout_refs = vec![uniform_layout];
        if config.textured {
            bind_group_layout_refs.push(self.layout(name, TEXTURE_LAYOUT)?);
        }

        self.device.push_error_scope(ErrorFilter::Validation);

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", name)),
                bind_group_layouts: &bind_group_layout_refs,
                push_constant_ranges: &[],
            });

        let depth_stencil = config.depth_format.map(|format| DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        });

        let pipeline = self
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&pipeline_layout),
                vertex: VertexState {
                    module: vertex,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex3D::desc()],
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(FragmentState {
                    module: fragment,
                    entry_point: Some("fs_main"),
                    targets: &[Some(ColorTargetState {
                        format: config.color_format,
                        blend: Some(BlendState::REPLACE),
                        write_mask: ColorWrites::ALL,
                    })],
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: PrimitiveState {
                    topology: config.primitive_topology,
                    strip_index_format: None,
                    front_face: FrontFace::Ccw,
                    cull_mode: config.cull_mode,
                    polygon_mode: PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil,
                multisample: MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            return Err(AssetError::Shader {
                name: name.to_string(),
                message: err.to_string(),
            });
        }

        log::debug!(
            "linked program '{}' ({} + {})",
            name,
            config.vertex_shader,
            config.fragment_shader
        );
        Ok(Program::new(&self.device, name, pipeline, uniform_layout, config.textured))
    }

    fn stage(
        &self,
        program: &str,
        shader: &str,
        stage: &'static str,
    ) -> Result<&ShaderModule, AssetError> {
        self.shader_modules
            .get(shader)
            .ok_or_else(|| AssetError::ShaderStage {
                name: program.to_string(),
                shader: shader.to_string(),
                stage,
            })
    }

    fn layout(&self, program: &str, layout: &str) -> Result<&BindGroupLayout, AssetError> {
        self.common_layouts
            .get(layout)
            .ok_or_else(|| AssetError::Shader {
                name: program.to_string(),
                message: format!("bind group layout '{}' not registered", layout),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_cull_back_faces() {
        let config = PipelineConfig::new("a.vert.wgsl", "b.frag.wgsl");
        assert_eq!(config.cull_mode, Some(Face::Back));
        assert_eq!(config.primitive_topology, PrimitiveTopology::TriangleList);
        assert!(!config.textured);
        assert!(config.depth_format.is_none());
        assert_eq!(config.label, "a.vert.wgsl + b.frag.wgsl");
    }

    #[test]
    fn builder_sets_texture_and_depth() {
        let config = PipelineConfig::new("v", "f")
            .with_label("textured")
            .with_texture()
            .with_depth_format(TextureFormat::Depth32Float)
            .with_color_format(TextureFormat::Rgba8UnormSrgb);
        assert!(config.textured);
        assert_eq!(config.depth_format, Some(TextureFormat::Depth32Float));
        assert_eq!(config.color_format, TextureFormat::Rgba8UnormSrgb);
        assert_eq!(config.label, "textured");
    }
}
