//! GPU assets indexed by kind.

use std::path::Path;

use crate::error::AssetError;
use crate::gfx::geometry::{self, GeometryData};
use crate::gfx::rendering::pipeline_manager::TEXTURE_LAYOUT;
use crate::gfx::rendering::{PipelineConfig, PipelineManager, Program, RenderEngine};
use crate::gfx::resources::{self, gradient_image, Mesh, Texture};

use super::kinds::{Cyclic, MeshKind, MeshSource, ProgramKind, TextureKind};
use super::plan::MeshSlot;

/// Corners of the hand-built triangle, counter-clockwise.
pub const MANUAL_TRIANGLE_POSITIONS: [[f32; 3]; 3] =
    [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]];
/// Red, green, blue.
pub const MANUAL_TRIANGLE_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// Builds the CPU geometry for a mesh, reading OBJ files from `asset_root`.
pub fn mesh_geometry(kind: MeshKind, asset_root: &Path) -> Result<GeometryData, AssetError> {
    match kind.source() {
        MeshSource::Plane => Ok(geometry::generate_plane(2.0, 2.0, 8, 8)),
        MeshSource::Sphere => Ok(geometry::generate_sphere(32, 16)),
        MeshSource::Hemisphere => Ok(geometry::generate_hemisphere(32, 8)),
        MeshSource::Obj(file) => resources::load_obj(&asset_root.join(file)),
    }
}

/// Every mesh, texture and program the viewer draws with.
///
/// Tables are stored in [`Cyclic::ALL`] order and indexed by
/// [`Cyclic::index`], so every kind always has an entry.
pub struct AssetRegistry {
    meshes: Vec<Mesh>,
    manual_triangle: Mesh,
    textures: Vec<Texture>,
    programs: Vec<Program>,
}

impl AssetRegistry {
    /// Loads everything, failing on the first asset that cannot be built.
    pub fn load(engine: &RenderEngine, asset_root: &Path) -> Result<Self, AssetError> {
        let device = engine.device();
        let queue = engine.queue();

        let mut meshes = Vec::with_capacity(MeshKind::count());
        for &kind in MeshKind::ALL {
            let data = mesh_geometry(kind, asset_root)?;
            let mesh = Mesh::upload(device, &data, kind.name());
            log::debug!(
                "mesh '{}': {} vertices, {} triangles",
                kind.name(),
                mesh.vertex_count(),
                mesh.index_count() / 3
            );
            meshes.push(mesh);
        }

        let triangle =
            geometry::generate_triangle(MANUAL_TRIANGLE_POSITIONS, MANUAL_TRIANGLE_COLORS);
        let manual_triangle = Mesh::upload(device, &triangle, "Manual Triangle");

        let mut pipelines = PipelineManager::new(engine.shared_device());
        let shader_dir = asset_root.join("shaders");

        let mut programs = Vec::with_capacity(ProgramKind::count());
        for &kind in ProgramKind::ALL {
            let (vertex, fragment) = kind.sources();
            pipelines.load_shader_file(&shader_dir, vertex)?;
            pipelines.load_shader_file(&shader_dir, fragment)?;

            let mut config = PipelineConfig::new(vertex, fragment)
                .with_label(kind.name())
                .with_color_format(engine.surface_format())
                .with_depth_format(engine.depth_format());
            if kind.is_textured() {
                config = config.with_texture();
            }
            programs.push(pipelines.create_program(kind.name(), &config)?);
        }

        let texture_layout = pipelines
            .get_bind_group_layout(TEXTURE_LAYOUT)
            .ok_or_else(|| AssetError::Shader {
                name: TEXTURE_LAYOUT.to_string(),
                message: "texture bind group layout missing".to_string(),
            })?;

        let mut textures = Vec::with_capacity(TextureKind::count());
        for &kind in TextureKind::ALL {
            let image = gradient_image(TextureKind::SIZE, TextureKind::SIZE, &kind.corners());
            textures.push(Texture::upload(device, queue, &image, texture_layout, kind.name()));
        }

        log::info!(
            "loaded {} meshes, {} textures, {} programs",
            meshes.len() + 1,
            textures.len(),
            programs.len()
        );

        Ok(Self {
            meshes,
            manual_triangle,
            textures,
            programs,
        })
    }

    pub fn mesh(&self, slot: MeshSlot) -> &Mesh {
        match slot {
            MeshSlot::Scene(kind) => &self.meshes[kind.index()],
            MeshSlot::ManualTriangle => &self.manual_triangle,
        }
    }

    pub fn texture(&self, kind: TextureKind) -> &Texture {
        &self.textures[kind.index()]
    }

    pub fn program(&self, kind: ProgramKind) -> &Program {
        &self.programs[kind.index()]
    }

    /// Releases meshes, then textures, then programs.
    pub fn unload(self) {
        for mesh in self.meshes {
            mesh.unload();
        }
        self.manual_triangle.unload();
        for texture in self.textures {
            texture.unload();
        }
        for program in self.programs {
            program.unload();
        }
        log::info!("assets unloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedural_meshes_need_no_files() {
        let root = Path::new("no/such/dir");
        for kind in [MeshKind::Plane, MeshKind::Sphere, MeshKind::Hemisphere] {
            let data = mesh_geometry(kind, root).unwrap();
            assert!(data.triangle_count() > 0);
        }
    }

    #[test]
    fn obj_meshes_resolve_against_the_asset_root() {
        let err = mesh_geometry(MeshKind::Head, Path::new("no/such/dir")).unwrap_err();
        match err {
            AssetError::Read { path, .. } => {
                assert_eq!(path, Path::new("no/such/dir/meshes/head.obj"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shipped_obj_files_parse() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for kind in [MeshKind::Head, MeshKind::Ct4] {
            let data = mesh_geometry(kind, &root).unwrap();
            assert!(data.triangle_count() > 0);
            assert_eq!(data.normals.len(), data.vertex_count());
        }
    }
}
