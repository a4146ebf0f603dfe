//! # Procedural Geometry Generation
//!
//! CPU-side mesh data: positions, normals, texture coordinates, vertex colours
//! and triangle indices. Generated here or parsed from OBJ files, then
//! uploaded with [`crate::gfx::resources::Mesh::upload`].
//!
//! ## Supported Primitives
//!
//! - **Plane**: flat plane in XY facing +Z
//! - **Sphere**: UV sphere of radius 1
//! - **Hemisphere**: upper half of the UV sphere, open at the base
//! - **Triangle**: three explicit vertices with per-vertex colours
//!
//! ## Usage
//!
//! ```rust
//! use glint::gfx::geometry::{generate_plane, generate_sphere};
//!
//! let plane = generate_plane(2.0, 2.0, 4, 4);
//! let sphere = generate_sphere(32, 16);
//! assert_eq!(plane.vertex_count(), 25);
//! assert!(sphere.triangle_count() > 0);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::rendering::vertex::Vertex3D;

/// Generated or loaded geometry ready for GPU upload.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex RGBA colour. Empty means white.
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaves the attribute streams into the GPU vertex format.
    ///
    /// Missing attributes fall back to +Y normals, (0, 0) texture coordinates
    /// and white.
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
                color: self.colors.get(i).copied().unwrap_or([1.0, 1.0, 1.0, 1.0]),
            })
            .collect()
    }

    /// Rebuilds smooth per-vertex normals by averaging the face normals of
    /// every triangle touching each vertex.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![[0.0f32; 3]; self.vertices.len()];

        for triangle in self.indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
            let (Some(v0), Some(v1), Some(v2)) = (
                self.vertices.get(i0),
                self.vertices.get(i1),
                self.vertices.get(i2),
            ) else {
                continue;
            };

            let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let face_normal = [
                edge1[1] * edge2[2] - edge1[2] * edge2[1],
                edge1[2] * edge2[0] - edge1[0] * edge2[2],
                edge1[0] * edge2[1] - edge1[1] * edge2[0],
            ];

            for vertex in [i0, i1, i2] {
                for axis in 0..3 {
                    normals[vertex][axis] += face_normal[axis];
                }
            }
        }

        for normal in normals.iter_mut() {
            let length = (normal[0].powi(2) + normal[1].powi(2) + normal[2].powi(2)).sqrt();
            if length > 0.0 {
                normal.iter_mut().for_each(|n| *n /= length);
            }
        }

        self.normals = normals;
    }
}
