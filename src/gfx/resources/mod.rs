// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles meshes, textures, and the loaders that feed them.

pub mod gradient;
pub mod mesh;
pub mod obj;
pub mod texture;
pub mod texture_resource;

// Re-export main types
pub use gradient::{gradient_image, GradientCorners};
pub use mesh::Mesh;
pub use obj::{load_obj, parse_obj};
pub use texture::Texture;
pub use texture_resource::TextureResource;
