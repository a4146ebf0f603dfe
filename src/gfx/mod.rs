//! # Graphics Module
//!
//! Everything that touches the GPU or produces data for it.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Fly camera driven by mouse look and held keys
//! - **Geometry** ([`geometry`]) - Procedural shapes and CPU-side mesh data
//! - **Rendering** ([`rendering`]) - GPU context, shader programs, frame recording
//! - **Resources** ([`resources`]) - Meshes, textures and their loaders
//! - **UI** ([`ui`]) - imgui overlay drawn after the scene

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod ui;

// Re-export commonly used types
pub use camera::FlyCamera;
pub use rendering::RenderEngine;
