// src/lib.rs
//! Glint mesh viewer
//!
//! A small real-time 3D viewer built on wgpu and winit: fly camera, a fixed
//! set of meshes, textures and shader programs, five switchable draw modes
//! and an imgui overlay.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod scene;
pub mod time;
pub mod window;

// Re-export main types for convenience
pub use app::Viewer;
pub use config::ViewerConfig;
