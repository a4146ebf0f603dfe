// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles the GPU context, shader programs, and frame recording.

pub mod pipeline_manager;
pub mod program;
pub mod render_engine;
pub mod vertex;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use program::{MvpUniform, Program, ShaderScope};
pub use render_engine::{Frame, RenderEngine};
pub use vertex::Vertex3D;
