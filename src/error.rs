//! Error types for window creation and asset loading.
//!
//! Every variant here is a startup failure. Once the frame loop is running
//! nothing in the viewer produces a recoverable error.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while bringing up the window, the GPU context or the GUI overlay.
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("event loop never delivered a window")]
    NoWindow,

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// Failures while reading, parsing or compiling an asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse mesh {path}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("mesh {path} contains no triangles")]
    EmptyObj { path: PathBuf },

    #[error("shader program '{name}' failed to build: {message}")]
    Shader { name: String, message: String },

    #[error("shader program '{name}' needs {stage} shader '{shader}', which is not loaded")]
    ShaderStage {
        name: String,
        shader: String,
        stage: &'static str,
    },
}
