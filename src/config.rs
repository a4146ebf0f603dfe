//! Viewer configuration.
//!
//! There is no command line surface. Everything has a default that matches
//! the stock demo; the asset root can be moved with `GLINT_ASSET_DIR`.

use std::path::PathBuf;

use cgmath::Vector3;

/// Environment variable that overrides [`ViewerConfig::asset_root`].
pub const ASSET_DIR_ENV: &str = "GLINT_ASSET_DIR";

/// Tuning constants for the fly camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Radians of yaw/pitch per pixel of mouse movement.
    pub sensitivity: f32,
    /// Units per second along each held movement axis.
    pub speed: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Pitch is clamped to +/- this many degrees.
    pub pitch_limit_degrees: f32,
    pub start_position: Vector3<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.0025,
            speed: 10.0,
            fov_y_degrees: 75.0,
            z_near: 0.01,
            z_far: 100.0,
            pitch_limit_degrees: 89.0,
            start_position: Vector3::new(0.0, 0.0, 5.0),
        }
    }
}

/// Top-level configuration handed to [`crate::app::Viewer`].
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Directory containing `meshes/` and `shaders/`.
    pub asset_root: PathBuf,
    pub camera: CameraConfig,
    pub gui_font_size: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Glint - Mesh Viewer".to_string(),
            asset_root: PathBuf::from("assets"),
            camera: CameraConfig::default(),
            gui_font_size: 16.0,
        }
    }
}

impl ViewerConfig {
    /// Defaults, with the asset root taken from `GLINT_ASSET_DIR` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(ASSET_DIR_ENV) {
            Some(dir) if !dir.is_empty() => config.with_asset_root(dir),
            _ => config,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_demo() {
        let config = ViewerConfig::default();
        assert_eq!((config.width, config.height), (800, 800));
        assert_eq!(config.camera.sensitivity, 0.0025);
        assert_eq!(config.camera.speed, 10.0);
        assert_eq!(config.camera.start_position, Vector3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn asset_root_can_be_overridden() {
        let config = ViewerConfig::default().with_asset_root("/data/glint");
        assert_eq!(config.asset_root, PathBuf::from("/data/glint"));
    }

    #[test]
    fn builders_override_fields() {
        let config = ViewerConfig::default()
            .with_size(1280, 720)
            .with_title("test");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert_eq!(config.title, "test");
    }
}
