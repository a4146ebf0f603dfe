use cgmath::{Deg, Matrix4};

use crate::config::CameraConfig;
use crate::input::InputState;

use super::{camera_controller::CameraController, fly_camera::FlyCamera};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

pub struct CameraManager {
    pub camera: FlyCamera,
    pub controller: CameraController,
}

impl CameraManager {
    pub fn new(camera: FlyCamera, controller: CameraController) -> Self {
        Self { camera, controller }
    }

    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let camera = FlyCamera::new(
            config.start_position,
            Deg(config.fov_y_degrees),
            aspect,
            config.z_near,
            config.z_far,
        )
        .with_pitch_limit(Deg(config.pitch_limit_degrees));
        let controller = CameraController::new(config.sensitivity, config.speed);
        Self::new(camera, controller)
    }

    /// Integrates one frame of input: mouse look first, then movement along
    /// the updated basis.
    pub fn update(&mut self, mouse_delta: (f32, f32), input: &InputState, dt: f32) {
        self.controller.apply_mouse(mouse_delta, &mut self.camera);
        self.controller.apply_movement(input, dt, &mut self.camera);
    }

    /// Keeps the projection aspect in step with the framebuffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize_projection(width, height);
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.camera.build_view_projection_matrix()
    }
}

pub trait Camera: Sized {
    fn build_view_projection_matrix(&self) -> Matrix4<f32>;
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector4};

    #[test]
    fn config_sets_start_position_and_pitch_limit() {
        let config = CameraConfig {
            pitch_limit_degrees: 45.0,
            ..CameraConfig::default()
        };
        let manager = CameraManager::from_config(&config, 1.0);
        assert_eq!(manager.camera.position, config.start_position);
        assert!((manager.camera.pitch_limit() - 45f32.to_radians()).abs() < 1e-6);
        assert_eq!(manager.controller.speed, 10.0);
    }

    #[test]
    fn origin_lands_in_front_of_the_start_position() {
        let manager = CameraManager::from_config(&CameraConfig::default(), 1.0);
        let clip = manager.view_projection() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn matrix_array_is_column_major() {
        let array = convert_matrix4_to_array(Matrix4::identity());
        assert_eq!(array[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(array[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
