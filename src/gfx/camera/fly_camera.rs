use super::camera_utils::{Camera, OPENGL_TO_WGPU_MATRIX};
use cgmath::*;

/// Orthonormal basis taken from the columns of the camera rotation.
///
/// `forward` is the rotation's +Z column, which points out of the back of
/// the camera: moving "forward" means subtracting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
    pub forward: Vector3<f32>,
}

/// Free-flying first person camera.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub position: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    pitch_limit: f32,
}

impl Camera for FlyCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl FlyCamera {
    pub fn new(position: Vector3<f32>, fovy: Deg<f32>, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            position,
            aspect,
            fovy: fovy.into(),
            znear,
            zfar,
            pitch_limit: Rad::from(Deg(89.0)).0,
        }
    }

    pub fn with_pitch_limit(mut self, limit: Deg<f32>) -> Self {
        self.pitch_limit = Rad::from(limit).0;
        self.set_pitch(self.pitch);
        self
    }

    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    pub fn add_pitch(&mut self, delta: f32) {
        self.set_pitch(self.pitch + delta);
    }

    pub fn add_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    /// Pitch applied first, then yaw.
    pub fn rotation(&self) -> Matrix4<f32> {
        Matrix4::from_angle_y(Rad(self.yaw)) * Matrix4::from_angle_x(Rad(self.pitch))
    }

    pub fn basis(&self) -> CameraBasis {
        let rotation = self.rotation();
        CameraBasis {
            right: rotation.x.truncate(),
            up: rotation.y.truncate(),
            forward: rotation.z.truncate(),
        }
    }

    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.position += offset;
    }

    /// Inverse of `translation * rotation`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.rotation().transpose() * Matrix4::from_translation(-self.position)
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FlyCamera {
        FlyCamera::new(Vector3::new(0.0, 0.0, 5.0), Deg(75.0), 1.0, 0.01, 100.0)
    }

    fn approx(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn identity_orientation_has_axis_aligned_basis() {
        let basis = camera().basis();
        assert!(approx(basis.right, Vector3::unit_x()));
        assert!(approx(basis.up, Vector3::unit_y()));
        assert!(approx(basis.forward, Vector3::unit_z()));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = camera();
        let limit = Rad::from(Deg(89.0)).0;
        cam.add_pitch(10.0);
        assert!((cam.pitch - limit).abs() < 1e-6);
        cam.add_pitch(-100.0);
        assert!((cam.pitch + limit).abs() < 1e-6);
    }

    #[test]
    fn view_matrix_moves_camera_to_origin() {
        let mut cam = camera();
        cam.add_yaw(0.7);
        cam.add_pitch(-0.3);
        let eye = cam.view_matrix() * cam.position.extend(1.0);
        assert!(approx(eye.truncate(), Vector3::zero()));
    }

    #[test]
    fn view_matrix_inverts_camera_transform() {
        let mut cam = camera();
        cam.add_yaw(1.2);
        cam.add_pitch(0.4);
        let world = Matrix4::from_translation(cam.position) * cam.rotation();
        let product = cam.view_matrix() * world;
        for c in 0..4 {
            for r in 0..4 {
                let expected = if c == r { 1.0 } else { 0.0 };
                assert!((product[c][r] - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn pitch_then_yaw_keeps_right_vector_horizontal() {
        let mut cam = camera();
        cam.add_yaw(0.9);
        cam.add_pitch(0.5);
        // Yaw applied last keeps the right vector in the XZ plane.
        assert!(cam.basis().right.y.abs() < 1e-6);
    }

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut cam = camera();
        cam.resize_projection(1600, 900);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
        cam.resize_projection(0, 900);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
