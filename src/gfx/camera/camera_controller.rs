use crate::input::{InputState, Key};

use super::fly_camera::FlyCamera;

/// Key bindings for camera movement.
#[derive(Debug, Clone, Copy)]
pub struct MovementKeys {
    pub forward: Key,
    pub back: Key,
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
}

impl Default for MovementKeys {
    fn default() -> Self {
        Self {
            forward: Key::W,
            back: Key::S,
            left: Key::A,
            right: Key::D,
            up: Key::Space,
            down: Key::ShiftLeft,
        }
    }
}

pub struct CameraController {
    pub sensitivity: f32,
    pub speed: f32,
    pub keys: MovementKeys,
}

impl CameraController {
    pub fn new(sensitivity: f32, speed: f32) -> Self {
        Self {
            sensitivity,
            speed,
            keys: MovementKeys::default(),
        }
    }

    /// Mouse right/down turns the view right/down.
    pub fn apply_mouse(&self, delta: (f32, f32), camera: &mut FlyCamera) {
        camera.add_yaw(-delta.0 * self.sensitivity);
        camera.add_pitch(-delta.1 * self.sensitivity);
    }

    /// Moves along every held axis independently. Diagonal movement is not
    /// normalized, so two held axes travel faster than one.
    pub fn apply_movement(&self, input: &InputState, dt: f32, camera: &mut FlyCamera) {
        let basis = camera.basis();
        let step = dt * self.speed;
        let keys = self.keys;

        if input.is_key_down(keys.forward) {
            camera.translate(-basis.forward * step);
        }
        if input.is_key_down(keys.back) {
            camera.translate(basis.forward * step);
        }
        if input.is_key_down(keys.right) {
            camera.translate(basis.right * step);
        }
        if input.is_key_down(keys.left) {
            camera.translate(-basis.right * step);
        }
        if input.is_key_down(keys.up) {
            camera.translate(basis.up * step);
        }
        if input.is_key_down(keys.down) {
            camera.translate(-basis.up * step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};
    use cgmath::{Deg, InnerSpace, Vector3};

    fn camera() -> FlyCamera {
        FlyCamera::new(Vector3::new(0.0, 0.0, 5.0), Deg(75.0), 1.0, 0.01, 100.0)
    }

    fn hold(input: &mut InputState, key: Key) {
        input.apply_event(&InputEvent::Key {
            key,
            state: KeyState::Down,
            repeat: false,
        });
    }

    #[test]
    fn forward_and_strafe_move_along_unnormalized_sum() {
        let controller = CameraController::new(0.0025, 10.0);
        let mut cam = camera();
        cam.add_yaw(0.6);
        cam.add_pitch(-0.2);
        let start = cam.position;
        let basis = cam.basis();

        let mut input = InputState::new();
        hold(&mut input, Key::W);
        hold(&mut input, Key::D);

        let dt = 0.5;
        controller.apply_movement(&input, dt, &mut cam);

        let expected = start + (-basis.forward + basis.right) * 10.0 * dt;
        assert!((cam.position - expected).magnitude() < 1e-5);

        let travelled = (cam.position - start).magnitude();
        let single_axis = 10.0 * dt;
        assert!(travelled > single_axis);
        assert!((travelled - single_axis * 2f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn no_keys_no_movement() {
        let controller = CameraController::new(0.0025, 10.0);
        let mut cam = camera();
        let input = InputState::new();
        controller.apply_movement(&input, 1.0, &mut cam);
        assert_eq!(cam.position, Vector3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let controller = CameraController::new(0.0025, 10.0);
        let mut cam = camera();
        let mut input = InputState::new();
        hold(&mut input, Key::Space);
        hold(&mut input, Key::ShiftLeft);
        controller.apply_movement(&input, 1.0, &mut cam);
        assert!((cam.position - Vector3::new(0.0, 0.0, 5.0)).magnitude() < 1e-6);
    }

    #[test]
    fn forward_at_rest_moves_toward_negative_z() {
        let controller = CameraController::new(0.0025, 10.0);
        let mut cam = camera();
        let mut input = InputState::new();
        hold(&mut input, Key::W);
        controller.apply_movement(&input, 0.1, &mut cam);
        assert!((cam.position - Vector3::new(0.0, 0.0, 4.0)).magnitude() < 1e-5);
    }

    #[test]
    fn pitch_stays_clamped_under_any_mouse_input() {
        let controller = CameraController::new(0.0025, 10.0);
        let mut cam = camera();
        let limit = cam.pitch_limit();
        let deltas = [
            (0.0, -100_000.0),
            (35.0, 2_000.0),
            (-10.0, 90_000.0),
            (0.0, -1.0),
            (5.0, -250_000.0),
        ];
        for delta in deltas {
            controller.apply_mouse(delta, &mut cam);
            assert!(cam.pitch >= -limit && cam.pitch <= limit);
        }
        assert!(limit <= 89f32.to_radians() + 1e-6);
    }

    #[test]
    fn mouse_right_decreases_yaw() {
        let controller = CameraController::new(0.01, 10.0);
        let mut cam = camera();
        controller.apply_mouse((10.0, 0.0), &mut cam);
        assert!((cam.yaw + 0.1).abs() < 1e-6);
    }
}
