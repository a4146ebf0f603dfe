use crate::input::{InputState, Key};

use super::kinds::{Cyclic, DrawMode, MeshKind, TextureKind};

/// Keys that step the selection forward.
#[derive(Debug, Clone, Copy)]
pub struct SelectionKeys {
    pub mesh: Key,
    pub texture: Key,
    pub draw_mode: Key,
}

impl Default for SelectionKeys {
    fn default() -> Self {
        Self {
            mesh: Key::Tab,
            texture: Key::T,
            draw_mode: Key::Y,
        }
    }
}

/// Which mesh, texture and draw mode are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub draw_mode: DrawMode,
    pub mesh: MeshKind,
    pub texture: TextureKind,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::NormalShader,
            mesh: MeshKind::Plane,
            texture: TextureKind::GradientCool,
        }
    }
}

impl Selection {
    /// Advances each index whose key was tapped this frame.
    ///
    /// Returns true if anything changed.
    pub fn handle_input(&mut self, input: &InputState, keys: &SelectionKeys) -> bool {
        let before = *self;

        if input.is_key_pressed(keys.mesh) {
            self.mesh = self.mesh.next();
        }
        if input.is_key_pressed(keys.texture) {
            self.texture = self.texture.next();
        }
        if input.is_key_pressed(keys.draw_mode) {
            self.draw_mode = self.draw_mode.next();
        }

        if *self != before {
            log::debug!(
                "selection: {} / {} / {}",
                self.draw_mode.name(),
                self.mesh.name(),
                self.texture.name()
            );
        }
        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, KeyState};

    fn key(input: &mut InputState, key: Key, state: KeyState) {
        input.apply_event(&InputEvent::Key {
            key,
            state,
            repeat: false,
        });
    }

    /// Press and release `k` across two loop iterations, leaving `input` on
    /// the frame where the tap registers.
    fn tap(input: &mut InputState, k: Key) {
        key(input, k, KeyState::Down);
        input.snapshot();
        key(input, k, KeyState::Up);
    }

    #[test]
    fn starts_on_normal_shader_plane_cool() {
        let selection = Selection::default();
        assert_eq!(selection.draw_mode, DrawMode::NormalShader);
        assert_eq!(selection.mesh, MeshKind::Plane);
        assert_eq!(selection.texture, TextureKind::GradientCool);
    }

    #[test]
    fn tab_steps_mesh_only() {
        let mut selection = Selection::default();
        let mut input = InputState::new();
        tap(&mut input, Key::Tab);

        assert!(selection.handle_input(&input, &SelectionKeys::default()));
        assert_eq!(selection.mesh, MeshKind::Sphere);
        assert_eq!(selection.texture, TextureKind::GradientCool);
        assert_eq!(selection.draw_mode, DrawMode::NormalShader);
    }

    #[test]
    fn held_key_does_not_step() {
        let mut selection = Selection::default();
        let mut input = InputState::new();
        key(&mut input, Key::T, KeyState::Down);
        input.snapshot();

        assert!(!selection.handle_input(&input, &SelectionKeys::default()));
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn tap_registers_once() {
        let mut selection = Selection::default();
        let mut input = InputState::new();
        tap(&mut input, Key::T);
        selection.handle_input(&input, &SelectionKeys::default());
        input.snapshot();
        selection.handle_input(&input, &SelectionKeys::default());
        assert_eq!(selection.texture, TextureKind::GradientWarm);
    }
}
