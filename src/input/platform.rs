//! Translation from winit events into [`InputEvent`]s.

use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::types::{InputEvent, Key, KeyState};

/// Translates a winit `WindowEvent`. Returns `None` for events the viewer
/// does not track.
///
/// `cursor_grabbed` selects the mouse source: while the cursor is grabbed
/// (locked or confined), absolute positions stop at the window edge, so they
/// are ignored and raw device motion is used instead.
pub fn translate_window_event(event: &WindowEvent, cursor_grabbed: bool) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Down,
                ElementState::Released => KeyState::Up,
            },
            repeat: event.repeat,
        }),
        WindowEvent::CursorMoved { position, .. } if !cursor_grabbed => {
            Some(InputEvent::CursorMoved {
                x: position.x,
                y: position.y,
            })
        }
        WindowEvent::Focused(focused) => Some(InputEvent::Focused(*focused)),
        WindowEvent::Resized(size) => Some(InputEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
        _ => None,
    }
}

/// Translates a winit `DeviceEvent`. Only relative motion is of interest,
/// and only while the cursor is grabbed.
pub fn translate_device_event(event: &DeviceEvent, cursor_grabbed: bool) -> Option<InputEvent> {
    match event {
        DeviceEvent::MouseMotion { delta } if cursor_grabbed => Some(InputEvent::MouseMotion {
            dx: delta.0,
            dy: delta.1,
        }),
        _ => None,
    }
}

pub fn map_key(key: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = key else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::ControlLeft => Key::ControlLeft,
        KeyCode::ControlRight => Key::ControlRight,
        KeyCode::AltLeft => Key::AltLeft,
        KeyCode::AltRight => Key::AltRight,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn movement_keys_map_by_physical_position() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftLeft)), Key::ShiftLeft);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Tab)), Key::Tab);
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        assert!(matches!(
            map_key(PhysicalKey::Code(KeyCode::NumpadAdd)),
            Key::Unknown(_)
        ));
    }

    #[test]
    fn resize_and_close_translate() {
        let resized = WindowEvent::Resized(PhysicalSize::new(320, 200));
        assert_eq!(
            translate_window_event(&resized, false),
            Some(InputEvent::Resized {
                width: 320,
                height: 200
            })
        );
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested, true),
            Some(InputEvent::CloseRequested)
        );
    }

    fn cursor_at(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            // SAFETY: only used as an opaque id in event values.
            device_id: unsafe { winit::event::DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn grabbed_cursor_reads_raw_motion() {
        let motion = DeviceEvent::MouseMotion { delta: (2.0, -1.0) };
        assert_eq!(
            translate_device_event(&motion, true),
            Some(InputEvent::MouseMotion { dx: 2.0, dy: -1.0 })
        );
        assert_eq!(translate_window_event(&cursor_at(799.0, 10.0), true), None);
    }

    #[test]
    fn free_cursor_reads_positions() {
        let motion = DeviceEvent::MouseMotion { delta: (2.0, -1.0) };
        assert_eq!(translate_device_event(&motion, false), None);
        assert_eq!(
            translate_window_event(&cursor_at(40.0, 12.5), false),
            Some(InputEvent::CursorMoved { x: 40.0, y: 12.5 })
        );
    }

    #[test]
    fn confined_cursor_turns_past_the_window_edge() {
        // A confined cursor pinned at the right edge still reports device
        // motion, so yaw keeps accumulating.
        let mut input = crate::input::InputState::new();
        input.apply_event(&InputEvent::Focused(true));
        for _ in 0..1000 {
            if let Some(event) = translate_window_event(&cursor_at(799.0, 400.0), true) {
                input.apply_event(&event);
            }
            let motion = DeviceEvent::MouseMotion { delta: (4.0, 0.0) };
            if let Some(event) = translate_device_event(&motion, true) {
                input.apply_event(&event);
            }
        }
        assert_eq!(input.take_mouse_delta(), (4000.0, 0.0));
    }
}
