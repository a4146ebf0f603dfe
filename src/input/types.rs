use std::fmt;

/// Keyboard key identifier, independent of any native key-code range.
///
/// Keys the platform reports that have no variant here map to
/// `Key::Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Instantaneous state of a key.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum KeyState {
    #[default]
    Up,
    Down,
}

/// Platform-agnostic input events, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the platform generated this as an auto-repeat.
        repeat: bool,
    },

    /// Absolute cursor position in physical pixels.
    CursorMoved { x: f64, y: f64 },

    /// Relative pointer motion, reported while the cursor is grabbed.
    MouseMotion { dx: f64, dy: f64 },

    Focused(bool),

    Resized { width: u32, height: u32 },

    CloseRequested,
}
