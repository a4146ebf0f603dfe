use super::keys::KeyTable;
use super::mouse::MouseTracker;
use super::types::{InputEvent, Key, KeyState};

/// Input state for one window.
///
/// Events are collected by the platform layer during the poll step and
/// applied here in arrival order, before any frame logic reads the state.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys: KeyTable,
    pub mouse: MouseTracker,
    pub focused: bool,
    close_requested: bool,
    resized: Option<(u32, u32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Default::default()
        }
    }

    pub fn apply_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { repeat: true, .. } => {}
            InputEvent::Key { key, state, .. } => self.keys.set(key, state),
            InputEvent::CursorMoved { x, y } => self.mouse.cursor_moved(x, y),
            InputEvent::MouseMotion { dx, dy } => self.mouse.motion(dx, dy),
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if focused {
                    // The cursor may come back anywhere.
                    self.mouse.reset_baseline();
                } else {
                    // Avoids stuck movement keys when focus changes mid-press.
                    self.keys.release_all();
                }
            }
            InputEvent::Resized { width, height } => self.resized = Some((width, height)),
            InputEvent::CloseRequested => self.close_requested = true,
        }
    }

    /// Applies a drained queue of events in order.
    pub fn apply_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply_event(&event);
        }
    }

    /// Copies current key state into previous. Called once per frame, before
    /// the poll step.
    pub fn snapshot(&mut self) {
        self.keys.snapshot();
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_key_down(key)
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        self.keys.is_key_up(key)
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.is_key_pressed(key)
    }

    pub fn key_state(&self, key: Key) -> KeyState {
        self.keys.current(key)
    }

    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        self.mouse.take_delta()
    }

    /// Returns whether the OS asked the window to close since the last call.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    /// Returns the most recent new size since the last call.
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.resized.take()
    }
}
