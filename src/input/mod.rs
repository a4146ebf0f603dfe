//! Input subsystem.
//!
//! Keyboard state is a map from [`Key`] to [`KeyState`] with a one-frame-old
//! copy for edge detection. Mouse movement is accumulated and read once per
//! frame. Platform events are translated in [`platform`] and applied in
//! arrival order by [`InputState`].

mod keys;
mod mouse;
pub mod platform;
mod state;
mod types;

pub use keys::KeyTable;
pub use mouse::MouseTracker;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
