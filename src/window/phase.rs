/// Lifecycle of a [`super::Window`].
///
/// Uninitialized → Running → Closing → Destroyed, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPhase {
    #[default]
    Uninitialized,
    /// Frames are being produced.
    Running,
    /// A close was requested; the current loop iteration finishes normally.
    Closing,
    Destroyed,
}

impl WindowPhase {
    /// Phase once the OS window and GPU context exist.
    pub fn started(self) -> Self {
        match self {
            WindowPhase::Uninitialized => WindowPhase::Running,
            phase => phase,
        }
    }

    /// Phase after the close flag is set to `should_close`.
    pub fn with_close_flag(self, should_close: bool) -> Self {
        match (self, should_close) {
            (WindowPhase::Running, true) => WindowPhase::Closing,
            (WindowPhase::Closing, false) => WindowPhase::Running,
            (phase, _) => phase,
        }
    }

    /// Phase after teardown. Only a closing window can be destroyed.
    pub fn destroyed(self) -> Self {
        match self {
            WindowPhase::Closing => WindowPhase::Destroyed,
            phase => phase,
        }
    }
}
