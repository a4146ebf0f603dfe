//! The window context: OS window, GPU context, GUI overlay, input and timing.
//!
//! One [`Window`] value replaces process-wide window state. The frame loop
//! drives it explicitly:
//!
//! ```no_run
//! # fn main() -> Result<(), glint::error::WindowError> {
//! use glint::{config::ViewerConfig, window::Window};
//!
//! let mut window = Window::create(&ViewerConfig::default())?;
//! while !window.should_close() {
//!     window.begin_frame();
//!     window.draw_scene(wgpu::Color::BLACK, |_pass| {});
//!     window.gui(|ui| ui.text("hello"));
//!     window.loop_once();
//!     window.end_frame();
//! }
//! window.destroy();
//! # Ok(())
//! # }
//! ```

mod handler;
mod phase;

pub use phase::WindowPhase;

use std::{sync::Arc, time::Duration};

use winit::{
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::EventLoop,
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{CursorGrabMode, Window as OsWindow, WindowAttributes},
};

use crate::config::ViewerConfig;
use crate::error::WindowError;
use crate::gfx::rendering::{Frame, RenderEngine};
use crate::gfx::ui::GuiOverlay;
use crate::input::{platform, InputState, Key};
use crate::time::FrameTimer;
use handler::{PlatformHandler, RawEvent};

/// Pumps allowed while waiting for the OS to hand over the window.
const CREATE_PUMP_LIMIT: usize = 100;
const CREATE_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

pub struct Window {
    phase: WindowPhase,
    event_loop: EventLoop<()>,
    handler: PlatformHandler,
    os_window: Arc<OsWindow>,
    engine: RenderEngine,
    gui: GuiOverlay,
    input: InputState,
    timer: FrameTimer,
    frame: Option<Frame>,
    cursor_grabbed: bool,
}

impl Window {
    /// Opens a window with a GPU context and a GUI overlay.
    ///
    /// Debug builds run the GPU backend with validation enabled. Every
    /// failure here is fatal to the viewer.
    pub fn create(config: &ViewerConfig) -> Result<Self, WindowError> {
        let mut event_loop = EventLoop::new()?;
        let attributes = WindowAttributes::default()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));
        let mut handler = PlatformHandler::new(attributes);

        let mut pumps = 0;
        let os_window = loop {
            let status = event_loop.pump_app_events(Some(CREATE_PUMP_TIMEOUT), &mut handler);
            if let Some(err) = handler.take_create_error() {
                return Err(WindowError::CreateWindow(err));
            }
            if let Some(window) = handler.window() {
                break Arc::clone(window);
            }
            pumps += 1;
            if matches!(status, PumpStatus::Exit(_)) || pumps >= CREATE_PUMP_LIMIT {
                return Err(WindowError::NoWindow);
            }
        };

        let size = os_window.inner_size();
        let engine = pollster::block_on(RenderEngine::new(
            Arc::clone(&os_window),
            size.width,
            size.height,
        ))?;

        let gui = GuiOverlay::new(
            engine.device(),
            engine.queue(),
            engine.surface_format(),
            &os_window,
            config.gui_font_size,
        );

        let mut window = Self {
            phase: WindowPhase::default().started(),
            event_loop,
            handler,
            os_window,
            engine,
            gui,
            input: InputState::new(),
            timer: FrameTimer::new(),
            frame: None,
            cursor_grabbed: false,
        };
        window.grab_cursor();

        log::info!("window '{}' ready ({}x{})", config.title, size.width, size.height);
        Ok(window)
    }

    /// Hides the cursor and captures it, preferring a hard lock and falling
    /// back to confinement. Either grab switches mouse-look to raw device
    /// motion, which keeps arriving when the cursor sits at the window edge.
    fn grab_cursor(&mut self) {
        self.os_window.set_cursor_visible(false);
        let grabbed = [CursorGrabMode::Locked, CursorGrabMode::Confined]
            .into_iter()
            .find(|&mode| self.os_window.set_cursor_grab(mode).is_ok());
        match grabbed {
            Some(mode) => log::debug!("cursor grabbed ({mode:?})"),
            None => log::warn!("cursor grab unavailable, reading absolute positions"),
        }

        let cursor_grabbed = grabbed.is_some();
        if cursor_grabbed != self.cursor_grabbed {
            // Virtual and absolute cursor coordinates do not mix.
            self.input.mouse.reset_baseline();
        }
        self.cursor_grabbed = cursor_grabbed;
    }

    pub fn should_close(&self) -> bool {
        self.phase == WindowPhase::Closing
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.phase = self.phase.with_close_flag(should_close);
    }

    /// Starts the frame clock and acquires the surface image to draw into.
    pub fn begin_frame(&mut self) {
        self.timer.begin_frame();
        if self.frame.is_none() {
            self.frame = self.engine.begin_frame();
        }
    }

    pub fn end_frame(&mut self) {
        self.timer.end_frame();
    }

    /// Seconds taken by the most recently completed frame; 0 before the
    /// first [`Window::end_frame`].
    pub fn frame_time(&self) -> f32 {
        self.timer.frame_time()
    }

    /// Seconds since the window was created.
    pub fn time(&self) -> f32 {
        self.timer.time()
    }

    /// Clears the frame to `clear_color` and depth 1.0, then records `draw`.
    ///
    /// Does nothing when no surface image could be acquired this frame.
    pub fn draw_scene<F>(&mut self, clear_color: wgpu::Color, draw: F)
    where
        F: FnOnce(&mut wgpu::RenderPass<'_>),
    {
        if let Some(frame) = self.frame.as_mut() {
            let mut pass = frame.clear_pass(self.engine.depth_view(), clear_color);
            draw(&mut pass);
        }
    }

    /// Builds the GUI with `run_ui` and draws it over the scene.
    pub fn gui<F>(&mut self, run_ui: F)
    where
        F: FnOnce(&imgui::Ui),
    {
        if let Some(frame) = self.frame.as_mut() {
            self.gui.draw(
                self.engine.device(),
                self.engine.queue(),
                &self.os_window,
                frame,
                run_ui,
            );
        }
    }

    /// End-of-iteration housekeeping: snapshot key state, present, then poll
    /// and apply OS events.
    pub fn loop_once(&mut self) {
        self.input.snapshot();

        if let Some(frame) = self.frame.take() {
            self.engine.present(frame);
        }

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::info!("event loop exited with code {code}");
            self.set_should_close(true);
        }

        for event in self.handler.drain_events() {
            self.apply_raw_event(event);
        }

        if let Some((width, height)) = self.input.take_resize() {
            self.engine.resize(width, height);
        }
        if self.input.take_close_request() {
            self.set_should_close(true);
        }
    }

    fn apply_raw_event(&mut self, event: RawEvent) {
        let translated = match &event {
            RawEvent::Window(window_event) => {
                self.gui.handle_event(&self.os_window, window_event);
                platform::translate_window_event(window_event, self.cursor_grabbed)
            }
            RawEvent::Device(_) if !self.input.focused => None,
            RawEvent::Device(device_event) => {
                platform::translate_device_event(device_event, self.cursor_grabbed)
            }
        };

        if let RawEvent::Window(WindowEvent::Focused(true)) = event {
            self.grab_cursor();
        }

        if let Some(input_event) = translated {
            log::trace!("input: {:?}", input_event);
            self.input.apply_event(&input_event);
        }
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    pub fn is_key_up(&self, key: Key) -> bool {
        self.input.is_key_up(key)
    }

    /// Key tap: held on the previous frame, released now.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }

    /// Mouse movement since the last call, in pixels. Resets to zero.
    pub fn mouse_delta(&mut self) -> (f32, f32) {
        self.input.take_mouse_delta()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Current width of the drawable area in pixels, read from the OS.
    pub fn width(&self) -> u32 {
        self.os_window.inner_size().width
    }

    /// Current height of the drawable area in pixels, read from the OS.
    pub fn height(&self) -> u32 {
        self.os_window.inner_size().height
    }

    pub fn engine(&self) -> &RenderEngine {
        &self.engine
    }

    pub fn queue(&self) -> &wgpu::Queue {
        self.engine.queue()
    }

    /// Tears down the GUI overlay, then the GPU context, then the OS window.
    pub fn destroy(mut self) {
        self.set_should_close(true);
        let phase = self.phase.destroyed();

        let Window {
            event_loop,
            mut handler,
            os_window,
            engine,
            gui,
            frame,
            ..
        } = self;

        drop(gui);
        drop(frame);
        drop(engine);
        drop(os_window);
        drop(handler.release_window());
        drop(event_loop);

        log::info!("window {:?}", phase);
    }
}
