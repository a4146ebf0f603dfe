//! winit application handler used during the poll step.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    error::OsError,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowAttributes, WindowId},
};

/// An OS event captured during a pump, applied after the pump returns.
#[derive(Debug, Clone)]
pub enum RawEvent {
    Window(WindowEvent),
    Device(DeviceEvent),
}

/// Creates the window on first resume and queues every event it sees.
pub struct PlatformHandler {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    create_error: Option<OsError>,
    events: Vec<RawEvent>,
}

impl PlatformHandler {
    pub fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            create_error: None,
            events: Vec::new(),
        }
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    pub fn take_create_error(&mut self) -> Option<OsError> {
        self.create_error.take()
    }

    /// Returns the queued events in arrival order and empties the queue.
    pub fn drain_events(&mut self) -> Vec<RawEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn release_window(&mut self) -> Option<Arc<Window>> {
        self.window.take()
    }
}

impl ApplicationHandler for PlatformHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Poll);
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                log::info!("window created ({:?})", window.inner_size());
                self.window = Some(Arc::new(window));
            }
            Err(err) => self.create_error = Some(err),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.events.push(RawEvent::Window(event));
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        self.events.push(RawEvent::Device(event));
    }
}
