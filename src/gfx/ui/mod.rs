//! Immediate-mode GUI overlay drawn on top of the 3D scene.

pub mod panel;

use imgui::{ConfigFlags, Context, FontConfig, FontSource, Ui};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use std::time::Instant;
use wgpu::{Device, Queue, TextureFormat};
use winit::{
    event::{Event, WindowEvent},
    window::Window,
};

use crate::gfx::rendering::Frame;

pub use panel::{overlay, OverlayStats};

pub struct GuiOverlay {
    context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    last_frame: Instant,
}

impl GuiOverlay {
    /// Creates the imgui context bound to `window`
    ///
    /// Dark style, keyboard navigation on, no ini file. The OS cursor is left
    /// alone since the viewer keeps it hidden and grabbed. Fonts are
    /// rasterised at the window's scale factor.
    pub fn new(
        device: &Device,
        queue: &Queue,
        output_color_format: TextureFormat,
        window: &Window,
        font_size: f32,
    ) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);
        context
            .io_mut()
            .config_flags
            .insert(ConfigFlags::NAV_ENABLE_KEYBOARD | ConfigFlags::NO_MOUSE_CURSOR_CHANGE);
        context.style_mut().use_dark_colors();

        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Default);

        let hidpi_factor = window.scale_factor() as f32;
        context.io_mut().font_global_scale = 1.0 / hidpi_factor;
        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 1,
                pixel_snap_h: true,
                size_pixels: font_size * hidpi_factor,
                ..Default::default()
            }),
        }]);

        let renderer_config = RendererConfig {
            texture_format: output_color_format,
            ..Default::default()
        };
        let renderer = Renderer::new(&mut context, device, queue, renderer_config);

        log::debug!(
            "gui overlay created (scale factor {:.2}, font {}px)",
            hidpi_factor,
            font_size
        );

        Self {
            context,
            platform,
            renderer,
            last_frame: Instant::now(),
        }
    }

    /// Forwards a window event to imgui.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) {
        let event: Event<()> = Event::WindowEvent {
            window_id: window.id(),
            event: event.clone(),
        };
        self.platform
            .handle_event(self.context.io_mut(), window, &event);
    }

    /// Builds one GUI frame with `run_ui` and renders it over `frame`.
    ///
    /// Failures are logged; the scene beneath is presented regardless.
    pub fn draw<F>(
        &mut self,
        device: &Device,
        queue: &Queue,
        window: &Window,
        frame: &mut Frame,
        run_ui: F,
    ) where
        F: FnOnce(&Ui),
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.last_frame);
        self.last_frame = now;

        if let Err(err) = self.platform.prepare_frame(self.context.io_mut(), window) {
            log::warn!("gui prepare_frame failed: {err}");
            return;
        }

        let ui = self.context.new_frame();
        run_ui(ui);

        self.platform.prepare_render(ui, window);

        let draw_data = self.context.render();
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return;
        }

        let mut render_pass = frame.overlay_pass();
        if let Err(err) = self
            .renderer
            .render(draw_data, queue, device, &mut render_pass)
        {
            log::warn!("gui render failed: {err}");
        }
    }
}
