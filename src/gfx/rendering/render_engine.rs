//! WGPU rendering context
//!
//! Owns the surface, device, queue and depth buffer for one window and hands
//! out per-frame command recording via [`Frame`].

use std::sync::Arc;

use crate::error::WindowError;
use crate::gfx::resources::texture_resource::TextureResource;
use crate::logging;

/// Core rendering context for one window surface
///
/// The RenderEngine handles all low-level graphics state:
/// - Surface and device management
/// - Depth buffer handling
/// - Frame acquisition and presentation
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: wgpu::TextureFormat,
    skipped: SkippedFrames,
}

/// Counts consecutive frames that could not acquire a surface image, so a
/// minimised or lost surface is reported once rather than every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SkippedFrames {
    count: u32,
}

impl SkippedFrames {
    /// Level to log the newest skip at: `warn` for the first of a run.
    fn skip(&mut self) -> log::Level {
        self.count = self.count.saturating_add(1);
        if self.count == 1 {
            log::Level::Warn
        } else {
            log::Level::Trace
        }
    }

    /// Ends a run of skips, returning its length if there was one.
    fn recover(&mut self) -> Option<u32> {
        match std::mem::take(&mut self.count) {
            0 => None,
            count => Some(count),
        }
    }
}

/// One frame in flight: the acquired surface image plus a command encoder.
pub struct Frame {
    surface_texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
    encoder: wgpu::CommandEncoder,
}

impl Frame {
    /// Begins the scene pass, clearing colour and depth.
    pub fn clear_pass<'a>(
        &'a mut self,
        depth_view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> wgpu::RenderPass<'a> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        })
    }

    /// Begins a pass that draws over the existing colour without depth.
    pub fn overlay_pass(&mut self) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Overlay Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        })
    }
}

impl RenderEngine {
    /// Creates a rendering context for the given window
    ///
    /// Debug builds enable the backend's validation layer; every uncaptured
    /// device error is routed to the log instead of panicking.
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial surface width in pixels
    /// * `height` - Initial surface height in pixels
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, WindowError> {
        let flags = if cfg!(debug_assertions) {
            wgpu::InstanceFlags::debugging()
        } else {
            wgpu::InstanceFlags::empty()
        };
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            flags,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        logging::install_gpu_diagnostics(&device);

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(WindowError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        Ok(RenderEngine {
            surface,
            device: Arc::new(device),
            queue,
            config,
            depth_texture,
            format,
            skipped: SkippedFrames::default(),
        })
    }

    /// Acquires the next surface image and opens a command encoder.
    ///
    /// Returns `None` when the surface is lost or outdated; the surface is
    /// reconfigured and the caller skips drawing for this frame.
    pub fn begin_frame(&mut self) -> Option<Frame> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                let level = self.skipped.skip();
                log::log!(level, "skipping frame: {err}");
                if matches!(err, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) {
                    self.surface.configure(&self.device, &self.config);
                }
                return None;
            }
        };
        if let Some(count) = self.skipped.recover() {
            log::debug!("surface recovered after {count} skipped frames");
        }

        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        Some(Frame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the image.
    pub fn present(&self, frame: Frame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        frame.surface_texture.present();
    }

    /// Resizes the surface and recreates the depth buffer.
    ///
    /// Zero-sized requests (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);

        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn shared_device(&self) -> Arc<wgpu::Device> {
        Arc::clone(&self.device)
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn depth_format(&self) -> wgpu::TextureFormat {
        TextureResource::DEPTH_FORMAT
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_texture.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_skip_of_a_run_warns() {
        let mut skipped = SkippedFrames::default();
        assert_eq!(skipped.skip(), log::Level::Warn);
        for _ in 0..100 {
            assert_eq!(skipped.skip(), log::Level::Trace);
        }
        assert_eq!(skipped.recover(), Some(101));
        assert_eq!(skipped.recover(), None);
        assert_eq!(skipped.skip(), log::Level::Warn);
    }
}
