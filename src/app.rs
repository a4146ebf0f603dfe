use crate::config::ViewerConfig;
use crate::gfx::camera::CameraManager;
use crate::gfx::ui::{overlay, OverlayStats};
use crate::input::Key;
use crate::scene::{AssetRegistry, Cyclic, DrawCall, Selection, SelectionKeys};
use crate::window::Window;

/// Background behind every draw mode.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// The mesh viewer: one window, one fly camera, five draw modes.
pub struct Viewer {
    config: ViewerConfig,
    quit_key: Key,
    selection_keys: SelectionKeys,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            quit_key: Key::Escape,
            selection_keys: SelectionKeys::default(),
        }
    }

    /// Opens the window, loads assets and runs the frame loop until the
    /// window is asked to close. Returns once everything is torn down.
    pub fn run(self) -> anyhow::Result<()> {
        let mut window = Window::create(&self.config)?;

        let assets = match AssetRegistry::load(window.engine(), &self.config.asset_root) {
            Ok(assets) => assets,
            Err(err) => {
                window.destroy();
                return Err(err.into());
            }
        };

        let aspect = window.width().max(1) as f32 / window.height().max(1) as f32;
        let mut camera = CameraManager::from_config(&self.config.camera, aspect);
        let mut selection = Selection::default();

        log::info!(
            "starting with {} / {} / {}",
            selection.draw_mode.name(),
            selection.mesh.name(),
            selection.texture.name()
        );

        while !window.should_close() {
            window.begin_frame();
            let dt = window.frame_time();

            if window.is_key_pressed(self.quit_key) {
                window.set_should_close(true);
            }
            selection.handle_input(window.input(), &self.selection_keys);

            let mouse_delta = window.mouse_delta();
            camera.update(mouse_delta, window.input(), dt);
            camera.resize(window.width(), window.height());

            let call = DrawCall::plan(&selection);
            let program = assets.program(call.program);
            program.set_mvp(
                window.queue(),
                camera.view_projection() * call.world_matrix(window.time()),
            );

            window.draw_scene(CLEAR_COLOR, |pass| {
                let mut scope = program.begin(pass);
                if let Some(texture) = call.texture {
                    scope.bind_texture(assets.texture(texture));
                }
                scope.draw(assets.mesh(call.mesh));
                scope.end();
            });

            let stats = OverlayStats {
                frame_time: dt,
                mesh: selection.mesh.name(),
                texture: selection.texture.name(),
                draw_mode: selection.draw_mode.name(),
            };
            window.gui(|ui| overlay(ui, &stats));

            window.loop_once();
            window.end_frame();
        }

        log::info!("shutting down");
        assets.unload();
        window.destroy();
        Ok(())
    }
}
