use imgui::Ui;

/// What the overlay reports each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStats<'a> {
    /// Seconds taken by the previous frame.
    pub frame_time: f32,
    pub mesh: &'a str,
    pub texture: &'a str,
    pub draw_mode: &'a str,
}

impl OverlayStats<'_> {
    pub fn fps(&self) -> f32 {
        if self.frame_time > 0.0 {
            1.0 / self.frame_time
        } else {
            0.0
        }
    }
}

const KEY_HELP: &[(&str, &str)] = &[
    ("Esc", "quit"),
    ("Tab", "next mesh"),
    ("T", "next texture"),
    ("Y", "next draw mode"),
    ("W/A/S/D", "move"),
    ("Space/Shift", "up/down"),
];

/// Small fixed window in the top-left corner with timing and selection.
pub fn overlay(ui: &Ui, stats: &OverlayStats) {
    ui.window("Viewer")
        .position([10.0, 10.0], imgui::Condition::FirstUseEver)
        .always_auto_resize(true)
        .collapsible(false)
        .build(|| {
            ui.text(format!(
                "{:.1} fps ({:.2} ms)",
                stats.fps(),
                stats.frame_time * 1000.0
            ));
            ui.separator();
            ui.text(format!("Draw mode: {}", stats.draw_mode));
            ui.text(format!("Mesh: {}", stats.mesh));
            ui.text(format!("Texture: {}", stats.texture));

            if ui.collapsing_header("Controls", imgui::TreeNodeFlags::empty()) {
                for (key, action) in KEY_HELP {
                    ui.text(format!("{key:>12}  {action}"));
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_zero_before_the_first_frame() {
        let stats = OverlayStats {
            frame_time: 0.0,
            mesh: "Plane",
            texture: "Gradient (cool)",
            draw_mode: "Normal shader",
        };
        assert_eq!(stats.fps(), 0.0);
    }

    #[test]
    fn fps_inverts_frame_time() {
        let stats = OverlayStats {
            frame_time: 0.02,
            mesh: "",
            texture: "",
            draw_mode: "",
        };
        assert!((stats.fps() - 50.0).abs() < 1e-3);
    }
}
