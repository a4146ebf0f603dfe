//! Maps the active draw mode onto the single draw issued each frame.

use cgmath::{Matrix4, Rad, SquareMatrix};

use super::kinds::{DrawMode, MeshKind, ProgramKind, TextureKind};
use super::selection::Selection;

/// Which mesh a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshSlot {
    Scene(MeshKind),
    /// The hand-built triangle, kept outside the mesh table.
    ManualTriangle,
}

/// One program/mesh/texture combination and its model transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub program: ProgramKind,
    pub mesh: MeshSlot,
    pub texture: Option<TextureKind>,
    /// Rotate the model about +Y by the elapsed time in radians.
    pub spin: bool,
}

impl DrawCall {
    pub fn plan(selection: &Selection) -> Self {
        match selection.draw_mode {
            DrawMode::NormalShader => Self {
                program: ProgramKind::NormalColor,
                mesh: MeshSlot::Scene(selection.mesh),
                texture: None,
                spin: false,
            },
            DrawMode::TcoordShader => Self {
                program: ProgramKind::TcoordColor,
                mesh: MeshSlot::Scene(MeshKind::Head),
                texture: None,
                spin: false,
            },
            DrawMode::TextureShader => Self {
                program: ProgramKind::SampleTexture,
                mesh: MeshSlot::Scene(MeshKind::Ct4),
                texture: Some(selection.texture),
                spin: false,
            },
            DrawMode::ManualMesh => Self {
                program: ProgramKind::PositionColor,
                mesh: MeshSlot::ManualTriangle,
                texture: None,
                spin: false,
            },
            DrawMode::CustomDraw => Self {
                program: ProgramKind::SampleTexture,
                mesh: MeshSlot::Scene(MeshKind::Hemisphere),
                texture: Some(TextureKind::GradientWarm),
                spin: true,
            },
        }
    }

    /// Model matrix at `time` seconds since start.
    pub fn world_matrix(&self, time: f32) -> Matrix4<f32> {
        if self.spin {
            Matrix4::from_angle_y(Rad(time))
        } else {
            Matrix4::identity()
        }
    }
}
