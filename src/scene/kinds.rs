//! The closed sets of meshes, textures, programs and draw modes.

use crate::gfx::resources::GradientCorners;

/// A closed enumeration stepped through in a fixed order, wrapping at the end.
pub trait Cyclic: Copy + PartialEq + 'static {
    /// Every variant in cycling order. Never empty.
    const ALL: &'static [Self];

    /// Label shown in the overlay and in logs.
    fn name(self) -> &'static str;

    fn count() -> usize {
        Self::ALL.len()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Where a mesh's geometry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshSource {
    Plane,
    Sphere,
    Hemisphere,
    /// OBJ file relative to the asset root.
    Obj(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Sphere,
    Hemisphere,
    Head,
    Ct4,
}

impl MeshKind {
    pub fn source(self) -> MeshSource {
        match self {
            MeshKind::Plane => MeshSource::Plane,
            MeshKind::Sphere => MeshSource::Sphere,
            MeshKind::Hemisphere => MeshSource::Hemisphere,
            MeshKind::Head => MeshSource::Obj("meshes/head.obj"),
            MeshKind::Ct4 => MeshSource::Obj("meshes/ct4.obj"),
        }
    }
}

impl Cyclic for MeshKind {
    const ALL: &'static [Self] = &[
        MeshKind::Plane,
        MeshKind::Sphere,
        MeshKind::Hemisphere,
        MeshKind::Head,
        MeshKind::Ct4,
    ];

    fn name(self) -> &'static str {
        match self {
            MeshKind::Plane => "Plane",
            MeshKind::Sphere => "Sphere",
            MeshKind::Hemisphere => "Hemisphere",
            MeshKind::Head => "Head",
            MeshKind::Ct4 => "CT4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    GradientWarm,
    GradientCool,
}

impl TextureKind {
    /// Both gradients are square images of this size.
    pub const SIZE: u32 = 512;

    pub fn corners(self) -> GradientCorners {
        match self {
            TextureKind::GradientWarm => GradientCorners::WARM,
            TextureKind::GradientCool => GradientCorners::COOL,
        }
    }
}

impl Cyclic for TextureKind {
    const ALL: &'static [Self] = &[TextureKind::GradientWarm, TextureKind::GradientCool];

    fn name(self) -> &'static str {
        match self {
            TextureKind::GradientWarm => "Gradient (warm)",
            TextureKind::GradientCool => "Gradient (cool)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    SampleTexture,
    PositionColor,
    TcoordColor,
    NormalColor,
}

impl ProgramKind {
    /// Vertex and fragment shader files under `shaders/`.
    pub fn sources(self) -> (&'static str, &'static str) {
        match self {
            ProgramKind::SampleTexture => ("texture.vert.wgsl", "texture.frag.wgsl"),
            ProgramKind::PositionColor => ("position_color.vert.wgsl", "vertex_color.frag.wgsl"),
            ProgramKind::TcoordColor => ("tcoord_color.vert.wgsl", "vertex_color.frag.wgsl"),
            ProgramKind::NormalColor => ("normal_color.vert.wgsl", "vertex_color.frag.wgsl"),
        }
    }

    pub fn is_textured(self) -> bool {
        matches!(self, ProgramKind::SampleTexture)
    }
}

impl Cyclic for ProgramKind {
    const ALL: &'static [Self] = &[
        ProgramKind::SampleTexture,
        ProgramKind::PositionColor,
        ProgramKind::TcoordColor,
        ProgramKind::NormalColor,
    ];

    fn name(self) -> &'static str {
        match self {
            ProgramKind::SampleTexture => "sample_texture",
            ProgramKind::PositionColor => "position_color",
            ProgramKind::TcoordColor => "tcoord_color",
            ProgramKind::NormalColor => "normal_color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Current mesh, coloured by normal.
    NormalShader,
    /// Head mesh, coloured by texture coordinate.
    TcoordShader,
    /// CT4 mesh with the current texture.
    TextureShader,
    /// The hand-built vertex-coloured triangle.
    ManualMesh,
    /// Spinning hemisphere with the warm gradient.
    CustomDraw,
}

impl Cyclic for DrawMode {
    const ALL: &'static [Self] = &[
        DrawMode::NormalShader,
        DrawMode::TcoordShader,
        DrawMode::TextureShader,
        DrawMode::ManualMesh,
        DrawMode::CustomDraw,
    ];

    fn name(self) -> &'static str {
        match self {
            DrawMode::NormalShader => "Normal shader",
            DrawMode::TcoordShader => "Tcoord shader",
            DrawMode::TextureShader => "Texture shader",
            DrawMode::ManualMesh => "Manual mesh",
            DrawMode::CustomDraw => "Custom draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles_home<T: Cyclic + std::fmt::Debug>() {
        for &start in T::ALL {
            let mut value = start;
            for _ in 0..T::count() {
                value = value.next();
            }
            assert_eq!(value, start);
        }
    }

    #[test]
    fn every_enumeration_wraps_after_count_steps() {
        cycles_home::<MeshKind>();
        cycles_home::<TextureKind>();
        cycles_home::<ProgramKind>();
        cycles_home::<DrawMode>();
    }

    #[test]
    fn counts_match_the_asset_tables() {
        assert_eq!(MeshKind::count(), 5);
        assert_eq!(TextureKind::count(), 2);
        assert_eq!(ProgramKind::count(), 4);
        assert_eq!(DrawMode::count(), 5);
    }

    #[test]
    fn last_variant_wraps_to_first() {
        assert_eq!(MeshKind::Ct4.next(), MeshKind::Plane);
        assert_eq!(TextureKind::GradientCool.next(), TextureKind::GradientWarm);
        assert_eq!(DrawMode::CustomDraw.next(), DrawMode::NormalShader);
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, kind) in MeshKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn colour_programs_share_one_fragment_stage() {
        let fragments: Vec<_> = [
            ProgramKind::PositionColor,
            ProgramKind::TcoordColor,
            ProgramKind::NormalColor,
        ]
        .iter()
        .map(|p| p.sources().1)
        .collect();
        assert!(fragments.iter().all(|f| *f == "vertex_color.frag.wgsl"));
        assert!(ProgramKind::SampleTexture.is_textured());
        assert!(!ProgramKind::NormalColor.is_textured());
    }
}
