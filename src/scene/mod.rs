//! Scene contents: which assets exist, which are selected, and what gets
//! drawn each frame.

pub mod kinds;
pub mod plan;
pub mod registry;
pub mod selection;

pub use kinds::{Cyclic, DrawMode, MeshKind, MeshSource, ProgramKind, TextureKind};
pub use plan::{DrawCall, MeshSlot};
pub use registry::AssetRegistry;
pub use selection::{Selection, SelectionKeys};
