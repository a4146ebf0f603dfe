//! Wavefront OBJ mesh loading.

use std::io::{BufReader, Cursor};
use std::path::Path;

use crate::error::AssetError;
use crate::gfx::geometry::GeometryData;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

/// Reads and parses an OBJ file into a single piece of geometry.
pub fn load_obj(path: &Path) -> Result<GeometryData, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_obj(&bytes, path)
}

/// Parses OBJ source already in memory. `path` is only used for errors.
///
/// All models in the file are merged. Materials are ignored. Texture
/// coordinates are flipped to a top-left origin, and normals are rebuilt
/// from the faces when the file does not provide one per vertex.
pub fn parse_obj(source: &[u8], path: &Path) -> Result<GeometryData, AssetError> {
    let mut reader = BufReader::new(Cursor::new(source));
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|source| AssetError::Obj {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = GeometryData::new();
    let mut has_normals = true;
    let mut has_colors = true;

    for model in &models {
        let mesh = &model.mesh;
        let base = data.vertices.len() as u32;
        let count = mesh.positions.len() / 3;

        data.vertices
            .extend(mesh.positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]]));

        if mesh.texcoords.len() / 2 == count {
            data.tex_coords
                .extend(mesh.texcoords.chunks_exact(2).map(|t| [t[0], 1.0 - t[1]]));
        } else {
            data.tex_coords.extend(std::iter::repeat([0.0, 0.0]).take(count));
        }

        if mesh.normals.len() == mesh.positions.len() {
            data.normals
                .extend(mesh.normals.chunks_exact(3).map(|n| [n[0], n[1], n[2]]));
        } else {
            has_normals = false;
        }

        if mesh.vertex_color.len() == mesh.positions.len() {
            data.colors
                .extend(mesh.vertex_color.chunks_exact(3).map(|c| [c[0], c[1], c[2], 1.0]));
        } else {
            has_colors = false;
        }

        data.indices.extend(mesh.indices.iter().map(|i| i + base));
    }

    if data.indices.is_empty() {
        return Err(AssetError::EmptyObj {
            path: path.to_path_buf(),
        });
    }

    if !has_normals {
        data.compute_normals();
    }
    if !has_colors {
        data.colors.clear();
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
o quad
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.0
v -1.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
f 1/1 2/2 3/3 4/4
";

    #[test]
    fn quad_is_triangulated_with_rebuilt_normals() {
        let data = parse_obj(QUAD.as_bytes(), Path::new("quad.obj")).unwrap();
        assert_eq!(data.vertex_count(), 4);
        assert_eq!(data.triangle_count(), 2);
        assert_eq!(data.normals.len(), 4);
        for normal in &data.normals {
            assert!((normal[2] - 1.0).abs() < 1e-6);
        }
        assert!(data.colors.is_empty());
    }

    #[test]
    fn texture_coordinates_are_flipped() {
        let data = parse_obj(QUAD.as_bytes(), Path::new("quad.obj")).unwrap();
        assert_eq!(data.tex_coords[0], [0.0, 1.0]);
        assert_eq!(data.tex_coords[2], [1.0, 0.0]);
    }

    #[test]
    fn file_normals_are_kept() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 -1
f 1//1 2//1 3//1
";
        let data = parse_obj(src.as_bytes(), Path::new("tri.obj")).unwrap();
        assert_eq!(data.normals, vec![[0.0, 0.0, -1.0]; 3]);
    }

    #[test]
    fn models_are_merged_with_offset_indices() {
        let src = "\
o a
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
o b
v 0 0 1
v 1 0 1
v 0 1 1
f 4 5 6
";
        let data = parse_obj(src.as_bytes(), Path::new("two.obj")).unwrap();
        assert_eq!(data.vertex_count(), 6);
        assert_eq!(data.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn file_without_faces_is_rejected() {
        let err = parse_obj(b"v 0 0 0\n", Path::new("points.obj")).unwrap_err();
        assert!(matches!(err, AssetError::EmptyObj { .. }));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_obj(Path::new("does/not/exist.obj")).unwrap_err();
        match err {
            AssetError::Read { path, .. } => assert_eq!(path, Path::new("does/not/exist.obj")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
