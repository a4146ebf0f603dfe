//! # Primitive Shape Generation
//!
//! All shapes are generated with outward normals, texture coordinates and
//! counter-clockwise front faces.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a plane in the XY plane, centered at the origin, facing +Z.
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
pub fn generate_plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, 1.0 - v]);
        }
    }

    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.extend_from_slice(&[i, i + 1, next_row]);
            data.indices.extend_from_slice(&[i + 1, next_row + 1, next_row]);
        }
    }

    data
}

/// Generate a UV sphere of radius 1.0 centered at the origin.
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    generate_sphere_band(longitude_segments.max(3), latitude_segments.max(2), PI)
}

/// Generate the upper half (y >= 0) of a unit UV sphere, open at the base.
///
/// # Arguments
/// * `longitude_segments` - Number of segments around the Y axis
/// * `latitude_segments` - Number of rings between the pole and the rim
pub fn generate_hemisphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    generate_sphere_band(longitude_segments.max(3), latitude_segments.max(1), PI * 0.5)
}

/// Sweeps the polar angle from the north pole down to `theta_max`.
fn generate_sphere_band(long_segs: u32, lat_segs: u32, theta_max: f32) -> GeometryData {
    let mut data = GeometryData::new();

    for lat in 0..=lat_segs {
        let v = lat as f32 / lat_segs as f32;
        let theta = v * theta_max;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let u = long as f32 / long_segs as f32;
            let phi = u * 2.0 * PI;

            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            data.vertices.push([x, y, z]);
            data.normals.push([x, y, z]);
            data.tex_coords.push([u, v]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend_from_slice(&[first, first + 1, second]);
            data.indices.extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    data
}

/// Generate a single triangle from explicit positions and colours.
pub fn generate_triangle(positions: [[f32; 3]; 3], colors: [[f32; 4]; 3]) -> GeometryData {
    let mut data = GeometryData::new();
    data.vertices = positions.to_vec();
    data.colors = colors.to_vec();
    data.tex_coords = vec![[0.0, 1.0], [1.0, 1.0], [0.5, 0.0]];
    data.indices = vec![0, 1, 2];
    data.compute_normals();
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(data: &GeometryData, tri: usize) -> [f32; 3] {
        let idx = &data.indices[tri * 3..tri * 3 + 3];
        let [a, b, c] = [idx[0], idx[1], idx[2]].map(|i| data.vertices[i as usize]);
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
    }

    #[test]
    fn plane_faces_positive_z() {
        let plane = generate_plane(2.0, 2.0, 3, 3);
        for tri in 0..plane.triangle_count() {
            assert!(face_normal(&plane, tri)[2] > 0.0);
        }
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(8, 6);
        assert_eq!(sphere.vertices.len(), 9 * 7);
        assert_eq!(sphere.triangle_count(), 8 * 6 * 2);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());
    }

    #[test]
    fn sphere_triangles_wind_outward() {
        let sphere = generate_sphere(16, 8);
        for tri in 0..sphere.triangle_count() {
            let n = face_normal(&sphere, tri);
            // Pole triangles are degenerate; skip them.
            if dot(n, n) < 1e-12 {
                continue;
            }
            let centroid = sphere.indices[tri * 3] as usize;
            assert!(dot(n, sphere.vertices[centroid]) > -1e-6);
        }
    }

    #[test]
    fn hemisphere_stays_above_the_equator() {
        let dome = generate_hemisphere(12, 6);
        assert!(dome.vertices.iter().all(|v| v[1] >= -1e-6));
        let rim = dome.vertices.iter().filter(|v| v[1].abs() < 1e-6).count();
        assert_eq!(rim, 13);
    }

    #[test]
    fn triangle_keeps_vertex_colours() {
        let tri = generate_triangle(
            [[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]],
            [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0], [0.0, 0.0, 1.0, 1.0]],
        );
        assert_eq!(tri.triangle_count(), 1);
        assert_eq!(tri.to_vertices()[1].color, [0.0, 1.0, 0.0, 1.0]);
        assert!((tri.normals[0][2] - 1.0).abs() < 1e-6);
    }
}
