//! # Prism Extrusion
//!
//! Extrudes a 2D outline downward along -Y into a closed prism.
//!
//! ## Vertex Layout
//!
//! `[top-face vertices][bottom-face vertices]`, both in outline order, so
//! vertex `i + N` sits directly below vertex `i`.

use glam::{DVec2, DVec3};

use super::Polygon2D;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::triangulate::triangulate;

/// Extrudes a 2D polygon into a prism of the given depth.
///
/// Top triangles face +Y, bottom triangles face -Y and side quads face
/// outward for either outline orientation. UVs are the raw `(x, z)` of each
/// vertex. Normals and tangents are computed before returning.
///
/// # Arguments
///
/// * `polygon` - Outline in the XZ plane
/// * `depth` - Distance from the top face down to the bottom face
///
/// # Returns
///
/// A mesh with `2N` vertices and `2(N - 2) + 2N` triangles.
///
/// # Example
///
/// ```rust
/// use maze_mesh::{extrude, Polygon2D};
/// use glam::DVec2;
///
/// let square = Polygon2D::square(DVec2::splat(3.0), true);
/// let mesh = extrude(&square, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn extrude(polygon: &Polygon2D, depth: f64) -> Result<Mesh, MeshError> {
    if !depth.is_finite() || depth <= 0.0 {
        return Err(MeshError::InvalidDepth { depth });
    }

    let points = &polygon.points;
    let cap_triangles = triangulate(points)?;

    let n = points.len();
    let mut mesh = Mesh::with_capacity(2 * n, 2 * cap_triangles.len() + 2 * n);

    for p in points {
        mesh.add_vertex(DVec3::new(p.x, 0.0, p.y));
    }
    for p in points {
        mesh.add_vertex(DVec3::new(p.x, -depth, p.y));
    }

    let bottom = n as u32;

    // Triangulation is counter-clockwise in (x, z), which faces -Y
    for &[a, b, c] in &cap_triangles {
        mesh.add_triangle(a, c, b);
    }
    for &[a, b, c] in &cap_triangles {
        mesh.add_triangle(a + bottom, b + bottom, c + bottom);
    }

    let clockwise = polygon.is_clockwise();
    for i in 0..n {
        let j = (i + 1) % n;
        let (top_i, top_j) = (i as u32, j as u32);
        let (bottom_i, bottom_j) = (top_i + bottom, top_j + bottom);

        if clockwise {
            mesh.add_triangle(top_i, bottom_i, top_j);
            mesh.add_triangle(top_j, bottom_i, bottom_j);
        } else {
            mesh.add_triangle(top_i, top_j, bottom_i);
            mesh.add_triangle(top_j, bottom_j, bottom_i);
        }
    }

    let uvs: Vec<DVec2> = points.iter().chain(points.iter()).copied().collect();
    mesh.set_uvs(uvs);

    mesh.compute_normals();
    mesh.compute_tangents();

    Ok(mesh)
}
