//! # Tangent Generation
//!
//! Per-vertex tangent frames from position and UV derivatives.
//!
//! For each triangle the tangent (`sdir`) and bitangent (`tdir`) are solved
//! from the edge vectors and UV deltas, accumulated at the three corners, then
//! orthogonalized against the vertex normal. Handedness lands in `w`.

use glam::{DVec2, DVec3, DVec4};

/// Squared length below which an accumulated tangent is treated as vanished.
const TANGENT_LENGTH_SQUARED_EPSILON: f64 = 1e-20;

/// Computes one tangent per vertex.
///
/// Triangles whose UV determinant is not positive contribute a zero basis.
/// A vertex whose accumulated tangent vanishes, or is parallel to its normal,
/// falls back to an arbitrary unit vector orthogonal to the normal; a vertex
/// with a zero normal gets a zero tangent.
///
/// # Arguments
///
/// * `vertices` - Vertex positions
/// * `uvs` - Texture coordinates, one per vertex
/// * `normals` - Unit vertex normals, one per vertex
/// * `triangles` - Index triples into `vertices`
pub fn compute_tangents(
    vertices: &[DVec3],
    uvs: &[DVec2],
    normals: &[DVec3],
    triangles: &[[u32; 3]],
) -> Vec<DVec4> {
    let vertex_count = vertices.len();
    let mut tan1 = vec![DVec3::ZERO; vertex_count];
    let mut tan2 = vec![DVec3::ZERO; vertex_count];

    for tri in triangles {
        let [i1, i2, i3] = tri.map(|index| index as usize);

        let v1 = vertices[i1];
        let e1 = vertices[i2] - v1;
        let e2 = vertices[i3] - v1;

        let w1 = uv_at(uvs, i1);
        let d1 = uv_at(uvs, i2) - w1;
        let d2 = uv_at(uvs, i3) - w1;

        let divisor = d1.x * d2.y - d2.x * d1.y;
        let r = if divisor > 0.0 { 1.0 / divisor } else { 0.0 };

        let sdir = (e1 * d2.y - e2 * d1.y) * r;
        let tdir = (e2 * d1.x - e1 * d2.x) * r;

        for index in [i1, i2, i3] {
            tan1[index] += sdir;
            tan2[index] += tdir;
        }
    }

    (0..vertex_count)
        .map(|index| {
            let normal = normals.get(index).copied().unwrap_or(DVec3::ZERO);
            orthonormal_tangent(normal, tan1[index], tan2[index])
        })
        .collect()
}

fn uv_at(uvs: &[DVec2], index: usize) -> DVec2 {
    uvs.get(index).copied().unwrap_or(DVec2::ZERO)
}

/// Gram-Schmidt step: removes the normal component from `tangent` and
/// derives handedness from the accumulated `bitangent`.
fn orthonormal_tangent(normal: DVec3, tangent: DVec3, bitangent: DVec3) -> DVec4 {
    let n = normal.normalize_or_zero();
    if n == DVec3::ZERO {
        return DVec4::ZERO;
    }

    let projected = tangent - n * n.dot(tangent);
    let t = if projected.length_squared() > TANGENT_LENGTH_SQUARED_EPSILON {
        projected.normalize()
    } else {
        n.any_orthonormal_vector()
    };

    let w = if n.cross(t).dot(bitangent) < 0.0 {
        -1.0
    } else {
        1.0
    };
    t.extend(w)
}
