//! # Ear Clipping Triangulation
//!
//! Triangulates a simple polygon into `N - 2` triangles.
//!
//! ## Algorithm
//!
//! 1. Normalize the working order to counter-clockwise using the signed area
//! 2. Scan the remaining vertices with a cursor; a vertex is an ear when it
//!    turns strictly left and no other remaining vertex lies strictly inside
//!    the triangle it forms with its neighbors
//! 3. Clip the ear and re-test the vertex now under the cursor
//! 4. Emit the last three vertices as the final triangle
//!
//! Collinear vertices never count as ears, so points lying on an edge (a
//! semicircle's focal point, for one) end up inside fan triangles instead of
//! producing zero-area slivers.

use config::constants::EPSILON;
use glam::DVec2;

use crate::error::MeshError;

/// Triangulates a simple polygon given in either orientation.
///
/// Returned triples index into `points` and are counter-clockwise in the
/// polygon plane.
///
/// # Arguments
///
/// * `points` - Polygon vertices, closed implicitly
///
/// # Example
///
/// ```rust
/// use maze_mesh::ops::triangulate::triangulate;
/// use glam::DVec2;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let triangles = triangulate(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(points: &[DVec2]) -> Result<Vec<[u32; 3]>, MeshError> {
    let count = points.len();
    if count < 3 {
        return Err(MeshError::degenerate(
            "Polygon must have at least 3 vertices",
            count,
        ));
    }

    let mut remaining: Vec<usize> = (0..count).collect();
    if signed_area(points) < 0.0 {
        remaining.reverse();
    }

    let mut triangles = Vec::with_capacity(count - 2);
    let mut cursor = 0;
    let mut misses = 0;

    while remaining.len() > 3 {
        let len = remaining.len();
        let prev = remaining[(cursor + len - 1) % len];
        let current = remaining[cursor];
        let next = remaining[(cursor + 1) % len];

        if is_ear(points, &remaining, prev, current, next) {
            triangles.push(index_triple(prev, current, next));
            remaining.remove(cursor);
            if cursor >= remaining.len() {
                cursor = 0;
            }
            misses = 0;
        } else {
            cursor = (cursor + 1) % len;
            misses += 1;
            if misses >= len {
                return Err(MeshError::triangulation_failed(
                    "no ear found in a full pass",
                    len,
                ));
            }
        }
    }

    let [a, b, c] = [remaining[0], remaining[1], remaining[2]];
    if cross(points[a], points[b], points[c]) <= EPSILON {
        return Err(MeshError::triangulation_failed(
            "final triangle is degenerate",
            remaining.len(),
        ));
    }
    triangles.push(index_triple(a, b, c));

    Ok(triangles)
}

/// Signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise order.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

/// Z component of `(b - a) × (c - b)`; positive when `a → b → c` turns left.
#[inline]
fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - b)
}

fn is_ear(points: &[DVec2], remaining: &[usize], prev: usize, current: usize, next: usize) -> bool {
    let (a, b, c) = (points[prev], points[current], points[next]);
    if cross(a, b, c) <= EPSILON {
        return false;
    }

    !remaining
        .iter()
        .filter(|&&index| index != prev && index != current && index != next)
        .any(|&index| strictly_inside(points[index], a, b, c))
}

/// True when `p` lies strictly inside the counter-clockwise triangle `abc`.
fn strictly_inside(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    (b - a).perp_dot(p - a) > EPSILON
        && (c - b).perp_dot(p - b) > EPSILON
        && (a - c).perp_dot(p - c) > EPSILON
}

fn index_triple(a: usize, b: usize, c: usize) -> [u32; 3] {
    [a as u32, b as u32, c as u32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn triangle_area(points: &[DVec2], tri: [u32; 3]) -> f64 {
        let [a, b, c] = tri.map(|i| points[i as usize]);
        (b - a).perp_dot(c - a) * 0.5
    }

    fn total_area(points: &[DVec2], triangles: &[[u32; 3]]) -> f64 {
        triangles.iter().map(|&tri| triangle_area(points, tri)).sum()
    }

    /// Semicircle: focal point on the diameter, then the arc.
    fn cap(segments: usize) -> Vec<DVec2> {
        let mut points = vec![DVec2::ZERO];
        points.extend((0..=segments).map(|i| {
            let theta = -PI / 2.0 + PI * i as f64 / segments as f64;
            DVec2::new(theta.cos(), theta.sin())
        }));
        points
    }

    #[test]
    fn test_triangulate_square() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&square).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(total_area(&square, &triangles), 4.0);
    }

    #[test]
    fn test_triangulate_clockwise_input_emits_ccw() {
        let square = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(2.0, 0.0),
        ];
        let triangles = triangulate(&square).unwrap();
        assert_eq!(triangles.len(), 2);
        for &tri in &triangles {
            assert!(triangle_area(&square, tri) > 0.0);
        }
    }

    #[test]
    fn test_triangulate_concave_polygon() {
        // L-shape
        let shape = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&shape).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(total_area(&shape, &triangles), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_collinear_focal_point_is_not_clipped() {
        let points = cap(8);
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), points.len() - 2);
        for &tri in &triangles {
            assert!(triangle_area(&points, tri) > EPSILON);
        }
        assert_relative_eq!(
            total_area(&points, &triangles),
            signed_area(&points),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_too_few_points() {
        let result = triangulate(&[DVec2::ZERO, DVec2::X]);
        assert!(matches!(
            result,
            Err(MeshError::DegeneratePolygon { vertex_count: 2, .. })
        ));
    }

    #[test]
    fn test_all_collinear_fails() {
        let line = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 0.0),
        ];
        assert!(matches!(
            triangulate(&line),
            Err(MeshError::TriangulationFailed { .. })
        ));
    }

    #[test]
    fn test_degenerate_triangle_fails() {
        let line = [DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)];
        assert!(matches!(
            triangulate(&line),
            Err(MeshError::TriangulationFailed { remaining: 3, .. })
        ));
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [DVec2::ZERO, DVec2::X, DVec2::ONE];
        let cw = [DVec2::ZERO, DVec2::ONE, DVec2::X];
        assert_relative_eq!(signed_area(&ccw), 0.5);
        assert_relative_eq!(signed_area(&cw), -0.5);
    }
}
