//! # Extrusion Tests
//!
//! Tests for `Polygon2D` helpers and prism extrusion.

use super::*;
use crate::error::MeshError;
use crate::mesh::Mesh;
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};

/// Regular convex polygon, counter-clockwise in (x, z).
fn regular_polygon(sides: usize, radius: f64) -> Polygon2D {
    let points = (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / sides as f64;
            DVec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon2D::new(points)
}

fn face_normal(mesh: &Mesh, tri: [u32; 3]) -> DVec3 {
    let [a, b, c] = tri.map(|i| mesh.vertex(i));
    (b - a).cross(c - a)
}

fn face_center(mesh: &Mesh, tri: [u32; 3]) -> DVec3 {
    let [a, b, c] = tri.map(|i| mesh.vertex(i));
    (a + b + c) / 3.0
}

/// Every face of a convex prism points away from its centroid.
fn assert_outward(mesh: &Mesh, depth: f64) {
    let centroid = DVec3::new(0.0, -depth / 2.0, 0.0);
    for &tri in mesh.triangles() {
        let normal = face_normal(mesh, tri);
        let outward = face_center(mesh, tri) - centroid;
        assert!(
            normal.dot(outward) > 0.0,
            "triangle {tri:?} faces inward"
        );
    }
}

#[test]
fn test_polygon2d_square() {
    let square = Polygon2D::square(DVec2::new(10.0, 20.0), false);
    assert_eq!(square.vertex_count(), 4);

    // Check corners
    assert_eq!(square.points[0], DVec2::new(0.0, 0.0));
    assert_eq!(square.points[1], DVec2::new(10.0, 0.0));
    assert_eq!(square.points[2], DVec2::new(10.0, 20.0));
    assert_eq!(square.points[3], DVec2::new(0.0, 20.0));
}

#[test]
fn test_polygon2d_square_centered() {
    let square = Polygon2D::square(DVec2::splat(10.0), true);

    // Check corners are centered
    assert_eq!(square.points[0], DVec2::new(-5.0, -5.0));
    assert_eq!(square.points[2], DVec2::new(5.0, 5.0));
    assert!(!square.is_clockwise());
    assert_relative_eq!(square.signed_area(), 100.0);
}

#[test]
fn test_polygon2d_clockwise() {
    let mut points = Polygon2D::square(DVec2::ONE, true).points;
    points.reverse();
    assert!(Polygon2D::from(points).is_clockwise());
}

#[test]
fn test_extrude_counts_for_convex_polygons() {
    for sides in [3usize, 4, 5, 8, 17] {
        let polygon = regular_polygon(sides, 2.0);
        let mesh = extrude(&polygon, 1.5).unwrap();

        assert_eq!(mesh.vertex_count(), 2 * sides);
        assert_eq!(mesh.triangle_count(), 2 * (sides - 2) + 2 * sides);
        assert!(mesh
            .triangles()
            .iter()
            .flatten()
            .all(|&index| (index as usize) < 2 * sides));
        assert!(mesh.validate());
    }
}

#[test]
fn test_extrude_vertex_layout() {
    let square = Polygon2D::square(DVec2::splat(2.0), true);
    let mesh = extrude(&square, 0.75).unwrap();

    for (i, p) in square.points.iter().enumerate() {
        assert_eq!(mesh.vertex(i as u32), DVec3::new(p.x, 0.0, p.y));
        assert_eq!(mesh.vertex((i + 4) as u32), DVec3::new(p.x, -0.75, p.y));
    }

    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -0.75, -1.0));
    assert_eq!(max, DVec3::new(1.0, 0.0, 1.0));
}

#[test]
fn test_extrude_normals_face_outward() {
    let mesh = extrude(&regular_polygon(6, 1.0), 2.0).unwrap();
    assert_outward(&mesh, 2.0);
}

#[test]
fn test_extrude_clockwise_outline_faces_outward() {
    let mut points = regular_polygon(6, 1.0).points;
    points.reverse();
    let mesh = extrude(&Polygon2D::new(points), 2.0).unwrap();
    assert_outward(&mesh, 2.0);
}

#[test]
fn test_extrude_caps_face_up_and_down() {
    let square = Polygon2D::square(DVec2::splat(4.0), true);
    let mesh = extrude(&square, 1.0).unwrap();

    // First N - 2 triangles are the top face, the next N - 2 the bottom
    for &tri in &mesh.triangles()[..2] {
        assert!(face_normal(&mesh, tri).y > 0.0);
    }
    for &tri in &mesh.triangles()[2..4] {
        assert!(face_normal(&mesh, tri).y < 0.0);
    }
}

#[test]
fn test_extrude_attributes() {
    let square = Polygon2D::square(DVec2::new(3.0, 5.0), false);
    let mesh = extrude(&square, 1.0).unwrap();

    let uvs = mesh.uvs().unwrap();
    assert_eq!(uvs.len(), 8);
    assert_eq!(uvs[2], DVec2::new(3.0, 5.0));
    assert_eq!(uvs[6], DVec2::new(3.0, 5.0));

    let normals = mesh.normals().unwrap();
    assert!(normals
        .iter()
        .all(|n| (n.length() - 1.0).abs() < 1e-12));

    let tangents = mesh.tangents().unwrap();
    assert_eq!(tangents.len(), 8);
    for (tangent, normal) in tangents.iter().zip(normals) {
        assert!(tangent.w == 1.0 || tangent.w == -1.0);
        assert!(tangent.truncate().dot(*normal).abs() < 1e-9);
    }
}

#[test]
fn test_extrude_invalid_depth() {
    let square = Polygon2D::square(DVec2::splat(10.0), false);
    for depth in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            extrude(&square, depth),
            Err(MeshError::InvalidDepth { .. })
        ));
    }
}

#[test]
fn test_extrude_invalid_polygon() {
    let line = Polygon2D::new(vec![DVec2::ZERO, DVec2::X]);
    assert!(matches!(
        extrude(&line, 1.0),
        Err(MeshError::DegeneratePolygon { .. })
    ));
}
