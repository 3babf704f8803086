//! # Region Outlines
//!
//! Closed 2D outlines in world-space `(x, z)` for each shape variant.
//!
//! Curved outlines start with the focal point (the circle center) followed by
//! `subdivisions + 1` arc points swept counter-clockwise, so every outline
//! has `subdivisions + 2` points.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use maze_mesh::Polygon2D;

use super::Direction;

/// Axis-aligned rectangle around `center`, counter-clockwise.
pub fn square(center: DVec2, size: DVec2) -> Polygon2D {
    let mut outline = Polygon2D::square(size, true);
    outline.translate(center);
    outline
}

/// Quarter circle with radii `size`, focal point on the corner the curve
/// bulges away from.
pub fn quarter_curve(center: DVec2, size: DVec2, facing: Direction, subdivisions: u32) -> Polygon2D {
    let (offset, start) = match facing {
        Direction::North => (DVec2::new(1.0, 1.0), PI),
        Direction::East => (DVec2::new(1.0, -1.0), FRAC_PI_2),
        Direction::South => (DVec2::new(-1.0, -1.0), 0.0),
        Direction::West => (DVec2::new(-1.0, 1.0), 3.0 * FRAC_PI_2),
    };
    let focal = center + size * offset * 0.5;
    arc(focal, size, start, FRAC_PI_2, subdivisions)
}

/// Half ellipse with radii `size / 2`, focal point on the middle of the
/// flat edge.
pub fn semicircle_cap(center: DVec2, size: DVec2, facing: Direction, subdivisions: u32) -> Polygon2D {
    let (offset, start) = match facing {
        Direction::North => (DVec2::new(1.0, 0.0), FRAC_PI_2),
        Direction::East => (DVec2::new(0.0, 1.0), PI),
        Direction::South => (DVec2::new(-1.0, 0.0), 3.0 * FRAC_PI_2),
        Direction::West => (DVec2::new(0.0, -1.0), 0.0),
    };
    let radii = size * 0.5;
    let focal = center + radii * offset;
    arc(focal, radii, start, PI, subdivisions)
}

/// Focal point followed by an elliptical arc from `start` through `sweep`.
///
/// `subdivisions` must be positive; callers validate it first.
fn arc(focal: DVec2, radii: DVec2, start: f64, sweep: f64, subdivisions: u32) -> Polygon2D {
    debug_assert!(subdivisions > 0, "arc needs at least one segment");
    let mut points = Vec::with_capacity(subdivisions as usize + 2);
    points.push(focal);
    points.extend((0..=subdivisions).map(|i| {
        let theta = start + sweep * f64::from(i) / f64::from(subdivisions);
        focal + radii * DVec2::new(theta.cos(), theta.sin())
    }));
    Polygon2D::new(points)
}
