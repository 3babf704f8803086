//! # Extrusion Operations
//!
//! Turns a closed 2D outline in the XZ plane into a prism hanging below it:
//! top face at `y = 0`, bottom face at `y = -depth`, one quad per outline edge.

mod prism;

#[cfg(test)]
mod tests;

pub use prism::extrude;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::ops::triangulate::signed_area;

/// A 2D polygon for extrusion operations.
///
/// Coordinates are `(x, z)` in world space. The outline is closed implicitly;
/// the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon2D {
    /// Boundary vertices, counter-clockwise for region outlines
    pub points: Vec<DVec2>,
}

impl Polygon2D {
    /// Creates a new polygon from boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze_mesh::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let triangle = Polygon2D::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Creates a square polygon.
    ///
    /// # Arguments
    ///
    /// * `size` - Width along x and depth along z
    /// * `center` - If true, center at origin
    pub fn square(size: DVec2, center: bool) -> Self {
        let (x, y) = if center {
            (-size.x / 2.0, -size.y / 2.0)
        } else {
            (0.0, 0.0)
        };

        Self::new(vec![
            DVec2::new(x, y),
            DVec2::new(x + size.x, y),
            DVec2::new(x + size.x, y + size.y),
            DVec2::new(x, y + size.y),
        ])
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Signed area; positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Returns true if the outline winds clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Translates the polygon by the given offset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use maze_mesh::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let mut square = Polygon2D::square(DVec2::splat(2.0), true);
    /// square.translate(DVec2::new(10.0, 0.0));
    /// assert_eq!(square.points[0], DVec2::new(9.0, -1.0));
    /// ```
    pub fn translate(&mut self, offset: DVec2) {
        for vertex in &mut self.points {
            *vertex += offset;
        }
    }
}

impl From<Vec<DVec2>> for Polygon2D {
    fn from(points: Vec<DVec2>) -> Self {
        Self::new(points)
    }
}
