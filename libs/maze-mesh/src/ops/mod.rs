//! # Mesh Operations
//!
//! Triangulation, extrusion and tangent generation.

pub mod extrude;
pub mod tangents;
pub mod triangulate;

pub use extrude::{extrude, Polygon2D};
pub use triangulate::triangulate;
