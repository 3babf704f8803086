//! # Maze Mesh
//!
//! Geometry kernel for maze regions. Turns 2D region outlines into closed
//! prism meshes ready for rendering.
//!
//! ## Architecture
//!
//! ```text
//! Polygon2D (XZ outline) → triangulate → extrude → Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Triangulation**: Ear clipping
//! - **Extrusion**: Top/bottom caps plus one quad per outline edge
//! - **Tangents**: UV-derivative tangent frames, Gram-Schmidt orthonormalized
//!
//! ## Usage
//!
//! ```rust
//! use maze_mesh::{extrude, Mesh, Polygon2D};
//! use glam::DVec2;
//!
//! let a = extrude(&Polygon2D::square(DVec2::splat(3.0), true), 1.0).unwrap();
//! let mut b = Polygon2D::square(DVec2::splat(3.0), true);
//! b.translate(DVec2::new(3.0, 0.0));
//! let b = extrude(&b, 1.0).unwrap();
//!
//! let surface = Mesh::merge_all([&a, &b]);
//! assert_eq!(surface.triangle_count(), 24);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{extrude, triangulate, Polygon2D};
