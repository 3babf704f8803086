//! # Mesh Errors
//!
//! Error types for triangulation and extrusion.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Outline has too few points to enclose an area
    #[error("Degenerate polygon: {message}")]
    DegeneratePolygon { message: String, vertex_count: usize },

    /// Ear clipping stalled: collinear or self-intersecting outline
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String, remaining: usize },

    /// Extrusion depth is zero, negative or not finite
    #[error("Invalid extrusion depth: {depth}")]
    InvalidDepth { depth: f64 },
}

impl MeshError {
    /// Creates a degenerate polygon error.
    pub fn degenerate(message: impl Into<String>, vertex_count: usize) -> Self {
        Self::DegeneratePolygon {
            message: message.into(),
            vertex_count,
        }
    }

    /// Creates a triangulation failure error.
    pub fn triangulation_failed(message: impl Into<String>, remaining: usize) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
            remaining,
        }
    }
}
