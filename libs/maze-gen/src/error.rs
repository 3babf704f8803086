//! # Level Errors
//!
//! Error types for level generation.

use config::ConfigError;
use maze_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while generating a level.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// Configuration rejected before any allocation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Explicit cell lies outside the grid
    #[error("Cell ({column}, {row}) is outside a {columns}x{rows} grid")]
    CellOutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },

    /// Region geometry could not be built
    #[error("Region ({column}, {row}): {source}")]
    Region {
        column: usize,
        row: usize,
        #[source]
        source: MeshError,
    },
}

impl LevelError {
    /// Creates a region geometry error for the given cell.
    pub fn region(column: usize, row: usize, source: MeshError) -> Self {
        Self::Region {
            column,
            row,
            source,
        }
    }
}
