//! # Occupancy Grid
//!
//! Boolean grid of open cells, stored column-major and iterated in the same
//! order: column outer, row inner.

use config::constants::grid_cell_count;
use config::ConfigError;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// `columns × rows` grid where `true` marks a cell that belongs to the maze.
///
/// # Example
///
/// ```rust
/// use maze_gen::OccupancyGrid;
///
/// let grid = OccupancyGrid::from_cells(2, 2, [(0, 0), (1, 0)]).unwrap();
/// assert!(grid.get(1, 0));
/// assert!(!grid.get(0, 1));
/// assert_eq!(grid.iter_open().collect::<Vec<_>>(), vec![(0, 0), (1, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a grid with every cell closed.
    pub fn new(columns: usize, rows: usize) -> Result<Self, ConfigError> {
        let count = grid_cell_count(columns, rows)
            .ok_or(ConfigError::InvalidDimensions { columns, rows })?;
        Ok(Self {
            columns,
            rows,
            cells: vec![false; count],
        })
    }

    /// Creates a grid with exactly the listed cells open.
    ///
    /// # Arguments
    ///
    /// * `columns`, `rows` - Grid dimensions
    /// * `cells` - `(column, row)` pairs to open; duplicates are harmless
    pub fn from_cells(
        columns: usize,
        rows: usize,
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, LevelError> {
        let mut grid = Self::new(columns, rows)?;
        for (column, row) in cells {
            if column >= columns || row >= rows {
                return Err(LevelError::CellOutOfBounds {
                    column,
                    row,
                    columns,
                    rows,
                });
            }
            grid.set(column, row, true);
        }
        Ok(grid)
    }

    /// Wraps an already validated column-major buffer.
    pub(crate) fn from_column_major(columns: usize, rows: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), columns * rows);
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Number of columns (x axis).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows (z axis).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns true if the cell is open; out-of-bounds cells are closed.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> bool {
        column < self.columns && row < self.rows && self.cells[self.index(column, row)]
    }

    /// Like [`get`](Self::get), for signed neighbor offsets.
    #[inline]
    pub fn get_offset(&self, column: usize, row: usize, dc: isize, dr: isize) -> bool {
        match (column.checked_add_signed(dc), row.checked_add_signed(dr)) {
            (Some(c), Some(r)) => self.get(c, r),
            _ => false,
        }
    }

    pub(crate) fn set(&mut self, column: usize, row: usize, open: bool) {
        let index = self.index(column, row);
        self.cells[index] = open;
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&open| open).count()
    }

    /// Open cells as `(column, row)` in column-major order.
    pub fn iter_open(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &open)| open)
            .map(move |(index, _)| (index / rows, index % rows))
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }
}
