//! # Maze Carving
//!
//! Growing-tree carving with a maximum-neighbor constraint.
//!
//! ## Algorithm
//!
//! 1. Every cell starts unexposed; cell `(0, 0)` is carved unconditionally
//! 2. Carving a cell exposes its unexposed 4-neighbors onto the frontier
//! 3. Until the frontier is empty, remove a uniformly random frontier cell
//!    and count its carved neighbors (see [`MazeCarver::carved_neighbor_count`]);
//!    carve it when the count is below the bound, otherwise harden it to wall
//!
//! Lower bounds give narrow, corridor-like mazes; higher bounds let passages
//! widen into open rooms.

use config::constants::{grid_cell_count, MAX_NEIGHBORS_ALLOWED, MIN_NEIGHBORS_ALLOWED};
use config::ConfigError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::grid::OccupancyGrid;


/// Carving state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not yet reached by the frontier
    Unexposed,
    /// Waiting on the frontier
    Exposed,
    /// Part of the maze (terminal)
    InMaze,
    /// Hardened to wall (terminal)
    Wall,
}

/// What happened to an evaluated frontier cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarveOutcome {
    Carved,
    Hardened,
}

/// One frontier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarveEvent {
    pub column: usize,
    pub row: usize,
    /// Carved-neighbor count at evaluation time
    pub neighbors_in_maze: u32,
    pub outcome: CarveOutcome,
}

/// Step-wise growing-tree carver.
///
/// Iterating the carver yields one [`CarveEvent`] per frontier evaluation;
/// the iterator ends when the frontier is empty.
///
/// # Example
///
/// ```rust
/// use maze_gen::maze::{CarveOutcome, MazeCarver};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut carver = MazeCarver::new(5, 5, 4, &mut rng).unwrap();
/// for event in carver.by_ref() {
///     if event.outcome == CarveOutcome::Hardened {
///         assert!(event.neighbors_in_maze >= 4);
///     }
/// }
/// let grid = carver.into_grid();
/// assert!(grid.get(0, 0));
/// ```
#[derive(Debug)]
pub struct MazeCarver<R: Rng> {
    columns: usize,
    rows: usize,
    neighbors_allowed: u32,
    cells: Vec<CellState>,
    frontier: Vec<(usize, usize)>,
    rng: R,
}

impl<R: Rng> MazeCarver<R> {
    /// Validates the parameters, allocates the grid and carves the seed cell.
    ///
    /// # Arguments
    ///
    /// * `columns`, `rows` - Grid dimensions, each in `1..=MAX_GRID_DIMENSION`
    /// * `neighbors_allowed` - Carving bound, in `2..=13`
    /// * `rng` - Random source; pass `&mut rng` to keep using it afterwards
    pub fn new(
        columns: usize,
        rows: usize,
        neighbors_allowed: u32,
        rng: R,
    ) -> Result<Self, ConfigError> {
        if !(MIN_NEIGHBORS_ALLOWED..=MAX_NEIGHBORS_ALLOWED).contains(&neighbors_allowed) {
            return Err(ConfigError::NeighborsOutOfRange(neighbors_allowed));
        }
        let count = grid_cell_count(columns, rows)
            .ok_or(ConfigError::InvalidDimensions { columns, rows })?;

        let mut carver = Self {
            columns,
            rows,
            neighbors_allowed,
            cells: vec![CellState::Unexposed; count],
            frontier: Vec::new(),
            rng,
        };
        carver.carve_cell(0, 0);
        Ok(carver)
    }

    /// Evaluates one random frontier cell, or returns `None` once the
    /// frontier is empty.
    ///
    /// Cells walled off before the frontier ever reached them are hardened
    /// when the frontier drains, so a finished carver holds only carved and
    /// hardened cells.
    pub fn step(&mut self) -> Option<CarveEvent> {
        if self.frontier.is_empty() {
            self.seal_unreached();
            return None;
        }

        let index = self.rng.gen_range(0..self.frontier.len());
        let (column, row) = self.frontier.swap_remove(index);

        let neighbors_in_maze = self.carved_neighbor_count(column, row);
        let outcome = if neighbors_in_maze < self.neighbors_allowed {
            self.carve_cell(column, row);
            CarveOutcome::Carved
        } else {
            self.set_state(column, row, CellState::Wall);
            CarveOutcome::Hardened
        };

        Some(CarveEvent {
            column,
            row,
            neighbors_in_maze,
            outcome,
        })
    }

    /// Current state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn state(&self, column: usize, row: usize) -> CellState {
        self.cells[self.index(column, row)]
    }

    /// Number of cells waiting on the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns true once the frontier is empty.
    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Counts carved neighbors of a cell.
    ///
    /// Each carved orthogonal neighbor counts once, and additionally counts
    /// the two diagonal cells on the far side of the evaluated cell:
    ///
    /// ```text
    ///   carved (x-1, y)  →  +1, plus carved (x+1, y-1) and (x+1, y+1)
    ///   carved (x+1, y)  →  +1, plus carved (x-1, y-1) and (x-1, y+1)
    ///   carved (x, y-1)  →  +1, plus carved (x-1, y+1) and (x+1, y+1)
    ///   carved (x, y+1)  →  +1, plus carved (x-1, y-1) and (x+1, y-1)
    /// ```
    ///
    /// where `x` is the column and `y` the row. Cells outside the grid never
    /// count, and the far-side diagonals are only examined when the far side
    /// itself is inside the grid.
    pub fn carved_neighbor_count(&self, column: usize, row: usize) -> u32 {
        let (x, y) = (column, row);
        let has_left = x > 0;
        let has_right = x + 1 < self.columns;
        let has_up = y > 0;
        let has_down = y + 1 < self.rows;

        let carved = |c: usize, r: usize| u32::from(self.state(c, r) == CellState::InMaze);
        let mut count = 0;

        if has_left && self.state(x - 1, y) == CellState::InMaze {
            count += 1;
            if has_right {
                if has_up {
                    count += carved(x + 1, y - 1);
                }
                if has_down {
                    count += carved(x + 1, y + 1);
                }
            }
        }

        if has_right && self.state(x + 1, y) == CellState::InMaze {
            count += 1;
            if has_left {
                if has_up {
                    count += carved(x - 1, y - 1);
                }
                if has_down {
                    count += carved(x - 1, y + 1);
                }
            }
        }

        if has_up && self.state(x, y - 1) == CellState::InMaze {
            count += 1;
            if has_down {
                if has_left {
                    count += carved(x - 1, y + 1);
                }
                if has_right {
                    count += carved(x + 1, y + 1);
                }
            }
        }

        if has_down && self.state(x, y + 1) == CellState::InMaze {
            count += 1;
            if has_up {
                if has_left {
                    count += carved(x - 1, y - 1);
                }
                if has_right {
                    count += carved(x + 1, y - 1);
                }
            }
        }

        count
    }

    /// Extracts the occupancy grid; cells not yet carved read as closed.
    pub fn into_grid(self) -> OccupancyGrid {
        let cells = self
            .cells
            .iter()
            .map(|&state| state == CellState::InMaze)
            .collect();
        OccupancyGrid::from_column_major(self.columns, self.rows, cells)
    }

    fn carve_cell(&mut self, column: usize, row: usize) {
        self.set_state(column, row, CellState::InMaze);

        if column > 0 {
            self.expose(column - 1, row);
        }
        if column + 1 < self.columns {
            self.expose(column + 1, row);
        }
        if row > 0 {
            self.expose(column, row - 1);
        }
        if row + 1 < self.rows {
            self.expose(column, row + 1);
        }
    }

    fn seal_unreached(&mut self) {
        for state in &mut self.cells {
            if *state == CellState::Unexposed {
                *state = CellState::Wall;
            }
        }
    }

    fn expose(&mut self, column: usize, row: usize) {
        if self.state(column, row) == CellState::Unexposed {
            self.set_state(column, row, CellState::Exposed);
            self.frontier.push((column, row));
        }
    }

    #[inline]
    fn set_state(&mut self, column: usize, row: usize, state: CellState) {
        let index = self.index(column, row);
        self.cells[index] = state;
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }
}

impl<R: Rng> Iterator for MazeCarver<R> {
    type Item = CarveEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Carves a maze with a caller-supplied random source.
///
/// # Arguments
///
/// * `columns`, `rows` - Grid dimensions
/// * `neighbors_allowed` - Carving bound, in `2..=13`
/// * `rng` - Random source, left advanced past every draw the carver made
///
/// # Example
///
/// ```rust
/// use maze_gen::maze::carve;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let grid = carve(8, 6, 4, &mut rng).unwrap();
/// assert!(grid.get(0, 0));
/// ```
pub fn carve<R: Rng + ?Sized>(
    columns: usize,
    rows: usize,
    neighbors_allowed: u32,
    rng: &mut R,
) -> Result<OccupancyGrid, ConfigError> {
    let mut carver = MazeCarver::new(columns, rows, neighbors_allowed, rng)?;

    let (mut carved, mut hardened) = (1usize, 0usize);
    while let Some(event) = carver.step() {
        match event.outcome {
            CarveOutcome::Carved => carved += 1,
            CarveOutcome::Hardened => hardened += 1,
        }
    }

    debug!(columns, rows, neighbors_allowed, carved, hardened, "maze carved");
    Ok(carver.into_grid())
}

/// Carves a maze from a seed.
///
/// Equal arguments always produce equal grids.
///
/// # Example
///
/// ```rust
/// use maze_gen::maze::generate;
///
/// let a = generate(10, 10, 4, 99).unwrap();
/// let b = generate(10, 10, 4, 99).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(
    columns: usize,
    rows: usize,
    neighbors_allowed: u32,
    seed: u64,
) -> Result<OccupancyGrid, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    carve(columns, rows, neighbors_allowed, &mut rng)
}
