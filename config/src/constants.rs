//! # Configuration Constants
//!
//! Centralized constants for the maze level pipeline. Carving bounds, curve
//! tessellation, layout defaults and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Curve subdivision counts for rounded regions
//! - **Carving**: Neighbor bounds for the growing-tree carver
//! - **Limits**: Maximum values for safety bounds
//! - **Layout**: Default grid, region and placement settings
//! - **Spawning**: Default object category weights

use glam::DVec3;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used by the geometry kernel when deciding whether three outline points
/// turn left, right, or are collinear. Outlines are computed in f64 world
/// coordinates, where rounding noise stays far below this tolerance even at
/// the largest supported grid.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-12));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of segments used to sample a curved region edge.
///
/// Quarter curves and semicircular caps are approximated by this many arc
/// segments, producing `DEFAULT_CURVE_SUBDIVISIONS + 1` arc points.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CURVE_SUBDIVISIONS;
///
/// let arc_points = DEFAULT_CURVE_SUBDIVISIONS + 1;
/// assert_eq!(arc_points, 9);
/// ```
pub const DEFAULT_CURVE_SUBDIVISIONS: u32 = 8;

/// Minimum number of curve segments.
///
/// A single segment would collapse a semicircular cap onto its diameter.
pub const MIN_CURVE_SUBDIVISIONS: u32 = 2;

/// Maximum number of curve segments.
///
/// Safety limit to keep per-region triangle counts bounded.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_CURVE_SUBDIVISIONS;
///
/// let requested = 10_000u32;
/// let actual = requested.min(MAX_CURVE_SUBDIVISIONS);
/// assert_eq!(actual, MAX_CURVE_SUBDIVISIONS);
/// ```
pub const MAX_CURVE_SUBDIVISIONS: u32 = 256;

// =============================================================================
// CARVING CONSTANTS
// =============================================================================

/// Lowest accepted maximum-neighbor bound for the carver.
///
/// Lower bounds give narrower passages.
pub const MIN_NEIGHBORS_ALLOWED: u32 = 2;

/// Highest accepted maximum-neighbor bound for the carver.
///
/// The adjacency rule can never count more than 12 carved neighbors, so a
/// bound of 13 carves every reachable cell.
pub const MAX_NEIGHBORS_ALLOWED: u32 = 13;

/// Default maximum-neighbor bound.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_NEIGHBORS_ALLOWED, MAX_NEIGHBORS_ALLOWED, MIN_NEIGHBORS_ALLOWED};
///
/// assert!((MIN_NEIGHBORS_ALLOWED..=MAX_NEIGHBORS_ALLOWED).contains(&DEFAULT_NEIGHBORS_ALLOWED));
/// ```
pub const DEFAULT_NEIGHBORS_ALLOWED: u32 = 4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of columns or rows in a generated grid.
///
/// Prevents accidental multi-gigabyte allocations from a corrupt config.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GRID_DIMENSION;
///
/// let columns = 50;
/// assert!(columns <= MAX_GRID_DIMENSION);
/// ```
pub const MAX_GRID_DIMENSION: usize = 1024;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Default number of grid columns (regions along the x axis).
pub const DEFAULT_COLUMNS: usize = 20;

/// Default number of grid rows (regions along the z axis).
pub const DEFAULT_ROWS: usize = 20;

/// Default region extents: x width, y extrusion depth, z depth.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_REGION_SIZE;
///
/// assert_eq!(DEFAULT_REGION_SIZE.x, DEFAULT_REGION_SIZE.z);
/// ```
pub const DEFAULT_REGION_SIZE: DVec3 = DVec3::new(3.0, 1.0, 3.0);

/// Default fraction of a region's footprint used for object placement.
///
/// At `0.0` objects sit exactly on a square's center or a curve's focal
/// point; at `1.0` any point of the region is eligible.
pub const DEFAULT_PLACEMENT_RANGE: f64 = 0.5;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 0;

// =============================================================================
// SPAWNING CONSTANTS
// =============================================================================

/// Default weight of each spawn category (treasure, obstacle, enemy, empty).
///
/// Equal weights split placement points evenly between the four categories.
pub const DEFAULT_SPAWN_WEIGHT: f64 = 10.0;

/// Upper bound (exclusive) for random spawn yaw, in degrees.
pub const FULL_TURN_DEGREES: f64 = 360.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the cell count of a `columns × rows` grid, or `None` when either
/// dimension is zero or exceeds [`MAX_GRID_DIMENSION`].
///
/// # Example
///
/// ```rust
/// use config::constants::grid_cell_count;
///
/// assert_eq!(grid_cell_count(3, 4), Some(12));
/// assert_eq!(grid_cell_count(0, 4), None);
/// ```
pub fn grid_cell_count(columns: usize, rows: usize) -> Option<usize> {
    if columns == 0 || rows == 0 || columns > MAX_GRID_DIMENSION || rows > MAX_GRID_DIMENSION {
        return None;
    }
    columns.checked_mul(rows)
}
