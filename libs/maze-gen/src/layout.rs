//! # Grid Layout
//!
//! Turns an occupancy grid into region meshes and placement points.
//!
//! Layout runs in two passes:
//!
//! 1. A sequential scan in column-major order classifies every open cell,
//!    builds its outline and draws its placement point. All random draws
//!    happen here, so the output depends only on the grid and the generator.
//! 2. Outlines are extruded in parallel with rayon; results keep scan order.

use config::level::{validate_curve_subdivisions, validate_placement_range, validate_region_size};
use glam::DVec3;
use maze_mesh::{extrude, Mesh, Polygon2D};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::LevelError;
use crate::grid::OccupancyGrid;
use crate::region::{NeighborFlags, Region};

/// Output of [`layout`]; `regions[i]` produced `meshes[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub regions: Vec<Region>,
    pub meshes: Vec<Mesh>,
    /// One point per region except the origin, in scan order
    pub placement_points: Vec<DVec3>,
}

/// Builds the geometry of every open cell.
///
/// # Arguments
///
/// * `grid` - Carved occupancy grid
/// * `region_size` - Cell width (x), extrusion depth (y) and cell depth (z)
/// * `curve_subdivisions` - Arc segments for curved outlines
/// * `placement_range` - Fraction of each region used for placement points
/// * `rng` - Random source for placement points
///
/// # Errors
///
/// Returns [`LevelError::InvalidConfiguration`] before touching the grid if
/// the size, subdivision count or placement range is out of range, or
/// [`LevelError::Region`] with the cell coordinates if an outline cannot be
/// extruded.
///
/// # Example
///
/// ```rust
/// use config::level::{validate_curve_subdivisions, validate_placement_range, validate_region_size};
/// use glam::DVec3;
/// use maze_gen::{layout, OccupancyGrid};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let grid = OccupancyGrid::from_cells(2, 1, [(0, 0), (1, 0)]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let out = layout(&grid, DVec3::new(3.0, 1.0, 3.0), 8, 0.5, &mut rng).unwrap();
/// assert_eq!(out.meshes.len(), 2);
/// assert_eq!(out.placement_points.len(), 1);
/// ```
pub fn layout<R: Rng + ?Sized>(
    grid: &OccupancyGrid,
    region_size: DVec3,
    curve_subdivisions: u32,
    placement_range: f64,
    rng: &mut R,
) -> Result<Layout, LevelError> {
    validate_region_size(region_size)?;
    validate_curve_subdivisions(curve_subdivisions)?;
    validate_placement_range(placement_range)?;

    let open = grid.open_count();
    let mut regions = Vec::with_capacity(open);
    let mut outlines: Vec<Polygon2D> = Vec::with_capacity(open);
    let mut placement_points = Vec::with_capacity(open.saturating_sub(1));

    for (column, row) in grid.iter_open() {
        let mut flags = NeighborFlags::from_grid(grid, column, row);
        if column == 0 && row == 0 {
            // The spawn cell is always a full square
            flags.north = true;
            flags.south = true;
        }
        let region = Region::new(column, row, region_size, flags);
        trace!(column, row, shape = ?region.shape, "region classified");

        let outline = region.outline(curve_subdivisions);
        if !region.is_origin() {
            placement_points.push(region.placement_point(&outline, placement_range, rng));
        }
        regions.push(region);
        outlines.push(outline);
    }

    let depth = region_size.y;
    let meshes = regions
        .par_iter()
        .zip(outlines.par_iter())
        .map(|(region, outline)| {
            extrude(outline, depth).map_err(|e| LevelError::region(region.column, region.row, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        regions = regions.len(),
        placement_points = placement_points.len(),
        "layout built"
    );

    Ok(Layout {
        regions,
        meshes,
        placement_points,
    })
}
