//! # Regions
//!
//! One region per carved cell. The four orthogonal neighbors decide the
//! region's shape:
//!
//! | Neighbors                 | Shape                      |
//! |---------------------------|----------------------------|
//! | both N and S, or E and W  | square                     |
//! | two adjacent sides        | quarter curve              |
//! | exactly one side          | semicircle cap             |
//! | none                      | square                     |
//!
//! so corridors stay straight, corners round off and dead ends close with a
//! rounded cap.

mod outline;


use glam::{DVec3, Vec3Swizzles};
use maze_mesh::Polygon2D;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::OccupancyGrid;

pub use outline::{quarter_curve, semicircle_cap, square};

/// Cardinal direction in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    North,
    /// +z
    East,
    /// -x
    South,
    /// -z
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit vector in world space.
    pub fn vector(self) -> DVec3 {
        match self {
            Direction::North => DVec3::X,
            Direction::East => DVec3::Z,
            Direction::South => DVec3::NEG_X,
            Direction::West => DVec3::NEG_Z,
        }
    }

    /// `(column, row)` step to the neighbor in this direction.
    pub fn grid_offset(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Outline family of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeVariant {
    Square,
    QuarterCurve,
    SemicircleCap,
}

/// Shape variant plus the direction it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionShape {
    pub variant: ShapeVariant,
    pub facing: Direction,
}

impl RegionShape {
    pub const fn new(variant: ShapeVariant, facing: Direction) -> Self {
        Self { variant, facing }
    }

    /// Returns true for variants whose outline starts with a focal point.
    pub fn is_curved(&self) -> bool {
        self.variant != ShapeVariant::Square
    }
}

/// Which orthogonal neighbors of a cell are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighborFlags {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl NeighborFlags {
    pub const fn new(north: bool, south: bool, east: bool, west: bool) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Reads the flags of a cell from the grid; cells outside the grid are
    /// closed.
    pub fn from_grid(grid: &OccupancyGrid, column: usize, row: usize) -> Self {
        let open = |direction: Direction| {
            let (dc, dr) = direction.grid_offset();
            grid.get_offset(column, row, dc, dr)
        };
        Self {
            north: open(Direction::North),
            south: open(Direction::South),
            east: open(Direction::East),
            west: open(Direction::West),
        }
    }

    /// Returns the flag for one direction.
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn shape(&self) -> RegionShape {
        classify(self.north, self.south, self.east, self.west)
    }
}

/// Maps the four neighbor flags to a region shape. First match wins.
///
/// # Example
///
/// ```rust
/// use maze_gen::region::{classify, Direction, ShapeVariant};
///
/// let corner = classify(true, false, true, false);
/// assert_eq!(corner.variant, ShapeVariant::QuarterCurve);
/// assert_eq!(corner.facing, Direction::North);
/// ```
pub fn classify(north: bool, south: bool, east: bool, west: bool) -> RegionShape {
    use Direction::*;
    use ShapeVariant::*;

    let (variant, facing) = match (north, south, east, west) {
        (true, true, _, _) | (_, _, true, true) => (Square, North),
        (true, _, true, _) => (QuarterCurve, North),
        (true, _, _, true) => (QuarterCurve, East),
        (_, true, true, _) => (QuarterCurve, West),
        (_, true, _, true) => (QuarterCurve, South),
        (true, false, false, false) => (SemicircleCap, North),
        (false, true, false, false) => (SemicircleCap, South),
        (false, false, true, false) => (SemicircleCap, East),
        (false, false, false, true) => (SemicircleCap, West),
        (false, false, false, false) => (Square, North),
    };
    RegionShape::new(variant, facing)
}

/// A carved cell turned into geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub column: usize,
    pub row: usize,
    /// World-space center, always at `y = 0`
    pub center: DVec3,
    /// Width (x), extrusion depth (y) and depth (z)
    pub size: DVec3,
    pub flags: NeighborFlags,
    pub shape: RegionShape,
}

impl Region {
    /// Places a region on the grid and classifies it from its flags.
    pub fn new(column: usize, row: usize, size: DVec3, flags: NeighborFlags) -> Self {
        Self {
            column,
            row,
            center: DVec3::new(column as f64 * size.x, 0.0, row as f64 * size.z),
            size,
            flags,
            shape: flags.shape(),
        }
    }

    /// Returns true for the seed cell.
    pub fn is_origin(&self) -> bool {
        self.column == 0 && self.row == 0
    }

    /// World-space outline in `(x, z)`.
    ///
    /// `subdivisions` is the number of arc segments for curved shapes and must
    /// be positive ([`layout`](crate::layout::layout) requires at least
    /// `MIN_CURVE_SUBDIVISIONS`). Squares ignore it.
    pub fn outline(&self, subdivisions: u32) -> Polygon2D {
        let center = self.center.xz();
        let size = self.size.xz();
        match self.shape.variant {
            ShapeVariant::Square => square(center, size),
            ShapeVariant::QuarterCurve => {
                quarter_curve(center, size, self.shape.facing, subdivisions)
            }
            ShapeVariant::SemicircleCap => {
                semicircle_cap(center, size, self.shape.facing, subdivisions)
            }
        }
    }

    /// Random point inside the region for placing an object.
    ///
    /// Squares offset the center by up to `range` of the half-extent on each
    /// axis. Curved shapes walk from the focal point toward a random arc
    /// point, covering at most `range` of the way.
    ///
    /// # Arguments
    ///
    /// * `outline` - This region's outline, as returned by [`Region::outline`]
    /// * `range` - Fraction of the region to use, in `[0, 1]`
    /// * `rng` - Random source
    pub fn placement_point<R: Rng + ?Sized>(
        &self,
        outline: &Polygon2D,
        range: f64,
        rng: &mut R,
    ) -> DVec3 {
        let arc_len = outline.vertex_count();
        if !self.shape.is_curved() || arc_len < 2 {
            let u1: f64 = rng.gen();
            let u2: f64 = rng.gen();
            let offset = DVec3::new(0.5 - u1, 0.0, 0.5 - u2);
            return self.center + self.size * offset * range;
        }

        let k = rng.gen_range(1..arc_len);
        let u: f64 = rng.gen();
        let focal = outline.points[0];
        let point = focal.lerp(outline.points[k], u * range);
        DVec3::new(point.x, 0.0, point.y)
    }
}
