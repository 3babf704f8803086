//! # Maze Gen
//!
//! Procedural maze levels: growing-tree carving, region classification and
//! prism extrusion into a walkable surface.
//!
//! ## Pipeline
//!
//! ```text
//! LevelConfig → validate → carve → OccupancyGrid → layout → Level
//!                                                    │
//!                                    classify → outline → extrude
//! ```
//!
//! A single `ChaCha8Rng` seeded from [`LevelConfig::seed`] drives carving
//! and placement, so equal configs produce identical levels.
//!
//! ## Example
//!
//! ```rust
//! use config::{LevelConfig, SpawnWeights};
//! use maze_gen::generate_level;
//!
//! let config = LevelConfig::new(10, 8, 4, 42).unwrap();
//! let level = generate_level(&config).unwrap();
//!
//! assert!(level.grid.get(0, 0));
//! assert_eq!(level.region_count(), level.grid.open_count());
//! assert_eq!(level.placement_points.len(), level.region_count() - 1);
//!
//! let surface = level.surface();
//! assert!(surface.validate());
//!
//! let plan = level.plan_spawns(&SpawnWeights::default()).unwrap();
//! assert!(plan.spawns.len() <= level.placement_points.len());
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod maze;
pub mod region;
pub mod spawn;

pub use error::LevelError;
pub use grid::OccupancyGrid;
pub use layout::{layout, Layout};
pub use maze::{carve, generate, CarveEvent, CarveOutcome, CellState, MazeCarver};
pub use region::{classify, Direction, NeighborFlags, Region, RegionShape, ShapeVariant};
pub use spawn::{plan_spawns, Spawn, SpawnKind, SpawnPlan};

use config::{ConfigError, LevelConfig, SpawnWeights};
use glam::DVec3;
use maze_mesh::Mesh;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Offset between the level seed and the spawn planner's seed, so spawn
/// draws never replay the carving sequence.
const SPAWN_SEED_OFFSET: u64 = 0x5EED_0F_5FA7;

/// A generated level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub config: LevelConfig,
    pub grid: OccupancyGrid,
    /// One region per open cell, in column-major scan order
    pub regions: Vec<Region>,
    /// `meshes[i]` is the prism of `regions[i]`
    pub meshes: Vec<Mesh>,
    /// One point per non-origin region, in scan order
    pub placement_points: Vec<DVec3>,
}

impl Level {
    /// Number of regions (open cells).
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// All region meshes merged into one walkable surface.
    pub fn surface(&self) -> Mesh {
        Mesh::merge_all(&self.meshes)
    }

    /// Plans object spawns over this level's placement points.
    ///
    /// The planner draws from its own generator, derived from the level
    /// seed, so the plan is reproducible without affecting level geometry.
    pub fn plan_spawns(&self, weights: &SpawnWeights) -> Result<SpawnPlan, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed.wrapping_add(SPAWN_SEED_OFFSET));
        plan_spawns(&self.placement_points, weights, &mut rng)
    }
}

/// Generates a complete level from a configuration.
///
/// # Errors
///
/// Returns [`LevelError::InvalidConfiguration`] before any allocation if the
/// config is invalid, or [`LevelError::Region`] if a region cannot be
/// extruded.
pub fn generate_level(config: &LevelConfig) -> Result<Level, LevelError> {
    config.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let grid = carve(config.columns, config.rows, config.neighbors_allowed, &mut rng)?;
    let Layout {
        regions,
        meshes,
        placement_points,
    } = layout(
        &grid,
        config.region_size,
        config.curve_subdivisions,
        config.placement_range,
        &mut rng,
    )?;

    info!(
        columns = config.columns,
        rows = config.rows,
        seed = config.seed,
        regions = regions.len(),
        "level generated"
    );

    Ok(Level {
        config: *config,
        grid,
        regions,
        meshes,
        placement_points,
    })
}
