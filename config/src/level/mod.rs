//! Validated settings for a single level generation run.
//!
//! [`LevelConfig`] carries everything the carver and the region layout need;
//! [`SpawnWeights`] carries the object category weights used after layout.
//! Both are plain serde-friendly values owned by the caller.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_CURVE_SUBDIVISIONS, DEFAULT_NEIGHBORS_ALLOWED,
    DEFAULT_PLACEMENT_RANGE, DEFAULT_REGION_SIZE, DEFAULT_ROWS, DEFAULT_SEED,
    DEFAULT_SPAWN_WEIGHT, MAX_CURVE_SUBDIVISIONS, MAX_GRID_DIMENSION, MAX_NEIGHBORS_ALLOWED,
    MIN_CURVE_SUBDIVISIONS, MIN_NEIGHBORS_ALLOWED,
};

/// Settings for one maze level.
///
/// # Examples
/// ```
/// use config::level::LevelConfig;
/// let config = LevelConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.columns, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid columns, laid out along world x.
    pub columns: usize,
    /// Grid rows, laid out along world z.
    pub rows: usize,
    /// Region extents: x width, y extrusion depth, z depth.
    pub region_size: DVec3,
    /// A frontier cell is carved only while it has fewer carved neighbors than this.
    pub neighbors_allowed: u32,
    /// Arc segments for curved regions.
    pub curve_subdivisions: u32,
    /// Fraction of each region's footprint eligible for placement points, in `[0, 1]`.
    pub placement_range: f64,
    /// Seed for the level's random generator.
    pub seed: u64,
}

impl LevelConfig {
    /// Builds a configuration with default region size, curve subdivisions
    /// and placement range, rejecting out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use config::level::{ConfigError, LevelConfig};
    /// let cfg = LevelConfig::new(3, 3, 4, 42).expect("valid config");
    /// assert_eq!(cfg.seed, 42);
    ///
    /// assert_eq!(
    ///     LevelConfig::new(0, 3, 4, 42),
    ///     Err(ConfigError::InvalidDimensions { columns: 0, rows: 3 })
    /// );
    /// ```
    pub fn new(
        columns: usize,
        rows: usize,
        neighbors_allowed: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            columns,
            rows,
            neighbors_allowed,
            seed,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the region size.
    ///
    /// # Examples
    /// ```
    /// use config::level::LevelConfig;
    /// use glam::DVec3;
    /// let cfg = LevelConfig::default()
    ///     .with_region_size(DVec3::new(2.0, 0.5, 2.0))
    ///     .expect("valid size");
    /// assert_eq!(cfg.region_size.y, 0.5);
    /// ```
    pub fn with_region_size(self, region_size: DVec3) -> Result<Self, ConfigError> {
        let config = Self {
            region_size,
            ..self
        };
        config.validate_region_size()?;
        Ok(config)
    }

    /// Replaces the number of arc segments for curved regions.
    pub fn with_curve_subdivisions(self, curve_subdivisions: u32) -> Result<Self, ConfigError> {
        let config = Self {
            curve_subdivisions,
            ..self
        };
        config.validate_curve_subdivisions()?;
        Ok(config)
    }

    /// Replaces the placement range.
    pub fn with_placement_range(self, placement_range: f64) -> Result<Self, ConfigError> {
        let config = Self {
            placement_range,
            ..self
        };
        config.validate_placement_range()?;
        Ok(config)
    }

    /// Checks every field, for configs built by struct literal or deserialization.
    ///
    /// # Examples
    /// ```
    /// use config::level::{ConfigError, LevelConfig};
    /// let cfg = LevelConfig { neighbors_allowed: 1, ..LevelConfig::default() };
    /// assert_eq!(cfg.validate(), Err(ConfigError::NeighborsOutOfRange(1)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_dimensions()?;
        self.validate_neighbors()?;
        self.validate_region_size()?;
        self.validate_curve_subdivisions()?;
        self.validate_placement_range()
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    fn validate_dimensions(&self) -> Result<(), ConfigError> {
        let in_bounds = |value: usize| (1..=MAX_GRID_DIMENSION).contains(&value);
        if in_bounds(self.columns) && in_bounds(self.rows) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            })
        }
    }

    fn validate_neighbors(&self) -> Result<(), ConfigError> {
        if (MIN_NEIGHBORS_ALLOWED..=MAX_NEIGHBORS_ALLOWED).contains(&self.neighbors_allowed) {
            Ok(())
        } else {
            Err(ConfigError::NeighborsOutOfRange(self.neighbors_allowed))
        }
    }

    fn validate_region_size(&self) -> Result<(), ConfigError> {
        validate_region_size(self.region_size)
    }

    fn validate_curve_subdivisions(&self) -> Result<(), ConfigError> {
        validate_curve_subdivisions(self.curve_subdivisions)
    }

    fn validate_placement_range(&self) -> Result<(), ConfigError> {
        validate_placement_range(self.placement_range)
    }
}

/// Checks a region size: every component finite and positive.
///
/// # Examples
/// ```
/// use config::level::{validate_region_size, ConfigError};
/// use glam::DVec3;
/// assert!(validate_region_size(DVec3::new(3.0, 1.0, 3.0)).is_ok());
/// assert_eq!(
///     validate_region_size(DVec3::new(-3.0, 1.0, 3.0)),
///     Err(ConfigError::InvalidRegionSize([-3.0, 1.0, 3.0]))
/// );
/// ```
pub fn validate_region_size(size: DVec3) -> Result<(), ConfigError> {
    if size.is_finite() && size.cmpgt(DVec3::ZERO).all() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRegionSize(size.to_array()))
    }
}

/// Checks the arc segment count against
/// `MIN_CURVE_SUBDIVISIONS..=MAX_CURVE_SUBDIVISIONS`.
pub fn validate_curve_subdivisions(curve_subdivisions: u32) -> Result<(), ConfigError> {
    if (MIN_CURVE_SUBDIVISIONS..=MAX_CURVE_SUBDIVISIONS).contains(&curve_subdivisions) {
        Ok(())
    } else {
        Err(ConfigError::InvalidCurveSubdivisions(curve_subdivisions))
    }
}

/// Checks that the placement range lies in `[0, 1]`.
pub fn validate_placement_range(placement_range: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&placement_range) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPlacementRange(placement_range))
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            region_size: DEFAULT_REGION_SIZE,
            neighbors_allowed: DEFAULT_NEIGHBORS_ALLOWED,
            curve_subdivisions: DEFAULT_CURVE_SUBDIVISIONS,
            placement_range: DEFAULT_PLACEMENT_RANGE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Relative weights of the object categories spawned on placement points.
///
/// The `empty` weight dilutes the others: it leaves points unused.
///
/// # Examples
/// ```
/// use config::level::SpawnWeights;
/// let weights = SpawnWeights::new(1.0, 1.0, 1.0, 1.0).expect("valid weights");
/// assert_eq!(weights.total(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnWeights {
    pub treasure: f64,
    pub obstacle: f64,
    pub enemy: f64,
    pub empty: f64,
}

impl SpawnWeights {
    /// Builds a weight set; every weight must be finite and non-negative and
    /// their sum positive.
    pub fn new(treasure: f64, obstacle: f64, enemy: f64, empty: f64) -> Result<Self, ConfigError> {
        let weights = Self {
            treasure,
            obstacle,
            enemy,
            empty,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Sum of all four weights.
    pub fn total(&self) -> f64 {
        self.treasure + self.obstacle + self.enemy + self.empty
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [self.treasure, self.obstacle, self.enemy, self.empty];
        let each_valid = values.iter().all(|w| w.is_finite() && *w >= 0.0);
        let total = self.total();
        if each_valid && total.is_finite() && total > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidSpawnWeights(values))
        }
    }
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            treasure: DEFAULT_SPAWN_WEIGHT,
            obstacle: DEFAULT_SPAWN_WEIGHT,
            enemy: DEFAULT_SPAWN_WEIGHT,
            empty: DEFAULT_SPAWN_WEIGHT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a grid dimension is zero or above the supported maximum.
    InvalidDimensions { columns: usize, rows: usize },
    /// Raised when a region extent is zero, negative or not finite.
    InvalidRegionSize([f64; 3]),
    /// Raised when the maximum-neighbor bound is outside the supported range.
    NeighborsOutOfRange(u32),
    /// Raised when the curve segment count cannot describe an arc or is too large.
    InvalidCurveSubdivisions(u32),
    /// Raised when the placement range is outside `[0, 1]` or NaN.
    InvalidPlacementRange(f64),
    /// Raised when a spawn weight is negative or not finite, or all are zero.
    InvalidSpawnWeights([f64; 4]),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { columns, rows } => write!(
                f,
                "grid dimensions must be within 1..={MAX_GRID_DIMENSION}: {columns}x{rows}"
            ),
            ConfigError::InvalidRegionSize([x, y, z]) => {
                write!(f, "region size must be positive and finite: ({x}, {y}, {z})")
            }
            ConfigError::NeighborsOutOfRange(value) => write!(
                f,
                "neighbors_allowed must be within {MIN_NEIGHBORS_ALLOWED}..={MAX_NEIGHBORS_ALLOWED}: {value}"
            ),
            ConfigError::InvalidCurveSubdivisions(value) => write!(
                f,
                "curve_subdivisions must be within {MIN_CURVE_SUBDIVISIONS}..={MAX_CURVE_SUBDIVISIONS}: {value}"
            ),
            ConfigError::InvalidPlacementRange(value) => {
                write!(f, "placement_range must be within 0..=1: {value}")
            }
            ConfigError::InvalidSpawnWeights([treasure, obstacle, enemy, empty]) => write!(
                f,
                "spawn weights must be finite, non-negative and not all zero: \
                 treasure={treasure} obstacle={obstacle} enemy={enemy} empty={empty}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
