//! # Spawn Planning
//!
//! Distributes placement points among weighted object categories. Each
//! category receives `floor(weight / total × points)` spawns at randomly
//! chosen, distinct placement points; the `empty` weight only thins out the
//! others.

use config::constants::FULL_TURN_DEGREES;
use config::{ConfigError, SpawnWeights};
use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Object category placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnKind {
    Treasure,
    Obstacle,
    Enemy,
}

/// One object to place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub kind: SpawnKind,
    pub position: DVec3,
    /// Rotation about +y, in `[0, 360)`
    pub yaw_degrees: f64,
}

/// Result of [`plan_spawns`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlan {
    /// Treasures first, then obstacles, then enemies
    pub spawns: Vec<Spawn>,
    /// Number of treasures the player must collect
    pub treasure_count: usize,
}

impl SpawnPlan {
    /// Spawns of one kind, in plan order.
    pub fn of_kind(&self, kind: SpawnKind) -> impl Iterator<Item = &Spawn> + '_ {
        self.spawns.iter().filter(move |spawn| spawn.kind == kind)
    }
}

/// Plans object spawns over a set of placement points.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSpawnWeights`] if a weight is negative or
/// non-finite, or if all weights are zero.
///
/// # Example
///
/// ```rust
/// use config::SpawnWeights;
/// use glam::DVec3;
/// use maze_gen::plan_spawns;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let points = vec![DVec3::ZERO; 10];
/// let weights = SpawnWeights::new(1.0, 0.0, 0.0, 1.0).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let plan = plan_spawns(&points, &weights, &mut rng).unwrap();
/// assert_eq!(plan.treasure_count, 5);
/// ```
pub fn plan_spawns<R: Rng + ?Sized>(
    points: &[DVec3],
    weights: &SpawnWeights,
    rng: &mut R,
) -> Result<SpawnPlan, ConfigError> {
    weights.validate()?;

    let total = weights.total();
    let slot_count = points.len();
    let mut remaining = points.to_vec();
    let mut plan = SpawnPlan::default();

    for (kind, weight) in [
        (SpawnKind::Treasure, weights.treasure),
        (SpawnKind::Obstacle, weights.obstacle),
        (SpawnKind::Enemy, weights.enemy),
    ] {
        let wanted = (weight / total * slot_count as f64).floor() as usize;
        let count = wanted.min(remaining.len());

        for _ in 0..count {
            let index = rng.gen_range(0..remaining.len());
            let position = remaining.remove(index);
            let yaw_degrees = rng.gen::<f64>() * FULL_TURN_DEGREES;
            plan.spawns.push(Spawn {
                kind,
                position,
                yaw_degrees,
            });
        }

        if kind == SpawnKind::Treasure {
            plan.treasure_count = count;
        }
    }

    debug!(
        slots = slot_count,
        spawns = plan.spawns.len(),
        treasure = plan.treasure_count,
        "spawns planned"
    );
    Ok(plan)
}
