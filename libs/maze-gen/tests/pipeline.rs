use config::{ConfigError, LevelConfig, SpawnWeights};
use glam::{DVec3, Vec3Swizzles};
use maze_gen::{generate_level, Direction, LevelError, RegionShape, ShapeVariant, SpawnKind};

fn level(columns: usize, rows: usize, neighbors_allowed: u32, seed: u64) -> maze_gen::Level {
    let config = LevelConfig::new(columns, rows, neighbors_allowed, seed).unwrap();
    generate_level(&config).unwrap()
}

#[test]
fn fixture_level_regions() {
    let level = level(3, 3, 4, 42);

    let open: Vec<_> = level.grid.iter_open().collect();
    assert_eq!(
        open,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]
    );

    use Direction::*;
    use ShapeVariant::*;
    let shapes: Vec<_> = level.regions.iter().map(|r| r.shape).collect();
    assert_eq!(
        shapes,
        vec![
            RegionShape::new(Square, North),
            RegionShape::new(Square, North),
            RegionShape::new(SemicircleCap, West),
            RegionShape::new(Square, North),
            RegionShape::new(Square, North),
            RegionShape::new(QuarterCurve, West),
            RegionShape::new(Square, North),
            RegionShape::new(SemicircleCap, West),
        ]
    );

    let vertex_counts: Vec<_> = level.meshes.iter().map(|m| m.vertex_count()).collect();
    assert_eq!(vertex_counts, vec![8, 8, 20, 8, 8, 20, 8, 20]);
    assert_eq!(level.placement_points.len(), 7);
}

#[test]
fn surface_merges_every_region() {
    let level = level(3, 3, 4, 42);
    let surface = level.surface();

    let vertices: usize = level.meshes.iter().map(|m| m.vertex_count()).sum();
    let triangles: usize = level.meshes.iter().map(|m| m.triangle_count()).sum();
    assert_eq!(surface.vertex_count(), vertices);
    assert_eq!(surface.vertex_count(), 100);
    assert_eq!(surface.triangle_count(), triangles);
    assert!(surface.validate());
    assert_eq!(surface.tangents().map(<[_]>::len), Some(vertices));

    // The far row ends in caps, whose arcs stop at the cell center line
    let (min, max) = surface.bounding_box();
    assert!(min.abs_diff_eq(DVec3::new(-1.5, -1.0, -1.5), 1e-9), "{min}");
    assert!(max.abs_diff_eq(DVec3::new(7.5, 0.0, 6.0), 1e-9), "{max}");
}

#[test]
fn single_cell_level() {
    let level = level(1, 1, 4, 0);
    assert_eq!(level.region_count(), 1);
    assert_eq!(level.regions[0].shape.variant, ShapeVariant::Square);
    assert!(level.placement_points.is_empty());

    let plan = level.plan_spawns(&SpawnWeights::default()).unwrap();
    assert!(plan.spawns.is_empty());
    assert_eq!(plan.treasure_count, 0);
}

#[test]
fn equal_configs_give_equal_levels() {
    let config = LevelConfig::new(16, 12, 5, 2024)
        .unwrap()
        .with_curve_subdivisions(12)
        .unwrap();
    assert_eq!(generate_level(&config).unwrap(), generate_level(&config).unwrap());
}

#[test]
fn different_seeds_give_different_grids() {
    let first = level(20, 20, 4, 0).grid;
    assert!((1..5).any(|seed| level(20, 20, 4, seed).grid != first));
}

#[test]
fn meshes_follow_regions() {
    let level = level(12, 10, 4, 7);
    assert_eq!(level.region_count(), level.grid.open_count());
    assert_eq!(level.meshes.len(), level.region_count());

    for (region, mesh) in level.regions.iter().zip(&level.meshes) {
        let outline = region.outline(level.config.curve_subdivisions);
        assert_eq!(mesh.vertex_count(), 2 * outline.vertex_count());
        assert_eq!(
            mesh.triangle_count(),
            2 * (outline.vertex_count() - 2) + 2 * outline.vertex_count()
        );
        assert!(mesh.validate());
    }
}

#[test]
fn placement_points_stay_in_their_regions() {
    let level = level(15, 15, 5, 99);
    assert_eq!(level.placement_points.len(), level.region_count() - 1);

    let half = level.config.region_size.xz() / 2.0 + 1e-9;
    for (region, point) in level.regions[1..].iter().zip(&level.placement_points) {
        assert_eq!(point.y, 0.0);
        let d = (point.xz() - region.center.xz()).abs();
        assert!(d.x <= half.x && d.y <= half.y, "({}, {})", region.column, region.row);
    }
}

#[test]
fn invalid_config_is_rejected() {
    let config = LevelConfig {
        columns: 0,
        ..LevelConfig::default()
    };
    assert_eq!(
        generate_level(&config).unwrap_err(),
        LevelError::InvalidConfiguration(ConfigError::InvalidDimensions {
            columns: 0,
            rows: config.rows
        })
    );

    let config = LevelConfig {
        neighbors_allowed: 1,
        ..LevelConfig::default()
    };
    assert!(matches!(
        generate_level(&config),
        Err(LevelError::InvalidConfiguration(ConfigError::NeighborsOutOfRange(1)))
    ));
}

#[test]
fn spawn_plan_is_reproducible() {
    let level = level(20, 20, 4, 5);
    let weights = SpawnWeights::new(1.0, 1.0, 1.0, 1.0).unwrap();

    let plan = level.plan_spawns(&weights).unwrap();
    assert_eq!(plan, level.plan_spawns(&weights).unwrap());

    let slots = level.placement_points.len();
    assert_eq!(plan.treasure_count, slots / 4);
    assert_eq!(plan.of_kind(SpawnKind::Treasure).count(), plan.treasure_count);
    for spawn in &plan.spawns {
        assert!(level.placement_points.contains(&spawn.position));
    }
}
