use std::collections::{HashMap, HashSet};

use config::LevelConfig;
use maze_gen::{generate, generate_level, CarveOutcome, CellState, MazeCarver, OccupancyGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn is_connected_to_origin(grid: &OccupancyGrid) -> bool {
    let mut seen = HashSet::new();
    let mut stack = vec![(0usize, 0usize)];
    while let Some((column, row)) = stack.pop() {
        if !grid.get(column, row) || !seen.insert((column, row)) {
            continue;
        }
        stack.push((column + 1, row));
        stack.push((column, row + 1));
        if let Some(c) = column.checked_sub(1) {
            stack.push((c, row));
        }
        if let Some(r) = row.checked_sub(1) {
            stack.push((column, r));
        }
    }
    seen.len() == grid.open_count()
}

#[test]
fn carved_cells_reach_origin_across_configs() {
    for (columns, rows) in [(1, 9), (9, 1), (6, 13), (25, 25)] {
        for neighbors_allowed in [2, 4, 7, 13] {
            for seed in 0..6 {
                let grid = generate(columns, rows, neighbors_allowed, seed).unwrap();
                assert!(grid.get(0, 0));
                assert!(
                    is_connected_to_origin(&grid),
                    "{columns}x{rows} n={neighbors_allowed} seed={seed}"
                );
            }
        }
    }
}

#[test]
fn events_match_final_grid() {
    let mut carver = MazeCarver::new(18, 14, 4, ChaCha8Rng::seed_from_u64(31)).unwrap();
    let outcomes: HashMap<_, _> = carver
        .by_ref()
        .map(|event| {
            if event.outcome == CarveOutcome::Carved {
                assert!(event.neighbors_in_maze < 4);
            } else {
                assert!(event.neighbors_in_maze >= 4);
            }
            ((event.column, event.row), event.outcome)
        })
        .collect();

    for column in 0..18 {
        for row in 0..14 {
            let state = carver.state(column, row);
            match outcomes.get(&(column, row)) {
                Some(CarveOutcome::Carved) => assert_eq!(state, CellState::InMaze),
                Some(CarveOutcome::Hardened) => assert_eq!(state, CellState::Wall),
                None if (column, row) == (0, 0) => assert_eq!(state, CellState::InMaze),
                None => assert_eq!(state, CellState::Wall),
            }
        }
    }
}

#[test]
fn level_grid_matches_standalone_carve() {
    // Layout draws after carving, so the grid is the same as carving alone
    for seed in [0, 42, 1_000_003] {
        let config = LevelConfig::new(11, 7, 3, seed).unwrap();
        let level = generate_level(&config).unwrap();
        assert_eq!(level.grid, generate(11, 7, 3, seed).unwrap());
    }
}

#[test]
fn fixture_grid() {
    let grid = generate(3, 3, 4, 42).unwrap();
    assert_eq!(grid.open_count(), 8);
    assert!(!grid.get(1, 2));
}
