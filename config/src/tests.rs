//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_curve_subdivisions() {
    assert_eq!(DEFAULT_CURVE_SUBDIVISIONS, 8);
    assert!(DEFAULT_CURVE_SUBDIVISIONS >= MIN_CURVE_SUBDIVISIONS);
    assert!(DEFAULT_CURVE_SUBDIVISIONS <= MAX_CURVE_SUBDIVISIONS);
}

#[test]
fn test_min_curve_subdivisions_forms_an_arc() {
    assert!(MIN_CURVE_SUBDIVISIONS >= 2);
}

// =============================================================================
// CARVING TESTS
// =============================================================================

#[test]
fn test_neighbor_bounds() {
    assert_eq!(MIN_NEIGHBORS_ALLOWED, 2);
    assert_eq!(MAX_NEIGHBORS_ALLOWED, 13);
    assert!(DEFAULT_NEIGHBORS_ALLOWED >= MIN_NEIGHBORS_ALLOWED);
    assert!(DEFAULT_NEIGHBORS_ALLOWED <= MAX_NEIGHBORS_ALLOWED);
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_default_region_size_is_positive() {
    assert!(DEFAULT_REGION_SIZE.min_element() > 0.0);
    assert_eq!(DEFAULT_REGION_SIZE.to_array(), [3.0, 1.0, 3.0]);
}

#[test]
fn test_default_placement_range_in_unit_interval() {
    assert!((0.0..=1.0).contains(&DEFAULT_PLACEMENT_RANGE));
}

#[test]
fn test_default_grid_within_limits() {
    assert!(DEFAULT_COLUMNS <= MAX_GRID_DIMENSION);
    assert!(DEFAULT_ROWS <= MAX_GRID_DIMENSION);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_grid_cell_count() {
    assert_eq!(grid_cell_count(1, 1), Some(1));
    assert_eq!(grid_cell_count(20, 20), Some(400));
    assert_eq!(grid_cell_count(0, 20), None);
    assert_eq!(grid_cell_count(20, 0), None);
    assert_eq!(grid_cell_count(MAX_GRID_DIMENSION + 1, 1), None);
}
