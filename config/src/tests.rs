//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_default_tessellation_matches_constants() {
    let cfg = TessellationConfig::default();
    assert_eq!(cfg.segments_around, DEFAULT_SEGMENTS_AROUND);
    assert_eq!(cfg.segments_down, DEFAULT_SEGMENTS_DOWN);
}

#[test]
fn test_quad_layout_is_two_triangles() {
    // A quad is split into two triangles over four unshared corners
    assert_eq!(VERTICES_PER_QUAD, 4);
    assert_eq!(INDICES_PER_QUAD, 2 * 3);
}

#[test]
fn test_box_counts_follow_quad_layout() {
    assert_eq!(BOX_VERTEX_COUNT, 6 * VERTICES_PER_QUAD as usize);
    assert_eq!(BOX_INDEX_COUNT, 6 * INDICES_PER_QUAD as usize);
}

#[test]
fn test_quad_count_does_not_overflow_u32_product() {
    let cfg = TessellationConfig::new(u32::MAX, 2).unwrap();
    assert_eq!(cfg.quad_count(), u32::MAX as usize * 2);
}

// =============================================================================
// ANIMATION TESTS
// =============================================================================

#[test]
fn test_pulse_bounds_ordered() {
    assert!(PULSE_MIN_SCALE > 0.0, "pulse must never collapse the mesh");
    assert!(PULSE_MAX_SCALE > PULSE_MIN_SCALE);
}

#[test]
fn test_millis_to_seconds() {
    assert_eq!(1000.0 * MILLIS_TO_SECONDS, 1.0);
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_unit_length_tolerance_is_small() {
    assert!(UNIT_LENGTH_TOLERANCE > 0.0);
    assert!(UNIT_LENGTH_TOLERANCE < 1e-3);
}
