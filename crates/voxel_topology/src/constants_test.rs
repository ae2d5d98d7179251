use super::*;

#[test]
fn test_spel_kcoord_is_odd() {
  for p in -5..5 {
    assert_eq!(spel_kcoord(p).rem_euclid(2), 1, "voxel {} must be odd", p);
  }
}

#[test]
fn test_digital_coord_roundtrip() {
  for p in -8..8 {
    assert_eq!(digital_coord(spel_kcoord(p)), p);
    // The grid point below voxel p shares its digital coordinate.
    assert_eq!(digital_coord(2 * p), p);
  }
}

#[test]
fn test_default_threshold_is_ordered() {
  assert!(DEFAULT_THRESHOLD_MIN <= DEFAULT_THRESHOLD_MAX);
}

#[test]
fn test_max_digital_coord_leaves_kcoord_headroom() {
  // Closed bound plus the exterior voxel and one more voxel step.
  assert!((2 * MAX_DIGITAL_COORD + 2).checked_add(3).is_some());
  assert!((-2 * MAX_DIGITAL_COORD).checked_sub(3).is_some());
  assert!((2 * (MAX_DIGITAL_COORD + 1) + 2).checked_add(3).is_none());
}
