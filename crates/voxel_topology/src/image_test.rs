use super::*;

#[test]
fn test_domain_rejects_inverted_bounds() {
  let err = Domain::new([0, 5, 0], [4, 4, 4]).unwrap_err();
  assert_eq!(
    err,
    TopologyError::InvalidBounds {
      axis: 1,
      lower: 5,
      upper: 4
    }
  );
}

#[test]
fn test_single_point_domain() {
  let domain = Domain::new([2, 2, 2], [2, 2, 2]).unwrap();
  assert_eq!(domain.size(), 1);
  assert_eq!(domain.linear_index(&[2, 2, 2]), Some(0));
  assert_eq!(domain.linear_index(&[2, 2, 3]), None);
}

#[test]
fn test_linear_index_roundtrip() {
  let domain = Domain::new([-1, 0, 3], [2, 1, 5]).unwrap();
  for (expected, p) in domain.points().enumerate() {
    assert_eq!(domain.linear_index(&p), Some(expected));
    assert_eq!(domain.point_at(expected), p);
  }
  assert_eq!(domain.points().count(), domain.size());
}

#[test]
fn test_linear_index_x_fastest() {
  let domain = Domain::from_extent([4, 3, 2]).unwrap();
  assert_eq!(domain.linear_index(&[1, 0, 0]), Some(1));
  assert_eq!(domain.linear_index(&[0, 1, 0]), Some(4));
  assert_eq!(domain.linear_index(&[0, 0, 1]), Some(12));
}

#[test]
fn test_padded_domain() {
  let domain = Domain::from_extent([2, 2]).unwrap().padded(1).unwrap();
  assert_eq!(domain.lower_bound(), [-1, -1]);
  assert_eq!(domain.upper_bound(), [2, 2]);
}

#[test]
fn test_padded_domain_out_of_range() {
  let edge = Domain::new([0, 0], [MAX_DIGITAL_COORD, 0]).unwrap();
  assert_eq!(
    edge.padded(1).unwrap_err(),
    TopologyError::InvalidBounds {
      axis: 0,
      lower: -1,
      upper: MAX_DIGITAL_COORD + 1
    }
  );

  let unit = Domain::from_extent([2, 2]).unwrap();
  assert_eq!(
    unit.padded(i32::MAX).unwrap_err(),
    TopologyError::InvalidBounds {
      axis: 0,
      lower: 0,
      upper: 1
    }
  );
}

#[test]
fn test_from_extent_out_of_range() {
  assert_eq!(
    Domain::from_extent([2, 1 << 31]).unwrap_err(),
    TopologyError::InvalidBounds {
      axis: 1,
      lower: 0,
      upper: i32::MAX
    }
  );
  assert_eq!(
    Domain::from_extent([i32::MAX as usize, 2]).unwrap_err(),
    TopologyError::InvalidBounds {
      axis: 0,
      lower: 0,
      upper: i32::MAX - 1
    }
  );
  let widest = Domain::from_extent([MAX_DIGITAL_COORD as usize + 1]).unwrap();
  assert_eq!(widest.upper_bound(), [MAX_DIGITAL_COORD]);
}

#[test]
fn test_image_size_mismatch() {
  let domain = Domain::from_extent([2, 2, 2]).unwrap();
  let err = Image::new(domain, vec![0; 7]).unwrap_err();
  assert_eq!(
    err,
    TopologyError::SizeMismatch {
      expected: 8,
      actual: 7
    }
  );
}

#[test]
fn test_image_get_set() {
  let domain = Domain::from_extent([3, 3]).unwrap();
  let mut image = Image::filled(domain, 0);
  assert!(image.set(&[1, 2], 200));
  assert!(!image.set(&[3, 0], 200));
  assert_eq!(image.get(&[1, 2]), Some(200));
  assert_eq!(image.get(&[0, 0]), Some(0));
  assert_eq!(image.get(&[-1, 0]), None);
}

#[test]
fn test_image_from_fn() {
  let domain = Domain::from_extent([4, 1, 1]).unwrap();
  let image = Image::from_fn(domain, |p| p[0] * 10);
  assert_eq!(image.values(), &[0, 10, 20, 30]);
}
