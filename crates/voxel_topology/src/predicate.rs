//! Point predicates deciding which digital points belong to the object.
//!
//! The tracer is generic over [`PointPredicate`], so the hot path is
//! monomorphised per predicate type. Points a predicate knows nothing about
//! (outside its image or set domain) are reported as outside.

use crate::digital_set::DigitalSet;
use crate::image::Image;
use crate::types::Point;

/// Membership test for digital points.
///
/// Must be `Sync` so a predicate can be shared with rayon workers.
pub trait PointPredicate<const N: usize>: Sync {
  /// True if `point` is part of the object.
  fn evaluate(&self, point: &Point<N>) -> bool;
}

impl<const N: usize, F> PointPredicate<N> for F
where
  F: Fn(&Point<N>) -> bool + Sync,
{
  #[inline]
  fn evaluate(&self, point: &Point<N>) -> bool {
    self(point)
  }
}

/// Inclusive value range `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalThreshold {
  pub min: i32,
  pub max: i32,
}

impl IntervalThreshold {
  pub const fn new(min: i32, max: i32) -> Self {
    Self { min, max }
  }

  #[inline]
  pub fn contains(&self, value: i32) -> bool {
    value >= self.min && value <= self.max
  }
}

/// Thresholder over an image: a point is inside iff its sample lies in the
/// interval.
#[derive(Clone, Copy, Debug)]
pub struct ImageThreshold<'a, const N: usize> {
  image: &'a Image<N>,
  threshold: IntervalThreshold,
}

impl<'a, const N: usize> ImageThreshold<'a, N> {
  pub fn new(image: &'a Image<N>, threshold: IntervalThreshold) -> Self {
    Self { image, threshold }
  }
}

impl<const N: usize> PointPredicate<N> for ImageThreshold<'_, N> {
  #[inline]
  fn evaluate(&self, point: &Point<N>) -> bool {
    self
      .image
      .get(point)
      .is_some_and(|value| self.threshold.contains(value))
  }
}

/// Membership in a materialised [`DigitalSet`].
#[derive(Clone, Copy, Debug)]
pub struct SetPredicate<'a, const N: usize> {
  set: &'a DigitalSet<N>,
}

impl<'a, const N: usize> SetPredicate<'a, N> {
  pub fn new(set: &'a DigitalSet<N>) -> Self {
    Self { set }
  }
}

impl<const N: usize> PointPredicate<N> for SetPredicate<'_, N> {
  #[inline]
  fn evaluate(&self, point: &Point<N>) -> bool {
    self.set.contains(point)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::image::Domain;

  #[test]
  fn test_interval_is_inclusive() {
    let t = IntervalThreshold::new(128, 255);
    assert!(t.contains(128));
    assert!(t.contains(255));
    assert!(!t.contains(127));
    assert!(!t.contains(256));
  }

  #[test]
  fn test_image_threshold_outside_domain_is_outside() {
    let domain = Domain::from_extent([2, 2, 2]).unwrap();
    let image = Image::filled(domain, 200);
    let pred = ImageThreshold::new(&image, IntervalThreshold::new(128, 255));
    assert!(pred.evaluate(&[1, 1, 1]));
    assert!(!pred.evaluate(&[2, 0, 0]));
    assert!(!pred.evaluate(&[-1, 0, 0]));
  }

  #[test]
  fn test_closure_predicate() {
    let pred = |p: &Point<2>| p[0] == p[1];
    assert!(pred.evaluate(&[3, 3]));
    assert!(!pred.evaluate(&[3, 4]));
  }
}
