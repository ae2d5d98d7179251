//! Bit-packed set of digital points over a fixed domain.
//!
//! This is the read-only snapshot used for export and for set-membership
//! predicates. Tracing never needs it: predicates are evaluated lazily.

use bitvec::vec::BitVec;
use rayon::prelude::*;

use crate::image::{Domain, Image};
use crate::predicate::{IntervalThreshold, PointPredicate};
use crate::types::Point;

/// Set of points of a [`Domain`], one bit per point.
#[derive(Clone, Debug)]
pub struct DigitalSet<const N: usize> {
  domain: Domain<N>,
  bits: BitVec,
  len: usize,
}

impl<const N: usize> DigitalSet<N> {
  /// Empty set over `domain`.
  pub fn new(domain: Domain<N>) -> Self {
    Self {
      domain,
      bits: BitVec::repeat(false, domain.size()),
      len: 0,
    }
  }

  /// Points of `image` whose sample lies in `threshold`.
  ///
  /// Samples are classified in parallel; the set is assembled in
  /// linear-index order.
  pub fn from_image(image: &Image<N>, threshold: IntervalThreshold) -> Self {
    let flags: Vec<bool> = image
      .values()
      .par_iter()
      .map(|&v| threshold.contains(v))
      .collect();
    Self::from_flags(*image.domain(), flags)
  }

  /// Points of `domain` accepted by `predicate`.
  pub fn from_predicate<P: PointPredicate<N>>(domain: Domain<N>, predicate: &P) -> Self {
    let flags: Vec<bool> = (0..domain.size())
      .into_par_iter()
      .map(|i| predicate.evaluate(&domain.point_at(i)))
      .collect();
    Self::from_flags(domain, flags)
  }

  fn from_flags(domain: Domain<N>, flags: Vec<bool>) -> Self {
    let len = flags.iter().filter(|&&f| f).count();
    let bits: BitVec = flags.into_iter().collect();
    Self { domain, bits, len }
  }

  #[inline]
  pub fn domain(&self) -> &Domain<N> {
    &self.domain
  }

  /// Number of points in the set.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Membership test; points outside the domain are never members.
  #[inline]
  pub fn contains(&self, p: &Point<N>) -> bool {
    self.domain.linear_index(p).is_some_and(|i| self.bits[i])
  }

  /// Add a point. Returns false if it is outside the domain or already
  /// present.
  pub fn insert(&mut self, p: &Point<N>) -> bool {
    let Some(i) = self.domain.linear_index(p) else {
      return false;
    };
    if self.bits[i] {
      return false;
    }
    self.bits.set(i, true);
    self.len += 1;
    true
  }

  /// Members in linear-index order.
  pub fn iter(&self) -> impl Iterator<Item = Point<N>> + '_ {
    self.bits.iter_ones().map(|i| self.domain.point_at(i))
  }
}
