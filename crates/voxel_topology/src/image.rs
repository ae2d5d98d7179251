//! Dense integer images over an inclusive digital domain.

use crate::constants::MAX_DIGITAL_COORD;
use crate::error::TopologyError;
use crate::scan::LatticeIter;
use crate::types::Point;

/// Inclusive axis-aligned box of digital points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain<const N: usize> {
  lower: Point<N>,
  upper: Point<N>,
}

/// Reject `lower > upper` and coordinates beyond [`MAX_DIGITAL_COORD`].
pub(crate) fn check_bounds<const N: usize>(
  lower: &Point<N>,
  upper: &Point<N>,
) -> Result<(), TopologyError> {
  let valid = |i: usize| {
    lower[i] <= upper[i] && lower[i] >= -MAX_DIGITAL_COORD && upper[i] <= MAX_DIGITAL_COORD
  };
  match (0..N).find(|&i| !valid(i)) {
    Some(axis) => Err(TopologyError::InvalidBounds {
      axis,
      lower: lower[axis],
      upper: upper[axis],
    }),
    None => Ok(()),
  }
}

impl<const N: usize> Domain<N> {
  /// Create a domain, rejecting `lower > upper` or out-of-range bounds on
  /// any axis.
  pub fn new(lower: Point<N>, upper: Point<N>) -> Result<Self, TopologyError> {
    check_bounds(&lower, &upper)?;
    Ok(Self { lower, upper })
  }

  /// Domain `[0, extent - 1]` on every axis. Every extent must be positive.
  pub fn from_extent(extent: [usize; N]) -> Result<Self, TopologyError> {
    let mut upper = [0; N];
    for (axis, (u, &e)) in upper.iter_mut().zip(extent.iter()).enumerate() {
      *u = i32::try_from(e)
        .map_err(|_| TopologyError::InvalidBounds {
          axis,
          lower: 0,
          upper: i32::MAX,
        })?
        - 1;
    }
    Self::new([0; N], upper)
  }

  #[inline]
  pub fn lower_bound(&self) -> Point<N> {
    self.lower
  }

  #[inline]
  pub fn upper_bound(&self) -> Point<N> {
    self.upper
  }

  /// Number of points along `axis`.
  #[inline]
  pub fn extent(&self, axis: usize) -> usize {
    (self.upper[axis] - self.lower[axis] + 1) as usize
  }

  /// Total number of points.
  pub fn size(&self) -> usize {
    (0..N).map(|i| self.extent(i)).product()
  }

  /// Check whether a point lies inside the domain.
  #[inline]
  pub fn contains(&self, p: &Point<N>) -> bool {
    (0..N).all(|i| p[i] >= self.lower[i] && p[i] <= self.upper[i])
  }

  /// Row-major index with axis 0 varying fastest, `None` outside the domain.
  #[inline]
  pub fn linear_index(&self, p: &Point<N>) -> Option<usize> {
    if !self.contains(p) {
      return None;
    }
    let mut index = 0usize;
    for i in (0..N).rev() {
      index = index * self.extent(i) + (p[i] - self.lower[i]) as usize;
    }
    Some(index)
  }

  /// Inverse of [`Domain::linear_index`].
  pub fn point_at(&self, mut index: usize) -> Point<N> {
    let mut p = self.lower;
    for (i, coord) in p.iter_mut().enumerate() {
      let extent = self.extent(i);
      *coord += (index % extent) as i32;
      index /= extent;
    }
    p
  }

  /// All points in linear-index order.
  pub fn points(&self) -> LatticeIter<N> {
    LatticeIter::new(self.lower, self.upper, [1; N])
  }

  /// Domain grown by `amount` on both sides of every axis.
  pub fn padded(&self, amount: i32) -> Result<Self, TopologyError> {
    let mut lower = self.lower;
    let mut upper = self.upper;
    for i in 0..N {
      match (lower[i].checked_sub(amount), upper[i].checked_add(amount)) {
        (Some(l), Some(u)) => {
          lower[i] = l;
          upper[i] = u;
        }
        _ => {
          return Err(TopologyError::InvalidBounds {
            axis: i,
            lower: self.lower[i],
            upper: self.upper[i],
          });
        }
      }
    }
    Self::new(lower, upper)
  }
}

/// Dense scalar image over a [`Domain`].
#[derive(Clone, Debug)]
pub struct Image<const N: usize> {
  domain: Domain<N>,
  values: Vec<i32>,
}

/// 3D volume image, as read from `.vol` files.
pub type VoxelImage = Image<3>;

impl<const N: usize> Image<N> {
  /// Wrap a sample buffer laid out in [`Domain::linear_index`] order.
  pub fn new(domain: Domain<N>, values: Vec<i32>) -> Result<Self, TopologyError> {
    if values.len() != domain.size() {
      return Err(TopologyError::SizeMismatch {
        expected: domain.size(),
        actual: values.len(),
      });
    }
    Ok(Self { domain, values })
  }

  /// Image filled with `value`.
  pub fn filled(domain: Domain<N>, value: i32) -> Self {
    Self {
      domain,
      values: vec![value; domain.size()],
    }
  }

  /// Image sampled from a function of the point.
  pub fn from_fn(domain: Domain<N>, f: impl Fn(&Point<N>) -> i32) -> Self {
    let values = domain.points().map(|p| f(&p)).collect();
    Self { domain, values }
  }

  #[inline]
  pub fn domain(&self) -> &Domain<N> {
    &self.domain
  }

  /// Raw samples in linear-index order.
  #[inline]
  pub fn values(&self) -> &[i32] {
    &self.values
  }

  /// Sample at `p`, `None` outside the domain.
  #[inline]
  pub fn get(&self, p: &Point<N>) -> Option<i32> {
    self.domain.linear_index(p).map(|i| self.values[i])
  }

  /// Overwrite the sample at `p`. Returns false outside the domain.
  pub fn set(&mut self, p: &Point<N>, value: i32) -> bool {
    match self.domain.linear_index(p) {
      Some(i) => {
        self.values[i] = value;
        true
      }
      None => false,
    }
  }
}

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;
