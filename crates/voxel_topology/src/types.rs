//! Core value types: digital points, Khalimsky cells and signed cells.

/// Digital point on the integer grid.
pub type Point<const N: usize> = [i32; N];

/// 3D digital point.
pub type Point3 = Point<3>;

/// Unsigned cell of a Khalimsky space, addressed by Khalimsky coordinates.
///
/// Odd coordinates are open intervals, even coordinates are grid points.
/// The number of odd coordinates is the topological dimension of the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell<const N: usize> {
  kcoords: [i32; N],
}

impl<const N: usize> Cell<N> {
  /// Create a cell from raw Khalimsky coordinates.
  #[inline]
  pub const fn new(kcoords: [i32; N]) -> Self {
    Self { kcoords }
  }

  /// Khalimsky coordinates.
  #[inline]
  pub const fn kcoords(&self) -> [i32; N] {
    self.kcoords
  }

  /// Khalimsky coordinate along `axis`.
  #[inline]
  pub fn kcoord(&self, axis: usize) -> i32 {
    self.kcoords[axis]
  }

  /// True if the coordinate along `axis` is an open interval.
  #[inline]
  pub fn is_open(&self, axis: usize) -> bool {
    self.kcoords[axis] & 1 != 0
  }

  /// Topological dimension (number of odd coordinates).
  #[inline]
  pub fn dim(&self) -> usize {
    self.kcoords.iter().filter(|&&k| k & 1 != 0).count()
  }

  /// Copy of this cell moved by `delta` Khalimsky units along `axis`.
  #[inline]
  pub fn translated(&self, axis: usize, delta: i32) -> Self {
    let mut kcoords = self.kcoords;
    kcoords[axis] += delta;
    Self { kcoords }
  }

  /// Attach an orientation.
  #[inline]
  pub const fn signed(self, positive: bool) -> SignedCell<N> {
    SignedCell {
      cell: self,
      positive,
    }
  }
}

/// Cell with an orientation bit.
///
/// For a surfel the sign refers to the increasing direction of its
/// orthogonal axis: a positive surfel has its interior voxel above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedCell<const N: usize> {
  cell: Cell<N>,
  positive: bool,
}

impl<const N: usize> SignedCell<N> {
  /// Create a signed cell from Khalimsky coordinates and a sign.
  #[inline]
  pub const fn new(kcoords: [i32; N], positive: bool) -> Self {
    Self {
      cell: Cell::new(kcoords),
      positive,
    }
  }

  /// Underlying unsigned cell.
  #[inline]
  pub const fn cell(&self) -> Cell<N> {
    self.cell
  }

  /// Khalimsky coordinates of the underlying cell.
  #[inline]
  pub const fn kcoords(&self) -> [i32; N] {
    self.cell.kcoords
  }

  /// Orientation bit.
  #[inline]
  pub const fn is_positive(&self) -> bool {
    self.positive
  }

  /// Same cell, opposite orientation.
  #[inline]
  pub const fn opposite(self) -> Self {
    Self {
      cell: self.cell,
      positive: !self.positive,
    }
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
