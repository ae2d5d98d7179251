//! Khalimsky cellular space: coordinates, incidence and scans.
//!
//! The space is a coordinate oracle. It stores only its bounds and never
//! owns per-cell state; every query is computed from Khalimsky coordinates.
//!
//! ```text
//!  2D example, digital bounds [0,1]², closed:
//!
//!  k=4  o───o───o        o  pointel (0-cell, both even)
//!       │ v │ v │        ─  horizontal linel (x odd, y even)
//!  k=3  │   │   │        │  vertical linel (x even, y odd)
//!  k=2  o───o───o        v  pixel (2-cell, both odd)
//!       │ v │ v │
//!  k=1  │   │   │        open space drops k=0 and k=4 on each axis
//!  k=0  o───o───o
//!      k=0 1 2 3 4
//! ```

use smallvec::SmallVec;

use crate::constants::{digital_coord, spel_kcoord};
use crate::error::TopologyError;
use crate::image::{check_bounds, Domain};
use crate::scan::LatticeIter;
use crate::types::{Cell, Point, SignedCell};

/// N-dimensional Khalimsky space over inclusive digital bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KhalimskySpace<const N: usize> {
  lower: Point<N>,
  upper: Point<N>,
  closed: bool,
}

/// 3D Khalimsky space.
pub type KSpace3 = KhalimskySpace<3>;

impl<const N: usize> KhalimskySpace<N> {
  /// Create a space whose voxels are the digital points of `[lower, upper]`.
  ///
  /// A closed space also contains the bounding cells on the outer faces of
  /// the extreme voxels; an open space stops at the voxels themselves.
  /// Bounds beyond [`crate::constants::MAX_DIGITAL_COORD`] are rejected.
  pub fn new(lower: Point<N>, upper: Point<N>, closed: bool) -> Result<Self, TopologyError> {
    check_bounds(&lower, &upper)?;
    Ok(Self {
      lower,
      upper,
      closed,
    })
  }

  /// Space over `domain` grown by `padding` voxels on every side.
  pub fn from_domain(domain: &Domain<N>, padding: u32, closed: bool) -> Result<Self, TopologyError> {
    let padded = domain.padded(i32::try_from(padding).unwrap_or(i32::MAX))?;
    Self::new(padded.lower_bound(), padded.upper_bound(), closed)
  }

  #[inline]
  pub fn lower_bound(&self) -> Point<N> {
    self.lower
  }

  #[inline]
  pub fn upper_bound(&self) -> Point<N> {
    self.upper
  }

  #[inline]
  pub fn is_closed(&self) -> bool {
    self.closed
  }

  /// Dimension of the space.
  #[inline]
  pub const fn dimension(&self) -> usize {
    N
  }

  /// Smallest Khalimsky coordinate along `axis`.
  #[inline]
  pub fn min_kcoord(&self, axis: usize) -> i32 {
    if self.closed {
      2 * self.lower[axis]
    } else {
      spel_kcoord(self.lower[axis])
    }
  }

  /// Largest Khalimsky coordinate along `axis`.
  #[inline]
  pub fn max_kcoord(&self, axis: usize) -> i32 {
    if self.closed {
      2 * self.upper[axis] + 2
    } else {
      spel_kcoord(self.upper[axis])
    }
  }

  /// True if the cell belongs to the space.
  #[inline]
  pub fn contains(&self, cell: &Cell<N>) -> bool {
    (0..N).all(|i| {
      let k = cell.kcoord(i);
      k >= self.min_kcoord(i) && k <= self.max_kcoord(i)
    })
  }

  /// Voxel (full-dimensional cell) of a digital point.
  #[inline]
  pub fn spel(&self, point: &Point<N>) -> Cell<N> {
    let mut kcoords = [0; N];
    for (k, &p) in kcoords.iter_mut().zip(point.iter()) {
      *k = spel_kcoord(p);
    }
    Cell::new(kcoords)
  }

  /// Digital coordinates of a cell (floor of half its Khalimsky coordinates).
  #[inline]
  pub fn point(&self, cell: &Cell<N>) -> Point<N> {
    let mut point = [0; N];
    for (p, &k) in point.iter_mut().zip(cell.kcoords().iter()) {
      *p = digital_coord(k);
    }
    point
  }

  /// Cell one Khalimsky step above `cell` along `axis`.
  ///
  /// When the coordinate is even this is the higher-dimensional cell on the
  /// increasing side; for a surfel and its orthogonal axis, the upper voxel.
  #[inline]
  pub fn upper_cell(&self, cell: &Cell<N>, axis: usize) -> Cell<N> {
    cell.translated(axis, 1)
  }

  /// Cell one Khalimsky step below `cell` along `axis`.
  #[inline]
  pub fn lower_cell(&self, cell: &Cell<N>, axis: usize) -> Cell<N> {
    cell.translated(axis, -1)
  }

  /// True iff exactly one coordinate is even (co-dimension 1).
  #[inline]
  pub fn is_surfel(&self, cell: &Cell<N>) -> bool {
    N > 0 && cell.dim() == N - 1
  }

  /// True iff every coordinate is odd.
  #[inline]
  pub fn is_spel(&self, cell: &Cell<N>) -> bool {
    cell.dim() == N
  }

  /// Orthogonal axis of a surfel: its only even coordinate.
  #[inline]
  pub fn orth_dir(&self, surfel: &Cell<N>) -> usize {
    debug_assert!(self.is_surfel(surfel), "orth_dir needs a surfel");
    (0..N).find(|&i| !surfel.is_open(i)).unwrap_or(0)
  }

  /// Orientation bit of a signed cell.
  #[inline]
  pub fn signs(&self, scell: &SignedCell<N>) -> bool {
    scell.is_positive()
  }

  /// Same cell with the given orientation.
  #[inline]
  pub fn set_sign(&self, scell: &SignedCell<N>, positive: bool) -> SignedCell<N> {
    scell.cell().signed(positive)
  }

  /// Coordinate and sign equality.
  #[inline]
  pub fn are_signed_cells_equal(&self, a: &SignedCell<N>, b: &SignedCell<N>) -> bool {
    a == b
  }

  /// Voxel on the positive side of a signed surfel: the upper incident voxel
  /// when positive, the lower one otherwise.
  #[inline]
  pub fn interior_voxel(&self, surfel: &SignedCell<N>) -> Cell<N> {
    let cell = surfel.cell();
    let k = self.orth_dir(&cell);
    if surfel.is_positive() {
      self.upper_cell(&cell, k)
    } else {
      self.lower_cell(&cell, k)
    }
  }

  /// Voxel on the negative side of a signed surfel.
  #[inline]
  pub fn exterior_voxel(&self, surfel: &SignedCell<N>) -> Cell<N> {
    self.interior_voxel(&surfel.opposite())
  }

  /// Bounding cells one dimension lower (each open coordinate moved ±1).
  pub fn low_incident(&self, cell: &Cell<N>) -> SmallVec<[Cell<N>; 8]> {
    let mut faces = SmallVec::new();
    for i in (0..N).filter(|&i| cell.is_open(i)) {
      faces.push(self.lower_cell(cell, i));
      faces.push(self.upper_cell(cell, i));
    }
    faces
  }

  /// Bounding cell shared by two cells, if any.
  pub fn shared_bounding_cell(&self, a: &Cell<N>, b: &Cell<N>) -> Option<Cell<N>> {
    let faces_b = self.low_incident(b);
    self
      .low_incident(a)
      .into_iter()
      .find(|face| faces_b.contains(face))
  }

  /// Every surfel of the space, grouped by orthogonal axis, axis 0 of the
  /// remaining coordinates varying fastest.
  pub fn surfels(&self) -> impl Iterator<Item = Cell<N>> + '_ {
    (0..N).flat_map(move |k| self.surfels_orthogonal_to(k))
  }

  /// Surfels whose orthogonal axis is `k`.
  pub fn surfels_orthogonal_to(&self, k: usize) -> impl Iterator<Item = Cell<N>> {
    let mut start = [0; N];
    let mut end = [0; N];
    for i in 0..N {
      if i == k {
        start[i] = even_at_least(self.min_kcoord(i));
        end[i] = self.max_kcoord(i);
      } else {
        start[i] = spel_kcoord(self.lower[i]);
        end[i] = spel_kcoord(self.upper[i]);
      }
    }
    LatticeIter::new(start, end, [2; N]).map(Cell::new)
  }

  /// Every voxel of the space in linear order.
  pub fn spels(&self) -> impl Iterator<Item = Cell<N>> {
    LatticeIter::new(self.spel(&self.lower).kcoords(), self.spel(&self.upper).kcoords(), [2; N])
      .map(Cell::new)
  }

  /// Number of surfels the space contains.
  pub fn surfel_count(&self) -> usize {
    (0..N)
      .map(|k| {
        (0..N)
          .map(|i| {
            if i == k {
              let span = self.max_kcoord(i) - even_at_least(self.min_kcoord(i));
              if span < 0 {
                0
              } else {
                (span / 2 + 1) as usize
              }
            } else {
              (self.upper[i] - self.lower[i] + 1) as usize
            }
          })
          .product::<usize>()
      })
      .sum()
  }
}

#[inline]
fn even_at_least(k: i32) -> i32 {
  k + (k & 1)
}

#[cfg(test)]
#[path = "space_test.rs"]
mod space_test;
