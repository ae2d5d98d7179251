//! Bel classification and follower resolution around one junction edge.

use crate::adjacency::{Adjacency, SurfelAdjacency};
use crate::predicate::PointPredicate;
use crate::space::KhalimskySpace;
use crate::types::{Cell, SignedCell};

/// Which of the three candidate surfels around an edge was followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
  /// Between the interior voxel and its neighbour across the edge.
  Inward,
  /// Parallel to the current surfel, one voxel further along the edge.
  Straight,
  /// Between the exterior voxel and its neighbour across the edge.
  Outward,
}

/// Follower of a bel across one of its bounding edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Follower<const N: usize> {
  /// Bounding edge shared with the current bel.
  pub edge: Cell<N>,
  /// Next bel, oriented so its interior voxel is inside.
  pub surfel: SignedCell<N>,
  pub turn: Turn,
}

/// Read-only view bundling the space, the adjacency table and the predicate.
pub struct SurfelNeighborhood<'a, const N: usize, P> {
  space: &'a KhalimskySpace<N>,
  adjacency: &'a SurfelAdjacency<N>,
  predicate: &'a P,
}

impl<'a, const N: usize, P: PointPredicate<N>> SurfelNeighborhood<'a, N, P> {
  pub fn new(
    space: &'a KhalimskySpace<N>,
    adjacency: &'a SurfelAdjacency<N>,
    predicate: &'a P,
  ) -> Self {
    Self {
      space,
      adjacency,
      predicate,
    }
  }

  #[inline]
  pub fn space(&self) -> &KhalimskySpace<N> {
    self.space
  }

  /// A voxel is inside iff it belongs to the space and the predicate accepts
  /// its point.
  #[inline]
  pub fn is_inside(&self, voxel: &Cell<N>) -> bool {
    self.space.contains(voxel) && self.predicate.evaluate(&self.space.point(voxel))
  }

  /// Signed bel for a surfel, or `None` when both incident voxels agree.
  ///
  /// The sign puts the inside voxel on the positive side.
  #[inline]
  pub fn bel(&self, surfel: &Cell<N>) -> Option<SignedCell<N>> {
    let k = self.space.orth_dir(surfel);
    let upper_in = self.is_inside(&self.space.upper_cell(surfel, k));
    let lower_in = self.is_inside(&self.space.lower_cell(surfel, k));
    (upper_in != lower_in).then(|| surfel.signed(upper_in))
  }

  /// Follower of `bel` across its bounding edge along `track_dir`, on the
  /// increasing side when `positive`.
  ///
  /// Returns `None` when that edge is not a cell of the space (open spaces
  /// at their border).
  pub fn follower(
    &self,
    bel: &SignedCell<N>,
    track_dir: usize,
    positive: bool,
  ) -> Option<Follower<N>> {
    let cell = bel.cell();
    let k = self.space.orth_dir(&cell);
    debug_assert_ne!(k, track_dir, "cannot track along the orthogonal axis");

    let delta = if positive { 1 } else { -1 };
    let edge = cell.translated(track_dir, delta);
    if !self.space.contains(&edge) {
      return None;
    }

    let inner = self.space.interior_voxel(bel);
    let outer = self.space.exterior_voxel(bel);
    let inner_next_in = self.is_inside(&inner.translated(track_dir, 2 * delta));
    let outer_next_in = self.is_inside(&outer.translated(track_dir, 2 * delta));

    let turn = match self.adjacency.preferred_adjacency(k, track_dir) {
      Adjacency::Interior => {
        if !inner_next_in {
          Turn::Inward
        } else if !outer_next_in {
          Turn::Straight
        } else {
          Turn::Outward
        }
      }
      Adjacency::Exterior => {
        if outer_next_in {
          Turn::Outward
        } else if !inner_next_in {
          Turn::Inward
        } else {
          Turn::Straight
        }
      }
    };

    let surfel = match turn {
      // Interior voxel sits on the side the edge was left from.
      Turn::Inward => inner.translated(track_dir, delta).signed(!positive),
      Turn::Straight => cell.translated(track_dir, 2 * delta).signed(bel.is_positive()),
      Turn::Outward => outer.translated(track_dir, delta).signed(positive),
    };
    debug_assert_eq!(self.bel(&surfel.cell()), Some(surfel));

    Some(Follower { edge, surfel, turn })
  }

  /// All followers of `bel`, tracking axes in increasing order, negative
  /// side first.
  pub fn followers(&self, bel: &SignedCell<N>) -> impl Iterator<Item = Follower<N>> + '_ {
    let k = self.space.orth_dir(&bel.cell());
    let bel = *bel;
    (0..N)
      .filter(move |&j| j != k)
      .flat_map(|j| [(j, false), (j, true)])
      .filter_map(move |(j, positive)| self.follower(&bel, j, positive))
  }
}

#[cfg(test)]
#[path = "neighborhood_test.rs"]
mod neighborhood_test;
