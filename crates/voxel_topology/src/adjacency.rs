//! Surfel adjacency policy.
//!
//! Picks the follower of a boundary surfel when the junction edge it is
//! tracked across sees a diagonal configuration:
//!
//! ```text
//!   tracking axis j →
//!   ┌────┬────┐
//!   │ O  │ O' │   I, O : interior / exterior voxel of the current surfel
//!   ├────┼────┤   I', O': their neighbours across the junction edge (+)
//!   │ I  │ I' │
//!   └────┴────┘   I' outside and O' inside: both turns are valid.
//!                 Interior: turn around I (I and O' stay separate).
//!                 Exterior: cross to O' (I and O' are linked).
//! ```

/// Adjacency convention applied at a diagonal junction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
  /// Follow the interior voxel; diagonal object voxels are not linked.
  Interior,
  /// Follow the exterior voxel; diagonal object voxels are linked.
  Exterior,
}

/// Per axis-pair table of adjacency conventions.
///
/// Immutable once built and shared read-only by all tracing operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfelAdjacency<const N: usize> {
  table: [[Adjacency; N]; N],
}

impl<const N: usize> SurfelAdjacency<N> {
  /// Uniform table: exterior everywhere if `exterior`, interior otherwise.
  pub fn new(exterior: bool) -> Self {
    let adjacency = if exterior {
      Adjacency::Exterior
    } else {
      Adjacency::Interior
    };
    Self {
      table: [[adjacency; N]; N],
    }
  }

  /// Interior convention on every axis pair.
  pub fn interior() -> Self {
    Self::new(false)
  }

  /// Exterior convention on every axis pair.
  pub fn exterior() -> Self {
    Self::new(true)
  }

  /// Map the command-line `badj` flag: `1` is exterior, anything else is
  /// interior.
  pub fn from_badj(value: i32) -> Self {
    Self::new(value == 1)
  }

  /// Override the convention for the unordered pair `{axis1, axis2}`.
  pub fn with_adjacency(mut self, axis1: usize, axis2: usize, adjacency: Adjacency) -> Self {
    self.table[axis1][axis2] = adjacency;
    self.table[axis2][axis1] = adjacency;
    self
  }

  /// Convention used when a surfel orthogonal to `axis1` is tracked along
  /// `axis2` (or the reverse).
  #[inline]
  pub fn preferred_adjacency(&self, axis1: usize, axis2: usize) -> Adjacency {
    self.table[axis1][axis2]
  }

  /// True if every entry uses the exterior convention.
  pub fn is_uniform_exterior(&self) -> bool {
    self
      .table
      .iter()
      .flatten()
      .all(|&a| a == Adjacency::Exterior)
  }
}

impl<const N: usize> Default for SurfelAdjacency<N> {
  fn default() -> Self {
    Self::interior()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_uniform_tables() {
    let interior = SurfelAdjacency::<3>::interior();
    let exterior = SurfelAdjacency::<3>::exterior();
    for i in 0..3 {
      for j in 0..3 {
        assert_eq!(interior.preferred_adjacency(i, j), Adjacency::Interior);
        assert_eq!(exterior.preferred_adjacency(i, j), Adjacency::Exterior);
      }
    }
    assert!(exterior.is_uniform_exterior());
    assert!(!interior.is_uniform_exterior());
  }

  #[test]
  fn test_badj_mapping() {
    assert_eq!(SurfelAdjacency::<3>::from_badj(0), SurfelAdjacency::interior());
    assert_eq!(SurfelAdjacency::<3>::from_badj(1), SurfelAdjacency::exterior());
    assert_eq!(SurfelAdjacency::<3>::from_badj(7), SurfelAdjacency::interior());
  }

  #[test]
  fn test_per_pair_override_is_symmetric() {
    let adj = SurfelAdjacency::<3>::interior().with_adjacency(0, 2, Adjacency::Exterior);
    assert_eq!(adj.preferred_adjacency(0, 2), Adjacency::Exterior);
    assert_eq!(adj.preferred_adjacency(2, 0), Adjacency::Exterior);
    assert_eq!(adj.preferred_adjacency(0, 1), Adjacency::Interior);
    assert_eq!(adj.preferred_adjacency(1, 2), Adjacency::Interior);
  }

  #[test]
  fn test_default_is_interior() {
    assert_eq!(SurfelAdjacency::<2>::default(), SurfelAdjacency::interior());
  }
}
