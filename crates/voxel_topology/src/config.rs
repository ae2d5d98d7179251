//! Explicit extraction configuration.

use crate::adjacency::SurfelAdjacency;
use crate::constants::{DEFAULT_PADDING, DEFAULT_THRESHOLD_MAX, DEFAULT_THRESHOLD_MIN};
use crate::error::TopologyError;
use crate::image::Domain;
use crate::predicate::IntervalThreshold;
use crate::space::KhalimskySpace;

/// Everything that parameterises one extraction, passed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractionConfig {
  /// Inclusive sample range selecting object voxels.
  pub threshold: IntervalThreshold,

  /// Exterior surfel adjacency (`badj = 1`) instead of interior.
  pub exterior_adjacency: bool,

  /// Voxels added on every side of the image domain before building the
  /// space.
  pub padding: u32,

  /// Build a closed Khalimsky space (border surfels allowed).
  pub closed: bool,
}

impl Default for ExtractionConfig {
  fn default() -> Self {
    Self {
      threshold: IntervalThreshold::new(DEFAULT_THRESHOLD_MIN, DEFAULT_THRESHOLD_MAX),
      exterior_adjacency: false,
      padding: DEFAULT_PADDING,
      closed: true,
    }
  }
}

impl ExtractionConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_threshold(mut self, min: i32, max: i32) -> Self {
    self.threshold = IntervalThreshold::new(min, max);
    self
  }

  pub fn with_exterior_adjacency(mut self, exterior: bool) -> Self {
    self.exterior_adjacency = exterior;
    self
  }

  pub fn with_padding(mut self, padding: u32) -> Self {
    self.padding = padding;
    self
  }

  pub fn with_closed(mut self, closed: bool) -> Self {
    self.closed = closed;
    self
  }

  /// Uniform adjacency table for this configuration.
  pub fn adjacency<const N: usize>(&self) -> SurfelAdjacency<N> {
    SurfelAdjacency::new(self.exterior_adjacency)
  }

  /// Khalimsky space covering `domain` with the configured padding.
  pub fn space_for<const N: usize>(
    &self,
    domain: &Domain<N>,
  ) -> Result<KhalimskySpace<N>, TopologyError> {
    KhalimskySpace::from_domain(domain, self.padding, self.closed)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adjacency::Adjacency;

  #[test]
  fn test_defaults_match_cli() {
    let config = ExtractionConfig::default();
    assert_eq!(config.threshold, IntervalThreshold::new(128, 255));
    assert!(!config.exterior_adjacency);
    assert_eq!(config.padding, 1);
    assert!(config.closed);
  }

  #[test]
  fn test_builder() {
    let config = ExtractionConfig::new()
      .with_threshold(1, 10)
      .with_exterior_adjacency(true)
      .with_padding(0)
      .with_closed(false);

    assert_eq!(config.threshold, IntervalThreshold::new(1, 10));
    assert_eq!(
      config.adjacency::<3>().preferred_adjacency(0, 1),
      Adjacency::Exterior
    );

    let domain = Domain::from_extent([4, 4, 4]).unwrap();
    let space = config.space_for(&domain).unwrap();
    assert_eq!(space.lower_bound(), [0, 0, 0]);
    assert_eq!(space.upper_bound(), [3, 3, 3]);
    assert!(!space.is_closed());
  }
}
