//! Component collector: the read-only result handed to exporters.

use crate::error::TopologyError;
use crate::types::SignedCell;

/// One connected set of boundary surfels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfelComponent<const N: usize> {
  surfels: Vec<SignedCell<N>>,
  seed: Option<SignedCell<N>>,
  chained: bool,
}

impl<const N: usize> SurfelComponent<N> {
  /// Component seeded by its first surfel.
  pub(crate) fn new(surfels: Vec<SignedCell<N>>, chained: bool) -> Self {
    let seed = surfels.first().copied();
    Self {
      surfels,
      seed,
      chained,
    }
  }

  /// Record the seed of a component whose order does not start with it.
  pub(crate) fn with_seed(mut self, seed: SignedCell<N>) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Surfels in emission order: the chain when [`Self::is_chained`], the
  /// traversal order from the seed otherwise.
  #[inline]
  pub fn surfels(&self) -> &[SignedCell<N>] {
    &self.surfels
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.surfels.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.surfels.is_empty()
  }

  /// True if every pair of consecutive surfels shares a bounding edge.
  #[inline]
  pub fn is_chained(&self) -> bool {
    self.chained
  }

  /// Surfel the component was grown from.
  #[inline]
  pub fn seed(&self) -> Option<&SignedCell<N>> {
    self.seed.as_ref()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, SignedCell<N>> {
    self.surfels.iter()
  }
}

/// Ordered connected components, in the order their seeds were discovered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfelComponents<const N: usize> {
  components: Vec<SurfelComponent<N>>,
}

impl<const N: usize> SurfelComponents<N> {
  pub(crate) fn new() -> Self {
    Self {
      components: Vec::new(),
    }
  }

  pub(crate) fn push(&mut self, component: SurfelComponent<N>) {
    self.components.push(component);
  }

  /// Number of components.
  #[inline]
  pub fn count(&self) -> usize {
    self.components.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }

  /// Surfels of component `index`.
  pub fn component_at(&self, index: usize) -> Option<&[SignedCell<N>]> {
    self.components.get(index).map(SurfelComponent::surfels)
  }

  /// Component `index` with its chain flag.
  pub fn component(&self, index: usize) -> Option<&SurfelComponent<N>> {
    self.components.get(index)
  }

  /// Sum of component sizes.
  pub fn total_surfel_count(&self) -> usize {
    self.components.iter().map(SurfelComponent::len).sum()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, SurfelComponent<N>> {
    self.components.iter()
  }

  /// Every surfel of every component, component by component.
  pub fn surfels(&self) -> impl Iterator<Item = &SignedCell<N>> {
    self.components.iter().flat_map(SurfelComponent::iter)
  }

  /// Strict view for callers that treat an empty object as an error.
  pub fn require_non_empty(self) -> Result<Self, TopologyError> {
    if self.is_empty() {
      Err(TopologyError::EmptyPredicate)
    } else {
      Ok(self)
    }
  }

  pub fn into_inner(self) -> Vec<SurfelComponent<N>> {
    self.components
  }
}

impl<'a, const N: usize> IntoIterator for &'a SurfelComponents<N> {
  type Item = &'a SurfelComponent<N>;
  type IntoIter = std::slice::Iter<'a, SurfelComponent<N>>;

  fn into_iter(self) -> Self::IntoIter {
    self.components.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> SurfelComponents<2> {
    let mut components = SurfelComponents::new();
    components.push(SurfelComponent::new(
      vec![SignedCell::new([0, 1], true), SignedCell::new([1, 0], false)],
      true,
    ));
    components.push(SurfelComponent::new(vec![SignedCell::new([4, 5], true)], false));
    components
  }

  #[test]
  fn test_counts() {
    let components = sample();
    assert_eq!(components.count(), 2);
    assert_eq!(components.total_surfel_count(), 3);
    assert_eq!(components.surfels().count(), 3);
    assert!(components.component(0).unwrap().is_chained());
    assert!(!components.component(1).unwrap().is_chained());
  }

  #[test]
  fn test_component_at() {
    let components = sample();
    assert_eq!(
      components.component_at(1),
      Some(&[SignedCell::new([4, 5], true)][..])
    );
    assert_eq!(components.component_at(2), None);
    assert_eq!(
      components.component(0).unwrap().seed(),
      Some(&SignedCell::new([0, 1], true))
    );
  }

  #[test]
  fn test_seed_survives_reordering() {
    let seed = SignedCell::new([0, 1], true);
    let component =
      SurfelComponent::new(vec![SignedCell::new([1, 0], false), seed], true).with_seed(seed);
    assert_eq!(component.seed(), Some(&seed));
    assert_eq!(component.surfels()[0], SignedCell::new([1, 0], false));
  }

  #[test]
  fn test_require_non_empty() {
    assert_eq!(
      SurfelComponents::<3>::new().require_non_empty(),
      Err(TopologyError::EmptyPredicate)
    );
    assert!(sample().require_non_empty().is_ok());
  }

  #[test]
  fn test_iterates_in_order() {
    let components = sample();
    let sizes: Vec<usize> = (&components).into_iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![2, 1]);
  }
}
