//! Extraction statistics.
//!
//! Filled in by the extractor while it runs and reported through `tracing`
//! at the end of a pass. Timing uses `web_time::Instant` so the crate keeps
//! working on wasm targets.

use web_time::Instant;

/// Counters gathered during one extraction pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionMetrics {
  /// Surfels of the space examined during discovery.
  pub scanned_surfels: usize,
  /// Boundary surfels emitted, over all components.
  pub boundary_surfels: usize,
  /// Number of components.
  pub components: usize,
  /// Components ordered as edge-connected chains.
  pub chained_components: usize,
  /// Size of the largest component.
  pub largest_component: usize,
  /// Wall time of the pass in microseconds.
  pub elapsed_us: u64,
}

impl ExtractionMetrics {
  /// Account for one finished component.
  pub fn record_component(&mut self, len: usize, chained: bool) {
    self.components += 1;
    self.boundary_surfels += len;
    self.largest_component = self.largest_component.max(len);
    if chained {
      self.chained_components += 1;
    }
  }

  /// Components that kept their traversal order.
  pub fn unchained_components(&self) -> usize {
    self.components - self.chained_components
  }

  /// Store the time elapsed since `start`.
  pub fn finish(&mut self, start: Instant) {
    self.elapsed_us = start.elapsed().as_micros() as u64;
  }

  /// Average component size, 0 when there is none.
  pub fn mean_component_size(&self) -> f64 {
    if self.components == 0 {
      0.0
    } else {
      self.boundary_surfels as f64 / self.components as f64
    }
  }
}
