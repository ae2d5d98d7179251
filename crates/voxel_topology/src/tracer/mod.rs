//! Boundary tracing: discovers every boundary surfel and groups them into
//! connected components under a surfel adjacency.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  space: KhalimskySpace<N>   - bounds + closed flag              │
//! │  adjacency: SurfelAdjacency - interior / exterior per axis pair │
//! │  predicate: PointPredicate  - evaluated lazily per voxel        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Discovery                           │
//! │  Scan surfels (orth axis, then axis 0 fastest)                  │
//! │    bel iff exactly one incident voxel is inside                 │
//! │    skip bels already assigned to a component                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │ unvisited seed bel
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Tracking                            │
//! │  Breadth-first over followers:                                  │
//! │    per tracking axis j ≠ orth, per side (−, +)                  │
//! │    adjacency resolves the junction → exactly one follower       │
//! │    claim unvisited followers, record graph edges                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Chain ordering                      │
//! │  Rotation-extension path so consecutive surfels share an edge   │
//! │  Restarts from random surfels under a growing work budget       │
//! │  Fallback: traversal order, component flagged unchained         │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  SurfelComponents<N> in seed discovery order                    │
//! │  ExtractionMetrics                                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every bel ends up in exactly one component. Extraction is single-threaded
//! and deterministic for a given input.

mod chain;
mod neighborhood;

pub use chain::{chain_order, SurfelGraph};
pub use neighborhood::{Follower, SurfelNeighborhood, Turn};

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use smallvec::SmallVec;
use web_time::Instant;

use crate::adjacency::SurfelAdjacency;
use crate::components::{SurfelComponent, SurfelComponents};
use crate::config::ExtractionConfig;
use crate::constants::{CHAIN_ATTEMPTS, CHAIN_BASE_WORK, CHAIN_WORK_PER_SURFEL};
use crate::error::TopologyError;
use crate::image::Image;
use crate::metrics::ExtractionMetrics;
use crate::predicate::{ImageThreshold, PointPredicate};
use crate::space::KhalimskySpace;
use crate::types::SignedCell;

/// Cooperative cancellation flag, checked once per visited surfel.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
  pub fn new() -> Self {
    Self::default()
  }

  /// Request cancellation. Every clone observes it.
  pub fn cancel(&self) {
    self.0.store(true, Ordering::Relaxed);
  }

  pub fn is_cancelled(&self) -> bool {
    self.0.load(Ordering::Relaxed)
  }
}

/// Result of one extraction pass.
#[derive(Clone, Debug)]
pub struct ExtractionOutput<const N: usize> {
  pub components: SurfelComponents<N>,
  pub metrics: ExtractionMetrics,
}

/// Extracts all connected boundary components of a predicate.
pub struct Extractor<'a, const N: usize, P> {
  neighborhood: SurfelNeighborhood<'a, N, P>,
  cancel: Option<CancelToken>,
}

impl<'a, const N: usize, P: PointPredicate<N>> Extractor<'a, N, P> {
  pub fn new(
    space: &'a KhalimskySpace<N>,
    adjacency: &'a SurfelAdjacency<N>,
    predicate: &'a P,
  ) -> Self {
    Self {
      neighborhood: SurfelNeighborhood::new(space, adjacency, predicate),
      cancel: None,
    }
  }

  /// Abort with [`TopologyError::Cancelled`] once `token` is cancelled.
  pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
    self.cancel = Some(token);
    self
  }

  /// Run discovery, tracking and chain ordering over the whole space.
  #[tracing::instrument(skip_all, name = "tracer::extract", fields(dim = N))]
  pub fn run(&self) -> Result<ExtractionOutput<N>, TopologyError> {
    let start = Instant::now();
    let mut metrics = ExtractionMetrics::default();
    let mut components = SurfelComponents::new();
    let mut visited: HashSet<SignedCell<N>> = HashSet::new();

    for surfel in self.neighborhood.space().surfels() {
      metrics.scanned_surfels += 1;
      let Some(bel) = self.neighborhood.bel(&surfel) else {
        continue;
      };
      if visited.contains(&bel) {
        continue;
      }

      let component = self.track_component(bel, &mut visited)?;
      tracing::debug!(
        index = components.count(),
        surfels = component.len(),
        chained = component.is_chained(),
        "component traced"
      );
      if !component.is_chained() {
        tracing::warn!(
          index = components.count(),
          surfels = component.len(),
          "component kept traversal order; consecutive surfels may not share an edge"
        );
      }
      metrics.record_component(component.len(), component.is_chained());
      components.push(component);
    }

    metrics.finish(start);
    tracing::info!(
      components = metrics.components,
      surfels = metrics.boundary_surfels,
      scanned = metrics.scanned_surfels,
      elapsed_us = metrics.elapsed_us,
      "surfel extraction finished"
    );

    Ok(ExtractionOutput {
      components,
      metrics,
    })
  }

  /// Grow the component containing `seed`, claiming its bels in `visited`.
  fn track_component(
    &self,
    seed: SignedCell<N>,
    visited: &mut HashSet<SignedCell<N>>,
  ) -> Result<SurfelComponent<N>, TopologyError> {
    let mut surfels = vec![seed];
    let mut index: HashMap<SignedCell<N>, usize> = HashMap::new();
    let mut graph: SurfelGraph = vec![SmallVec::new()];
    let mut queue = VecDeque::from([0usize]);
    index.insert(seed, 0);
    visited.insert(seed);

    while let Some(current) = queue.pop_front() {
      if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
        return Err(TopologyError::Cancelled);
      }

      let bel = surfels[current];
      for follower in self.neighborhood.followers(&bel) {
        let next = match index.get(&follower.surfel) {
          Some(&i) => i,
          None => {
            // Claimed by an earlier component.
            if !visited.insert(follower.surfel) {
              continue;
            }
            let i = surfels.len();
            surfels.push(follower.surfel);
            graph.push(SmallVec::new());
            index.insert(follower.surfel, i);
            queue.push_back(i);
            i
          }
        };
        chain::link(&mut graph, current, next);
      }
    }

    Ok(chained_component(surfels, &graph, CHAIN_ATTEMPTS))
  }
}

/// Reorder traced `surfels` as an edge chain through `graph`, or keep the
/// traversal order when no attempt finds one.
fn chained_component<const N: usize>(
  surfels: Vec<SignedCell<N>>,
  graph: &SurfelGraph,
  attempts: usize,
) -> SurfelComponent<N> {
  let budget = CHAIN_WORK_PER_SURFEL
    .saturating_mul(surfels.len())
    .saturating_add(CHAIN_BASE_WORK);
  match chain_order(graph, attempts, budget) {
    Some(order) => {
      let component = SurfelComponent::new(order.iter().map(|&i| surfels[i]).collect(), true);
      match surfels.first() {
        Some(&seed) => component.with_seed(seed),
        None => component,
      }
    }
    None => SurfelComponent::new(surfels, false),
  }
}

/// Extract every connected component of boundary surfels of `predicate` in
/// `space`.
///
/// An object without boundary yields an empty collection, not an error.
pub fn extract_all_connected_surfels<const N: usize, P: PointPredicate<N>>(
  space: &KhalimskySpace<N>,
  adjacency: &SurfelAdjacency<N>,
  predicate: &P,
) -> Result<SurfelComponents<N>, TopologyError> {
  Extractor::new(space, adjacency, predicate)
    .run()
    .map(|output| output.components)
}

/// Threshold `image` and extract its boundary components as configured.
pub fn extract_image<const N: usize>(
  image: &Image<N>,
  config: &ExtractionConfig,
) -> Result<ExtractionOutput<N>, TopologyError> {
  let space = config.space_for(image.domain())?;
  let adjacency = config.adjacency();
  let predicate = ImageThreshold::new(image, config.threshold);
  Extractor::new(&space, &adjacency, &predicate).run()
}
