//! Edge-connected ordering of a traced component.
//!
//! Builds a Hamiltonian path through the component's surfel graph so that
//! consecutive surfels share a bounding edge, by rotation and extension:
//!
//! ```text
//!  extend:  path ... a b [end] ─ free w          → ... a b end w
//!  rotate:  path ... p q r s [end], end ~ q      → ... p q end s r
//!                                                    (new end: r)
//! ```
//!
//! Extension takes the free neighbour with the fewest free neighbours of its
//! own. A stuck end is rotated behind one of its path neighbours; most
//! rotations pick the new end closest to a free surfel, the rest pick at
//! random. The first attempt starts at the seed, later ones at random
//! surfels with a work budget that doubles every second attempt.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Undirected surfel graph, one adjacency list per local surfel index.
pub type SurfelGraph = Vec<SmallVec<[usize; 4]>>;

/// Marks free vertices in `position` and unreached ones in `distance`.
const UNSET: usize = usize::MAX;

/// Share of rotations whose pivot is drawn uniformly.
const EXPLORE_RATE: f64 = 0.25;

/// Fixed so that two extractions of the same object agree.
const RNG_SEED: u64 = 0x5eed_c4a1_0f5e_7a11;

/// Add the undirected edge `{a, b}` once.
pub fn link(graph: &mut SurfelGraph, a: usize, b: usize) {
  if a == b || graph[a].contains(&b) {
    return;
  }
  graph[a].push(b);
  graph[b].push(a);
}

struct PathBuilder<'g> {
  graph: &'g SurfelGraph,
  /// Index on the path, `UNSET` while free.
  position: Vec<usize>,
  free_degree: Vec<usize>,
  path: Vec<usize>,
  /// Distance to the nearest free vertex, stale once the path grows.
  distance: Vec<usize>,
  distance_fresh: bool,
  queue: VecDeque<usize>,
  /// Extensions, rotated entries and BFS visits of the current attempt.
  work: usize,
}

impl<'g> PathBuilder<'g> {
  fn new(graph: &'g SurfelGraph) -> Self {
    let n = graph.len();
    Self {
      graph,
      position: vec![UNSET; n],
      free_degree: vec![0; n],
      path: Vec::with_capacity(n),
      distance: vec![UNSET; n],
      distance_fresh: false,
      queue: VecDeque::new(),
      work: 0,
    }
  }

  #[inline]
  fn is_free(&self, v: usize) -> bool {
    self.position[v] == UNSET
  }

  fn reset(&mut self, start: usize) {
    self.position.fill(UNSET);
    for (degree, adj) in self.free_degree.iter_mut().zip(self.graph) {
      *degree = adj.len();
    }
    self.path.clear();
    self.work = 0;
    self.push(start);
  }

  fn push(&mut self, v: usize) {
    self.position[v] = self.path.len();
    self.path.push(v);
    for &w in &self.graph[v] {
      self.free_degree[w] -= 1;
    }
    self.distance_fresh = false;
  }

  /// Append a free neighbour of the end. False when the end is stuck.
  fn extend(&mut self, rng: &mut StdRng) -> bool {
    let Some(&end) = self.path.last() else {
      return false;
    };
    let mut best: SmallVec<[usize; 4]> = SmallVec::new();
    let mut best_degree = UNSET;
    for &w in &self.graph[end] {
      if !self.is_free(w) {
        continue;
      }
      let degree = self.free_degree[w];
      if degree < best_degree {
        best_degree = degree;
        best.clear();
      }
      if degree == best_degree {
        best.push(w);
      }
    }
    if best.is_empty() {
      return false;
    }
    let next = best[rng.random_range(0..best.len())];
    self.push(next);
    true
  }

  /// Reverse the tail behind a path neighbour of the end. False when the
  /// end has no path neighbour besides its predecessor.
  fn rotate(&mut self, rng: &mut StdRng) -> bool {
    let len = self.path.len();
    let Some(&end) = self.path.last() else {
      return false;
    };
    let predecessor = len.checked_sub(2).map(|i| self.path[i]);
    let pivots: SmallVec<[usize; 4]> = self.graph[end]
      .iter()
      .copied()
      .filter(|&w| !self.is_free(w) && Some(w) != predecessor)
      .collect();
    if pivots.is_empty() {
      return false;
    }

    let pivot = if rng.random_bool(EXPLORE_RATE) {
      pivots[rng.random_range(0..pivots.len())]
    } else {
      self.refresh_distance();
      let reach = |w: usize| self.distance[self.path[self.position[w] + 1]];
      let nearest = pivots.iter().map(|&w| reach(w)).min().unwrap_or(UNSET);
      let closest: SmallVec<[usize; 4]> =
        pivots.iter().copied().filter(|&w| reach(w) == nearest).collect();
      closest[rng.random_range(0..closest.len())]
    };

    let from = self.position[pivot] + 1;
    self.path[from..].reverse();
    for i in from..len {
      self.position[self.path[i]] = i;
    }
    self.work += len - from;
    true
  }

  /// Multi-source breadth-first distances from the free vertices.
  fn refresh_distance(&mut self) {
    if self.distance_fresh {
      return;
    }
    self.distance.fill(UNSET);
    self.queue.clear();
    for v in 0..self.graph.len() {
      if self.is_free(v) {
        self.distance[v] = 0;
        self.queue.push_back(v);
      }
    }
    while let Some(v) = self.queue.pop_front() {
      let next = self.distance[v] + 1;
      for &w in &self.graph[v] {
        if self.distance[w] == UNSET {
          self.distance[w] = next;
          self.queue.push_back(w);
        }
      }
    }
    self.work += self.graph.len();
    self.distance_fresh = true;
  }

  fn run(&mut self, start: usize, budget: usize, rng: &mut StdRng) -> bool {
    self.reset(start);
    while self.path.len() < self.graph.len() {
      self.work += 1;
      if self.work > budget {
        return false;
      }
      if !self.extend(rng) && !self.rotate(rng) {
        return false;
      }
    }
    true
  }
}

/// Order the vertices of `graph` as a path in which consecutive vertices are
/// adjacent.
///
/// The first of `attempts` starts at vertex 0 with `budget` units of work;
/// every second attempt doubles the budget. Returns `None` when every
/// attempt ran out of work or got stuck.
pub fn chain_order(graph: &SurfelGraph, attempts: usize, budget: usize) -> Option<Vec<usize>> {
  let n = graph.len();
  if n == 0 {
    return Some(Vec::new());
  }

  let mut rng = StdRng::seed_from_u64(RNG_SEED);
  let mut builder = PathBuilder::new(graph);
  let mut budget = budget;
  for attempt in 0..attempts {
    let start = if attempt == 0 { 0 } else { rng.random_range(0..n) };
    if builder.run(start, budget, &mut rng) {
      return Some(builder.path);
    }
    tracing::trace!(attempt, start, surfels = n, work = builder.work, "chain attempt failed");
    if attempt % 2 == 1 {
      budget = budget.saturating_mul(2);
    }
  }
  None
}

#[cfg(test)]
#[path = "chain_test.rs"]
mod chain_test;
