use super::*;

fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> SurfelGraph {
  let mut graph: SurfelGraph = vec![SmallVec::new(); n];
  for &(a, b) in edges {
    link(&mut graph, a, b);
  }
  graph
}

fn assert_is_chain(graph: &SurfelGraph, order: &[usize]) {
  let mut seen = vec![false; graph.len()];
  for &v in order {
    assert!(!seen[v], "vertex {} visited twice", v);
    seen[v] = true;
  }
  assert!(seen.iter().all(|&s| s), "not every vertex visited");
  for pair in order.windows(2) {
    assert!(
      graph[pair[0]].contains(&pair[1]),
      "{} and {} are not adjacent",
      pair[0],
      pair[1]
    );
  }
}

#[test]
fn test_link_ignores_duplicates_and_loops() {
  let graph = graph_from_edges(3, &[(0, 1), (1, 0), (0, 1), (2, 2)]);
  assert_eq!(graph[0].as_slice(), &[1]);
  assert_eq!(graph[1].as_slice(), &[0]);
  assert!(graph[2].is_empty());
}

#[test]
fn test_empty_and_single_vertex() {
  assert_eq!(chain_order(&Vec::new(), 1, 10), Some(vec![]));
  assert_eq!(chain_order(&vec![SmallVec::new()], 1, 10), Some(vec![0]));
}

#[test]
fn test_cycle_is_walked_around() {
  let graph = graph_from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
  let order = chain_order(&graph, 1, 1000).unwrap();
  assert_eq!(order[0], 0);
  assert_is_chain(&graph, &order);
}

#[test]
fn test_octahedron_is_chained() {
  // Face adjacency of a cube: every face touches all but its opposite.
  let opposite = [1, 0, 3, 2, 5, 4];
  let mut edges = Vec::new();
  for a in 0..6 {
    for b in (a + 1)..6 {
      if opposite[a] != b {
        edges.push((a, b));
      }
    }
  }
  let graph = graph_from_edges(6, &edges);
  let order = chain_order(&graph, 1, 1000).unwrap();
  assert_is_chain(&graph, &order);
}

#[test]
fn test_grid_is_chained_from_corner() {
  // 3x3 grid graph; the search starts at corner 0.
  let id = |x: usize, y: usize| y * 3 + x;
  let mut edges = Vec::new();
  for y in 0..3 {
    for x in 0..3 {
      if x + 1 < 3 {
        edges.push((id(x, y), id(x + 1, y)));
      }
      if y + 1 < 3 {
        edges.push((id(x, y), id(x, y + 1)));
      }
    }
  }
  let graph = graph_from_edges(9, &edges);
  let order = chain_order(&graph, 8, 10_000).unwrap();
  assert_is_chain(&graph, &order);
}

#[test]
fn test_star_has_no_chain() {
  let graph = graph_from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
  assert_eq!(chain_order(&graph, 8, 10_000), None);
}

#[test]
fn test_budget_exhaustion() {
  // One unit of work per extension.
  let graph = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
  assert_eq!(chain_order(&graph, 1, 2), None);
  assert_eq!(chain_order(&graph, 1, 3), Some(vec![0, 1, 2, 3]));
  assert_eq!(chain_order(&graph, 0, 1000), None);
}

#[test]
fn test_rotation_moves_end_behind_pivot() {
  //   0 ── 1 ── 2 ── 3      end 3 also touches 1;
  //        └─────────┘      only 2 reaches the free 4
  let graph = graph_from_edges(5, &[(0, 1), (1, 2), (2, 3), (1, 3), (2, 4)]);
  let mut builder = PathBuilder::new(&graph);
  let mut rng = StdRng::seed_from_u64(0);
  builder.reset(0);
  builder.push(1);
  builder.push(2);
  builder.push(3);

  builder.refresh_distance();
  assert_eq!(builder.distance, vec![3, 2, 1, 2, 0]);

  assert!(!builder.extend(&mut rng));
  assert!(builder.rotate(&mut rng));
  assert_eq!(builder.path, vec![0, 1, 3, 2]);
  assert_eq!(builder.position[2], 3);
  assert!(builder.extend(&mut rng));
  assert_eq!(builder.path, vec![0, 1, 3, 2, 4]);
}

#[test]
fn test_rotation_needs_a_pivot() {
  let graph = graph_from_edges(3, &[(0, 1), (0, 2)]);
  let mut builder = PathBuilder::new(&graph);
  let mut rng = StdRng::seed_from_u64(0);
  builder.reset(0);
  builder.push(1);
  assert!(!builder.extend(&mut rng));
  assert!(!builder.rotate(&mut rng));
}

#[test]
fn test_petersen_is_chained() {
  // No Hamiltonian cycle, but Hamiltonian paths from every vertex.
  let mut edges = Vec::new();
  for i in 0..5 {
    edges.push((i, (i + 1) % 5));
    edges.push((i, i + 5));
    edges.push((5 + i, 5 + (i + 2) % 5));
  }
  let graph = graph_from_edges(10, &edges);
  let order = chain_order(&graph, 1, 10_000).unwrap();
  assert_eq!(order[0], 0);
  assert_is_chain(&graph, &order);
}

#[test]
fn test_torus_is_chained() {
  // 4-regular like a closed surfel surface, and not bipartite (odd width).
  let (w, h) = (9usize, 7usize);
  let id = |x: usize, y: usize| (y % h) * w + (x % w);
  let mut edges = Vec::new();
  for y in 0..h {
    for x in 0..w {
      edges.push((id(x, y), id(x + 1, y)));
      edges.push((id(x, y), id(x, y + 1)));
    }
  }
  let graph = graph_from_edges(w * h, &edges);
  assert!(graph.iter().all(|adj| adj.len() == 4));

  let order = chain_order(&graph, 8, 64 * w * h).unwrap();
  assert_is_chain(&graph, &order);
}

#[test]
fn test_restart_from_another_start() {
  // No chain starts at the hub 0; both chains run 3-1-0-2-4 or back.
  let graph = graph_from_edges(5, &[(0, 1), (0, 2), (1, 3), (2, 4)]);
  assert_eq!(chain_order(&graph, 1, 1000), None);

  let order = chain_order(&graph, 64, 1000).unwrap();
  assert_is_chain(&graph, &order);
  let ends = [order[0], order[4]];
  assert!(ends.contains(&3) && ends.contains(&4), "ends {:?}", ends);
}

#[test]
fn test_deterministic_order() {
  let id = |x: usize, y: usize| y * 5 + x;
  let mut edges = Vec::new();
  for y in 0..5 {
    for x in 0..5 {
      edges.push((id(x, y), id((x + 1) % 5, y)));
      edges.push((id(x, y), id(x, (y + 1) % 5)));
    }
  }
  let graph = graph_from_edges(25, &edges);
  assert_eq!(chain_order(&graph, 8, 10_000), chain_order(&graph, 8, 10_000));
}
