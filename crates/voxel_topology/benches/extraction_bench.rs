//! Benchmarks for boundary extraction on digital balls.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_topology::{
  extract_all_connected_surfels, DigitalSet, Domain, KhalimskySpace, Point3, SetPredicate,
  SurfelAdjacency,
};

/// Points of `[0, size)^3` within `radius` of the domain centre.
fn ball(size: i32, radius: f32) -> impl Fn(&Point3) -> bool + Sync {
  let center = (size - 1) as f32 * 0.5;
  move |p: &Point3| {
    let d2: f32 = p.iter().map(|&c| (c as f32 - center).powi(2)).sum();
    d2 <= radius * radius
  }
}

/// Extraction with a closure predicate evaluated lazily.
fn bench_ball_extraction(c: &mut Criterion) {
  let mut group = c.benchmark_group("extract_ball");
  for size in [16, 32, 48] {
    let space = KhalimskySpace::new([-1; 3], [size; 3], true).unwrap();
    let predicate = ball(size, size as f32 * 0.4);

    for (name, adjacency) in [
      ("interior", SurfelAdjacency::interior()),
      ("exterior", SurfelAdjacency::exterior()),
    ] {
      group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
        b.iter(|| {
          extract_all_connected_surfels(black_box(&space), &adjacency, &predicate).unwrap()
        })
      });
    }
  }
  group.finish();
}

/// Extraction from a bit-packed set, as the CLI does.
fn bench_set_extraction(c: &mut Criterion) {
  let size = 32;
  let domain = Domain::from_extent([size as usize; 3]).unwrap();
  let set = DigitalSet::from_predicate(domain, &ball(size, 12.0));
  let space = KhalimskySpace::from_domain(&domain, 1, true).unwrap();
  let adjacency = SurfelAdjacency::interior();
  let predicate = SetPredicate::new(&set);

  c.bench_function("extract_set (32³ ball)", |b| {
    b.iter(|| extract_all_connected_surfels(black_box(&space), &adjacency, &predicate).unwrap())
  });

  c.bench_function("digital_set::from_predicate (32³ ball)", |b| {
    b.iter(|| DigitalSet::from_predicate(black_box(domain), &ball(size, 12.0)))
  });
}

criterion_group!(benches, bench_ball_extraction, bench_set_extraction);
criterion_main!(benches);
