//! Benchmarks for grid normal computation at terrain chunk sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_normals::{
  compute_grid_normals_batch, compute_unique_grid_vertex_normals, GridGeometry, HashMode,
  NormalWorkspace, NormalsConfig, TileCorners, UNASSIGNED_SLOT,
};

/// Rolling-hills grid with consistent heights at shared corners.
fn hills_grid(segments: usize) -> GridGeometry {
  let height = |cx: usize, cz: usize| ((cx as f32) * 0.3).sin() * ((cz as f32) * 0.2).cos() * 2.0;

  let mut grid = GridGeometry::new(segments as f32, segments);
  for y in 0..segments {
    for x in 0..segments {
      let corners = TileCorners {
        tl: height(x, y),
        tr: height(x + 1, y),
        bl: height(x, y + 1),
        br: height(x + 1, y + 1),
      };
      grid.set_tile_height(x, y, corners).unwrap();
    }
  }
  grid
}

/// Core accumulator with caller-allocated buffers (allocation included).
fn bench_core(c: &mut Criterion) {
  let grid = hills_grid(32);
  let config = NormalsConfig::default();
  let buckets = config.bucket_count(grid.vertex_count());

  c.bench_function("compute_unique_grid_vertex_normals (32² tiles)", |b| {
    b.iter(|| {
      let mut normals = vec![0.0; grid.position.len()];
      let mut table = vec![UNASSIGNED_SLOT; buckets];
      let mut acc = vec![0.0; grid.position.len()];
      compute_unique_grid_vertex_normals(
        black_box(&grid.position),
        &mut normals,
        &mut table,
        &mut acc,
      );
      black_box(normals)
    })
  });
}

/// Reused workspace, both hash modes, several chunk sizes.
fn bench_workspace(c: &mut Criterion) {
  let mut group = c.benchmark_group("workspace");

  for segments in [16, 32, 64] {
    for (name, mode) in [("reference", HashMode::Reference), ("bitmix", HashMode::BitMix)] {
      let mut grid = hills_grid(segments);
      let mut workspace = NormalWorkspace::new(NormalsConfig::new().with_hash_mode(mode));

      group.bench_with_input(
        BenchmarkId::new(name, format!("{}²", segments)),
        &segments,
        |b, _| b.iter(|| black_box(grid.compute_normals(&mut workspace).unwrap())),
      );
    }
  }

  group.finish();
}

/// Parallel batch over a ring of chunks.
fn bench_batch(c: &mut Criterion) {
  let config = NormalsConfig::default();
  let template: Vec<GridGeometry> = (0..16)
    .map(|i| {
      let mut grid = hills_grid(32);
      grid.translate((i % 4) as f32 * 32.0, 0.0, (i / 4) as f32 * 32.0);
      grid
    })
    .collect();

  c.bench_function("compute_grid_normals_batch (16 × 32² tiles)", |b| {
    b.iter_batched(
      || template.clone(),
      |mut grids| black_box(compute_grid_normals_batch(&mut grids, &config).unwrap()),
      criterion::BatchSize::LargeInput,
    )
  });
}

criterion_group!(benches, bench_core, bench_workspace, bench_batch);
criterion_main!(benches);
