use super::*;
use crate::grid::TileCorners;

fn bumpy_grid(seed: usize) -> GridGeometry {
  let mut grid = GridGeometry::new(8.0, 8);
  grid.translate(seed as f32 * 8.0, 0.0, 0.0);
  for y in 0..8 {
    for x in 0..8 {
      let h = ((x * 7 + y * 13 + seed * 3) % 5) as f32 * 0.25;
      let corners = TileCorners {
        tl: h,
        tr: h + 0.5,
        bl: h - 0.25,
        br: h,
      };
      grid.set_tile_height(x, y, corners).unwrap();
    }
  }
  grid
}

#[test]
fn test_batch_matches_sequential() {
  let config = NormalsConfig::default();
  let mut parallel: Vec<GridGeometry> = (0..6).map(bumpy_grid).collect();
  let mut sequential = parallel.clone();

  let total = compute_grid_normals_batch(&mut parallel, &config).unwrap();

  let mut workspace = NormalWorkspace::new(config);
  let mut expected_total = 0;
  for grid in &mut sequential {
    expected_total += grid.compute_normals(&mut workspace).unwrap();
  }

  assert_eq!(total, expected_total);
  for (p, s) in parallel.iter().zip(&sequential) {
    assert_eq!(p.normal, s.normal);
  }
}

#[test]
fn test_batch_empty() {
  let mut grids: Vec<GridGeometry> = Vec::new();
  assert_eq!(
    compute_grid_normals_batch(&mut grids, &NormalsConfig::default()),
    Ok(0)
  );
}

#[test]
fn test_batch_propagates_error() {
  let mut grids = vec![GridGeometry::new(2.0, 2), GridGeometry::new(2.0, 2)];
  grids[1].normal.pop();

  let result = compute_grid_normals_batch(&mut grids, &NormalsConfig::default());
  assert_eq!(
    result,
    Err(NormalsError::NormalLengthMismatch {
      positions: 72,
      normals: 71
    })
  );
}
