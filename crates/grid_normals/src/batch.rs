//! Parallel normal computation across independent grids.
//!
//! Each grid is processed by one rayon task with its own [`NormalWorkspace`],
//! so no bucket table or accumulator is ever shared between tasks.

use rayon::prelude::*;

use crate::config::NormalsConfig;
use crate::error::NormalsError;
use crate::grid::GridGeometry;
use crate::workspace::NormalWorkspace;

/// Compute normals for every grid in parallel.
///
/// Returns the total number of accumulator slots assigned across all grids,
/// or the first error encountered.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "normals::batch"))]
pub fn compute_grid_normals_batch(
  grids: &mut [GridGeometry],
  config: &NormalsConfig,
) -> Result<usize, NormalsError> {
  let total = grids
    .par_iter_mut()
    .map_init(
      || NormalWorkspace::new(config.clone()),
      |workspace, grid| grid.compute_normals(workspace),
    )
    .try_reduce(|| 0, |a, b| Ok(a + b))?;

  #[cfg(feature = "tracing")]
  tracing::debug!(grids = grids.len(), slots = total, "batch normals computed");

  Ok(total)
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
