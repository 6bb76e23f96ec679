//! Owned, reusable buffers for the normal accumulator.

use crate::accumulator::{compute_unique_grid_vertex_normals_with, validate_buffers};
use crate::config::NormalsConfig;
use crate::constants::{FLOATS_PER_VERTEX, UNASSIGNED_SLOT};
use crate::error::NormalsError;
use crate::hash::{BitMixHash, HashMode, ReferenceHash};

/// Bucket table and accumulator sized from a [`NormalsConfig`].
///
/// Buffers keep their capacity between calls, so meshing many chunks of the
/// same size allocates once.
#[derive(Clone, Debug, Default)]
pub struct NormalWorkspace {
  config: NormalsConfig,
  bucket_table: Vec<i32>,
  accumulator: Vec<f32>,
}

impl NormalWorkspace {
  pub fn new(config: NormalsConfig) -> Self {
    Self {
      config,
      bucket_table: Vec::new(),
      accumulator: Vec::new(),
    }
  }

  pub fn config(&self) -> &NormalsConfig {
    &self.config
  }

  /// Bucket table state after the last call.
  pub fn bucket_table(&self) -> &[i32] {
    &self.bucket_table
  }

  /// Accumulator state after the last call (normalized slots).
  pub fn accumulator(&self) -> &[f32] {
    &self.accumulator
  }

  /// Size both buffers for `vertex_count` input vertices and reset them to
  /// sentinel / zero, preserving capacity.
  pub fn reset(&mut self, vertex_count: usize) {
    let buckets = self.config.bucket_count(vertex_count);
    self.bucket_table.clear();
    self.bucket_table.resize(buckets, UNASSIGNED_SLOT);

    let acc_len = self.config.accumulator_len(vertex_count);
    self.accumulator.clear();
    self.accumulator.resize(acc_len, 0.0);
  }

  /// Reset, validate, and compute normals for `positions` into `normals`.
  ///
  /// Returns the number of accumulator slots assigned.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "normals::workspace_compute"))]
  pub fn compute(&mut self, positions: &[f32], normals: &mut [f32]) -> Result<usize, NormalsError> {
    self.reset(positions.len() / FLOATS_PER_VERTEX);
    validate_buffers(positions, normals, &self.bucket_table, &self.accumulator)?;

    let slots = match self.config.hash_mode {
      HashMode::Reference => compute_unique_grid_vertex_normals_with(
        &ReferenceHash,
        positions,
        normals,
        &mut self.bucket_table,
        &mut self.accumulator,
      ),
      HashMode::BitMix => compute_unique_grid_vertex_normals_with(
        &BitMixHash,
        positions,
        normals,
        &mut self.bucket_table,
        &mut self.accumulator,
      ),
    };

    Ok(slots)
  }
}

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;
