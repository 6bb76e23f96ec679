//! Bucket occupancy and aliasing reports for table sizing.
//!
//! Allocates; not meant for the per-chunk hot path.

use std::collections::HashMap;

use crate::constants::FLOATS_PER_VERTEX;
use crate::hash::{bucket_index, PositionHash};

/// How a set of positions spreads over a bucket table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BucketReport {
  pub bucket_count: usize,

  /// Input vertices, duplicates included.
  pub vertex_count: usize,

  /// Positions distinct by value (`-0.0 == 0.0`).
  pub distinct_positions: usize,

  /// Buckets holding at least one position.
  pub assigned_buckets: usize,

  /// Distinct positions sharing their bucket with another distinct position.
  /// These get merged normals.
  pub aliased_positions: usize,
}

impl BucketReport {
  pub fn is_alias_free(&self) -> bool {
    self.aliased_positions == 0
  }

  /// Fraction of the table in use.
  pub fn occupancy(&self) -> f32 {
    if self.bucket_count == 0 {
      0.0
    } else {
      self.assigned_buckets as f32 / self.bucket_count as f32
    }
  }
}

/// Report how `positions` (3 floats per vertex) map into `bucket_count`
/// buckets under `hasher`.
///
/// # Panics
///
/// If `bucket_count` is zero.
pub fn bucket_report<H: PositionHash + ?Sized>(
  hasher: &H,
  positions: &[f32],
  bucket_count: usize,
) -> BucketReport {
  assert!(bucket_count > 0, "bucket table is empty");

  let mut buckets_by_position: HashMap<[u32; 3], usize> = HashMap::new();
  for p in positions.chunks_exact(FLOATS_PER_VERTEX) {
    let key = [(p[0] + 0.0).to_bits(), (p[1] + 0.0).to_bits(), (p[2] + 0.0).to_bits()];
    buckets_by_position
      .entry(key)
      .or_insert_with(|| bucket_index(hasher.hash([p[0], p[1], p[2]]), bucket_count));
  }

  let mut positions_per_bucket: HashMap<usize, usize> = HashMap::new();
  for &bucket in buckets_by_position.values() {
    *positions_per_bucket.entry(bucket).or_default() += 1;
  }

  let aliased_positions = positions_per_bucket
    .values()
    .filter(|&&n| n > 1)
    .sum();

  let report = BucketReport {
    bucket_count,
    vertex_count: positions.len() / FLOATS_PER_VERTEX,
    distinct_positions: buckets_by_position.len(),
    assigned_buckets: positions_per_bucket.len(),
    aliased_positions,
  };

  #[cfg(feature = "tracing")]
  {
    if !report.is_alias_free() {
      tracing::warn!(
        buckets = bucket_count,
        distinct = report.distinct_positions,
        aliased = report.aliased_positions,
        "bucket table aliases distinct positions"
      );
    }
  }

  report
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;
