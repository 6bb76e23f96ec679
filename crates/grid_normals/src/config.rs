//! Table sizing for the normal accumulator.

use crate::hash::HashMode;

/// Configuration for bucket table and accumulator sizing.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalsConfig {
  /// Buckets per input vertex (duplicates included) when no explicit count
  /// is set.
  pub bucket_multiplier: usize,

  /// Lower bound on the derived bucket count.
  pub min_buckets: usize,

  /// Explicit bucket count, used as-is (not rounded to a prime).
  pub bucket_count: Option<usize>,

  /// Position hash used to pick buckets.
  pub hash_mode: HashMode,
}

impl Default for NormalsConfig {
  fn default() -> Self {
    Self {
      bucket_multiplier: 4,
      min_buckets: 64,
      bucket_count: None,
      hash_mode: HashMode::default(),
    }
  }
}

impl NormalsConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_bucket_multiplier(mut self, multiplier: usize) -> Self {
    self.bucket_multiplier = multiplier;
    self
  }

  pub fn with_min_buckets(mut self, min: usize) -> Self {
    self.min_buckets = min;
    self
  }

  pub fn with_bucket_count(mut self, count: usize) -> Self {
    self.bucket_count = Some(count);
    self
  }

  pub fn with_hash_mode(mut self, mode: HashMode) -> Self {
    self.hash_mode = mode;
    self
  }

  /// Bucket table size for a mesh with `vertex_count` input vertices.
  ///
  /// Derived sizes are rounded up to a prime: `hash3` keys are mostly
  /// multiples of 256, so any table size sharing those factors wastes
  /// buckets.
  pub fn bucket_count(&self, vertex_count: usize) -> usize {
    if let Some(count) = self.bucket_count {
      return count;
    }
    let wanted = vertex_count
      .saturating_mul(self.bucket_multiplier)
      .max(self.min_buckets)
      .max(2);
    next_prime(wanted)
  }

  /// Accumulator length in floats: one slot per input vertex, the worst case
  /// where every vertex is unique.
  #[inline]
  pub fn accumulator_len(&self, vertex_count: usize) -> usize {
    vertex_count * 3
  }
}

/// Smallest prime >= `n`.
pub fn next_prime(n: usize) -> usize {
  let mut candidate = n.max(2);
  while !is_prime(candidate) {
    candidate += 1;
  }
  candidate
}

fn is_prime(n: usize) -> bool {
  if n < 2 {
    return false;
  }
  if n % 2 == 0 {
    return n == 2;
  }
  let mut d = 3;
  while d * d <= n {
    if n % d == 0 {
      return false;
    }
    d += 2;
  }
  true
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
